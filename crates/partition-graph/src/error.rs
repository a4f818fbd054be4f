// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for graph loading and construction.

/// Errors that can occur when building a partition graph.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    /// The graph manifest file could not be read.
    #[error("failed to read graph manifest: {0}")]
    ManifestReadError(#[from] std::io::Error),

    /// The manifest JSON is malformed.
    #[error("failed to parse graph manifest: {0}")]
    ManifestParseError(#[from] serde_json::Error),

    /// Two components share the same identifier.
    #[error("duplicate component id {id} ('{name}')")]
    DuplicateComponent { id: u64, name: String },

    /// A component definition is invalid.
    #[error("invalid component '{component}': {detail}")]
    InvalidComponent { component: String, detail: String },
}
