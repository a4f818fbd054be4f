// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! JSON graph manifest parsing.
//!
//! # Format
//! ```json
//! {
//!   "name": "two-core-system",
//!   "components": [
//!     { "id": 0, "name": "cpu0", "type": "miranda.BaseCPU" },
//!     { "id": 1, "name": "l1cache0", "type": "memHierarchy.Cache" },
//!     { "id": 2, "name": "memory", "type": "memHierarchy.MemController",
//!       "requested_rank": { "rank": 1, "thread": 0 } }
//!   ]
//! }
//! ```

use crate::{ComponentId, GraphError, PartitionComponent, RankInfo};
use std::path::Path;

/// Top-level graph manifest.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct GraphManifest {
    /// Human-readable model name.
    pub name: String,
    /// Component entries, in any order.
    #[serde(default)]
    pub components: Vec<ManifestComponent>,
}

/// A single component entry in the manifest.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ManifestComponent {
    pub id: u64,
    pub name: String,
    #[serde(rename = "type", default)]
    pub component_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requested_rank: Option<RankInfo>,
}

impl GraphManifest {
    /// Loads a manifest from a JSON file path.
    pub fn from_file(path: &Path) -> Result<Self, GraphError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parses a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, GraphError> {
        let manifest: Self = serde_json::from_str(json)?;
        Ok(manifest)
    }

    /// Converts the manifest entries into unassigned components.
    pub fn to_components(&self) -> Vec<PartitionComponent> {
        self.components
            .iter()
            .map(|mc| PartitionComponent {
                id: ComponentId(mc.id),
                name: mc.name.clone(),
                component_type: mc.component_type.clone(),
                requested_rank: mc.requested_rank,
                rank: None,
            })
            .collect()
    }
}
