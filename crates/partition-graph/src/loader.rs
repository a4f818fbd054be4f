// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Graph loading from JSON manifests.

use crate::{graph, ComponentId, GraphError, GraphManifest, PartitionComponent, PartitionGraph};
use std::path::Path;

/// Loads component graphs into a validated [`PartitionGraph`].
///
/// # Example
/// ```no_run
/// use partition_graph::GraphLoader;
/// use std::path::Path;
///
/// let graph = GraphLoader::load(Path::new("./model.json")).unwrap();
/// println!("Loaded {} components", graph.num_components());
/// ```
pub struct GraphLoader;

impl GraphLoader {
    /// Reads, parses and validates a graph manifest file.
    pub fn load(path: &Path) -> Result<PartitionGraph<graph::Validated>, GraphError> {
        let manifest = GraphManifest::from_file(path)?;
        tracing::debug!(
            "read manifest '{}' with {} components from {}",
            manifest.name,
            manifest.components.len(),
            path.display(),
        );
        Self::from_manifest(&manifest)
    }

    /// Builds and validates a graph from an already-parsed manifest.
    pub fn from_manifest(
        manifest: &GraphManifest,
    ) -> Result<PartitionGraph<graph::Validated>, GraphError> {
        PartitionGraph::new(manifest.name.clone(), manifest.to_components()).validate()
    }

    /// Builds a graph of `count` anonymous components with ids `0..count`.
    ///
    /// Useful for benchmarking strategies without a model on disk.
    pub fn synthetic(name: &str, count: usize) -> PartitionGraph<graph::Validated> {
        let components = (0..count as u64)
            .map(|i| PartitionComponent::new(ComponentId(i), format!("component.{i}")))
            .collect();
        PartitionGraph::from_canonical(name.to_string(), components)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_manifest_orders_by_id() {
        let m = GraphManifest::from_json(
            r#"{ "name": "m", "components": [
                { "id": 9, "name": "b" }, { "id": 4, "name": "a" }
            ] }"#,
        )
        .unwrap();
        let g = GraphLoader::from_manifest(&m).unwrap();
        assert_eq!(g.component(0).unwrap().name, "a");
    }

    #[test]
    fn test_from_manifest_duplicate() {
        let m = GraphManifest::from_json(
            r#"{ "name": "m", "components": [
                { "id": 1, "name": "a" }, { "id": 1, "name": "b" }
            ] }"#,
        )
        .unwrap();
        assert!(GraphLoader::from_manifest(&m).is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let result = GraphLoader::load(Path::new("/nonexistent/graph.json"));
        assert!(matches!(result, Err(GraphError::ManifestReadError(_))));
    }

    #[test]
    fn test_synthetic() {
        let g = GraphLoader::synthetic("bench", 100);
        assert_eq!(g.num_components(), 100);
        assert_eq!(g.component(42).unwrap().id, ComponentId(42));
    }
}
