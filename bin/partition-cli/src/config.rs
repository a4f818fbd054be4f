// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Partition run configuration loaded from TOML files or built from
//! command-line flags.
//!
//! # TOML Format
//! ```toml
//! graph_path = "./models/two-core.json"
//! strategy = "linear"
//! ranks = 4
//! threads_per_rank = 2
//! verbosity = 1
//! output = "./assignments.json"
//! ```

use partition_graph::Topology;
use partition_planner::{registry, PartitionError, PartitionStrategy};
use std::path::{Path, PathBuf};

/// Errors raised while reading or writing a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("TOML serialise error: {0}")]
    Serialise(#[from] toml::ser::Error),
}

/// Configuration for one partitioning run.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PartitionConfig {
    /// Path to the component graph manifest (JSON).
    pub graph_path: Option<PathBuf>,
    /// Registered strategy name.
    #[serde(default = "default_strategy")]
    pub strategy: String,
    /// Number of ranks.
    #[serde(default = "default_one")]
    pub ranks: u32,
    /// Threads per rank.
    #[serde(default = "default_one")]
    pub threads_per_rank: u32,
    /// Strategy verbosity; diagnostics are reported at 1 and above.
    #[serde(default = "default_one")]
    pub verbosity: u32,
    /// Where to write the assignment JSON, if anywhere.
    pub output: Option<PathBuf>,
}

fn default_strategy() -> String {
    "linear".to_string()
}

fn default_one() -> u32 {
    1
}

impl PartitionConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Serialises configuration to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// The slot topology of this run.
    pub fn topology(&self) -> Topology {
        Topology::new(self.ranks, self.threads_per_rank)
    }

    /// Builds the configured strategy from the process-wide registry.
    pub fn create_strategy(&self) -> Result<Box<dyn PartitionStrategy>, PartitionError> {
        registry::create(&self.strategy, self.topology(), self.verbosity)
    }
}

impl Default for PartitionConfig {
    fn default() -> Self {
        Self {
            graph_path: None,
            strategy: default_strategy(),
            ranks: 1,
            threads_per_rank: 1,
            verbosity: 1,
            output: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let c = PartitionConfig::default();
        assert_eq!(c.strategy, "linear");
        assert_eq!(c.topology(), Topology::new(1, 1));
    }

    #[test]
    fn test_from_toml() {
        let toml = r#"
graph_path = "/tmp/graph.json"
strategy = "round-robin"
ranks = 4
threads_per_rank = 2
"#;
        let c = PartitionConfig::from_toml(toml).unwrap();
        assert_eq!(c.graph_path, Some(PathBuf::from("/tmp/graph.json")));
        assert_eq!(c.strategy, "round-robin");
        assert_eq!(c.topology(), Topology::new(4, 2));
        assert_eq!(c.verbosity, 1);
        assert_eq!(c.output, None);
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let c = PartitionConfig::from_toml("").unwrap();
        assert_eq!(c, PartitionConfig::default());
    }

    #[test]
    fn test_bad_toml() {
        assert!(matches!(
            PartitionConfig::from_toml("ranks = \"many\""),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_to_toml_roundtrip() {
        let c = PartitionConfig {
            ranks: 8,
            output: Some(PathBuf::from("out.json")),
            ..Default::default()
        };
        let back = PartitionConfig::from_toml(&c.to_toml().unwrap()).unwrap();
        assert_eq!(back, c);
    }

    #[test]
    fn test_create_strategy() {
        let c = PartitionConfig {
            strategy: "single".into(),
            ranks: 2,
            ..Default::default()
        };
        let s = c.create_strategy().unwrap();
        assert_eq!(s.name(), "single");
        assert_eq!(s.topology(), Topology::new(2, 1));
    }

    #[test]
    fn test_create_strategy_unknown() {
        let c = PartitionConfig {
            strategy: "bogus".into(),
            ..Default::default()
        };
        assert!(c.create_strategy().err().unwrap().is_configuration_error());
    }

    #[test]
    fn test_missing_file() {
        let result = PartitionConfig::from_file(Path::new("/nonexistent/slotpart.toml"));
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }
}
