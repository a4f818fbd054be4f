// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Strategy registry: build partition strategies by name.
//!
//! The driver picks a strategy with a string (from a config file or the
//! command line) and never names concrete types. Strategies are added with
//! explicit [`StrategyRegistry::register`] calls; the built-ins are
//! registered in a fixed order by [`StrategyRegistry::with_builtins`].
//!
//! A process-wide registry is available through [`global`], [`register`],
//! [`create`] and [`list_available`]. It is populated with the built-ins
//! on first use and is effectively read-only afterwards.
//!
//! # Example
//! ```
//! use partition_graph::{GraphLoader, Topology};
//! use partition_planner::registry;
//!
//! let strategy = registry::create("linear", Topology::new(2, 1), 0).unwrap();
//! let mut graph = GraphLoader::synthetic("demo", 10);
//! strategy.perform_partition(&mut graph).unwrap();
//! assert!(graph.is_fully_assigned());
//! ```

use crate::strategy::linear::LinearPartition;
use crate::strategy::requested::RequestedPartition;
use crate::strategy::round_robin::RoundRobinPartition;
use crate::strategy::single::SinglePartition;
use crate::{PartitionError, PartitionStrategy};
use parking_lot::RwLock;
use partition_graph::Topology;
use std::sync::{Arc, LazyLock};

/// Builds a strategy for a topology and verbosity level.
pub type StrategyFactory =
    Arc<dyn Fn(Topology, u32) -> Box<dyn PartitionStrategy> + Send + Sync>;

/// Name and description of a registered strategy.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct StrategyInfo {
    pub name: String,
    pub description: String,
}

struct Entry {
    info: StrategyInfo,
    factory: StrategyFactory,
}

/// Name → factory mapping, kept in registration order.
#[derive(Default)]
pub struct StrategyRegistry {
    entries: Vec<Entry>,
}

impl StrategyRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the built-in strategies, in order:
    /// `linear`, `round-robin`, `single`, `self`.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(
            LinearPartition::NAME,
            |t, v| Box::new(LinearPartition::new(t, v)),
            LinearPartition::DESCRIPTION,
        );
        registry.register(
            RoundRobinPartition::NAME,
            |t, v| Box::new(RoundRobinPartition::new(t, v)),
            RoundRobinPartition::DESCRIPTION,
        );
        registry.register(
            SinglePartition::NAME,
            |t, v| Box::new(SinglePartition::new(t, v)),
            SinglePartition::DESCRIPTION,
        );
        registry.register(
            RequestedPartition::NAME,
            |t, v| Box::new(RequestedPartition::new(t, v)),
            RequestedPartition::DESCRIPTION,
        );
        registry
    }

    /// Registers a strategy factory under `name`.
    ///
    /// Returns `false` and keeps the existing entry if `name` is already
    /// taken; the first registration wins.
    pub fn register<F>(
        &mut self,
        name: impl Into<String>,
        factory: F,
        description: impl Into<String>,
    ) -> bool
    where
        F: Fn(Topology, u32) -> Box<dyn PartitionStrategy> + Send + Sync + 'static,
    {
        let name = name.into();
        if self.contains(&name) {
            tracing::debug!("strategy '{name}' already registered; ignoring");
            return false;
        }
        self.entries.push(Entry {
            info: StrategyInfo {
                name,
                description: description.into(),
            },
            factory: Arc::new(factory),
        });
        true
    }

    /// Builds a new instance of the strategy registered as `name`.
    ///
    /// The caller owns the returned strategy.
    pub fn create(
        &self,
        name: &str,
        topology: Topology,
        verbosity: u32,
    ) -> Result<Box<dyn PartitionStrategy>, PartitionError> {
        let entry = self
            .entries
            .iter()
            .find(|e| e.info.name == name)
            .ok_or_else(|| PartitionError::UnknownStrategy {
                name: name.to_string(),
                available: self.names().collect::<Vec<_>>().join(", "),
            })?;
        Ok((entry.factory)(topology, verbosity))
    }

    /// Lists registered strategies in registration order.
    pub fn list_available(&self) -> Vec<StrategyInfo> {
        self.entries.iter().map(|e| e.info.clone()).collect()
    }

    /// Returns true if `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|e| e.info.name == name)
    }

    /// Returns the number of registered strategies.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns an iterator over registered names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.info.name.as_str())
    }
}

impl std::fmt::Debug for StrategyRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StrategyRegistry")
            .field("strategies", &self.names().collect::<Vec<_>>())
            .finish()
    }
}

// ── Process-wide registry ──────────────────────────────────────────

static GLOBAL: LazyLock<RwLock<StrategyRegistry>> =
    LazyLock::new(|| RwLock::new(StrategyRegistry::with_builtins()));

/// The process-wide registry, pre-populated with the built-ins.
pub fn global() -> &'static RwLock<StrategyRegistry> {
    &GLOBAL
}

/// Registers a strategy in the process-wide registry.
pub fn register<F>(name: impl Into<String>, factory: F, description: impl Into<String>) -> bool
where
    F: Fn(Topology, u32) -> Box<dyn PartitionStrategy> + Send + Sync + 'static,
{
    GLOBAL.write().register(name, factory, description)
}

/// Builds a strategy from the process-wide registry.
pub fn create(
    name: &str,
    topology: Topology,
    verbosity: u32,
) -> Result<Box<dyn PartitionStrategy>, PartitionError> {
    GLOBAL.read().create(name, topology, verbosity)
}

/// Lists the strategies in the process-wide registry.
pub fn list_available() -> Vec<StrategyInfo> {
    GLOBAL.read().list_available()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtins_in_registration_order() {
        let r = StrategyRegistry::with_builtins();
        let names: Vec<&str> = r.names().collect();
        assert_eq!(names, vec!["linear", "round-robin", "single", "self"]);
        assert_eq!(r.len(), 4);
    }

    #[test]
    fn test_first_registration_wins() {
        let mut r = StrategyRegistry::new();
        assert!(r.register("x", |t, v| Box::new(LinearPartition::new(t, v)), "first"));
        assert!(!r.register("x", |t, v| Box::new(SinglePartition::new(t, v)), "second"));

        assert_eq!(r.len(), 1);
        assert_eq!(r.list_available()[0].description, "first");
        let s = r.create("x", Topology::new(1, 1), 0).unwrap();
        assert_eq!(s.name(), "linear");
    }

    #[test]
    fn test_create_passes_topology() {
        let r = StrategyRegistry::with_builtins();
        let s = r.create("round-robin", Topology::new(3, 2), 1).unwrap();
        assert_eq!(s.name(), "round-robin");
        assert_eq!(s.topology(), Topology::new(3, 2));
    }

    #[test]
    fn test_create_unknown() {
        let r = StrategyRegistry::with_builtins();
        let err = r.create("graph-xyz", Topology::new(1, 1), 0).err().unwrap();
        assert!(err.is_configuration_error());
        assert!(err.to_string().contains("graph-xyz"));
        assert!(err.to_string().contains("linear"));
    }

    #[test]
    fn test_construction_accepts_zero_topology() {
        // Rejection happens at partition time, not construction.
        let r = StrategyRegistry::with_builtins();
        assert!(r.create("linear", Topology::new(0, 0), 0).is_ok());
    }

    #[test]
    fn test_empty_registry() {
        let r = StrategyRegistry::new();
        assert!(r.is_empty());
        assert!(r.create("linear", Topology::new(1, 1), 0).is_err());
    }

    #[test]
    fn test_global_registry() {
        assert!(global().read().contains("linear"));
        assert!(register(
            "registry-test-custom",
            |t, v| Box::new(RoundRobinPartition::new(t, v)),
            "test-only strategy",
        ));
        assert!(!register(
            "registry-test-custom",
            |t, v| Box::new(LinearPartition::new(t, v)),
            "duplicate",
        ));
        let s = create("registry-test-custom", Topology::new(1, 1), 0).unwrap();
        assert_eq!(s.name(), "round-robin");
        assert!(list_available()
            .iter()
            .any(|i| i.name == "registry-test-custom"));
    }

    #[test]
    fn test_debug_lists_names() {
        let dbg = format!("{:?}", StrategyRegistry::with_builtins());
        assert!(dbg.contains("round-robin"));
    }
}
