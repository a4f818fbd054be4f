// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Round-robin partitioning strategy.
//!
//! Deals components out to slots like cards: component `i` goes to slot
//! `i mod slots`. Loads are as even as [`crate::LinearPartition`] but
//! neighbouring ids always land on different slots, which makes this a
//! useful worst case when measuring locality-aware strategies.

use crate::strategy::{check_topology, PartitionStrategy};
use crate::PartitionError;
use partition_graph::{graph::Validated, PartitionGraph, Topology};

/// Component `i` → slot `i mod slots`.
#[derive(Debug, Clone)]
pub struct RoundRobinPartition {
    topology: Topology,
    verbosity: u32,
}

impl RoundRobinPartition {
    pub const NAME: &'static str = "round-robin";
    pub const DESCRIPTION: &'static str =
        "Deals components to slots in turn, in (rank, thread) order.";

    pub fn new(topology: Topology, verbosity: u32) -> Self {
        Self {
            topology,
            verbosity,
        }
    }
}

impl PartitionStrategy for RoundRobinPartition {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn topology(&self) -> Topology {
        self.topology
    }

    fn perform_partition(&self, graph: &mut PartitionGraph<Validated>) -> Result<(), PartitionError> {
        check_topology(self.topology)?;

        if self.verbosity >= 1 {
            tracing::info!(
                strategy = Self::NAME,
                components = graph.num_components(),
                "performing round-robin partition over {}",
                self.topology,
            );
        }

        let slots: Vec<_> = self.topology.slots().collect();
        for (i, component) in graph.components_mut().iter_mut().enumerate() {
            component.rank = Some(slots[i % slots.len()]);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use partition_graph::{GraphLoader, RankInfo};

    #[test]
    fn test_round_robin_cycles_slots() {
        let mut graph = GraphLoader::synthetic("rr", 5);
        RoundRobinPartition::new(Topology::new(1, 2), 0)
            .perform_partition(&mut graph)
            .unwrap();
        let threads: Vec<u32> = graph
            .iter_components()
            .map(|c| c.rank.unwrap().thread)
            .collect();
        assert_eq!(threads, vec![0, 1, 0, 1, 0]);
    }

    #[test]
    fn test_round_robin_crosses_ranks() {
        let mut graph = GraphLoader::synthetic("rr", 3);
        RoundRobinPartition::new(Topology::new(3, 1), 0)
            .perform_partition(&mut graph)
            .unwrap();
        assert_eq!(graph.component(2).unwrap().rank, Some(RankInfo::new(2, 0)));
    }

    #[test]
    fn test_round_robin_invalid_topology() {
        let mut graph = GraphLoader::synthetic("rr", 3);
        let result = RoundRobinPartition::new(Topology::new(0, 0), 0).perform_partition(&mut graph);
        assert!(result.is_err());
        assert!(!graph.is_fully_assigned());
    }
}
