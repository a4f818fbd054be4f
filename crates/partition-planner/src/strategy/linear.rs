// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Linear partitioning strategy.
//!
//! Divides the component id space into contiguous runs, one per slot, so
//! that components with neighbouring ids land on the same slot. Sequential
//! locality in the id space is a cheap proxy for communication locality.
//!
//! # Distribution
//!
//! ```text
//! base      = components / slots
//! remainder = components % slots   (forced to 0 when base == 0)
//! ```
//!
//! Slots are filled in (rank, thread) order. The first `remainder` slots
//! receive `base + 1` components and the rest receive `base`. With fewer
//! components than slots every component gets its own slot and the
//! trailing slots stay empty.

use crate::strategy::{check_topology, PartitionStrategy};
use crate::PartitionError;
use partition_graph::{graph::Validated, PartitionGraph, RankInfo, Topology};

/// Contiguous id ranges per slot, remainder spread over the earliest slots.
#[derive(Debug, Clone)]
pub struct LinearPartition {
    topology: Topology,
    verbosity: u32,
}

impl LinearPartition {
    pub const NAME: &'static str = "linear";
    pub const DESCRIPTION: &'static str = "Partitions components by dividing the component id space into roughly \
         equal portions. Components with sequential ids are placed close together.";

    pub fn new(topology: Topology, verbosity: u32) -> Self {
        Self {
            topology,
            verbosity,
        }
    }
}

/// Per-slot share of a linear partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinearShare {
    pub base: usize,
    pub remainder: usize,
}

impl LinearShare {
    /// Computes the share for `components` spread over `slots` (`slots > 0`).
    pub fn compute(components: usize, slots: usize) -> Self {
        let base = components / slots;
        // Fewer components than slots: one each, no extras.
        let remainder = if base == 0 { 0 } else { components % slots };
        Self { base, remainder }
    }
}

impl PartitionStrategy for LinearPartition {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn topology(&self) -> Topology {
        self.topology
    }

    fn perform_partition(&self, graph: &mut PartitionGraph<Validated>) -> Result<(), PartitionError> {
        check_topology(self.topology)?;

        let count = graph.num_components();
        let LinearShare { base, mut remainder } =
            LinearShare::compute(count, self.topology.total_slots());

        if self.verbosity >= 1 {
            tracing::info!(
                strategy = Self::NAME,
                components = count,
                per_slot = base,
                remainder,
                "performing linear partition over {}",
                self.topology,
            );
        } else {
            tracing::debug!(components = count, per_slot = base, remainder, "linear partition");
        }

        let components = graph.components_mut();
        let mut slot = RankInfo::new(0, 0);
        let mut on_slot = 0;
        let mut i = 0;

        while i < count {
            components[i].rank = Some(slot);
            on_slot += 1;
            i += 1;

            if on_slot >= base {
                // Spread the excess: one extra component on this slot.
                if remainder > 0 && i < count {
                    components[i].rank = Some(slot);
                    remainder -= 1;
                    i += 1;
                }
                slot = self.topology.next_slot(slot);
                on_slot = 0;
            }
        }

        if self.verbosity >= 1 {
            tracing::info!(strategy = Self::NAME, "linear partition completed");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use partition_graph::GraphLoader;

    fn partition(n: usize, ranks: u32, threads: u32) -> Vec<RankInfo> {
        let mut graph = GraphLoader::synthetic("test", n);
        LinearPartition::new(Topology::new(ranks, threads), 0)
            .perform_partition(&mut graph)
            .unwrap();
        graph.assignments().into_iter().map(|r| r.unwrap()).collect()
    }

    #[test]
    fn test_share_even() {
        assert_eq!(
            LinearShare::compute(10, 2),
            LinearShare { base: 5, remainder: 0 }
        );
    }

    #[test]
    fn test_share_fewer_components_than_slots() {
        assert_eq!(
            LinearShare::compute(3, 4),
            LinearShare { base: 0, remainder: 0 }
        );
    }

    #[test]
    fn test_even_split() {
        let a = partition(10, 2, 1);
        assert!(a[..5].iter().all(|&s| s == RankInfo::new(0, 0)));
        assert!(a[5..].iter().all(|&s| s == RankInfo::new(1, 0)));
    }

    #[test]
    fn test_remainder_goes_to_first_slots() {
        // 11 over 2×2 slots: base 2, remainder 3.
        let a = partition(11, 2, 2);
        let expected = [
            (0, 0), (0, 0), (0, 0),
            (0, 1), (0, 1), (0, 1),
            (1, 0), (1, 0), (1, 0),
            (1, 1), (1, 1),
        ];
        let expected: Vec<RankInfo> = expected.iter().map(|&(r, t)| RankInfo::new(r, t)).collect();
        assert_eq!(a, expected);
    }

    #[test]
    fn test_threads_fill_before_next_rank() {
        let a = partition(4, 2, 2);
        assert_eq!(
            a,
            vec![
                RankInfo::new(0, 0),
                RankInfo::new(0, 1),
                RankInfo::new(1, 0),
                RankInfo::new(1, 1),
            ]
        );
    }

    #[test]
    fn test_fewer_components_than_slots() {
        let a = partition(3, 4, 1);
        assert_eq!(
            a,
            vec![RankInfo::new(0, 0), RankInfo::new(1, 0), RankInfo::new(2, 0)]
        );
    }

    #[test]
    fn test_single_slot_takes_everything() {
        let a = partition(7, 1, 1);
        assert!(a.iter().all(|&s| s == RankInfo::new(0, 0)));
    }

    #[test]
    fn test_empty_graph() {
        let mut graph = GraphLoader::synthetic("empty", 0);
        LinearPartition::new(Topology::new(3, 2), 1)
            .perform_partition(&mut graph)
            .unwrap();
        assert!(graph.is_empty());
    }

    #[test]
    fn test_zero_threads_rejected_before_mutation() {
        let mut graph = GraphLoader::synthetic("test", 5);
        let result = LinearPartition::new(Topology::new(2, 0), 0).perform_partition(&mut graph);
        assert!(matches!(result, Err(PartitionError::InvalidTopology { .. })));
        assert!(graph.iter_components().all(|c| c.rank.is_none()));
    }

    #[test]
    fn test_name() {
        let s = LinearPartition::new(Topology::new(1, 1), 0);
        assert_eq!(s.name(), "linear");
        assert_eq!(s.topology(), Topology::new(1, 1));
    }
}
