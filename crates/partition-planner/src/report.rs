// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Partition report: per-slot load of a finished partition.
//!
//! Building a report checks the output contract every strategy shares:
//! each component carries a slot, and that slot exists in the topology.
//! The per-slot counts then make balance easy to inspect.

use crate::PartitionError;
use partition_graph::{graph::Validated, PartitionGraph, RankInfo, Topology};

/// Number of components placed on one slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct SlotLoad {
    pub slot: RankInfo,
    pub components: usize,
}

/// Load summary of a partitioned graph.
#[derive(Debug, Clone, serde::Serialize)]
pub struct PartitionReport {
    /// Strategy name that produced the partition.
    pub strategy_name: String,
    /// Topology the partition was made for.
    pub topology: Topology,
    /// One entry per slot, in (rank, thread) order.
    pub loads: Vec<SlotLoad>,
}

impl PartitionReport {
    /// Counts the components on each slot of `topology`.
    ///
    /// Fails if any component is unassigned or sits outside the topology.
    pub fn from_graph(
        strategy_name: &str,
        topology: Topology,
        graph: &PartitionGraph<Validated>,
    ) -> Result<Self, PartitionError> {
        let mut counts = vec![0usize; topology.total_slots()];

        for component in graph.iter_components() {
            let slot = component.rank.ok_or_else(|| PartitionError::Unassigned {
                strategy: strategy_name.to_string(),
                component: component.id,
            })?;
            let index = topology
                .slot_index(slot)
                .ok_or_else(|| PartitionError::SlotOutOfRange {
                    strategy: strategy_name.to_string(),
                    component: component.id,
                    slot,
                    topology,
                })?;
            counts[index] += 1;
        }

        let loads = topology
            .slots()
            .zip(counts)
            .map(|(slot, components)| SlotLoad { slot, components })
            .collect();

        Ok(Self {
            strategy_name: strategy_name.to_string(),
            topology,
            loads,
        })
    }

    /// Returns the number of components on `slot` (0 if the slot is unknown).
    pub fn slot_load(&self, slot: RankInfo) -> usize {
        self.topology
            .slot_index(slot)
            .and_then(|i| self.loads.get(i))
            .map_or(0, |l| l.components)
    }

    /// Returns the total number of assigned components.
    pub fn total_assigned(&self) -> usize {
        self.loads.iter().map(|l| l.components).sum()
    }

    /// Heaviest slot load.
    pub fn max_load(&self) -> usize {
        self.loads.iter().map(|l| l.components).max().unwrap_or(0)
    }

    /// Lightest slot load.
    pub fn min_load(&self) -> usize {
        self.loads.iter().map(|l| l.components).min().unwrap_or(0)
    }

    /// Difference between the heaviest and lightest slot.
    pub fn imbalance(&self) -> usize {
        self.max_load() - self.min_load()
    }

    /// Returns `true` if no two slots differ by more than one component.
    pub fn is_balanced(&self) -> bool {
        self.imbalance() <= 1
    }

    /// Number of slots that received no components.
    pub fn idle_slots(&self) -> usize {
        self.loads.iter().filter(|l| l.components == 0).count()
    }

    /// Checks that the report accounts for exactly `component_count`
    /// components.
    pub fn validate(&self, component_count: usize) -> Result<(), PartitionError> {
        let assigned = self.total_assigned();
        if assigned != component_count {
            return Err(PartitionError::StrategyFailed {
                strategy: self.strategy_name.clone(),
                detail: format!("{assigned} components placed, expected {component_count}"),
            });
        }
        Ok(())
    }

    /// Returns a human-readable summary of the report.
    pub fn summary(&self) -> String {
        let avg = if self.loads.is_empty() {
            0.0
        } else {
            self.total_assigned() as f64 / self.loads.len() as f64
        };
        format!(
            "Partition '{}': {} components over {}, \
             load min {} / avg {:.1} / max {}, {} idle slots",
            self.strategy_name,
            self.total_assigned(),
            self.topology,
            self.min_load(),
            avg,
            self.max_load(),
            self.idle_slots(),
        )
    }
}
