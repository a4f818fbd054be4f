// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for the partition planner.

use partition_graph::{ComponentId, RankInfo, Topology};

/// Errors that can occur while selecting or running a partition strategy.
#[derive(Debug, thiserror::Error)]
pub enum PartitionError {
    /// No strategy is registered under the requested name.
    #[error("unknown partition strategy '{name}' (available: {available})")]
    UnknownStrategy { name: String, available: String },

    /// The topology has no slots, so no assignment can be produced.
    #[error("invalid topology: {topology}")]
    InvalidTopology { topology: Topology },

    /// A component's requested slot is missing or outside the topology.
    #[error("component {component} requested slot {requested:?}, which is not in {topology}")]
    InvalidRequestedRank {
        component: ComponentId,
        requested: Option<RankInfo>,
        topology: Topology,
    },

    /// A component was left without a slot.
    #[error("strategy '{strategy}' left component {component} unassigned")]
    Unassigned {
        strategy: String,
        component: ComponentId,
    },

    /// A component was assigned a slot that does not exist.
    #[error("strategy '{strategy}' assigned component {component} to slot {slot}, outside {topology}")]
    SlotOutOfRange {
        strategy: String,
        component: ComponentId,
        slot: RankInfo,
        topology: Topology,
    },

    /// The strategy produced an inconsistent partition.
    #[error("strategy '{strategy}' failed: {detail}")]
    StrategyFailed { strategy: String, detail: String },

    /// The component graph could not be built.
    #[error("graph error: {0}")]
    GraphError(#[from] partition_graph::GraphError),
}

impl PartitionError {
    /// Returns `true` for errors caused by the run's configuration, such as
    /// an unknown strategy name.
    pub fn is_configuration_error(&self) -> bool {
        matches!(self, Self::UnknownStrategy { .. })
    }

    /// Returns `true` for errors raised before any component is touched
    /// because the inputs cannot yield an assignment.
    pub fn is_precondition_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidTopology { .. } | Self::InvalidRequestedRank { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification() {
        let e = PartitionError::UnknownStrategy {
            name: "graph-xyz".into(),
            available: "linear".into(),
        };
        assert!(e.is_configuration_error());
        assert!(!e.is_precondition_error());

        let e = PartitionError::InvalidTopology {
            topology: Topology::new(0, 1),
        };
        assert!(e.is_precondition_error());
        assert!(e.to_string().contains("0 ranks"));
    }
}
