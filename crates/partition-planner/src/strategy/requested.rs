// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Requested-slot strategy: every component runs where its model says.
//!
//! Registered as `self`. All requests are checked against the topology
//! before the first assignment, so a bad request leaves the graph
//! untouched.

use crate::strategy::{check_topology, PartitionStrategy};
use crate::PartitionError;
use partition_graph::{graph::Validated, PartitionGraph, Topology};

/// Honours each component's `requested_rank`.
#[derive(Debug, Clone)]
pub struct RequestedPartition {
    topology: Topology,
    verbosity: u32,
}

impl RequestedPartition {
    pub const NAME: &'static str = "self";
    pub const DESCRIPTION: &'static str =
        "Places each component on the slot requested in the model description.";

    pub fn new(topology: Topology, verbosity: u32) -> Self {
        Self {
            topology,
            verbosity,
        }
    }
}

impl PartitionStrategy for RequestedPartition {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn topology(&self) -> Topology {
        self.topology
    }

    fn perform_partition(&self, graph: &mut PartitionGraph<Validated>) -> Result<(), PartitionError> {
        check_topology(self.topology)?;

        if let Some(bad) = graph.iter_components().find(|c| {
            c.requested_rank
                .map_or(true, |slot| !slot.is_within(self.topology))
        }) {
            return Err(PartitionError::InvalidRequestedRank {
                component: bad.id,
                requested: bad.requested_rank,
                topology: self.topology,
            });
        }

        for component in graph.components_mut() {
            component.rank = component.requested_rank;
        }

        if self.verbosity >= 1 {
            tracing::info!(
                strategy = Self::NAME,
                components = graph.num_components(),
                "applied requested slots"
            );
        }
        Ok(())
    }
}
