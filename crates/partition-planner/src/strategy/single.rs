// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Single-slot strategy: everything on `(0, 0)`.
//!
//! # When to use
//! - Serial runs and debugging, where distribution only gets in the way.
//! - Baseline for comparing the balance of other strategies.

use crate::strategy::{check_topology, PartitionStrategy};
use crate::PartitionError;
use partition_graph::{graph::Validated, PartitionGraph, RankInfo, Topology};

/// Places every component on rank 0, thread 0.
#[derive(Debug, Clone)]
pub struct SinglePartition {
    topology: Topology,
}

impl SinglePartition {
    pub const NAME: &'static str = "single";
    pub const DESCRIPTION: &'static str = "Places all components on rank 0, thread 0.";

    pub fn new(topology: Topology, _verbosity: u32) -> Self {
        Self { topology }
    }
}

impl PartitionStrategy for SinglePartition {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn topology(&self) -> Topology {
        self.topology
    }

    fn perform_partition(&self, graph: &mut PartitionGraph<Validated>) -> Result<(), PartitionError> {
        check_topology(self.topology)?;
        if self.topology.total_slots() > 1 {
            tracing::warn!(
                "single-slot partition leaves {} slots idle",
                self.topology.total_slots() - 1,
            );
        }
        for component in graph.components_mut() {
            component.rank = Some(RankInfo::new(0, 0));
        }
        Ok(())
    }
}
