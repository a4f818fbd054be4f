// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The [`PartitionStrategy`] trait and strategy implementations.

pub mod linear;
pub mod requested;
pub mod round_robin;
pub mod single;

use crate::PartitionError;
use partition_graph::{graph::Validated, PartitionGraph, Topology};

/// Trait for partition strategies.
///
/// A strategy is built for one [`Topology`] and writes a slot into every
/// component of the graph it is given. Implementations must:
///
/// - leave every component assigned to a slot inside the topology;
/// - be deterministic for a given topology and traversal order;
/// - fail with [`PartitionError::InvalidTopology`] before touching the
///   graph if the topology has no slots.
///
/// Strategies are single-pass and synchronous; an instance is discarded
/// after use.
pub trait PartitionStrategy: Send + Sync {
    /// Registered name of this strategy.
    fn name(&self) -> &str;

    /// The topology this strategy partitions for.
    fn topology(&self) -> Topology;

    /// Assigns a slot to every component of `graph` in place.
    fn perform_partition(&self, graph: &mut PartitionGraph<Validated>) -> Result<(), PartitionError>;
}

/// Rejects topologies without slots.
pub(crate) fn check_topology(topology: Topology) -> Result<(), PartitionError> {
    if topology.is_valid() {
        Ok(())
    } else {
        Err(PartitionError::InvalidTopology { topology })
    }
}
