// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # partition-planner
//!
//! Assigns every component of a validated `PartitionGraph` to a
//! `(rank, thread)` slot before distributed execution starts, using
//! pluggable strategies selected by name.
//!
//! # Strategies
//!
//! | Strategy | Registered as | Balance | Id locality |
//! |---|---|---|---|
//! | [`LinearPartition`] | `linear` | ±1 component | Contiguous runs |
//! | [`RoundRobinPartition`] | `round-robin` | ±1 component | None |
//! | [`SinglePartition`] | `single` | Everything on `0:0` | Total |
//! | [`RequestedPartition`] | `self` | As requested | As requested |
//!
//! # Trait-Based Extensibility
//!
//! All strategies implement [`PartitionStrategy`] and are built through
//! the [`registry`], so new strategies can be added without modifying the
//! driver:
//!
//! ```ignore
//! struct MyStrategy { topology: Topology }
//! impl PartitionStrategy for MyStrategy {
//!     fn name(&self) -> &str { "mine" }
//!     fn topology(&self) -> Topology { self.topology }
//!     fn perform_partition(&self, graph: &mut PartitionGraph<Validated>)
//!         -> Result<(), PartitionError> { /* ... */ }
//! }
//! registry::register("mine", |t, _| Box::new(MyStrategy { topology: t }), "my strategy");
//! ```
//!
//! # Example
//! ```
//! use partition_graph::{GraphLoader, RankInfo, Topology};
//! use partition_planner::partition;
//!
//! let mut graph = GraphLoader::synthetic("demo", 11);
//! let report = partition("linear", Topology::new(2, 1), 0, &mut graph).unwrap();
//! assert_eq!(report.slot_load(RankInfo::new(0, 0)), 6);
//! assert_eq!(report.slot_load(RankInfo::new(1, 0)), 5);
//! ```

mod error;
pub mod registry;
mod report;
pub mod strategy;

pub use error::PartitionError;
pub use registry::{StrategyInfo, StrategyRegistry};
pub use report::{PartitionReport, SlotLoad};
pub use strategy::linear::{LinearPartition, LinearShare};
pub use strategy::requested::RequestedPartition;
pub use strategy::round_robin::RoundRobinPartition;
pub use strategy::single::SinglePartition;
pub use strategy::PartitionStrategy;

use partition_graph::{graph::Validated, PartitionGraph, Topology};

/// Builds the strategy `name` from the process-wide registry, runs it on
/// `graph` and returns the resulting load report.
///
/// An unknown name fails before the graph is touched.
pub fn partition(
    name: &str,
    topology: Topology,
    verbosity: u32,
    graph: &mut PartitionGraph<Validated>,
) -> Result<PartitionReport, PartitionError> {
    let strategy = registry::create(name, topology, verbosity)?;
    strategy.perform_partition(graph)?;

    let report = PartitionReport::from_graph(strategy.name(), topology, graph)?;
    report.validate(graph.num_components())?;
    tracing::debug!("{}", report.summary());
    Ok(report)
}
