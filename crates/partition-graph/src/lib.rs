// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # partition-graph
//!
//! The data model shared by every partitioning strategy:
//!
//! - [`RankInfo`]: one execution slot, addressed as `(rank, thread)`.
//! - [`Topology`]: the fixed set of slots for one run (`ranks × threads`).
//! - [`PartitionComponent`]: one schedulable unit with a writable slot
//!   assignment.
//! - [`PartitionGraph`]: the full component set, with a **type-state
//!   pattern** (`Loaded` → `Validated`) that fixes the canonical traversal
//!   order before any strategy sees it.
//! - [`GraphLoader`] / [`GraphManifest`]: JSON component descriptions.
//!
//! # Example
//! ```
//! use partition_graph::{ComponentId, PartitionComponent, PartitionGraph, Topology};
//!
//! let components = (0..4)
//!     .map(|i| PartitionComponent::new(ComponentId(i), format!("c{i}")))
//!     .collect();
//! let graph = PartitionGraph::new("demo".into(), components).validate().unwrap();
//! assert_eq!(graph.num_components(), 4);
//! assert_eq!(Topology::new(2, 2).total_slots(), 4);
//! ```

mod component;
mod error;
pub mod graph;
mod loader;
pub(crate) mod manifest;
mod rank;

pub use component::{ComponentId, PartitionComponent};
pub use error::GraphError;
pub use graph::PartitionGraph;
pub use loader::GraphLoader;
pub use manifest::{GraphManifest, ManifestComponent};
pub use rank::{RankInfo, Topology};
