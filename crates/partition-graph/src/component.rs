// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! A single partitionable component.

use crate::RankInfo;
use std::fmt;

/// Unique, totally ordered component identifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct ComponentId(pub u64);

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One independently schedulable unit of the simulation model.
///
/// Strategies only ever write [`PartitionComponent::rank`]; everything
/// else is owned by whoever built the graph.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PartitionComponent {
    /// Identifier; defines the canonical traversal order.
    pub id: ComponentId,
    /// Human-readable name (e.g., `"cpu0.l1cache"`).
    pub name: String,
    /// Component type (e.g., `"memHierarchy.Cache"`).
    #[serde(default)]
    pub component_type: String,
    /// Slot requested by the model author, honoured by the `self` strategy.
    #[serde(default)]
    pub requested_rank: Option<RankInfo>,
    /// Slot assigned by a strategy; `None` until partitioned.
    #[serde(default)]
    pub rank: Option<RankInfo>,
}

impl PartitionComponent {
    /// Creates an unassigned component.
    pub fn new(id: ComponentId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            component_type: String::new(),
            requested_rank: None,
            rank: None,
        }
    }

    /// Sets the component type.
    pub fn with_type(mut self, component_type: impl Into<String>) -> Self {
        self.component_type = component_type.into();
        self
    }

    /// Sets the slot this component asks to run on.
    pub fn with_requested_rank(mut self, slot: RankInfo) -> Self {
        self.requested_rank = Some(slot);
        self
    }

    /// Returns `true` once a strategy has assigned a slot.
    pub fn is_assigned(&self) -> bool {
        self.rank.is_some()
    }

    /// Returns a one-line description.
    pub fn summary(&self) -> String {
        let slot = self
            .rank
            .map(|r| r.to_string())
            .unwrap_or_else(|| "-".to_string());
        if self.component_type.is_empty() {
            format!("{} {} -> {}", self.id, self.name, slot)
        } else {
            format!("{} {} ({}) -> {}", self.id, self.name, self.component_type, slot)
        }
    }
}
