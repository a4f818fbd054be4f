// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Partition graph: the full component set for one simulation run.
//!
//! # Type-State Pattern
//!
//! ```text
//! PartitionGraph<Loaded>    : components collected, order unspecified.
//!       │  .validate()
//!       ▼
//! PartitionGraph<Validated> : ids unique, sorted into canonical order.
//! ```
//!
//! Strategies only accept a `PartitionGraph<Validated>`, so the traversal
//! order they walk is always ascending [`ComponentId`] and stable across
//! repeated calls. Mutation is limited to each component's assigned slot;
//! the component set itself cannot change once validated.

use crate::{ComponentId, GraphError, PartitionComponent, RankInfo};
use std::collections::HashSet;
use std::fmt;

// ── Type-state markers ─────────────────────────────────────────────

/// Marker: graph has been loaded but not validated.
#[derive(Debug, Clone)]
pub struct Loaded;

/// Marker: graph has been validated and is ready for partitioning.
#[derive(Debug, Clone)]
pub struct Validated;

/// Sealed trait for graph states.
pub trait GraphState: fmt::Debug + Clone {}
impl GraphState for Loaded {}
impl GraphState for Validated {}

// ── PartitionGraph ─────────────────────────────────────────────────

/// All components of one run, in canonical order once validated.
#[derive(Debug, Clone)]
pub struct PartitionGraph<S: GraphState = Loaded> {
    /// Human-readable model name.
    pub name: String,
    components: Vec<PartitionComponent>,
    _state: std::marker::PhantomData<S>,
}

// ── Loaded state ───────────────────────────────────────────────────

impl PartitionGraph<Loaded> {
    /// Creates a new graph in the `Loaded` state.
    pub fn new(name: String, components: Vec<PartitionComponent>) -> Self {
        Self {
            name,
            components,
            _state: std::marker::PhantomData,
        }
    }

    /// Validates the graph and transitions to the `Validated` state.
    ///
    /// # Checks
    /// - Component ids are unique.
    /// - Component names are non-empty.
    ///
    /// Components are then sorted by id. An empty graph is valid.
    pub fn validate(mut self) -> Result<PartitionGraph<Validated>, GraphError> {
        let mut seen = HashSet::with_capacity(self.components.len());
        for c in &self.components {
            if !seen.insert(c.id) {
                return Err(GraphError::DuplicateComponent {
                    id: c.id.0,
                    name: c.name.clone(),
                });
            }
            if c.name.trim().is_empty() {
                return Err(GraphError::InvalidComponent {
                    component: c.id.to_string(),
                    detail: "component name is empty".into(),
                });
            }
        }

        self.components.sort_by_key(|c| c.id);

        let preassigned = self.components.iter().filter(|c| c.is_assigned()).count();
        if preassigned > 0 {
            tracing::warn!(
                "{preassigned} components in '{}' already carry a slot; it will be overwritten",
                self.name,
            );
        }

        Ok(PartitionGraph {
            name: self.name,
            components: self.components,
            _state: std::marker::PhantomData,
        })
    }
}

// ── Validated state ────────────────────────────────────────────────

impl PartitionGraph<Validated> {
    /// Wraps components already known to be unique and sorted by id.
    pub(crate) fn from_canonical(name: String, components: Vec<PartitionComponent>) -> Self {
        debug_assert!(components.windows(2).all(|w| w[0].id < w[1].id));
        Self {
            name,
            components,
            _state: std::marker::PhantomData,
        }
    }

    /// Returns the total number of components.
    pub fn num_components(&self) -> usize {
        self.components.len()
    }

    /// Returns `true` if the graph has no components.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Returns an iterator over the components in canonical order.
    pub fn iter_components(&self) -> impl Iterator<Item = &PartitionComponent> {
        self.components.iter()
    }

    /// Returns the components in canonical order, each mutable in place.
    ///
    /// The slice length is fixed, so the component set cannot change.
    pub fn components_mut(&mut self) -> &mut [PartitionComponent] {
        &mut self.components
    }

    /// Returns a component by its position in canonical order.
    pub fn component(&self, index: usize) -> Option<&PartitionComponent> {
        self.components.get(index)
    }

    /// Looks up a component by id.
    pub fn find(&self, id: ComponentId) -> Option<&PartitionComponent> {
        self.components
            .binary_search_by_key(&id, |c| c.id)
            .ok()
            .map(|i| &self.components[i])
    }

    /// Returns the assigned slot of every component in canonical order.
    pub fn assignments(&self) -> Vec<Option<RankInfo>> {
        self.components.iter().map(|c| c.rank).collect()
    }

    /// Returns `true` once every component has a slot.
    pub fn is_fully_assigned(&self) -> bool {
        self.components.iter().all(|c| c.is_assigned())
    }

    /// Clears every assignment.
    pub fn clear_assignments(&mut self) {
        for c in &mut self.components {
            c.rank = None;
        }
    }

    /// Returns a summary string describing the graph.
    pub fn summary(&self) -> String {
        let assigned = self.components.iter().filter(|c| c.is_assigned()).count();
        let requested = self
            .components
            .iter()
            .filter(|c| c.requested_rank.is_some())
            .count();
        format!(
            "Graph '{}': {} components, {} assigned, {} with requested slot",
            self.name,
            self.num_components(),
            assigned,
            requested,
        )
    }
}

// ── Shared implementations ─────────────────────────────────────────

impl<S: GraphState> fmt::Display for PartitionGraph<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "PartitionGraph '{}' ({} components):",
            self.name,
            self.components.len()
        )?;
        for c in &self.components {
            writeln!(f, "  {}", c.summary())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comp(id: u64) -> PartitionComponent {
        PartitionComponent::new(ComponentId(id), format!("c{id}"))
    }

    #[test]
    fn test_validate_sorts_by_id() {
        let g = PartitionGraph::new("g".into(), vec![comp(5), comp(1), comp(3)])
            .validate()
            .unwrap();
        let ids: Vec<u64> = g.iter_components().map(|c| c.id.0).collect();
        assert_eq!(ids, vec![1, 3, 5]);
    }

    #[test]
    fn test_validate_duplicate_id() {
        let result = PartitionGraph::new("g".into(), vec![comp(1), comp(2), comp(1)]).validate();
        assert!(matches!(
            result,
            Err(GraphError::DuplicateComponent { id: 1, .. })
        ));
    }

    #[test]
    fn test_validate_empty_name() {
        let bad = PartitionComponent::new(ComponentId(0), "  ");
        let result = PartitionGraph::new("g".into(), vec![bad]).validate();
        assert!(matches!(result, Err(GraphError::InvalidComponent { .. })));
    }

    #[test]
    fn test_empty_graph_is_valid() {
        let g = PartitionGraph::new("empty".into(), vec![]).validate().unwrap();
        assert!(g.is_empty());
        assert!(g.is_fully_assigned());
    }

    #[test]
    fn test_find() {
        let g = PartitionGraph::new("g".into(), vec![comp(10), comp(2), comp(7)])
            .validate()
            .unwrap();
        assert_eq!(g.find(ComponentId(7)).unwrap().name, "c7");
        assert!(g.find(ComponentId(3)).is_none());
    }

    #[test]
    fn test_assign_and_clear() {
        let mut g = PartitionGraph::new("g".into(), vec![comp(0), comp(1)])
            .validate()
            .unwrap();
        for c in g.components_mut() {
            c.rank = Some(RankInfo::new(0, 0));
        }
        assert!(g.is_fully_assigned());
        assert_eq!(g.assignments(), vec![Some(RankInfo::new(0, 0)); 2]);

        g.clear_assignments();
        assert!(!g.is_fully_assigned());
    }

    #[test]
    fn test_summary() {
        let g = PartitionGraph::new("model".into(), vec![comp(0), comp(1)])
            .validate()
            .unwrap();
        let s = g.summary();
        assert!(s.contains("model"));
        assert!(s.contains("2 components"));
    }
}
