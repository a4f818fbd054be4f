// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Execution slots and the topology they are drawn from.

use std::fmt;

/// One execution slot: a distributed rank and a thread within it.
///
/// Ordering is lexicographic by `(rank, thread)`, which is the order in
/// which strategies enumerate slots.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct RankInfo {
    pub rank: u32,
    pub thread: u32,
}

impl RankInfo {
    pub const fn new(rank: u32, thread: u32) -> Self {
        Self { rank, thread }
    }

    /// Returns `true` if this slot exists in `topology`.
    pub fn is_within(&self, topology: Topology) -> bool {
        self.rank < topology.rank_count && self.thread < topology.threads_per_rank
    }
}

impl fmt::Display for RankInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.rank, self.thread)
    }
}

/// The shape of the execution environment: `rank_count` ranks, each
/// running `threads_per_rank` threads.
///
/// A topology may hold zero counts; strategies reject such a topology when
/// asked to partition, not when constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Topology {
    pub rank_count: u32,
    pub threads_per_rank: u32,
}

impl Topology {
    pub const fn new(rank_count: u32, threads_per_rank: u32) -> Self {
        Self {
            rank_count,
            threads_per_rank,
        }
    }

    /// Total number of slots (`rank_count × threads_per_rank`).
    pub fn total_slots(&self) -> usize {
        self.rank_count as usize * self.threads_per_rank as usize
    }

    /// Returns `true` if at least one slot exists.
    pub fn is_valid(&self) -> bool {
        self.rank_count > 0 && self.threads_per_rank > 0
    }

    /// Returns the slot following `slot` in (rank, thread) order.
    ///
    /// Past the last slot this yields `(rank_count, 0)`, which is outside
    /// the topology.
    pub fn next_slot(&self, slot: RankInfo) -> RankInfo {
        let thread = slot.thread + 1;
        if thread >= self.threads_per_rank {
            RankInfo::new(slot.rank + 1, 0)
        } else {
            RankInfo::new(slot.rank, thread)
        }
    }

    /// Dense index of `slot` in (rank, thread) order, or `None` if the slot
    /// lies outside this topology.
    pub fn slot_index(&self, slot: RankInfo) -> Option<usize> {
        slot.is_within(*self)
            .then(|| slot.rank as usize * self.threads_per_rank as usize + slot.thread as usize)
    }

    /// Inverse of [`Topology::slot_index`].
    pub fn slot_at(&self, index: usize) -> Option<RankInfo> {
        if index >= self.total_slots() {
            return None;
        }
        let threads = self.threads_per_rank as usize;
        Some(RankInfo::new((index / threads) as u32, (index % threads) as u32))
    }

    /// Iterates over every slot in (rank, thread) lexicographic order.
    pub fn slots(&self) -> impl Iterator<Item = RankInfo> + '_ {
        (0..self.rank_count)
            .flat_map(move |rank| (0..self.threads_per_rank).map(move |t| RankInfo::new(rank, t)))
    }
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ranks × {} threads ({} slots)",
            self.rank_count,
            self.threads_per_rank,
            self.total_slots(),
        )
    }
}
