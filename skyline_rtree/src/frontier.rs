// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Min-priority queue of nodes shared by the best-first searches.

use alloc::collections::BinaryHeap;
use core::cmp::Ordering;

use crate::node::NodeId;

/// Counters collected while answering a query.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes popped from the queue and expanded.
    pub nodes_visited: usize,
    /// Nodes discarded by a bound or dominance check without being expanded.
    pub nodes_pruned: usize,
    /// Stored points compared against the query or the running result.
    pub points_examined: usize,
}

impl SearchStats {
    /// Sum the counters of two independent searches.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        Self {
            nodes_visited: self.nodes_visited + other.nodes_visited,
            nodes_pruned: self.nodes_pruned + other.nodes_pruned,
            points_examined: self.points_examined + other.points_examined,
        }
    }
}

#[derive(Copy, Clone, Debug)]
struct Queued {
    key: f64,
    seq: u64,
    node: NodeId,
}

impl PartialEq for Queued {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Queued {}

impl PartialOrd for Queued {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Queued {
    // Reversed so the max-heap pops the smallest key, oldest first.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .key
            .total_cmp(&self.key)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Nodes ordered by ascending key, first-in first-out among equal keys.
#[derive(Debug, Default)]
pub(crate) struct Frontier {
    heap: BinaryHeap<Queued>,
    next_seq: u64,
}

impl Frontier {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, key: f64, node: NodeId) {
        self.heap.push(Queued {
            key,
            seq: self.next_seq,
            node,
        });
        self.next_seq += 1;
    }

    pub(crate) fn pop(&mut self) -> Option<(f64, NodeId)> {
        self.heap.pop().map(|q| (q.key, q.node))
    }

    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }
}
