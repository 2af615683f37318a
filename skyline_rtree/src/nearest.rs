// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Best-first nearest-neighbor search.

use alloc::vec::Vec;

use log::trace;

use crate::frontier::{Frontier, SearchStats};
use crate::geometry::{distance, distance_squared};
use crate::rtree::RTree;
use crate::types::{Point, Position};

/// A stored point together with its distance to the query.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Neighbor<'a, K> {
    /// The closest stored point.
    pub point: &'a Point<K>,
    /// Euclidean distance from the query to `point`.
    pub distance: f64,
}

impl<K> RTree<K> {
    /// The stored point closest to `query` in Euclidean distance.
    ///
    /// Returns `None` only when the tree is empty. Among points at exactly the
    /// same distance, the first one reached by the traversal is kept.
    ///
    /// ```
    /// use skyline_rtree::{Point, RTree};
    ///
    /// let mut tree = RTree::new();
    /// tree.insert(Point::new(1, 0.0, 0.0)).unwrap();
    /// tree.insert(Point::new(2, 4.0, 4.0)).unwrap();
    /// let hit = tree.nearest(&(3.0, 3.5)).unwrap();
    /// assert_eq!(hit.point.id, 2);
    /// ```
    pub fn nearest(&self, query: &impl Position) -> Option<Neighbor<'_, K>> {
        self.nearest_with_stats(query).0
    }

    /// Like [`nearest`](Self::nearest), also reporting traversal counters.
    ///
    /// Nodes are expanded in ascending order of their rectangle's minimum
    /// distance to the query. The search stops at the first node whose bound is
    /// not strictly below the best distance found so far.
    pub fn nearest_with_stats(
        &self,
        query: &impl Position,
    ) -> (Option<Neighbor<'_, K>>, SearchStats) {
        let mut stats = SearchStats::default();
        let Some(root_mbr) = self.root_node().mbr() else {
            return (None, stats);
        };

        // Squared distances throughout; the square root is taken once at the end.
        let mut best: Option<(&Point<K>, f64)> = None;
        let mut frontier = Frontier::new();
        frontier.push(root_mbr.min_distance_squared(query), self.root());

        while let Some((bound, id)) = frontier.pop() {
            if best.is_some_and(|(_, d)| bound >= d) {
                stats.nodes_pruned += 1 + frontier.len();
                break;
            }
            stats.nodes_visited += 1;
            let node = self.live(id);
            for p in node.points() {
                stats.points_examined += 1;
                let d = distance_squared(query, p);
                if best.is_none_or(|(_, b)| d < b) {
                    best = Some((p, d));
                }
            }
            for &child in node.children() {
                let Some(mbr) = self.live(child).mbr() else {
                    unreachable!("child {child:?} of {id:?} has no rectangle");
                };
                let bound = mbr.min_distance_squared(query);
                if best.is_some_and(|(_, d)| bound >= d) {
                    stats.nodes_pruned += 1;
                } else {
                    frontier.push(bound, child);
                }
            }
        }

        trace!("nearest: {stats:?}");
        let hit = best.map(|(point, _)| Neighbor {
            point,
            distance: distance(query, point),
        });
        (hit, stats)
    }

    /// Answer a whole query set, keyed by query id, in query order.
    ///
    /// ```
    /// use skyline_rtree::{Point, RTree, TreeConfig};
    ///
    /// let tree = RTree::from_points(
    ///     TreeConfig::default(),
    ///     [Point::new(1, 0.0, 0.0), Point::new(2, 10.0, 10.0)],
    /// )
    /// .unwrap();
    /// let queries = [Point::new("q1", 1.0, 1.0), Point::new("q2", 9.0, 8.0)];
    /// let answers: Vec<_> = tree
    ///     .nearest_batch(&queries)
    ///     .into_iter()
    ///     .map(|(q, hit)| (*q, hit.map(|n| n.point.id)))
    ///     .collect();
    /// assert_eq!(answers, [("q1", Some(1)), ("q2", Some(2))]);
    /// ```
    pub fn nearest_batch<'q, Q>(
        &self,
        queries: &'q [Point<Q>],
    ) -> Vec<(&'q Q, Option<Neighbor<'_, K>>)> {
        queries.iter().map(|q| (&q.id, self.nearest(q))).collect()
    }
}
