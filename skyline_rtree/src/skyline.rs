// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Branch-and-bound skyline search.

use alloc::vec::Vec;
use core::cmp::Ordering;

use log::trace;

use crate::frontier::{Frontier, SearchStats};
use crate::geometry::{dominated_by_any, dominates};
use crate::rtree::RTree;
use crate::types::{Mbr, Point, Position};

/// Queue key of a rectangle: squared distance from the origin to its best-case corner.
fn corner_key(mbr: &Mbr) -> f64 {
    let (x, y) = mbr.best_corner();
    x * x + y * y
}

impl<K> RTree<K> {
    /// All stored points not dominated by any other stored point.
    ///
    /// Dominance minimizes x and maximizes y (see [`dominates`]). The result
    /// is an antichain in no particular order; use [`presentation_order`] to
    /// sort it for display. Points sharing a position are all kept.
    ///
    /// ```
    /// use skyline_rtree::{Point, RTree, presentation_order};
    ///
    /// let mut tree = RTree::new();
    /// for (id, x, y) in [(1, 1.0, 5.0), (2, 2.0, 3.0), (3, 0.5, 1.0)] {
    ///     tree.insert(Point::new(id, x, y)).unwrap();
    /// }
    /// let mut sky = tree.skyline();
    /// presentation_order(&mut sky);
    /// let ids: Vec<_> = sky.iter().map(|p| p.id).collect();
    /// assert_eq!(ids, [3, 1]);
    /// ```
    pub fn skyline(&self) -> Vec<&Point<K>> {
        self.skyline_with_stats().0
    }

    /// Like [`skyline`](Self::skyline), also reporting traversal counters.
    ///
    /// Nodes are expanded in ascending squared distance from the origin to
    /// their best-case corner (minimum x, maximum y). A child whose
    /// best-case corner is already dominated is pruned when it would be queued,
    /// and again when it is popped if the skyline has grown since.
    pub fn skyline_with_stats(&self) -> (Vec<&Point<K>>, SearchStats) {
        let mut stats = SearchStats::default();
        let mut skyline: Vec<&Point<K>> = Vec::new();
        let Some(root_mbr) = self.root_node().mbr() else {
            return (skyline, stats);
        };

        let mut frontier = Frontier::new();
        frontier.push(corner_key(&root_mbr), self.root());

        while let Some((_, id)) = frontier.pop() {
            let node = self.live(id);
            let Some(mbr) = node.mbr() else {
                unreachable!("queued node {id:?} has no rectangle");
            };
            if dominated_by_any(skyline.iter(), &mbr.best_corner()) {
                stats.nodes_pruned += 1;
                continue;
            }
            stats.nodes_visited += 1;

            for p in node.points() {
                stats.points_examined += 1;
                if !dominated_by_any(skyline.iter(), p) {
                    skyline.retain(|s| !dominates(p, s));
                    skyline.push(p);
                }
            }
            for &child in node.children() {
                let Some(child_mbr) = self.live(child).mbr() else {
                    unreachable!("child {child:?} of {id:?} has no rectangle");
                };
                if dominated_by_any(skyline.iter(), &child_mbr.best_corner()) {
                    stats.nodes_pruned += 1;
                } else {
                    frontier.push(corner_key(&child_mbr), child);
                }
            }
        }

        trace!("skyline of {} points: {stats:?}", skyline.len());
        (skyline, stats)
    }
}

/// Remove every point dominated by another point of the same set.
///
/// Used to merge skylines computed over disjoint inputs. Quadratic in the
/// size of `points`, which is itself a union of skylines.
pub(crate) fn retain_undominated<P: Position>(points: &mut Vec<P>) {
    let keep: Vec<bool> = points
        .iter()
        .map(|p| !dominated_by_any(points.iter(), p))
        .collect();
    let mut flags = keep.into_iter();
    points.retain(|_| flags.next().unwrap_or(false));
}

/// Sort points for display: x ascending, then y descending.
///
/// The sort is stable, so exact duplicates keep their relative order.
pub fn presentation_order<P: Position>(points: &mut [P]) {
    points.sort_by(|a, b| {
        a.x()
            .partial_cmp(&b.x())
            .unwrap_or(Ordering::Equal)
            .then_with(|| b.y().partial_cmp(&a.y()).unwrap_or(Ordering::Equal))
    });
}
