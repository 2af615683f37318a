// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Divide-and-conquer driver: two independent trees over the halves of a median split.

use alloc::vec::Vec;
use core::cmp::Ordering;

use log::debug;

use crate::config::TreeConfig;
use crate::error::Result;
use crate::frontier::SearchStats;
use crate::nearest::Neighbor;
use crate::rtree::RTree;
use crate::skyline::retain_undominated;
use crate::types::{Axis, Point, Position};

/// Split points at the median of `axis`.
///
/// The points are stably sorted by their coordinate on `axis`; the first
/// `len / 2` form the left half and the rest the right half. Points sharing the
/// median coordinate may land on either side.
pub fn partition_by_median<K>(mut points: Vec<Point<K>>, axis: Axis) -> (Vec<Point<K>>, Vec<Point<K>>) {
    points.sort_by(|a, b| {
        axis.coord(a)
            .partial_cmp(&axis.coord(b))
            .unwrap_or(Ordering::Equal)
    });
    let right = points.split_off(points.len() / 2);
    (points, right)
}

/// Two R-trees built over the halves of a median split, queried together.
///
/// Answers are identical to a single [`RTree`] over the same points. Each
/// half is smaller, so each search touches fewer nodes, at the cost of
/// building and querying two trees.
///
/// ```
/// use skyline_rtree::{Axis, Point, SplitIndex, TreeConfig};
///
/// let points = (0..20_u64).map(|i| Point::new(i, i as f64, i as f64));
/// let index = SplitIndex::build(points, Axis::X, TreeConfig::default()).unwrap();
/// assert_eq!(index.nearest(&(3.2, 2.9)).unwrap().point.id, 3);
/// // Every point trades lower x for lower y, so all of them are on the skyline.
/// assert_eq!(index.skyline().len(), 20);
/// ```
#[derive(Debug)]
pub struct SplitIndex<K> {
    axis: Axis,
    left: RTree<K>,
    right: RTree<K>,
}

impl<K> SplitIndex<K> {
    /// Partition `points` by the median of `axis` and build one tree per half.
    pub fn build<I>(points: I, axis: Axis, config: TreeConfig) -> Result<Self>
    where
        I: IntoIterator<Item = Point<K>>,
    {
        config.validate()?;
        let (left, right) = partition_by_median(points.into_iter().collect(), axis);
        debug!(
            "split index on {axis:?}: {} left, {} right",
            left.len(),
            right.len()
        );
        Ok(Self {
            axis,
            left: RTree::from_points(config, left)?,
            right: RTree::from_points(config, right)?,
        })
    }

    /// The partitioning axis.
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// The tree over the lower half.
    pub fn left(&self) -> &RTree<K> {
        &self.left
    }

    /// The tree over the upper half.
    pub fn right(&self) -> &RTree<K> {
        &self.right
    }

    /// Total number of stored points.
    pub fn len(&self) -> usize {
        self.left.len() + self.right.len()
    }

    /// Whether both halves are empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The stored point closest to `query`; see [`RTree::nearest`].
    pub fn nearest(&self, query: &impl Position) -> Option<Neighbor<'_, K>> {
        self.nearest_with_stats(query).0
    }

    /// Nearest neighbor with the summed traversal counters of both trees.
    ///
    /// The closer of the two per-half answers wins; the left half wins ties.
    pub fn nearest_with_stats(
        &self,
        query: &impl Position,
    ) -> (Option<Neighbor<'_, K>>, SearchStats) {
        let (l, l_stats) = self.left.nearest_with_stats(query);
        let (r, r_stats) = self.right.nearest_with_stats(query);
        let hit = match (l, r) {
            (Some(a), Some(b)) => Some(if a.distance <= b.distance { a } else { b }),
            (a, None) => a,
            (None, b) => b,
        };
        (hit, l_stats.merge(r_stats))
    }

    /// Answer a whole query set, keyed by query id; see [`RTree::nearest_batch`].
    pub fn nearest_batch<'q, Q>(
        &self,
        queries: &'q [Point<Q>],
    ) -> Vec<(&'q Q, Option<Neighbor<'_, K>>)> {
        queries.iter().map(|q| (&q.id, self.nearest(q))).collect()
    }

    /// The skyline of all stored points; see [`RTree::skyline`].
    pub fn skyline(&self) -> Vec<&Point<K>> {
        self.skyline_with_stats().0
    }

    /// Skyline with the summed traversal counters of both trees.
    ///
    /// Both per-half skylines are concatenated and filtered once more, since a
    /// point from one half can dominate a point from the other.
    pub fn skyline_with_stats(&self) -> (Vec<&Point<K>>, SearchStats) {
        let (mut merged, l_stats) = self.left.skyline_with_stats();
        let (right, r_stats) = self.right.skyline_with_stats();
        merged.extend(right);
        retain_undominated(&mut merged);
        (merged, l_stats.merge(r_stats))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{init_logging, random_points};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn sorted_ids(points: &[&Point<u64>]) -> Vec<u64> {
        let mut ids: Vec<u64> = points.iter().map(|p| p.id).collect();
        ids.sort_unstable();
        ids
    }

    #[test]
    fn median_split_is_stable_and_even() {
        let points: Vec<Point<u64>> = [(0, 3.0), (1, 1.0), (2, 3.0), (3, 0.0), (4, 2.0)]
            .into_iter()
            .map(|(id, x)| Point::new(id, x, 0.0))
            .collect();
        let (left, right) = partition_by_median(points, Axis::X);
        let ids = |v: &[Point<u64>]| v.iter().map(|p| p.id).collect::<Vec<_>>();
        assert_eq!(ids(&left), [3, 1]);
        assert_eq!(ids(&right), [4, 0, 2]);
    }

    #[test]
    fn empty_and_single_point_inputs() {
        let empty = SplitIndex::<u64>::build([], Axis::X, TreeConfig::default()).unwrap();
        assert!(empty.is_empty());
        assert!(empty.nearest(&(0.0, 0.0)).is_none());
        assert!(empty.skyline().is_empty());

        let one =
            SplitIndex::build([Point::new(7_u64, 1.0, 1.0)], Axis::Y, TreeConfig::default())
                .unwrap();
        assert!(one.left().is_empty());
        assert_eq!(one.right().len(), 1);
        assert_eq!(one.nearest(&(9.0, 9.0)).unwrap().point.id, 7);
        assert_eq!(sorted_ids(&one.skyline()), [7]);
    }

    #[test]
    fn cross_half_dominance_is_removed() {
        // Split on x: (0, 10) lands left and dominates (5, 5) on the right.
        let points = [
            Point::new(1_u64, 0.0, 10.0),
            Point::new(2, 1.0, 0.0),
            Point::new(3, 5.0, 5.0),
            Point::new(4, 6.0, 12.0),
        ];
        let index = SplitIndex::build(points, Axis::X, TreeConfig::default()).unwrap();
        assert_eq!(sorted_ids(&index.skyline()), [1, 4]);
    }

    #[test]
    fn agrees_with_single_tree() {
        init_logging();
        let mut rng = StdRng::seed_from_u64(5);
        for (seed, axis) in [(1, Axis::X), (2, Axis::Y), (3, Axis::X)] {
            let points = random_points(800, seed);
            let config = TreeConfig::default().with_capacity(6);
            let single = RTree::from_points(config, points.clone()).unwrap();
            let split = SplitIndex::build(points, axis, config).unwrap();
            assert_eq!(split.len(), single.len());
            assert_eq!(split.axis(), axis);

            assert_eq!(sorted_ids(&split.skyline()), sorted_ids(&single.skyline()));

            let queries = random_points(25, seed + 100);
            let batched = split.nearest_batch(&queries);
            let expected = single.nearest_batch(&queries);
            for ((qa, a), (qb, b)) in batched.iter().zip(&expected) {
                assert_eq!(qa, qb);
                assert_eq!(a.map(|n| n.point.id), b.map(|n| n.point.id));
            }
            for _ in 0..50 {
                let q: (f64, f64) = (rng.gen_range(-120.0..120.0), rng.gen_range(-120.0..120.0));
                let a = split.nearest(&q).unwrap();
                let b = single.nearest(&q).unwrap();
                assert_eq!(a.distance, b.distance);
                assert_eq!(a.point.id, b.point.id);
            }
        }
    }

    #[test]
    fn rejects_invalid_config() {
        let config = TreeConfig::default().with_min_fill_percent(75);
        assert!(SplitIndex::<u64>::build([], Axis::X, config).is_err());
    }
}
