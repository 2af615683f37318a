// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sequential baselines: exhaustive scans over a plain slice of points.
//!
//! These answer the same questions as the tree searches without any index.
//! They are the reference the indexed searches are compared against, and the
//! cheapest option for small inputs.

use alloc::vec::Vec;
use core::hash::Hash;

use hashbrown::HashSet;

use crate::geometry::{distance, distance_squared, dominated_by_any};
use crate::nearest::Neighbor;
use crate::skyline::presentation_order;
use crate::types::{Point, Position};

/// The point of `points` closest to `query`, scanning every point.
///
/// The first point at the minimum distance wins. Returns `None` for an empty slice.
pub fn scan_nearest<'a, K>(points: &'a [Point<K>], query: &impl Position) -> Option<Neighbor<'a, K>> {
    let mut best: Option<(&Point<K>, f64)> = None;
    for p in points {
        let d = distance_squared(query, p);
        if best.is_none_or(|(_, b)| d < b) {
            best = Some((p, d));
        }
    }
    best.map(|(point, _)| Neighbor {
        point,
        distance: distance(query, point),
    })
}

/// [`scan_nearest`] for every query, keyed by query id, in query order.
pub fn scan_nearest_batch<'a, 'q, K, Q>(
    points: &'a [Point<K>],
    queries: &'q [Point<Q>],
) -> Vec<(&'q Q, Option<Neighbor<'a, K>>)> {
    queries
        .iter()
        .map(|q| (&q.id, scan_nearest(points, q)))
        .collect()
}

/// Every point of `points` not dominated by another, in presentation order.
///
/// Points are first de-duplicated by id, keeping the first occurrence, so a
/// dataset assembled from overlapping sources reports each id once.
///
/// ```
/// use skyline_rtree::{Point, scan_skyline};
///
/// let points = [
///     Point::new("a", 2.0, 4.0),
///     Point::new("b", 1.0, 5.0),
///     Point::new("a", 2.0, 4.0),
///     Point::new("c", 3.0, 6.0),
/// ];
/// let ids: Vec<_> = scan_skyline(&points).iter().map(|p| p.id).collect();
/// assert_eq!(ids, ["b", "c"]);
/// ```
pub fn scan_skyline<K: Hash + Eq>(points: &[Point<K>]) -> Vec<&Point<K>> {
    let mut seen: HashSet<&K> = HashSet::with_capacity(points.len());
    let unique: Vec<&Point<K>> = points.iter().filter(|p| seen.insert(&p.id)).collect();
    let mut skyline: Vec<&Point<K>> = unique
        .iter()
        .copied()
        .filter(|p| !dominated_by_any(unique.iter(), p))
        .collect();
    presentation_order(&mut skyline);
    skyline
}
