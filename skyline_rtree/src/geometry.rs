// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Distance and dominance predicates shared by the index and both searches.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use crate::types::{Mbr, Position};

/// Euclidean distance between two positions.
#[inline]
pub fn distance(p: &impl Position, q: &impl Position) -> f64 {
    distance_squared(p, q).sqrt()
}

#[inline]
pub(crate) fn distance_squared(p: &impl Position, q: &impl Position) -> f64 {
    let dx = q.x() - p.x();
    let dy = q.y() - p.y();
    dx * dx + dy * dy
}

/// Minimum Euclidean distance from `p` to any position inside `rect`.
///
/// Returns `0.0` when `p` lies inside or on the boundary of `rect`. This never
/// exceeds the distance from `p` to anything `rect` contains, which is what
/// makes it safe to prune subtrees with it.
#[inline]
pub fn min_distance(rect: &Mbr, p: &impl Position) -> f64 {
    rect.min_distance_squared(p).sqrt()
}

/// Whether `a` dominates `b`: no worse on both objectives and strictly better on one.
///
/// The objectives are fixed: minimize x and maximize y.
///
/// ```
/// use skyline_rtree::{Point, dominates};
///
/// let cheap_and_large = Point::new(1, 1.0, 5.0);
/// let pricey_and_small = Point::new(2, 2.0, 3.0);
/// assert!(dominates(&cheap_and_large, &pricey_and_small));
/// assert!(!dominates(&pricey_and_small, &cheap_and_large));
/// // Lower on both axes is a trade-off, not dominance.
/// assert!(!dominates(&(1.0, 1.0), &(2.0, 2.0)));
/// ```
#[inline]
pub fn dominates(a: &impl Position, b: &impl Position) -> bool {
    a.x() <= b.x() && a.y() >= b.y() && (a.x() < b.x() || a.y() > b.y())
}

/// Whether any position in `set` dominates `p`.
#[inline]
pub(crate) fn dominated_by_any<'a, P, I>(set: I, p: &impl Position) -> bool
where
    P: Position + 'a,
    I: IntoIterator<Item = &'a P>,
{
    set.into_iter().any(|s| dominates(s, p))
}
