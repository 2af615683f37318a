// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Primitive data types: identified points, positions, and bounding rectangles.

use core::cmp::Ordering;

/// A data point stored in the index.
///
/// The identifier type is generic so datasets can use integer ids (the default)
/// or string ids. Points are never mutated once inserted; queries hand out
/// shared references into the tree.
#[derive(Clone, Debug, PartialEq)]
pub struct Point<K = u64> {
    /// Identifier, unique within one dataset.
    pub id: K,
    /// X coordinate. Minimized by the skyline rule.
    pub x: f64,
    /// Y coordinate. Maximized by the skyline rule.
    pub y: f64,
}

impl<K> Point<K> {
    /// Create a new point.
    #[inline(always)]
    pub const fn new(id: K, x: f64, y: f64) -> Self {
        Self { id, x, y }
    }
}

/// Anything with a 2D position.
///
/// Geometry helpers and queries accept any `Position`, so a query can be a
/// stored [`Point`], a bare `(x, y)` tuple, or a [`kurbo::Point`].
pub trait Position {
    /// X coordinate.
    fn x(&self) -> f64;
    /// Y coordinate.
    fn y(&self) -> f64;
}

impl<K> Position for Point<K> {
    #[inline]
    fn x(&self) -> f64 {
        self.x
    }

    #[inline]
    fn y(&self) -> f64 {
        self.y
    }
}

impl Position for (f64, f64) {
    #[inline]
    fn x(&self) -> f64 {
        self.0
    }

    #[inline]
    fn y(&self) -> f64 {
        self.1
    }
}

impl Position for kurbo::Point {
    #[inline]
    fn x(&self) -> f64 {
        self.x
    }

    #[inline]
    fn y(&self) -> f64 {
        self.y
    }
}

impl<P: Position + ?Sized> Position for &P {
    #[inline]
    fn x(&self) -> f64 {
        (**self).x()
    }

    #[inline]
    fn y(&self) -> f64 {
        (**self).y()
    }
}

impl<K> From<&Point<K>> for kurbo::Point {
    fn from(p: &Point<K>) -> Self {
        Self::new(p.x, p.y)
    }
}

/// Coordinate axis used for ordering and partitioning.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The x axis.
    #[default]
    X,
    /// The y axis.
    Y,
}

impl Axis {
    /// The coordinate of `p` along this axis.
    #[inline]
    pub fn coord(self, p: &impl Position) -> f64 {
        match self {
            Self::X => p.x(),
            Self::Y => p.y(),
        }
    }
}

/// Minimum bounding rectangle: an axis-aligned box with `min <= max` on both axes.
///
/// Rectangles are plain values. A node replaces its rectangle wholesale on every
/// update; there is no shared, mutable rectangle state. A node without content
/// has no rectangle at all (`Option<Mbr>::None`) rather than a placeholder box.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Mbr {
    /// Minimum x (left)
    pub min_x: f64,
    /// Minimum y (bottom)
    pub min_y: f64,
    /// Maximum x (right)
    pub max_x: f64,
    /// Maximum y (top)
    pub max_y: f64,
}

impl Mbr {
    /// Create a new rectangle from min/max corners.
    #[inline(always)]
    pub const fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// The degenerate rectangle covering a single position.
    #[inline]
    pub fn from_position(p: &impl Position) -> Self {
        Self::new(p.x(), p.y(), p.x(), p.y())
    }

    /// The tight bound of a set of positions, or `None` if the set is empty.
    pub fn of_positions<'a, P, I>(positions: I) -> Option<Self>
    where
        P: Position + 'a,
        I: IntoIterator<Item = &'a P>,
    {
        let mut it = positions.into_iter();
        let first = Self::from_position(it.next()?);
        Some(it.fold(first, |acc, p| acc.union_position(p)))
    }

    /// The tight bound of a set of rectangles, or `None` if the set is empty.
    pub fn of_rects<I: IntoIterator<Item = Self>>(rects: I) -> Option<Self> {
        let mut it = rects.into_iter();
        let first = it.next()?;
        Some(it.fold(first, |acc, r| acc.union(r)))
    }

    /// Whether this rectangle contains the position (edges included).
    #[inline]
    pub fn contains(&self, p: &impl Position) -> bool {
        self.min_x <= p.x() && self.min_y <= p.y() && p.x() <= self.max_x && p.y() <= self.max_y
    }

    /// The smallest rectangle enclosing both rectangles.
    #[inline]
    pub fn union(&self, other: Self) -> Self {
        Self {
            min_x: min_t(self.min_x, other.min_x),
            min_y: min_t(self.min_y, other.min_y),
            max_x: max_t(self.max_x, other.max_x),
            max_y: max_t(self.max_y, other.max_y),
        }
    }

    /// The smallest rectangle enclosing this rectangle and a position.
    #[inline]
    pub fn union_position(&self, p: &impl Position) -> Self {
        self.union(Self::from_position(p))
    }

    /// Half of the perimeter: `(max_x - min_x) + (max_y - min_y)`.
    ///
    /// Only meaningful for comparing candidate rectangles against each other.
    #[inline]
    pub fn half_perimeter(&self) -> f64 {
        (self.max_x - self.min_x) + (self.max_y - self.min_y)
    }

    /// Growth of the half-perimeter if this rectangle had to absorb `p`.
    #[inline]
    pub fn half_perimeter_increase(&self, p: &impl Position) -> f64 {
        self.union_position(p).half_perimeter() - self.half_perimeter()
    }

    /// Squared minimum distance from `p` to any position inside the rectangle.
    ///
    /// Zero when `p` lies inside or on the boundary.
    #[inline]
    pub fn min_distance_squared(&self, p: &impl Position) -> f64 {
        let dx = max_t(max_t(self.min_x - p.x(), 0.0), p.x() - self.max_x);
        let dy = max_t(max_t(self.min_y - p.y(), 0.0), p.y() - self.max_y);
        dx * dx + dy * dy
    }

    /// The best position a point inside this rectangle could have under the
    /// skyline rule: minimum x, maximum y.
    #[inline]
    pub fn best_corner(&self) -> (f64, f64) {
        (self.min_x, self.max_y)
    }

    /// Convert into a [`kurbo::Rect`].
    #[inline]
    pub fn to_rect(&self) -> kurbo::Rect {
        kurbo::Rect::new(self.min_x, self.min_y, self.max_x, self.max_y)
    }
}

impl From<kurbo::Rect> for Mbr {
    /// Normalizes the rectangle so that `min <= max` on both axes.
    fn from(r: kurbo::Rect) -> Self {
        let r = r.abs();
        Self::new(r.x0, r.y0, r.x1, r.y1)
    }
}

pub(crate) fn min_t<T: PartialOrd + Copy>(a: T, b: T) -> T {
    match a.partial_cmp(&b) {
        Some(Ordering::Greater) => b,
        _ => a,
    }
}

pub(crate) fn max_t<T: PartialOrd + Copy>(a: T, b: T) -> T {
    match a.partial_cmp(&b) {
        Some(Ordering::Less) => b,
        _ => a,
    }
}
