// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=skyline_rtree --heading-base-level=0

//! Skyline R-tree: an insertion-built 2D point index with nearest-neighbor and skyline queries.
//!
//! - Insert identified points one at a time into a height-balanced R-tree with a configurable fan-out.
//! - Find the stored point closest to a query with a best-first, bound-pruned search.
//! - Compute the skyline (minimize x, maximize y) with branch-and-bound pruning.
//! - Answer both queries through a divide-and-conquer driver that indexes the two halves of a
//!   median split separately, or through exhaustive scans over a plain slice.
//!
//! Splits are chosen by trying every sort order of the overflowing node's entries (point x and
//! y for leaves; the four rectangle edges for internal nodes) at every position that leaves both
//! halves at least 40 % full, keeping the pair with the smallest summed half-perimeter. The first
//! minimal pair wins, so the tree shape depends only on the insertion order.
//!
//! # Example
//!
//! ```rust
//! use skyline_rtree::{Point, RTree, presentation_order};
//!
//! let mut tree = RTree::new();
//! for (id, x, y) in [(1, 0.0, 0.0), (2, 5.0, 5.0), (3, 1.0, 1.0), (4, 10.0, 0.0), (5, 0.0, 10.0)] {
//!     tree.insert(Point::new(id, x, y)).unwrap();
//! }
//!
//! let hit = tree.nearest(&(3.0, 3.0)).unwrap();
//! assert_eq!(hit.point.id, 3);
//!
//! let mut sky = tree.skyline();
//! presentation_order(&mut sky);
//! let ids: Vec<_> = sky.iter().map(|p| p.id).collect();
//! assert_eq!(ids, [5]);
//! ```
//!
//! The divide-and-conquer driver gives the same answers:
//!
//! ```rust
//! use skyline_rtree::{Axis, Point, SplitIndex, TreeConfig};
//!
//! let points = [(1, 1.0, 2.0), (2, 2.0, 3.0), (3, 3.0, 4.0), (4, 4.0, 5.0)]
//!     .map(|(id, x, y)| Point::new(id, x, y));
//! let index = SplitIndex::build(points, Axis::X, TreeConfig::default()).unwrap();
//! assert_eq!(index.skyline().len(), 4);
//! ```
//!
//! ## Features
//!
//! - `std` *(default)*: forwards to `kurbo/std`.
//! - `libm`: `no_std` float math through `kurbo/libm`.
//!
//! ### Float semantics
//!
//! Coordinates are assumed finite. NaNs compare as equal during sorting and never dominate.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod divide;
mod error;
mod frontier;
mod geometry;
mod nearest;
mod node;
mod rtree;
mod scan;
mod skyline;
mod types;

pub use config::{DEFAULT_CAPACITY, DEFAULT_MIN_FILL_PERCENT, TreeConfig};
pub use divide::{SplitIndex, partition_by_median};
pub use error::{IndexError, Result};
pub use frontier::SearchStats;
pub use geometry::{distance, dominates, min_distance};
pub use nearest::Neighbor;
pub use node::{Node, NodeId};
pub use rtree::{RTree, TreeStats};
pub use scan::{scan_nearest, scan_nearest_batch, scan_skyline};
pub use skyline::presentation_order;
pub use types::{Axis, Mbr, Point, Position};
