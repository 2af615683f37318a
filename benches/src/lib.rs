// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared datasets for the skyline R-tree benchmarks.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use skyline_rtree::Point;

/// `n` points uniform over a 1000 x 1000 square, ids `0..n`.
pub fn uniform_points(n: usize, seed: u64) -> Vec<Point<u64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n as u64)
        .map(|id| Point::new(id, rng.gen_range(0.0..1000.0), rng.gen_range(0.0..1000.0)))
        .collect()
}

/// `n` points scattered around the anti-diagonal `y = 1000 - x`.
///
/// Most points trade x against y here, so skylines are large and dominance
/// pruning has little to cut.
pub fn anti_correlated_points(n: usize, seed: u64) -> Vec<Point<u64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n as u64)
        .map(|id| {
            let x: f64 = rng.gen_range(0.0..1000.0);
            let jitter: f64 = rng.gen_range(-25.0..25.0);
            Point::new(id, x, 1000.0 - x + jitter)
        })
        .collect()
}
