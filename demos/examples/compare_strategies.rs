// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Nearest neighbor and skyline through all three strategies, with timings.
//!
//! Generates a uniform dataset, then answers the same queries with an
//! exhaustive scan, a single R-tree, and a divide-and-conquer pair of trees.
//!
//! Run:
//! - `cargo run -p skyline_demos --example compare_strategies`
//! - `RUST_LOG=skyline_rtree=trace cargo run -p skyline_demos --example compare_strategies -- 200`
//!   to see every split and query statistic.

use std::time::Instant;

use kurbo::Point as Query;
use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use skyline_rtree::{
    Axis, Point, RTree, SplitIndex, TreeConfig, presentation_order, scan_nearest, scan_skyline,
};

fn main() {
    env_logger::init();

    let n: usize = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(20_000);
    let mut rng = StdRng::seed_from_u64(2025);
    let points: Vec<Point<u64>> = (1..=n as u64)
        .map(|id| Point::new(id, rng.gen_range(0.0..1000.0), rng.gen_range(0.0..1000.0)))
        .collect();
    let query = Query::new(250.0, 750.0);
    info!("generated {n} points");

    let start = Instant::now();
    let tree = RTree::from_points(TreeConfig::default(), points.iter().cloned())
        .expect("default configuration is valid");
    let tree_build = start.elapsed();
    println!("single tree: {:?} (built in {tree_build:?})", tree.stats());

    let start = Instant::now();
    let split = SplitIndex::build(points.iter().cloned(), Axis::X, TreeConfig::default())
        .expect("default configuration is valid");
    let split_build = start.elapsed();
    println!(
        "split index: {} + {} points (built in {split_build:?})",
        split.left().len(),
        split.right().len()
    );

    println!("\nnearest neighbor of ({}, {})", query.x, query.y);
    let start = Instant::now();
    let scanned = scan_nearest(&points, &query).expect("dataset is not empty");
    println!(
        "  sequential:         id {} at {:.4} in {:?}",
        scanned.point.id,
        scanned.distance,
        start.elapsed()
    );
    let start = Instant::now();
    let (hit, stats) = tree.nearest_with_stats(&query);
    let hit = hit.expect("tree is not empty");
    println!(
        "  single tree:        id {} at {:.4} in {:?} ({stats:?})",
        hit.point.id,
        hit.distance,
        start.elapsed()
    );
    let start = Instant::now();
    let (hit, stats) = split.nearest_with_stats(&query);
    let hit = hit.expect("index is not empty");
    println!(
        "  divide and conquer: id {} at {:.4} in {:?} ({stats:?})",
        hit.point.id,
        hit.distance,
        start.elapsed()
    );

    println!("\nskyline (minimize x, maximize y)");
    let start = Instant::now();
    let expected = scan_skyline(&points);
    println!("  sequential:         {} points in {:?}", expected.len(), start.elapsed());
    let start = Instant::now();
    let (mut sky, stats) = tree.skyline_with_stats();
    presentation_order(&mut sky);
    println!(
        "  single tree:        {} points in {:?} ({stats:?})",
        sky.len(),
        start.elapsed()
    );
    let start = Instant::now();
    let (mut merged, stats) = split.skyline_with_stats();
    presentation_order(&mut merged);
    println!(
        "  divide and conquer: {} points in {:?} ({stats:?})",
        merged.len(),
        start.elapsed()
    );

    assert_eq!(sky, expected, "tree skyline differs from the scan");
    assert_eq!(merged, expected, "split skyline differs from the scan");
    for p in &sky {
        println!("    {:>6}  ({:8.3}, {:8.3})", p.id, p.x, p.y);
    }
}
