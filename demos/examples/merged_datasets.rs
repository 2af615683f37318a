// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Skyline over several overlapping datasets keyed by string ids.
//!
//! Each source lists some of the same records. The sequential scan keeps one
//! point per id; the tree is fed the de-duplicated records.
//!
//! Run:
//! - `cargo run -p skyline_demos --example merged_datasets`

use hashbrown::HashSet;
use skyline_rtree::{Point, RTree, TreeConfig, presentation_order, scan_skyline};

/// Hotels as (name, price, rating): cheap and well rated wins.
const SOURCES: [&[(&str, f64, f64)]; 3] = [
    &[
        ("harbor", 120.0, 4.1),
        ("grand", 310.0, 4.9),
        ("budget-inn", 55.0, 2.9),
        ("station", 80.0, 3.4),
    ],
    &[
        ("station", 80.0, 3.4),
        ("loft", 140.0, 3.9),
        ("garden", 95.0, 4.3),
        ("hostel", 30.0, 2.2),
    ],
    &[
        ("grand", 310.0, 4.9),
        ("riverside", 260.0, 4.6),
        ("airport", 110.0, 3.0),
        ("garden", 95.0, 4.3),
    ],
];

fn main() {
    let all: Vec<Point<String>> = SOURCES
        .iter()
        .flat_map(|source| source.iter())
        .map(|&(name, price, rating)| Point::new(name.to_owned(), price, rating))
        .collect();

    let scanned = scan_skyline(&all);
    println!("sequential skyline of {} records:", all.len());
    for p in &scanned {
        println!("  {:<10} ${:>6.2}  {:.1}", p.id, p.x, p.y);
    }

    let mut seen = HashSet::new();
    let unique = all.iter().filter(|p| seen.insert(p.id.clone())).cloned();
    let tree = RTree::from_points(TreeConfig::default().with_capacity(3), unique)
        .expect("capacity 3 is valid");
    let mut sky = tree.skyline();
    presentation_order(&mut sky);
    println!("tree skyline over {} unique records ({:?}):", tree.len(), tree.stats());
    for p in &sky {
        println!("  {:<10} ${:>6.2}  {:.1}", p.id, p.x, p.y);
    }
    assert_eq!(sky, scanned);

    let cheapest_near = tree
        .nearest(&(100.0, 4.5))
        .expect("tree is not empty");
    println!(
        "closest to $100 / 4.5 stars: {} (distance {:.3})",
        cheapest_near.point.id, cheapest_near.distance
    );
}
