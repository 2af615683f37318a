// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sequential scan vs. single tree vs. divide and conquer.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use skyline_benches::{anti_correlated_points, uniform_points};
use skyline_rtree::{Axis, RTree, SplitIndex, TreeConfig, scan_nearest, scan_skyline};

const SIZES: [usize; 3] = [1_000, 10_000, 50_000];

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    for size in SIZES {
        let points = uniform_points(size, 1);
        group.bench_with_input(BenchmarkId::new("rtree", size), &points, |b, points| {
            b.iter(|| {
                let tree = RTree::from_points(TreeConfig::default(), points.iter().cloned()).unwrap();
                black_box(tree.height())
            });
        });
        group.bench_with_input(BenchmarkId::new("split_index", size), &points, |b, points| {
            b.iter(|| {
                let index =
                    SplitIndex::build(points.iter().cloned(), Axis::X, TreeConfig::default())
                        .unwrap();
                black_box(index.len())
            });
        });
    }
    group.finish();
}

fn bench_nearest(c: &mut Criterion) {
    let mut group = c.benchmark_group("nearest");
    let query = (512.5, 307.25);
    for size in SIZES {
        let points = uniform_points(size, 2);
        let tree = RTree::from_points(TreeConfig::default(), points.iter().cloned()).unwrap();
        let split =
            SplitIndex::build(points.iter().cloned(), Axis::X, TreeConfig::default()).unwrap();

        group.bench_function(BenchmarkId::new("scan", size), |b| {
            b.iter(|| black_box(scan_nearest(&points, &query).map(|n| n.distance)));
        });
        group.bench_function(BenchmarkId::new("rtree", size), |b| {
            b.iter(|| black_box(tree.nearest(&query).map(|n| n.distance)));
        });
        group.bench_function(BenchmarkId::new("split_index", size), |b| {
            b.iter(|| black_box(split.nearest(&query).map(|n| n.distance)));
        });
    }
    group.finish();
}

fn bench_skyline(c: &mut Criterion) {
    let mut group = c.benchmark_group("skyline");
    for (label, points) in [
        ("uniform", uniform_points(10_000, 3)),
        ("anti_correlated", anti_correlated_points(10_000, 3)),
    ] {
        let tree = RTree::from_points(TreeConfig::default(), points.iter().cloned()).unwrap();
        let split =
            SplitIndex::build(points.iter().cloned(), Axis::X, TreeConfig::default()).unwrap();

        group.bench_function(BenchmarkId::new("scan", label), |b| {
            b.iter(|| black_box(scan_skyline(&points).len()));
        });
        group.bench_function(BenchmarkId::new("rtree", label), |b| {
            b.iter(|| black_box(tree.skyline().len()));
        });
        group.bench_function(BenchmarkId::new("split_index", label), |b| {
            b.iter(|| black_box(split.skyline().len()));
        });
    }
    group.finish();
}

fn bench_capacity(c: &mut Criterion) {
    let mut group = c.benchmark_group("nearest_by_capacity");
    let points = uniform_points(20_000, 4);
    let query = (100.0, 900.0);
    for capacity in [4, 8, 16, 32] {
        let config = TreeConfig::default().with_capacity(capacity);
        let tree = RTree::from_points(config, points.iter().cloned()).unwrap();
        group.bench_function(BenchmarkId::from_parameter(capacity), |b| {
            b.iter(|| black_box(tree.nearest(&query).map(|n| n.point.id)));
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_build,
    bench_nearest,
    bench_skyline,
    bench_capacity
);
criterion_main!(benches);
