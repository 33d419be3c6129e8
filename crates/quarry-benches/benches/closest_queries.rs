// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
// criterion_group!/criterion_main! expand to undocumented functions that cannot
// carry #[allow] (attributes on macro invocations are ignored). Crate-level
// suppress is required for benchmark binaries using Criterion.
#![allow(missing_docs)]
//! Closest-point query microbenchmarks.
//!
//! Each query runs over a fixed batch of probe points laid out on a spiral so
//! every Voronoi region of the primitive is visited.
use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use quarry_geom::closest::{
    closest_point_in_tetrahedron, closest_point_in_triangle, closest_points_segment_segment,
    squared_distance_point_segment,
};
use quarry_math::Vec3;

const PROBES: u16 = 256;

/// Probe points on a spiral around the unit cube.
fn probes() -> Vec<Vec3> {
    (0..PROBES)
        .map(|i| {
            let f = f32::from(i);
            let angle = f * 0.37;
            let radius = 0.5 + f / f32::from(PROBES) * 2.0;
            Vec3::new(radius * angle.cos(), radius * angle.sin(), (f * 0.11).sin() * 2.0)
        })
        .collect()
}

fn bench_closest(c: &mut Criterion) {
    let pts = probes();
    let (a, b, cc, d) = (Vec3::ZERO, Vec3::UNIT_X, Vec3::UNIT_Y, Vec3::UNIT_Z);

    let mut group = c.benchmark_group("closest");
    group
        .warm_up_time(Duration::from_secs(2))
        .measurement_time(Duration::from_secs(5));
    group.throughput(Throughput::Elements(u64::from(PROBES)));

    group.bench_function("point_segment_sq_dist", |bench| {
        bench.iter(|| {
            for p in &pts {
                black_box(squared_distance_point_segment(&a, &b, black_box(p)));
            }
        });
    });
    group.bench_function("segment_segment", |bench| {
        bench.iter(|| {
            for pair in pts.windows(2) {
                black_box(closest_points_segment_segment(&a, &b, &pair[0], &pair[1]));
            }
        });
    });
    group.bench_function("triangle", |bench| {
        bench.iter(|| {
            for p in &pts {
                black_box(closest_point_in_triangle(black_box(p), &a, &b, &cc));
            }
        });
    });
    group.bench_function("tetrahedron", |bench| {
        bench.iter(|| {
            for p in &pts {
                black_box(closest_point_in_tetrahedron(black_box(p), &a, &b, &cc, &d));
            }
        });
    });
    group.finish();
}

criterion_group!(benches, bench_closest);
criterion_main!(benches);
