// Copyright 2025 the Cartoview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use cartoview_regions::{Layer, RegionIndex, RegionLayers};
use kurbo::Point;

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }

    fn next_i32(&mut self, upper: i32) -> i32 {
        (self.next_u64() % upper as u64) as i32
    }
}

/// Markers scattered over a 4000x3000 map, radius 12.
fn scattered(n: usize, seed: u64) -> RegionIndex<usize> {
    let mut rng = Rng::new(seed);
    let mut index = RegionIndex::new();
    for i in 0..n {
        index.add_region((rng.next_i32(4000), rng.next_i32(3000)), 12, i);
    }
    index
}

fn probes(n: usize, seed: u64) -> Vec<(i32, i32)> {
    let mut rng = Rng::new(seed);
    (0..n)
        .map(|_| (rng.next_i32(4000), rng.next_i32(3000)))
        .collect()
}

fn bench_query_point(c: &mut Criterion) {
    let mut group = c.benchmark_group("regions_query_point");
    let points = probes(1024, 0xC0FFEE);
    for n in [16_usize, 128, 1024] {
        let index = scattered(n, 0xBADC0DE);
        group.throughput(Throughput::Elements(points.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &index, |b, index| {
            b.iter(|| {
                let mut hits = 0_usize;
                for &(x, y) in &points {
                    if index.query_point(black_box(x), black_box(y)).is_some() {
                        hits += 1;
                    }
                }
                black_box(hits)
            });
        });
    }
    group.finish();
}

fn bench_refresh_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("regions_refresh_cycle");
    for n in [128_usize, 1024] {
        let mut rng = Rng::new(7);
        let centers: Vec<_> = (0..n)
            .map(|_| (rng.next_i32(4000), rng.next_i32(3000)))
            .collect();
        group.bench_with_input(BenchmarkId::from_parameter(n), &centers, |b, centers| {
            let mut layers = RegionLayers::new();
            b.iter(|| {
                layers.clear_all();
                for (i, &center) in centers.iter().enumerate() {
                    let layer = if i % 4 == 0 { Layer::Secondary } else { Layer::Markers };
                    layers.layer_mut(layer).add_region(center, 12, i);
                }
                black_box(layers.query_content_point(Point::new(2000.5, 1500.5)).is_some())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_query_point, bench_refresh_cycle);
criterion_main!(benches);
