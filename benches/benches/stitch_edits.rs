// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect, Size};
use understory_stitch::{Stitch, TileId};

const EXTENT: f64 = 2000.0;

fn plane() -> Stitch {
    Stitch::new(Point::ZERO, Size::new(EXTENT, EXTENT))
}

/// `n * n` cells of `cell` units with a one-unit gap between neighbors.
fn gen_grid_rects(n: usize, cell: f64) -> Vec<Rect> {
    let mut out = Vec::with_capacity(n * n);
    for y in 0..n {
        for x in 0..n {
            let x0 = x as f64 * (cell + 1.0);
            let y0 = y as f64 * (cell + 1.0);
            out.push(Rect::new(x0, y0, x0 + cell, y0 + cell));
        }
    }
    out
}

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
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

/// Random rectangles snapped to whole units; many of them overlap and get rejected.
fn gen_random_rects(count: usize, rect_w: f64, rect_h: f64) -> Vec<Rect> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    (0..count)
        .map(|_| {
            let x0 = (rng.next_f64() * (EXTENT - rect_w)).floor();
            let y0 = (rng.next_f64() * (EXTENT - rect_h)).floor();
            Rect::new(x0, y0, x0 + rect_w, y0 + rect_h)
        })
        .collect()
}

fn gen_points(count: usize) -> Vec<Point> {
    let mut rng = Rng::new(0xBADC_F00D_1234_5678);
    (0..count)
        .map(|_| Point::new(rng.next_f64() * EXTENT, rng.next_f64() * EXTENT))
        .collect()
}

fn filled(rects: &[Rect]) -> (Stitch, Vec<TileId>) {
    let mut s = plane();
    let ids = rects.iter().filter_map(|&r| s.insert(r)).collect();
    (s, ids)
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");
    for &n in &[16usize, 32, 64] {
        let rects = gen_grid_rects(n, 10.0);
        group.throughput(Throughput::Elements((n * n) as u64));
        group.bench_function(format!("grid_n{}", n), |b| {
            b.iter_batched(
                plane,
                |mut s| {
                    for &r in &rects {
                        black_box(s.insert(r));
                    }
                    black_box(s.tile_count());
                },
                BatchSize::SmallInput,
            )
        });
    }
    let rects = gen_random_rects(2048, 12.0, 12.0);
    group.throughput(Throughput::Elements(rects.len() as u64));
    group.bench_function("random_2048", |b| {
        b.iter_batched(
            plane,
            |mut s| {
                for &r in &rects {
                    black_box(s.insert(r));
                }
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_delete(c: &mut Criterion) {
    let mut group = c.benchmark_group("delete");
    let rects = gen_grid_rects(32, 10.0);
    group.throughput(Throughput::Elements(rects.len() as u64));
    group.bench_function("grid_n32", |b| {
        b.iter_batched(
            || filled(&rects),
            |(mut s, ids)| {
                for id in ids {
                    black_box(s.delete(id));
                }
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("queries");
    let (s, ids) = filled(&gen_random_rects(4096, 12.0, 12.0));
    let points = gen_points(1024);
    group.throughput(Throughput::Elements(points.len() as u64));
    group.bench_function("point_find_cold", |b| {
        b.iter(|| {
            for &p in &points {
                black_box(s.point_find(p, None));
            }
        })
    });
    group.bench_function("point_find_chained", |b| {
        b.iter(|| {
            let mut seed = ids.first().copied();
            for &p in &points {
                seed = s.point_find(p, seed);
            }
            black_box(seed);
        })
    });
    group.throughput(Throughput::Elements(1));
    group.bench_function("area_enum_400", |b| {
        b.iter(|| black_box(s.area_enum(Rect::new(800.0, 800.0, 1200.0, 1200.0), None).len()))
    });
    group.bench_function("area_search_empty_band", |b| {
        b.iter(|| black_box(s.area_search(Rect::new(0.0, 1999.0, EXTENT, EXTENT), None)))
    });
    group.finish();
}

criterion_group!(benches, bench_insert, bench_delete, bench_queries);
criterion_main!(benches);
