// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Insets, Size};
use understory_detent::{Detent, DetentSet, Geometry};

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

fn phone() -> Geometry {
    Geometry::new(Size::new(390.0, 800.0), Insets::new(0.0, 0.0, 0.0, 34.0))
}

/// `n` parametric detents spread over the container plus the named ones.
fn gen_detents(n: usize) -> DetentSet {
    let mut set = DetentSet::from([Detent::Bottom, Detent::Medium, Detent::Large]);
    for i in 1..=n {
        set.insert(Detent::Fraction(i as f64 / (n + 1) as f64));
    }
    set
}

/// Release points: translations across the whole range, mixed velocities.
fn gen_releases(count: usize, max: f64) -> Vec<(f64, f64)> {
    let mut rng = Rng::new(0xD37E_4750_0B07_70A5);
    (0..count)
        .map(|_| {
            let t = rng.next_f64() * (max + 80.0) - 40.0;
            let v = rng.next_f64() * 6.0 - 3.0;
            (t, v)
        })
        .collect()
}

fn bench_resolve(c: &mut Criterion) {
    let geometry = phone();
    let mut group = c.benchmark_group("resolve");
    for &n in &[0usize, 8, 64] {
        let set = gen_detents(n);
        let releases = gen_releases(1024, geometry.available_height());
        group.throughput(Throughput::Elements(releases.len() as u64));
        group.bench_function(format!("release_detents_{}", set.len()), |b| {
            b.iter(|| {
                for &(t, v) in &releases {
                    black_box(set.resolve(black_box(t), black_box(v), &geometry));
                }
            });
        });
    }
    group.finish();
}

fn bench_limits(c: &mut Criterion) {
    let geometry = phone();
    let set = gen_detents(64);
    c.bench_function("limits_detents_67", |b| {
        b.iter(|| black_box(set.limits(black_box(&geometry))));
    });
}

criterion_group!(benches, bench_resolve, bench_limits);
criterion_main!(benches);
