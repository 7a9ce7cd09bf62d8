// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::time::Duration;

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Size;
use understory_detent::{Detent, DetentSet, Geometry};
use understory_sheet::{DragSample, Sheet, SheetConfig};

fn new_sheet(observers: usize) -> Sheet {
    let geometry = Geometry::from_size(Size::new(390.0, 844.0));
    let detents = DetentSet::from([Detent::Height(160.0), Detent::Medium, Detent::Large]);
    let mut sheet = Sheet::new(detents, Detent::Medium, geometry, SheetConfig::default())
        .expect("valid sheet");
    for _ in 0..observers {
        sheet.subscribe(|state, _| {
            black_box(state.translation());
        });
    }
    sheet
}

/// A 120Hz drag from the medium detent up and back down, past the bottom.
fn gen_samples(count: usize) -> Vec<DragSample> {
    (0..count)
        .map(|i| {
            let phase = i as f64 / count as f64 * std::f64::consts::TAU;
            DragSample::new(Duration::from_micros(i as u64 * 8_333), 380.0 * phase.sin())
        })
        .collect()
}

fn bench_drag(c: &mut Criterion) {
    let mut group = c.benchmark_group("drag");
    let samples = gen_samples(240);
    for &observers in &[0usize, 4] {
        group.throughput(Throughput::Elements(samples.len() as u64));
        group.bench_function(format!("run_observers_{observers}"), |b| {
            b.iter_batched(
                || new_sheet(observers),
                |mut sheet| {
                    sheet.drag_began(Duration::ZERO);
                    for &s in &samples {
                        black_box(sheet.drag_moved(s));
                    }
                    let end = samples.last().map_or(Duration::ZERO, |s| s.time);
                    black_box(sheet.drag_ended(None, end));
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_drag);
criterion_main!(benches);
