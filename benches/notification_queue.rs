// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the toast manager.
//!
//! Measures the performance of:
//! - Enqueueing a burst of notifications
//! - A catch-up `advance` that expires and removes a full queue
//! - Grouping active toasts by anchor for rendering

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use iced_swatch::ui::notifications::{toast, Manager, ManualClock, Notification, Position};
use std::hint::black_box;
use std::time::Duration;

const BURST: usize = 64;

fn filled(clock: &ManualClock) -> Manager {
    let mut manager = Manager::with_clock(clock.clone());
    for index in 0..BURST {
        let position = Position::ALL[index % Position::ALL.len()];
        manager.push(
            Notification::info(format!("toast {index}"))
                .duration(Duration::from_millis(100 + index as u64))
                .position(position),
        );
    }
    manager
}

fn bench_push(c: &mut Criterion) {
    let mut group = c.benchmark_group("notification_queue");
    let clock = ManualClock::new();

    group.bench_function("push_burst", |b| {
        b.iter(|| black_box(filled(&clock)));
    });

    group.finish();
}

fn bench_advance(c: &mut Criterion) {
    let mut group = c.benchmark_group("notification_queue");

    group.bench_function("advance_catch_up", |b| {
        b.iter_batched(
            || {
                let clock = ManualClock::new();
                let manager = filled(&clock);
                clock.advance(Duration::from_secs(60));
                manager
            },
            |mut manager| black_box(manager.advance()),
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

fn bench_layers(c: &mut Criterion) {
    let mut group = c.benchmark_group("notification_queue");
    let clock = ManualClock::new();
    let manager = filled(&clock);

    group.bench_function("group_by_anchor", |b| {
        b.iter(|| black_box(toast::layers(&manager).len()));
    });

    group.finish();
}

criterion_group!(benches, bench_push, bench_advance, bench_layers);
criterion_main!(benches);
