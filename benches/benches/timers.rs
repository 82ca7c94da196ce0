// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::time::Duration;

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use vista_timing::TimerQueue;
use vista_window::GrowingWindow;

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u32(&mut self) -> u32 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 32) as u32
    }
}

fn bench_timers(c: &mut Criterion) {
    let mut group = c.benchmark_group("vista_timing");
    group.sample_size(50);

    for &n in &[64_u32, 4_096_u32] {
        group.bench_function(format!("schedule_cancel_half_drain(n={n})"), |b| {
            b.iter_batched(
                || Lcg::new(0x71AE_0000_0000_0001),
                |mut rng| {
                    let mut queue = TimerQueue::new();
                    let ids: Vec<_> = (0..n)
                        .map(|i| {
                            let at = Duration::from_millis(u64::from(rng.next_u32() % 1_000));
                            queue.schedule(at, i)
                        })
                        .collect();
                    for id in ids.iter().step_by(2) {
                        queue.cancel(*id);
                    }
                    let mut fired = 0_usize;
                    for ms in (0..=1_000).step_by(16) {
                        fired += queue.drain_due(Duration::from_millis(ms)).count();
                    }
                    black_box(fired);
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.bench_function("window_grow_to_end(len=100_000)", |b| {
        b.iter(|| {
            let mut window = GrowingWindow::new(100_000, 12);
            let mut ticket = window.observe(true);
            while let Some(t) = ticket {
                ticket = window.apply(t).and_then(|growth| growth.next);
            }
            black_box(window.end());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_timers);
criterion_main!(benches);
