// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::time::Duration;

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::Rect;
use vista_modal::{CloseTrigger, ImageModal, ModalConfig, ModalPart, ScrollLock};
use vista_motion::{Easing, Motion, Position, Props, Timeline, Tween, play};

fn staggered(n: u32) -> Timeline<u32> {
    let mut tl = Timeline::new().with_default_easing(Easing::Power2Out);
    tl.stagger(
        (0..n).map(|i| {
            Tween::from_to(i, Props::hidden_below(30.0), Props::shown()).millis(400)
        }),
        Duration::from_millis(30),
        Position::After,
    );
    tl
}

fn bench_motion(c: &mut Criterion) {
    let mut group = c.benchmark_group("vista_motion");
    group.sample_size(50);

    for &n in &[12_u32, 256_u32, 4_096_u32] {
        group.bench_function(format!("stagger_build(n={n})"), |b| {
            b.iter(|| black_box(staggered(n)));
        });

        group.bench_function(format!("play_and_run_60fps(n={n})"), |b| {
            b.iter_batched(
                Motion::<u32>::new,
                |mut motion| {
                    let playback = play(&mut motion, staggered(n));
                    let mut frame = 0_u64;
                    while !motion.is_idle() {
                        frame += 1;
                        let done = motion.advance(Duration::from_micros(frame * 16_667));
                        black_box(done);
                    }
                    black_box(playback);
                },
                BatchSize::SmallInput,
            );
        });
    }

    let viewport = Rect::new(0.0, 0.0, 1920.0, 1080.0);
    let card = Rect::new(100.0, 400.0, 500.0, 700.0);
    group.bench_function("modal_open_close_cycle", |b| {
        b.iter_batched(
            || (Motion::<ModalPart>::new(), ScrollLock::new()),
            |(mut motion, lock)| {
                let config = ModalConfig::default();
                let mut modal =
                    ImageModal::open(1_u32, Some(card), viewport, config, &lock, &mut motion);
                for handle in motion.advance(Duration::from_millis(900)) {
                    modal.on_complete(handle);
                }
                modal.request_close(CloseTrigger::Scrim, Some(card), viewport, &mut motion);
                for handle in motion.advance(Duration::from_millis(1600)) {
                    modal.on_complete(handle);
                }
                black_box(modal.phase());
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_motion);
criterion_main!(benches);
