// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `vista_motion` crate.
//!
//! These drive timelines through [`Motion`] the way a host frame loop would and
//! check ordering, overlap, and teardown behavior.

use core::time::Duration;

use vista_motion::{Animator, Easing, Motion, Position, Props, Timeline, Tween, play};

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
enum Part {
    Title,
    Filters,
    Grid,
}

fn entrance() -> Timeline<Part> {
    let mut tl = Timeline::new()
        .with_default_easing(Easing::Power2Out)
        .with_delay(ms(200));
    tl.add(Tween::to(Part::Title, Props::shown()).millis(400), Position::After)
        .add(Tween::to(Part::Filters, Props::shown()).millis(300), Position::Overlap(ms(200)))
        .add(Tween::to(Part::Grid, Props::shown()).millis(300), Position::Overlap(ms(200)));
    tl
}

#[test]
fn overlapping_steps_start_before_previous_finishes() {
    let mut motion = Motion::new();
    for part in [Part::Title, Part::Filters, Part::Grid] {
        motion.set(part, Props::hidden_below(20.0));
    }
    let playback = play(&mut motion, entrance());

    // Title runs 200..600, filters 400..700, grid 500..800.
    motion.advance(ms(450));
    let title = motion.current(&Part::Title).opacity.unwrap();
    let filters = motion.current(&Part::Filters).opacity.unwrap();
    assert!(title > 0.0 && title < 1.0);
    assert!(filters > 0.0, "filters should already be moving");
    assert_eq!(motion.current(&Part::Grid).opacity, Some(0.0));

    let mut finished = Vec::new();
    for t in (500..=800).step_by(16) {
        finished.extend(motion.advance(ms(t)));
    }
    finished.extend(motion.advance(ms(800)));
    assert_eq!(finished.as_slice(), playback.handles());
    assert!(playback.is_finished_by(finished[2]));
    assert_eq!(motion.current(&Part::Grid), Props::shown());
}

#[test]
fn cancel_all_stops_timeline_mid_flight() {
    let mut motion = Motion::new();
    let mut playback = play(&mut motion, entrance());
    motion.advance(ms(300));
    assert_eq!(playback.cancel_all(&mut motion), 3);
    assert!(playback.is_empty());
    assert!(motion.advance(ms(5000)).is_empty());
    assert!(motion.is_idle());
}

#[test]
fn empty_timeline_has_no_finisher() {
    let mut motion = Motion::<Part>::new();
    let playback = play(&mut motion, Timeline::new());
    assert!(playback.is_empty());
    assert_eq!(playback.finisher(), None);
}

#[test]
fn back_out_overshoots_scale_mid_flight() {
    let mut motion = Motion::new();
    motion.animate(
        Tween::from_to(0_u8, Props::NONE.with_scale(0.8), Props::NONE.with_scale(1.0))
            .millis(500)
            .easing(Easing::BackOut(1.7)),
    );
    let peak = (0..=500)
        .step_by(10)
        .map(|t| {
            motion.advance(ms(t));
            motion.current(&0).scale.unwrap()
        })
        .fold(0.0_f64, f64::max);
    assert!(peak > 1.0);
    assert_eq!(motion.current(&0).scale, Some(1.0));
}
