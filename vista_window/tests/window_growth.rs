// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `vista_window` crate.

use kurbo::Rect;
use vista_window::{EntranceTracker, GrowingWindow, Sentinel, WindowConfig};

fn window(len: usize) -> GrowingWindow {
    GrowingWindow::with_config(len, &WindowConfig::default())
}

#[test]
fn nine_items_render_at_once_without_sentinel() {
    let mut w = window(9);
    assert_eq!(w.range(), 0..9);
    assert!(!w.shows_sentinel());
    assert!(w.observe(true).is_none());
}

#[test]
fn thirty_items_grow_to_twenty_four_then_thirty_then_stay() {
    let mut w = window(30);
    assert_eq!(w.range(), 0..12);

    let t = w.observe(true).unwrap();
    w.observe(false);
    let _ = w.apply(t).unwrap();
    assert_eq!(w.range(), 0..24);

    let t = w.observe(true).unwrap();
    w.observe(false);
    let _ = w.apply(t).unwrap();
    assert_eq!(w.range(), 0..30);

    assert!(w.observe(true).is_none());
    assert_eq!(w.range(), 0..30);
    assert!(!w.shows_sentinel());
}

#[test]
fn double_trigger_before_frame_grows_once() {
    let mut w = window(60);
    let first = w.observe(true);
    let second = w.observe(true);
    assert!(first.is_some());
    assert!(second.is_none());
    w.observe(false);
    let _ = w.apply(first.unwrap());
    assert_eq!(w.range(), 0..24);
}

#[test]
fn sentinel_reentry_grows_after_an_ignored_follow_up() {
    let mut w = window(60);
    let t = w.observe(true).unwrap();
    let _ = w.apply(t);
    assert_eq!(w.range(), 0..24);

    // The sentinel scrolls away and comes back without the host ever
    // applying the chained ticket.
    assert!(w.observe(false).is_none());
    let t = w.observe(true).expect("re-entering sentinel must request growth");
    let _ = w.apply(t);
    assert_eq!(w.range(), 0..36);
}

#[test]
fn reset_returns_to_first_page() {
    let mut w = window(100);
    for _ in 0..3 {
        let t = w.request_growth().unwrap();
        let _ = w.apply(t);
    }
    assert_eq!(w.end(), 48);
    w.reset(9);
    assert_eq!(w.range(), 0..9);
    w.reset(40);
    assert_eq!(w.range(), 0..12);
}

#[test]
fn category_switch_mid_growth_discards_old_step() {
    let mut w = window(9);
    assert_eq!(w.range(), 0..9);
    w.reset(30);
    let stale = w.observe(true).unwrap();
    // Filter narrowed to two items before the frame ran.
    w.reset(2);
    assert!(w.apply(stale).is_none());
    assert_eq!(w.range(), 0..2);
}

#[test]
fn bounds_hold_through_random_walk() {
    let mut w = window(0);
    let lens = [0_usize, 5, 12, 13, 37, 1, 100, 24];
    for (step, &len) in lens.iter().enumerate() {
        w.reset(len);
        for i in 0..step {
            if let Some(t) = w.observe(i % 2 == 0) {
                let _ = w.apply(t);
            }
            let r = w.range();
            assert!(r.start <= r.end && r.end <= w.len());
        }
    }
}

#[test]
fn geometry_drives_growth() {
    let sentinel = Sentinel::from_config(&WindowConfig::default());
    let viewport = Rect::new(0.0, 0.0, 1024.0, 768.0);
    let mut w = window(30);

    // Sentinel sits well below the fold.
    let far = Rect::new(0.0, 2400.0, 1024.0, 2401.0);
    assert!(w.observe(sentinel.is_in_view(far, viewport)).is_none());

    // Scrolled near it.
    let near = Rect::new(0.0, 900.0, 1024.0, 901.0);
    let t = w.observe(sentinel.is_in_view(near, viewport)).unwrap();
    assert!(w.apply(t).unwrap().next.is_some());
}

#[test]
fn entrance_plays_once_across_growth() {
    let mut w = window(30);
    let mut entrance = EntranceTracker::new();
    assert_eq!(entrance.claim(w.range()).len(), 12);

    let t = w.request_growth().unwrap();
    let growth = w.apply(t).unwrap();
    let fresh = entrance.claim(w.range());
    assert_eq!(fresh, growth.added.collect::<Vec<_>>());
}
