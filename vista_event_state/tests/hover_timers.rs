// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `vista_event_state` crate.
//!
//! Pointer jitter is simulated against a hand-rolled list of armed timers so
//! that stale tokens actually fire and must be rejected.

use core::time::Duration;

use vista_event_state::hover::{HoverDebounce, HoverPhase, HoverToken};

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

struct Host {
    hover: HoverDebounce,
    armed: Vec<(Duration, HoverToken)>,
    commits: Vec<bool>,
}

impl Host {
    fn new() -> Self {
        Self {
            hover: HoverDebounce::new(),
            armed: Vec::new(),
            commits: Vec::new(),
        }
    }

    fn enter(&mut self, now: Duration) {
        if let Some(req) = self.hover.enter(now) {
            self.armed.push((req.deadline, req.token));
        }
    }

    fn leave(&mut self, now: Duration) {
        if let Some(req) = self.hover.leave(now) {
            self.armed.push((req.deadline, req.token));
        }
    }

    // Deliberately never disarms: every timer fires.
    fn tick(&mut self, now: Duration) {
        let (due, rest): (Vec<_>, Vec<_>) = self.armed.drain(..).partition(|(d, _)| *d <= now);
        self.armed = rest;
        for (_, token) in due {
            if let Some(state) = self.hover.fire(token) {
                self.commits.push(state);
            }
        }
    }
}

#[test]
fn jitter_faster_than_delay_commits_only_final_state() {
    let mut host = Host::new();
    host.enter(ms(0));
    host.tick(ms(40));
    host.enter(ms(45));
    host.tick(ms(60));
    assert!(host.commits.is_empty(), "first enter was superseded");
    host.tick(ms(95));
    assert_eq!(host.commits, [true]);

    host.leave(ms(200));
    host.enter(ms(210));
    host.leave(ms(220));
    host.tick(ms(300));
    assert_eq!(host.commits, [true, false]);
    assert_eq!(host.hover.phase(), HoverPhase::Idle);
}

#[test]
fn teardown_cancel_leaves_no_effect() {
    let mut host = Host::new();
    host.enter(ms(0));
    assert!(host.hover.cancel().is_some());
    host.tick(ms(1000));
    assert!(host.commits.is_empty());
    assert!(!host.hover.is_hovered());
}
