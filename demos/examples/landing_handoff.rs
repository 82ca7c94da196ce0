// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The landing screen hands off to the gallery.
//!
//! Plays the landing entrance, presses "Enter Gallery" twice (the second press
//! is ignored), and prints the route pushed once the exit finishes.
//!
//! Run:
//! - `cargo run -p vista_demos --example landing_handoff`

use std::time::Duration;

use vista_gallery::{LANDING_TITLE, LandingPage, LandingPart, Route, Target};
use vista_motion::{Animator, Motion};

fn main() {
    let mut motion = Motion::<Target>::new();
    let mut routes: Vec<Route> = Vec::new();
    let mut landing = LandingPage::mount(&mut motion);
    println!("{LANDING_TITLE}");

    let mut now = Duration::ZERO;
    while routes.is_empty() && now < Duration::from_secs(5) {
        now += Duration::from_millis(16);
        for handle in motion.advance(now) {
            landing.on_complete(handle, &mut routes, &mut ());
        }
        if now >= Duration::from_millis(1_500) && landing.is_enter_enabled() {
            let first = landing.enter_gallery(&mut motion);
            let second = landing.enter_gallery(&mut motion);
            println!(
                "{:>5} ms: enter pressed (accepted: {first}, repeat accepted: {second})",
                now.as_millis()
            );
        }
    }

    let button = motion.current(&Target::Landing(LandingPart::Button));
    println!(
        "{:>5} ms: {:?} -> routes {routes:?}, button {button:?}",
        now.as_millis(),
        landing.phase()
    );
}
