// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The landing screen.

use core::time::Duration;

use vista_motion::{
    AnimationHandle, Animator, Easing, Playback, Position, Props, Timeline, Tween, play,
};

use crate::{GalleryTrace, LandingPart, OverlayMode, Route, Router, Target, TransitionOverlay};

/// The landing headline.
pub const LANDING_TITLE: &str = "Explore The World Through Our Lens";

/// Where the landing screen is in its life.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum LandingPhase {
    /// The entrance timeline is running.
    Entering,
    /// Waiting for the visitor.
    Ready,
    /// The exit timeline is running; input is disabled.
    Exiting,
    /// Navigation to the gallery was requested.
    Done,
    /// Torn down before navigating. Nothing runs any more.
    Unmounted,
}

/// Elements in exit order.
const EXIT_ORDER: [LandingPart; 4] = [
    LandingPart::Title,
    LandingPart::Subtitle,
    LandingPart::Button,
    LandingPart::Logo,
];

/// The landing screen and its hand-off to the gallery.
///
/// [`LandingPage::enter_gallery`] runs at most once. The gallery route is
/// pushed when the exit timeline finishes, with the cover overlay already
/// fading in.
#[derive(Debug)]
pub struct LandingPage {
    phase: LandingPhase,
    entrance: Playback,
    exit: Playback,
    overlay: Option<TransitionOverlay>,
}

impl LandingPage {
    /// The entrance: badge drops in, then headline, tagline, and button rise,
    /// each overlapping the previous.
    #[must_use]
    pub fn entrance_timeline() -> Timeline<Target> {
        let ms = Duration::from_millis;
        let rise = |part: LandingPart, offset: f64, millis: u64| {
            Tween::from_to(Target::Landing(part), Props::hidden_below(offset), Props::shown())
                .duration(ms(millis))
        };
        let mut tl = Timeline::new().with_default_easing(Easing::Power3Out);
        tl.add(rise(LandingPart::Logo, -50.0, 1200), Position::After)
            .add(rise(LandingPart::Title, 50.0, 1000), Position::Overlap(ms(800)))
            .add(rise(LandingPart::Subtitle, 20.0, 800), Position::Overlap(ms(600)))
            .add(rise(LandingPart::Button, 20.0, 800), Position::Overlap(ms(400)));
        tl
    }

    /// The exit: every element lifts and fades, staggered.
    #[must_use]
    pub fn exit_timeline() -> Timeline<Target> {
        let mut tl = Timeline::new().with_default_easing(Easing::Power2InOut);
        tl.stagger(
            EXIT_ORDER.map(|part| {
                Tween::to(Target::Landing(part), Props::hidden_below(-20.0))
                    .duration(Duration::from_millis(300))
            }),
            Duration::from_millis(30),
            Position::After,
        );
        tl
    }

    /// Mounts the screen and starts its entrance.
    pub fn mount<A>(animator: &mut A) -> Self
    where
        A: Animator<Target> + ?Sized,
    {
        let entrance = play(animator, Self::entrance_timeline());
        Self {
            phase: LandingPhase::Entering,
            entrance,
            exit: Playback::default(),
            overlay: None,
        }
    }

    /// The current phase.
    #[must_use]
    pub fn phase(&self) -> LandingPhase {
        self.phase
    }

    /// Whether the "Enter Gallery" button accepts presses.
    #[must_use]
    pub fn is_enter_enabled(&self) -> bool {
        matches!(self.phase, LandingPhase::Entering | LandingPhase::Ready)
    }

    /// The cover overlay, once the exit has started.
    #[must_use]
    pub fn overlay(&self) -> Option<&TransitionOverlay> {
        self.overlay.as_ref()
    }

    /// A press on "Enter Gallery". Returns `false` if an exit already started.
    ///
    /// A running entrance stops where it is and the exit continues from there.
    pub fn enter_gallery<A>(&mut self, animator: &mut A) -> bool
    where
        A: Animator<Target> + ?Sized,
    {
        if !self.is_enter_enabled() {
            return false;
        }
        self.phase = LandingPhase::Exiting;
        self.entrance.cancel_all(animator);
        self.overlay = Some(TransitionOverlay::start(OverlayMode::Cover, animator));
        self.exit = play(animator, Self::exit_timeline());
        true
    }

    /// Routes a finished handle. Pushes [`Route::Gallery`] when the exit ends.
    pub fn on_complete<R, Tr>(&mut self, handle: AnimationHandle, router: &mut R, trace: &mut Tr)
    where
        R: Router + ?Sized,
        Tr: GalleryTrace + ?Sized,
    {
        if self.phase == LandingPhase::Entering && self.entrance.is_finished_by(handle) {
            self.phase = LandingPhase::Ready;
            return;
        }
        if let Some(overlay) = self.overlay.as_mut()
            && overlay.on_complete(handle)
        {
            return;
        }
        if self.phase == LandingPhase::Exiting && self.exit.is_finished_by(handle) {
            self.phase = LandingPhase::Done;
            trace.navigated(Route::Gallery);
            router.push(Route::Gallery);
        }
    }

    /// Cancels everything. No navigation happens afterwards.
    ///
    /// The screen stays inert: [`LandingPage::enter_gallery`] is refused.
    pub fn teardown<A>(&mut self, animator: &mut A)
    where
        A: Animator<Target> + ?Sized,
    {
        self.entrance.cancel_all(animator);
        self.exit.cancel_all(animator);
        if let Some(mut overlay) = self.overlay.take() {
            overlay.teardown(animator);
        }
        if self.phase != LandingPhase::Done {
            self.phase = LandingPhase::Unmounted;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use vista_motion::Motion;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn entrance_offsets_match_the_cascade() {
        let tl = LandingPage::entrance_timeline();
        let starts: Vec<_> = (0..4).filter_map(|i| tl.start_of(i)).collect();
        assert_eq!(starts, [ms(0), ms(400), ms(800), ms(1200)]);
        assert_eq!(tl.duration(), ms(2000));
    }

    #[test]
    fn exit_is_staggered_in_order() {
        let tl = LandingPage::exit_timeline();
        assert_eq!(tl.start_of(3), Some(ms(90)));
        assert_eq!(tl.duration(), ms(390));
    }

    #[test]
    fn enter_gallery_runs_once_then_navigates() {
        let mut m = Motion::new();
        let mut routes: Vec<Route> = Vec::new();
        let mut landing = LandingPage::mount(&mut m);
        for h in m.advance(ms(2000)) {
            landing.on_complete(h, &mut routes, &mut ());
        }
        assert_eq!(landing.phase(), LandingPhase::Ready);

        assert!(landing.enter_gallery(&mut m));
        assert!(!landing.enter_gallery(&mut m));
        assert!(!landing.is_enter_enabled());

        for h in m.advance(ms(2200)) {
            landing.on_complete(h, &mut routes, &mut ());
        }
        assert!(routes.is_empty());
        for h in m.advance(ms(2390)) {
            landing.on_complete(h, &mut routes, &mut ());
        }
        assert_eq!(routes, [Route::Gallery]);
        assert_eq!(landing.phase(), LandingPhase::Done);
        assert_eq!(
            m.current(&Target::Landing(LandingPart::Logo)),
            Props::hidden_below(-20.0)
        );
    }

    #[test]
    fn early_exit_cancels_entrance() {
        let mut m = Motion::new();
        let mut routes: Vec<Route> = Vec::new();
        let mut landing = LandingPage::mount(&mut m);
        let _ = m.advance(ms(500));
        assert!(landing.enter_gallery(&mut m));
        for h in m.advance(ms(900)) {
            landing.on_complete(h, &mut routes, &mut ());
        }
        assert_eq!(routes, [Route::Gallery]);
        assert!(m.is_idle());
    }

    #[test]
    fn teardown_mid_exit_stays_inert() {
        let mut m = Motion::new();
        let mut routes: Vec<Route> = Vec::new();
        let mut landing = LandingPage::mount(&mut m);
        let _ = m.advance(ms(2000));
        assert!(landing.enter_gallery(&mut m));
        let _ = m.advance(ms(2100));

        landing.teardown(&mut m);
        assert_eq!(landing.phase(), LandingPhase::Unmounted);
        assert!(landing.overlay().is_none());
        assert!(!landing.is_enter_enabled());
        assert!(!landing.enter_gallery(&mut m));
        assert!(m.is_idle());

        for h in m.advance(ms(3000)) {
            landing.on_complete(h, &mut routes, &mut ());
        }
        assert!(routes.is_empty());
    }
}
