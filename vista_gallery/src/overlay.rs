// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Full-screen overlay that masks page transitions.

use core::time::Duration;

use vista_motion::{AnimationHandle, Animator, Easing, Props, Tween};

use crate::Target;

/// Whether the overlay is arriving or leaving.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum OverlayMode {
    /// Fades in to cover the outgoing page.
    Cover,
    /// Fades out to reveal the incoming page.
    Reveal,
}

/// A single fade of the transition overlay.
///
/// The overlay never intercepts input. Completion is reported once.
#[derive(Debug)]
pub struct TransitionOverlay {
    mode: OverlayMode,
    handle: Option<AnimationHandle>,
    finished: bool,
}

impl TransitionOverlay {
    /// Fade duration.
    pub const DURATION: Duration = Duration::from_millis(300);

    /// Starts a fade in `mode`.
    pub fn start<A>(mode: OverlayMode, animator: &mut A) -> Self
    where
        A: Animator<Target> + ?Sized,
    {
        let (from, to) = match mode {
            OverlayMode::Cover => (0.0, 1.0),
            OverlayMode::Reveal => (1.0, 0.0),
        };
        let handle = animator.animate(
            Tween::from_to(
                Target::Overlay,
                Props::NONE.with_opacity(from),
                Props::NONE.with_opacity(to),
            )
            .duration(Self::DURATION)
            .easing(Easing::Power2InOut),
        );
        Self {
            mode,
            handle: Some(handle),
            finished: false,
        }
    }

    /// The fade direction.
    #[must_use]
    pub fn mode(&self) -> OverlayMode {
        self.mode
    }

    /// Returns `true` once the fade has completed.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Returns `true` the first time the fade's own handle is reported.
    pub fn on_complete(&mut self, handle: AnimationHandle) -> bool {
        if self.handle != Some(handle) {
            return false;
        }
        self.handle = None;
        self.finished = true;
        true
    }

    /// Stops the fade. No completion is reported afterwards.
    pub fn teardown<A>(&mut self, animator: &mut A)
    where
        A: Animator<Target> + ?Sized,
    {
        if let Some(handle) = self.handle.take() {
            animator.cancel(handle);
        }
    }
}
