// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The animator interface consumed by state machines.

use smallvec::SmallVec;

use crate::{Props, Timeline, Tween};

/// Handle to a running tween, used to cancel it or match its completion.
///
/// Handles are never reused by a given animator.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AnimationHandle(u64);

impl AnimationHandle {
    /// Wraps a raw handle value. Animator implementations mint handles with this.
    #[must_use]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw handle value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// A capability that interpolates properties of visual targets over time.
///
/// Implementations report completion out of band (for example
/// [`Motion::advance`](crate::Motion::advance) returns finished handles); the
/// caller routes each finished handle back to whichever state machine owns it.
/// A cancelled tween must never be reported as finished.
pub trait Animator<T> {
    /// Applies `props` to `target` immediately, without animation.
    fn set(&mut self, target: T, props: Props);

    /// Starts a tween and returns its handle.
    fn animate(&mut self, tween: Tween<T>) -> AnimationHandle;

    /// Stops a tween where it is. Returns `false` if it already finished or
    /// was already cancelled.
    fn cancel(&mut self, handle: AnimationHandle) -> bool;

    /// Returns `true` while the tween has neither finished nor been cancelled.
    fn is_active(&self, handle: AnimationHandle) -> bool;

    /// Current values of `target`. Missing properties have never been set.
    fn current(&self, target: &T) -> Props;
}

/// Handles retained from playing a [`Timeline`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Playback {
    handles: SmallVec<[AnimationHandle; 4]>,
    finisher: Option<AnimationHandle>,
}

impl Playback {
    /// Returns every handle started for the timeline.
    #[must_use]
    pub fn handles(&self) -> &[AnimationHandle] {
        &self.handles
    }

    /// The handle whose completion marks the end of the whole timeline.
    ///
    /// `None` for an empty timeline, which is complete as soon as it is played.
    #[must_use]
    pub fn finisher(&self) -> Option<AnimationHandle> {
        self.finisher
    }

    /// Returns `true` if `handle` belongs to this playback.
    #[must_use]
    pub fn contains(&self, handle: AnimationHandle) -> bool {
        self.handles.contains(&handle)
    }

    /// Returns `true` if `handle` completing means the timeline is done.
    #[must_use]
    pub fn is_finished_by(&self, handle: AnimationHandle) -> bool {
        self.finisher == Some(handle)
    }

    /// Returns `true` if no tweens were started.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Cancels every tween that is still running. Returns how many were stopped.
    pub fn cancel_all<T, A>(&mut self, animator: &mut A) -> usize
    where
        A: Animator<T> + ?Sized,
    {
        let stopped = self
            .handles
            .drain(..)
            .filter(|h| animator.cancel(*h))
            .count();
        self.finisher = None;
        stopped
    }
}

/// Starts every tween of `timeline` on `animator`.
///
/// The finisher is the tween with the latest end; on ties the one added last
/// wins, matching the completion order of [`Motion`](crate::Motion).
pub fn play<T, A>(animator: &mut A, timeline: Timeline<T>) -> Playback
where
    A: Animator<T> + ?Sized,
{
    let mut playback = Playback::default();
    let mut latest = None;
    for tween in timeline.into_tweens() {
        let end = tween.end();
        let handle = animator.animate(tween);
        playback.handles.push(handle);
        if latest.is_none_or(|l| end >= l) {
            latest = Some(end);
            playback.finisher = Some(handle);
        }
    }
    playback
}
