// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Debounced hover: commit pointer enter/leave only after a quiet period.
//!
//! ## Usage
//!
//! 1) On pointer enter or leave, call [`HoverDebounce::enter`] or
//!    [`HoverDebounce::leave`]. If the call returns a [`HoverRequest`], arm a
//!    timer for its `deadline`.
//! 2) When a timer fires, pass its token to [`HoverDebounce::fire`]. Only the
//!    newest token commits; tokens superseded by a later enter/leave are ignored.
//! 3) On teardown call [`HoverDebounce::cancel`] and drop any armed timers.
//!
//! Hosts may cancel superseded timers eagerly, but correctness does not depend
//! on it: stale tokens are rejected.
//!
//! ## Minimal example
//!
//! ```
//! use core::time::Duration;
//! use vista_event_state::hover::{HoverDebounce, HoverPhase};
//!
//! let mut hover = HoverDebounce::new();
//! let first = hover.enter(Duration::ZERO).unwrap();
//! // A second enter before the delay elapses supersedes the first.
//! let second = hover.enter(Duration::from_millis(30)).unwrap();
//!
//! assert_eq!(hover.fire(first.token), None);
//! assert_eq!(hover.fire(second.token), Some(true));
//! assert_eq!(hover.phase(), HoverPhase::Hovered);
//!
//! // Leaving before a pending enter commits just cancels it.
//! let mut quick = HoverDebounce::new();
//! let pending = quick.enter(Duration::ZERO).unwrap();
//! assert_eq!(quick.leave(Duration::from_millis(10)), None);
//! assert_eq!(quick.fire(pending.token), None);
//! assert_eq!(quick.phase(), HoverPhase::Idle);
//! ```

use core::time::Duration;

/// Monotonic token identifying one pending hover change.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HoverToken(u64);

/// Where the debounced hover state currently is.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HoverPhase {
    /// Not hovered, nothing pending.
    Idle,
    /// Not hovered yet; becomes hovered when `token` fires.
    PendingHover(HoverToken),
    /// Hovered, nothing pending.
    Hovered,
    /// Still hovered; becomes idle when `token` fires.
    PendingLeave(HoverToken),
}

impl HoverPhase {
    /// The committed hover state, ignoring anything pending.
    #[must_use]
    pub fn is_hovered(self) -> bool {
        matches!(self, Self::Hovered | Self::PendingLeave(_))
    }

    /// The token waiting to fire, if any.
    #[must_use]
    pub fn pending(self) -> Option<HoverToken> {
        match self {
            Self::PendingHover(t) | Self::PendingLeave(t) => Some(t),
            Self::Idle | Self::Hovered => None,
        }
    }
}

/// A timer the host should arm for a pending hover change.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct HoverRequest {
    /// Token to pass back to [`HoverDebounce::fire`].
    pub token: HoverToken,
    /// When to fire.
    pub deadline: Duration,
}

/// Debounced hover state machine with last-write-wins token invalidation.
#[derive(Clone, Debug)]
pub struct HoverDebounce {
    phase: HoverPhase,
    delay: Duration,
    next_token: u64,
}

impl Default for HoverDebounce {
    fn default() -> Self {
        Self::new()
    }
}

impl HoverDebounce {
    /// Quiet period used by [`HoverDebounce::new`].
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(50);

    /// Creates an idle debouncer with [`Self::DEFAULT_DELAY`].
    #[must_use]
    pub const fn new() -> Self {
        Self::with_delay(Self::DEFAULT_DELAY)
    }

    /// Creates an idle debouncer with a custom quiet period.
    #[must_use]
    pub const fn with_delay(delay: Duration) -> Self {
        Self {
            phase: HoverPhase::Idle,
            delay,
            next_token: 0,
        }
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> HoverPhase {
        self.phase
    }

    /// Committed hover state.
    #[must_use]
    pub fn is_hovered(&self) -> bool {
        self.phase.is_hovered()
    }

    /// The configured quiet period.
    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    fn mint(&mut self, now: Duration) -> HoverRequest {
        let token = HoverToken(self.next_token);
        self.next_token += 1;
        HoverRequest {
            token,
            deadline: now.saturating_add(self.delay),
        }
    }

    /// Pointer entered. Returns a timer request unless already hovered with
    /// nothing pending.
    pub fn enter(&mut self, now: Duration) -> Option<HoverRequest> {
        match self.phase {
            HoverPhase::Hovered => None,
            HoverPhase::PendingLeave(_) => {
                // Back in before the leave committed: stay hovered.
                self.phase = HoverPhase::Hovered;
                None
            }
            HoverPhase::Idle | HoverPhase::PendingHover(_) => {
                let req = self.mint(now);
                self.phase = HoverPhase::PendingHover(req.token);
                Some(req)
            }
        }
    }

    /// Pointer left. Returns a timer request unless already idle with nothing
    /// pending.
    pub fn leave(&mut self, now: Duration) -> Option<HoverRequest> {
        match self.phase {
            HoverPhase::Idle => None,
            HoverPhase::PendingHover(_) => {
                self.phase = HoverPhase::Idle;
                None
            }
            HoverPhase::Hovered | HoverPhase::PendingLeave(_) => {
                let req = self.mint(now);
                self.phase = HoverPhase::PendingLeave(req.token);
                Some(req)
            }
        }
    }

    /// A timer fired. Returns the new committed hover state if `token` was the
    /// pending one, `None` if it was stale.
    pub fn fire(&mut self, token: HoverToken) -> Option<bool> {
        match self.phase {
            HoverPhase::PendingHover(t) if t == token => {
                self.phase = HoverPhase::Hovered;
                Some(true)
            }
            HoverPhase::PendingLeave(t) if t == token => {
                self.phase = HoverPhase::Idle;
                Some(false)
            }
            _ => None,
        }
    }

    /// Drops any pending change, keeping the committed state.
    ///
    /// Returns the token that was pending so the host can disarm its timer.
    pub fn cancel(&mut self) -> Option<HoverToken> {
        let pending = self.phase.pending();
        self.phase = if self.phase.is_hovered() {
            HoverPhase::Hovered
        } else {
            HoverPhase::Idle
        };
        pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn enter_commits_after_fire() {
        let mut h = HoverDebounce::new();
        let req = h.enter(ms(0)).unwrap();
        assert_eq!(req.deadline, ms(50));
        assert!(!h.is_hovered());
        assert_eq!(h.fire(req.token), Some(true));
        assert!(h.is_hovered());
        assert_eq!(h.phase(), HoverPhase::Hovered);
    }

    #[test]
    fn repeated_enter_supersedes_previous_token() {
        let mut h = HoverDebounce::new();
        let a = h.enter(ms(0)).unwrap();
        let b = h.enter(ms(30)).unwrap();
        assert!(b.token > a.token);
        assert_eq!(h.fire(a.token), None);
        assert_eq!(h.fire(b.token), Some(true));
    }

    #[test]
    fn leave_while_pending_hover_returns_to_idle() {
        let mut h = HoverDebounce::new();
        let a = h.enter(ms(0)).unwrap();
        assert_eq!(h.leave(ms(10)), None);
        assert_eq!(h.phase(), HoverPhase::Idle);
        assert_eq!(h.fire(a.token), None);
    }

    #[test]
    fn reenter_during_pending_leave_stays_hovered() {
        let mut h = HoverDebounce::new();
        let a = h.enter(ms(0)).unwrap();
        h.fire(a.token);
        let l = h.leave(ms(100)).unwrap();
        assert!(h.is_hovered());
        assert_eq!(h.enter(ms(120)), None);
        assert_eq!(h.fire(l.token), None);
        assert_eq!(h.phase(), HoverPhase::Hovered);
    }

    #[test]
    fn leave_commits_after_fire() {
        let mut h = HoverDebounce::with_delay(ms(10));
        let a = h.enter(ms(0)).unwrap();
        h.fire(a.token);
        let l = h.leave(ms(5)).unwrap();
        assert_eq!(l.deadline, ms(15));
        assert_eq!(h.fire(l.token), Some(false));
        assert_eq!(h.phase(), HoverPhase::Idle);
    }

    #[test]
    fn cancel_keeps_committed_state() {
        let mut h = HoverDebounce::new();
        let a = h.enter(ms(0)).unwrap();
        assert_eq!(h.cancel(), Some(a.token));
        assert_eq!(h.phase(), HoverPhase::Idle);
        assert_eq!(h.fire(a.token), None);

        let b = h.enter(ms(0)).unwrap();
        h.fire(b.token);
        h.leave(ms(1));
        h.cancel();
        assert_eq!(h.phase(), HoverPhase::Hovered);
        assert_eq!(h.cancel(), None);
    }
}
