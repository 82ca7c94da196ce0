// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A single property animation on one target.

use core::time::Duration;

use crate::{Easing, Props};

/// Animation of one target's properties toward `to`.
///
/// When `from` is `None` the tween starts from whatever values the target
/// holds at the moment the tween begins (after its delay). With an explicit
/// `from`, runtimes apply those values as soon as the tween is scheduled so the
/// target does not flash its settled state during the delay.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Tween<T> {
    /// The element being animated.
    pub target: T,
    /// Explicit start values, if any.
    pub from: Option<Props>,
    /// End values.
    pub to: Props,
    /// Time from start to end.
    pub duration: Duration,
    /// Wait before starting, measured from when the tween is scheduled.
    pub delay: Duration,
    /// Curve applied to progress; `None` picks the timeline or global default.
    pub easing: Option<Easing>,
}

impl<T> Tween<T> {
    /// Default duration when none is given.
    pub const DEFAULT_DURATION: Duration = Duration::from_millis(500);

    /// A tween from the target's current values to `to`.
    #[must_use]
    pub fn to(target: T, to: Props) -> Self {
        Self {
            target,
            from: None,
            to,
            duration: Self::DEFAULT_DURATION,
            delay: Duration::ZERO,
            easing: None,
        }
    }

    /// A tween between explicit `from` and `to` values.
    #[must_use]
    pub fn from_to(target: T, from: Props, to: Props) -> Self {
        Self {
            from: Some(from),
            ..Self::to(target, to)
        }
    }

    /// Sets the duration.
    #[must_use]
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Sets the duration in milliseconds.
    #[must_use]
    pub fn millis(self, millis: u64) -> Self {
        self.duration(Duration::from_millis(millis))
    }

    /// Sets the start delay.
    #[must_use]
    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Sets the easing curve.
    #[must_use]
    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = Some(easing);
        self
    }

    /// Returns the easing curve, falling back to [`Easing::DEFAULT`].
    #[must_use]
    pub fn resolved_easing(&self) -> Easing {
        self.easing.unwrap_or(Easing::DEFAULT)
    }

    /// Time from scheduling to completion.
    #[must_use]
    pub fn end(&self) -> Duration {
        self.delay.saturating_add(self.duration)
    }

    /// Linear progress in `[0, 1]` after `elapsed` time since scheduling.
    ///
    /// Zero-duration tweens jump to `1` once their delay has passed.
    #[must_use]
    pub fn progress(&self, elapsed: Duration) -> f64 {
        if elapsed < self.delay {
            return 0.0;
        }
        let run = elapsed - self.delay;
        if self.duration.is_zero() || run >= self.duration {
            return 1.0;
        }
        run.as_secs_f64() / self.duration.as_secs_f64()
    }

    /// Samples the animated properties after `elapsed` time, starting from `from`.
    #[must_use]
    pub fn sample(&self, from: &Props, elapsed: Duration) -> Props {
        let t = self.resolved_easing().apply(self.progress(elapsed));
        Props::lerp(from, &self.to, t)
    }

    /// Maps the target to another type.
    #[must_use]
    pub fn map_target<U>(self, f: impl FnOnce(T) -> U) -> Tween<U> {
        Tween {
            target: f(self.target),
            from: self.from,
            to: self.to,
            duration: self.duration,
            delay: self.delay,
            easing: self.easing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn progress_honors_delay() {
        let t = Tween::to(0_u8, Props::NONE).duration(ms(400)).delay(ms(100));
        assert_eq!(t.progress(ms(50)), 0.0);
        assert_eq!(t.progress(ms(100)), 0.0);
        assert!((t.progress(ms(300)) - 0.5).abs() < 1e-9);
        assert_eq!(t.progress(ms(500)), 1.0);
        assert_eq!(t.end(), ms(500));
    }

    #[test]
    fn zero_duration_completes_after_delay() {
        let t = Tween::to((), Props::NONE).duration(Duration::ZERO).delay(ms(10));
        assert_eq!(t.progress(ms(9)), 0.0);
        assert_eq!(t.progress(ms(10)), 1.0);
    }

    #[test]
    fn sample_uses_easing() {
        let t = Tween::from_to((), Props::NONE.with_opacity(0.0), Props::NONE.with_opacity(1.0))
            .duration(ms(100))
            .easing(Easing::Linear);
        let from = t.from.unwrap();
        let linear = t.sample(&from, ms(25)).opacity.unwrap();
        assert!((linear - 0.25).abs() < 1e-9);
        let eased = t.easing(Easing::Power3Out);
        assert!(eased.sample(&from, ms(25)).opacity.unwrap() > 0.3);
    }

    #[test]
    fn map_target_keeps_timing() {
        let t = Tween::to(3_u32, Props::shown()).millis(700).delay(ms(300));
        let mapped = t.map_target(|id| id * 2);
        assert_eq!(mapped.target, 6);
        assert_eq!(mapped.duration, ms(700));
        assert_eq!(mapped.end(), ms(1000));
    }
}
