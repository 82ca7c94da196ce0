// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sequenced tweens with overlap and stagger.

use alloc::vec::Vec;
use core::time::Duration;

use crate::{Easing, Tween};

/// Where a tween is placed on a [`Timeline`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Position {
    /// Start when everything added so far has finished.
    #[default]
    After,
    /// Start together with the previously added tween (or stagger group).
    WithPrevious,
    /// Start this long before everything added so far has finished.
    ///
    /// Overlap larger than the current end clamps to the timeline start.
    Overlap(Duration),
    /// Start at an absolute offset from the timeline start.
    At(Duration),
}

/// An ordered set of tweens with resolved start offsets.
///
/// Each added tween's `delay` is folded into its placement, so after building,
/// [`Timeline::into_tweens`] yields tweens whose `delay` is the absolute offset
/// from the moment the timeline is played.
///
/// ```rust
/// use core::time::Duration;
/// use vista_motion::{Position, Props, Timeline, Tween};
///
/// let ms = Duration::from_millis;
/// let mut tl = Timeline::new();
/// tl.add(Tween::to("title", Props::shown()).millis(400), Position::After)
///     .add(Tween::to("filters", Props::shown()).millis(300), Position::Overlap(ms(200)))
///     .add(Tween::to("grid", Props::shown()).millis(300), Position::Overlap(ms(200)));
///
/// assert_eq!(tl.start_of(1), Some(ms(200)));
/// assert_eq!(tl.start_of(2), Some(ms(300)));
/// assert_eq!(tl.duration(), ms(600));
/// ```
#[derive(Clone, Debug)]
pub struct Timeline<T> {
    steps: Vec<Tween<T>>,
    defaults: Option<Easing>,
    delay: Duration,
    end: Duration,
    last_start: Duration,
}

impl<T> Default for Timeline<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Timeline<T> {
    /// Creates an empty timeline.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            steps: Vec::new(),
            defaults: None,
            delay: Duration::ZERO,
            end: Duration::ZERO,
            last_start: Duration::ZERO,
        }
    }

    /// Sets the easing used by tweens that do not pick their own.
    #[must_use]
    pub fn with_default_easing(mut self, easing: Easing) -> Self {
        self.defaults = Some(easing);
        self
    }

    /// Delays the whole timeline.
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    fn start_for(&self, position: Position) -> Duration {
        match position {
            Position::After => self.end,
            Position::WithPrevious => self.last_start,
            Position::Overlap(d) => self.end.saturating_sub(d),
            Position::At(at) => at,
        }
    }

    fn place(&mut self, mut tween: Tween<T>, start: Duration) {
        tween.delay = start.saturating_add(tween.delay);
        self.end = self.end.max(tween.end());
        self.steps.push(tween);
    }

    /// Adds a tween at `position`.
    pub fn add(&mut self, tween: Tween<T>, position: Position) -> &mut Self {
        let start = self.start_for(position).saturating_add(tween.delay);
        self.last_start = start;
        let tween = Tween {
            delay: Duration::ZERO,
            ..tween
        };
        self.place(tween, start);
        self
    }

    /// Adds tweens that start `each` apart, the first one at `position`.
    ///
    /// For [`Position::WithPrevious`] purposes the group counts as one tween
    /// starting where its first member starts.
    pub fn stagger(
        &mut self,
        tweens: impl IntoIterator<Item = Tween<T>>,
        each: Duration,
        position: Position,
    ) -> &mut Self {
        let first = self.start_for(position);
        let mut group_start = None;
        let mut offset = Duration::ZERO;
        for tween in tweens {
            let start = first.saturating_add(offset);
            group_start.get_or_insert(start.saturating_add(tween.delay));
            self.place(tween, start);
            offset = offset.saturating_add(each);
        }
        if let Some(start) = group_start {
            self.last_start = start;
        }
        self
    }

    /// Total time from play to the end of the last tween, including the
    /// timeline delay. An empty timeline has zero duration.
    #[must_use]
    pub fn duration(&self) -> Duration {
        if self.steps.is_empty() {
            return Duration::ZERO;
        }
        self.delay.saturating_add(self.end)
    }

    /// Offset from play at which the tween at `index` starts moving.
    #[must_use]
    pub fn start_of(&self, index: usize) -> Option<Duration> {
        self.steps
            .get(index)
            .map(|t| self.delay.saturating_add(t.delay))
    }

    /// Number of tweens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns `true` if nothing has been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Consumes the timeline, yielding tweens with absolute delays and easing
    /// resolved against the timeline default.
    #[must_use]
    pub fn into_tweens(self) -> Vec<Tween<T>> {
        let delay = self.delay;
        let defaults = self.defaults;
        self.steps
            .into_iter()
            .map(|mut t| {
                t.delay = delay.saturating_add(t.delay);
                t.easing = t.easing.or(defaults);
                t
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Props;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn empty_timeline_has_zero_duration() {
        let tl = Timeline::<u8>::new().with_delay(ms(200));
        assert!(tl.is_empty());
        assert_eq!(tl.duration(), Duration::ZERO);
        assert!(tl.into_tweens().is_empty());
    }

    #[test]
    fn after_is_sequential() {
        let mut tl = Timeline::new();
        tl.add(Tween::to(1, Props::shown()).millis(100), Position::After)
            .add(Tween::to(2, Props::shown()).millis(50), Position::After);
        assert_eq!(tl.start_of(1), Some(ms(100)));
        assert_eq!(tl.duration(), ms(150));
    }

    #[test]
    fn with_previous_shares_start() {
        let mut tl = Timeline::new();
        tl.add(Tween::to(1, Props::shown()).millis(300), Position::After)
            .add(Tween::to(2, Props::shown()).millis(300), Position::WithPrevious);
        assert_eq!(tl.start_of(0), tl.start_of(1));
        assert_eq!(tl.duration(), ms(300));
    }

    #[test]
    fn overlap_clamps_to_zero() {
        let mut tl = Timeline::new();
        tl.add(Tween::to(1, Props::shown()).millis(100), Position::Overlap(ms(500)));
        assert_eq!(tl.start_of(0), Some(Duration::ZERO));
    }

    #[test]
    fn own_delay_shifts_placement() {
        let mut tl = Timeline::new();
        let tween = Tween::to(1, Props::shown()).millis(500).delay(ms(300));
        tl.add(tween, Position::At(Duration::ZERO));
        assert_eq!(tl.start_of(0), Some(ms(300)));
        assert_eq!(tl.duration(), ms(800));
    }

    #[test]
    fn stagger_spaces_members() {
        let mut tl = Timeline::new().with_delay(ms(500));
        tl.stagger(
            (0..3).map(|i| Tween::to(i, Props::shown()).millis(700)),
            ms(100),
            Position::After,
        );
        assert_eq!(tl.start_of(0), Some(ms(500)));
        assert_eq!(tl.start_of(2), Some(ms(700)));
        assert_eq!(tl.duration(), ms(1400));
    }

    #[test]
    fn into_tweens_resolves_defaults() {
        let mut tl = Timeline::new()
            .with_default_easing(Easing::Power2Out)
            .with_delay(ms(200));
        tl.add(Tween::to(1, Props::shown()).millis(400), Position::After)
            .add(
                Tween::to(2, Props::shown()).millis(300).easing(Easing::Linear),
                Position::Overlap(ms(200)),
            );
        let tweens = tl.into_tweens();
        assert_eq!(tweens[0].delay, ms(200));
        assert_eq!(tweens[0].easing, Some(Easing::Power2Out));
        assert_eq!(tweens[1].delay, ms(400));
        assert_eq!(tweens[1].easing, Some(Easing::Linear));
    }
}
