// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deterministic reference runtime for [`Animator`].

use alloc::vec::Vec;
use core::hash::Hash;
use core::time::Duration;

use hashbrown::HashMap;

use crate::{AnimationHandle, Animator, Props, Tween};

#[derive(Clone, Debug)]
struct Active<T> {
    handle: AnimationHandle,
    tween: Tween<T>,
    scheduled_at: Duration,
    // Resolved once the tween starts moving.
    from: Option<Props>,
}

impl<T> Active<T> {
    fn ends_at(&self) -> Duration {
        self.scheduled_at.saturating_add(self.tween.end())
    }

    fn starts_at(&self) -> Duration {
        self.scheduled_at.saturating_add(self.tween.delay)
    }
}

/// A clock-driven animator that keeps current property values per target.
///
/// `Motion` never reads a clock: hosts call [`Motion::advance`] with the
/// current time (for example once per animation frame), render whatever
/// [`Animator::current`] reports, and dispatch the finished handles.
///
/// ```rust
/// use core::time::Duration;
/// use vista_motion::{Animator, Motion, Props, Tween};
///
/// let mut motion = Motion::new();
/// let handle = motion.animate(
///     Tween::from_to("card", Props::hidden_below(30.0), Props::shown()).millis(400),
/// );
///
/// assert!(motion.advance(Duration::from_millis(200)).is_empty());
/// let y = motion.current(&"card").translate_y.unwrap();
/// assert!(y > 0.0 && y < 30.0);
///
/// assert_eq!(motion.advance(Duration::from_millis(400)), vec![handle]);
/// assert_eq!(motion.current(&"card"), Props::shown());
/// ```
#[derive(Clone, Debug)]
pub struct Motion<T> {
    now: Duration,
    next_handle: u64,
    active: Vec<Active<T>>,
    values: HashMap<T, Props>,
}

impl<T> Default for Motion<T>
where
    T: Copy + Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Motion<T>
where
    T: Copy + Eq + Hash,
{
    /// Creates an idle animator at time zero.
    #[must_use]
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_handle: 0,
            active: Vec::new(),
            values: HashMap::new(),
        }
    }

    /// The time passed to the last [`Motion::advance`] call.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of tweens that have neither finished nor been cancelled.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    /// Returns `true` if nothing is animating.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.active.is_empty()
    }

    /// Cancels every tween on `target` and forgets its values.
    pub fn revert(&mut self, target: &T) {
        self.active.retain(|a| a.tween.target != *target);
        self.values.remove(target);
    }

    /// Moves the clock to `now`, updates values, and returns finished handles.
    ///
    /// Finished handles are ordered by end time, then by the order in which
    /// they were started. Time never runs backwards: an earlier `now` is
    /// treated as the current time.
    pub fn advance(&mut self, now: Duration) -> Vec<AnimationHandle> {
        self.now = self.now.max(now);
        let now = self.now;

        // Later starters override earlier ones on shared properties.
        self.active.sort_by_key(|a| (a.starts_at(), a.handle));

        for active in &mut self.active {
            if now < active.starts_at() {
                continue;
            }
            let current = self
                .values
                .get(&active.tween.target)
                .copied()
                .unwrap_or_default();
            let from = *active
                .from
                .get_or_insert_with(|| current.restrict_to(&active.tween.to));
            let sampled = active.tween.sample(&from, now - active.scheduled_at);
            self.values.insert(active.tween.target, current.merge(sampled));
        }

        let mut done: Vec<(Duration, AnimationHandle)> = self
            .active
            .iter()
            .filter(|a| now >= a.ends_at())
            .map(|a| (a.ends_at(), a.handle))
            .collect();
        done.sort();
        self.active.retain(|a| now < a.ends_at());
        done.into_iter().map(|(_, h)| h).collect()
    }
}

impl<T> Animator<T> for Motion<T>
where
    T: Copy + Eq + Hash,
{
    fn set(&mut self, target: T, props: Props) {
        let entry = self.values.entry(target).or_default();
        *entry = entry.merge(props);
    }

    fn animate(&mut self, tween: Tween<T>) -> AnimationHandle {
        let handle = AnimationHandle::from_raw(self.next_handle);
        self.next_handle += 1;
        if let Some(from) = tween.from {
            self.set(tween.target, from);
        }
        self.active.push(Active {
            handle,
            from: tween.from,
            tween,
            scheduled_at: self.now,
        });
        handle
    }

    fn cancel(&mut self, handle: AnimationHandle) -> bool {
        let before = self.active.len();
        self.active.retain(|a| a.handle != handle);
        self.active.len() != before
    }

    fn is_active(&self, handle: AnimationHandle) -> bool {
        self.active.iter().any(|a| a.handle == handle)
    }

    fn current(&self, target: &T) -> Props {
        self.values.get(target).copied().unwrap_or_default()
    }
}
