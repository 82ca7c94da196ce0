// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deadline-ordered timer queue.

use alloc::vec::Vec;
use core::time::Duration;

/// Identifier for a scheduled timer.
///
/// Ids are never reused within one [`TimerQueue`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(u64);

impl TimerId {
    /// Returns the raw id value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// A timer whose deadline has passed, as yielded by [`TimerQueue::drain_due`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Due<T> {
    /// The id returned when the timer was scheduled.
    pub id: TimerId,
    /// The deadline the timer was scheduled for.
    pub deadline: Duration,
    /// The scheduled payload.
    pub payload: T,
}

#[derive(Clone, Debug)]
struct Entry<T> {
    id: TimerId,
    deadline: Duration,
    payload: T,
}

/// Queue of pending timers ordered by deadline.
///
/// The queue never reads a clock. All times are [`Duration`]s measured from an
/// epoch chosen by the host (for example the page load time or the first frame).
#[derive(Clone, Debug)]
pub struct TimerQueue<T> {
    // Sorted by `(deadline, id)`.
    entries: Vec<Entry<T>>,
    next_id: u64,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TimerQueue<T> {
    /// Creates an empty queue.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
        }
    }

    /// Schedules `payload` to fire once `now >= deadline`.
    pub fn schedule(&mut self, deadline: Duration, payload: T) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        // Ids increase monotonically, so equal deadlines keep scheduling order.
        let at = self.entries.partition_point(|e| e.deadline <= deadline);
        self.entries.insert(
            at,
            Entry {
                id,
                deadline,
                payload,
            },
        );
        id
    }

    /// Schedules `payload` to fire `delay` after `now`.
    pub fn schedule_after(&mut self, now: Duration, delay: Duration, payload: T) -> TimerId {
        self.schedule(now.saturating_add(delay), payload)
    }

    /// Cancels a pending timer, returning its payload.
    ///
    /// Returns `None` if the timer already fired, was already cancelled, or was
    /// never scheduled by this queue.
    pub fn cancel(&mut self, id: TimerId) -> Option<T> {
        let index = self.entries.iter().position(|e| e.id == id)?;
        Some(self.entries.remove(index).payload)
    }

    /// Returns `true` if `id` is still waiting to fire.
    #[must_use]
    pub fn is_pending(&self, id: TimerId) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    /// Returns the earliest pending deadline, if any.
    ///
    /// Hosts typically use this to arm a single platform timer.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.entries.first().map(|e| e.deadline)
    }

    /// Removes and yields every timer with `deadline <= now`, earliest first.
    ///
    /// The due entries are split off eagerly, so dropping the iterator early
    /// still removes them from the queue.
    pub fn drain_due(&mut self, now: Duration) -> DrainDue<T> {
        let split = self.entries.partition_point(|e| e.deadline <= now);
        let rest = self.entries.split_off(split);
        let due = core::mem::replace(&mut self.entries, rest);
        DrainDue {
            inner: due.into_iter(),
        }
    }

    /// Cancels every pending timer.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns the number of pending timers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no timers are pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Iterator returned by [`TimerQueue::drain_due`].
#[derive(Debug)]
pub struct DrainDue<T> {
    inner: alloc::vec::IntoIter<Entry<T>>,
}

impl<T> Iterator for DrainDue<T> {
    type Item = Due<T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|e| Due {
            id: e.id,
            deadline: e.deadline,
            payload: e.payload,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for DrainDue<T> {}
