// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Once-per-item entrance bookkeeping.

use alloc::vec::Vec;
use core::hash::Hash;

use hashbrown::HashSet;

/// Remembers which items have already played their entrance animation.
///
/// Items are claimed when their entrance is scheduled, not when it finishes,
/// so a growth step that arrives mid-animation never replays an item.
/// Items that leave the rendered set are forgotten with
/// [`EntranceTracker::retain`] and animate again if they come back.
#[derive(Clone, Debug)]
pub struct EntranceTracker<K> {
    claimed: HashSet<K>,
}

impl<K> Default for EntranceTracker<K> {
    fn default() -> Self {
        Self {
            claimed: HashSet::new(),
        }
    }
}

impl<K: Copy + Eq + Hash> EntranceTracker<K> {
    /// Creates an empty tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims every key not yet claimed and returns those, in input order.
    pub fn claim<I>(&mut self, keys: I) -> Vec<K>
    where
        I: IntoIterator<Item = K>,
    {
        keys.into_iter().filter(|k| self.claimed.insert(*k)).collect()
    }

    /// Returns `true` if `key` has been claimed.
    #[must_use]
    pub fn is_claimed(&self, key: &K) -> bool {
        self.claimed.contains(key)
    }

    /// Forgets every claimed key that is not in `live`.
    pub fn retain<I>(&mut self, live: I)
    where
        I: IntoIterator<Item = K>,
    {
        let live: HashSet<K> = live.into_iter().collect();
        self.claimed.retain(|k| live.contains(k));
    }

    /// Forgets everything.
    pub fn clear(&mut self) {
        self.claimed.clear();
    }

    /// Number of claimed keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.claimed.len()
    }

    /// Returns `true` if nothing is claimed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.claimed.is_empty()
    }
}
