// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scoped suppression of page scrolling.

use alloc::rc::Rc;
use core::cell::Cell;

/// Shared page-scroll lock.
///
/// Page scroll is suppressed while at least one [`ScrollLockGuard`] is alive.
/// Hosts read [`ScrollLock::is_locked`] when they render and toggle the page's
/// overflow accordingly. Guards release on drop, so every exit path (close
/// finishing, teardown, navigating away, or simply dropping the owner) restores
/// scrolling exactly once.
///
/// ```rust
/// use vista_modal::ScrollLock;
///
/// let lock = ScrollLock::new();
/// let guard = lock.acquire();
/// assert!(lock.is_locked());
/// drop(guard);
/// assert!(!lock.is_locked());
/// ```
#[derive(Clone, Debug, Default)]
pub struct ScrollLock {
    holders: Rc<Cell<usize>>,
}

impl ScrollLock {
    /// Creates an unlocked lock.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Suppresses scrolling until the returned guard is dropped.
    pub fn acquire(&self) -> ScrollLockGuard {
        self.holders.set(self.holders.get() + 1);
        ScrollLockGuard {
            holders: Rc::clone(&self.holders),
        }
    }

    /// Returns `true` while any guard is alive.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.holders.get() > 0
    }

    /// Number of live guards.
    #[must_use]
    pub fn holders(&self) -> usize {
        self.holders.get()
    }
}

/// Keeps a [`ScrollLock`] engaged until dropped.
#[derive(Debug)]
#[must_use = "scrolling is restored as soon as the guard is dropped"]
pub struct ScrollLockGuard {
    holders: Rc<Cell<usize>>,
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        self.holders.set(self.holders.get().saturating_sub(1));
    }
}
