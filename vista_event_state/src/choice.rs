// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Exclusive choice: one selected value out of a set, reporting real changes only.
//!
//! ## Minimal example
//!
//! ```
//! use vista_event_state::choice::Choice;
//!
//! let mut tabs = Choice::new("all");
//! assert_eq!(tabs.select("beaches"), Some("beaches"));
//! // Re-selecting the current value reports nothing.
//! assert_eq!(tabs.select("beaches"), None);
//! assert_eq!(tabs.revision(), 1);
//! ```

/// One selected value with a change counter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Choice<T> {
    current: T,
    revision: u64,
}

impl<T: Default> Default for Choice<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> Choice<T> {
    /// Creates a choice with `initial` selected.
    #[must_use]
    pub const fn new(initial: T) -> Self {
        Self {
            current: initial,
            revision: 0,
        }
    }

    /// The selected value.
    #[must_use]
    pub fn current(&self) -> &T {
        &self.current
    }

    /// Number of reported changes so far.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

impl<T: Clone + PartialEq> Choice<T> {
    /// User selection. Returns the new value if it differs from the current one.
    ///
    /// Each real change is reported exactly once; re-selecting the current
    /// value is not a change.
    pub fn select(&mut self, value: T) -> Option<T> {
        if value == self.current {
            return None;
        }
        self.current = value;
        self.revision += 1;
        Some(self.current.clone())
    }

    /// Programmatic reset that is not reported as a user change.
    pub fn set_silently(&mut self, value: T) {
        self.current = value;
    }

    /// Returns `true` if `value` is the selected one.
    #[must_use]
    pub fn is_selected(&self, value: &T) -> bool {
        self.current == *value
    }
}
