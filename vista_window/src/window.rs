// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The growing window controller.

use core::ops::Range;

/// Tuning for a [`GrowingWindow`] and its [`Sentinel`](crate::Sentinel).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct WindowConfig {
    /// Items materialized initially and added per growth step. At least `1`.
    pub page_size: usize,
    /// Distance around the viewport, in logical pixels, within which the
    /// sentinel already counts as visible.
    pub lookahead: f64,
    /// Fraction of the sentinel's area that must fall inside the expanded
    /// viewport for it to count as visible.
    pub threshold: f64,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            page_size: 12,
            lookahead: 200.0,
            threshold: 0.1,
        }
    }
}

impl WindowConfig {
    /// Returns a copy with a different page size (clamped to at least `1`).
    #[must_use]
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Returns a copy with a different lookahead margin.
    #[must_use]
    pub fn with_lookahead(mut self, lookahead: f64) -> Self {
        self.lookahead = lookahead.max(0.0);
        self
    }

    /// Returns a copy with a different visibility threshold, clamped to `[0, 1]`.
    #[must_use]
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold.clamp(0.0, 1.0);
        self
    }
}

/// Permission to apply one growth step, issued by [`GrowingWindow::request_growth`].
///
/// Tickets are stamped with the window generation; a ticket issued before a
/// [`GrowingWindow::reset`] is stale and applying it does nothing. Only the
/// most recently issued ticket is live.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[must_use = "a growth ticket does nothing until applied"]
pub struct GrowthTicket {
    generation: u64,
    serial: u64,
}

/// Result of applying a [`GrowthTicket`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[must_use = "a chained `next` ticket keeps the window busy until applied"]
pub struct Growth {
    /// Indices that became visible. Empty if the list was already covered.
    pub added: Range<usize>,
    /// A follow-up ticket when the sentinel is still reported visible and the
    /// list is not yet covered.
    pub next: Option<GrowthTicket>,
}

/// A contiguous window `[start, end)` over a list of `len` items that grows by
/// whole pages as a trailing sentinel comes into view.
///
/// - The window starts at `min(page_size, len)` and only ever grows until it
///   covers the list.
/// - At most one growth step is in flight; further requests while one is
///   pending are coalesced into it.
/// - [`GrowingWindow::reset`] returns to the initial page for a new list and
///   invalidates outstanding tickets, so offsets computed against an old list
///   are never applied to a new one.
/// - Sentinel visibility is level-triggered: while the host reports it visible,
///   each applied step hands out the next ticket. A chained ticket that is
///   still pending when the sentinel leaves the viewport is dropped, so a
///   later sighting always gets a fresh one.
///
/// `0 <= start <= end <= len` holds after every operation.
#[derive(Clone, Debug)]
pub struct GrowingWindow {
    start: usize,
    end: usize,
    len: usize,
    page_size: usize,
    /// Serial of the live ticket.
    pending: Option<u64>,
    /// The live ticket was chained by [`GrowingWindow::apply`].
    chained: bool,
    serial: u64,
    sentinel_in_view: bool,
    generation: u64,
}

impl GrowingWindow {
    /// Creates a window over `len` items.
    #[must_use]
    pub fn new(len: usize, page_size: usize) -> Self {
        let page_size = page_size.max(1);
        Self {
            start: 0,
            end: page_size.min(len),
            len,
            page_size,
            pending: None,
            chained: false,
            serial: 0,
            sentinel_in_view: false,
            generation: 0,
        }
    }

    /// Creates a window using `config.page_size`.
    #[must_use]
    pub fn with_config(len: usize, config: &WindowConfig) -> Self {
        Self::new(len, config.page_size)
    }

    /// The materialized index range.
    #[must_use]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// First materialized index.
    #[must_use]
    pub fn start(&self) -> usize {
        self.start
    }

    /// One past the last materialized index.
    #[must_use]
    pub fn end(&self) -> usize {
        self.end
    }

    /// Length of the underlying list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the underlying list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Items per growth step.
    #[must_use]
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Incremented on every reset.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Returns `true` while a ticket is outstanding.
    #[must_use]
    pub fn is_growing(&self) -> bool {
        self.pending.is_some()
    }

    /// Returns `true` once the window covers the whole list.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.end == self.len
    }

    /// Whether the load-more sentinel should be rendered after the window.
    #[must_use]
    pub fn shows_sentinel(&self) -> bool {
        self.end < self.len
    }

    /// Last sentinel visibility reported through [`GrowingWindow::observe`].
    #[must_use]
    pub fn sentinel_in_view(&self) -> bool {
        self.sentinel_in_view
    }

    /// Starts over for a list of `len` items.
    ///
    /// Runs synchronously with the list change: any later growth check sees
    /// the new list. Outstanding tickets become stale, and sentinel visibility
    /// is forgotten until the host observes the new sentinel.
    pub fn reset(&mut self, len: usize) {
        self.start = 0;
        self.len = len;
        self.end = self.page_size.min(len);
        self.pending = None;
        self.chained = false;
        self.sentinel_in_view = false;
        self.generation += 1;
        self.debug_check();
    }

    /// Requests one growth step.
    ///
    /// Returns `None` if the window already covers the list or a step is
    /// already in flight.
    pub fn request_growth(&mut self) -> Option<GrowthTicket> {
        if self.pending.is_some() || !self.shows_sentinel() {
            return None;
        }
        self.serial += 1;
        self.pending = Some(self.serial);
        self.chained = false;
        Some(GrowthTicket {
            generation: self.generation,
            serial: self.serial,
        })
    }

    /// Records sentinel visibility; when visible, requests growth.
    ///
    /// Hiding the sentinel drops a pending chained ticket.
    pub fn observe(&mut self, visible: bool) -> Option<GrowthTicket> {
        self.sentinel_in_view = visible;
        if visible {
            return self.request_growth();
        }
        if self.chained {
            self.pending = None;
            self.chained = false;
        }
        None
    }

    /// Applies a growth step: `end` advances by one page, clamped to `len`.
    ///
    /// Returns `None` for a stale ticket: one issued before the last reset,
    /// already applied, or superseded.
    #[must_use = "a chained `next` ticket keeps the window busy until applied"]
    pub fn apply(&mut self, ticket: GrowthTicket) -> Option<Growth> {
        if ticket.generation != self.generation || self.pending != Some(ticket.serial) {
            return None;
        }
        self.pending = None;
        self.chained = false;
        let old_end = self.end;
        self.end = self.end.saturating_add(self.page_size).min(self.len);
        self.debug_check();
        let next = if self.sentinel_in_view {
            let next = self.request_growth();
            self.chained = next.is_some();
            next
        } else {
            None
        };
        Some(Growth {
            added: old_end..self.end,
            next,
        })
    }

    /// Abandons an in-flight step without applying it.
    pub fn cancel_growth(&mut self) {
        self.pending = None;
        self.chained = false;
    }

    fn debug_check(&self) {
        debug_assert!(
            self.start <= self.end && self.end <= self.len,
            "window bounds violated: {}..{} over {}",
            self.start,
            self.end,
            self.len
        );
    }
}
