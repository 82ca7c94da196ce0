// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vista Timing: host-agnostic timer queue primitives for UI runtimes.
//!
//! UI code frequently wants to say "run this after 50 ms" or "run this on the
//! next frame" without owning a real clock. [`TimerQueue`] stores such requests
//! keyed by a deadline expressed as a [`Duration`] since an arbitrary,
//! host-chosen epoch. The host feeds the current time into
//! [`TimerQueue::drain_due`] from its event loop and dispatches the payloads it
//! gets back.
//!
//! - Deadlines are ordered; ties fire in scheduling order.
//! - Every scheduled entry gets a [`TimerId`] which can be cancelled until the
//!   entry fires. Cancelling an unknown or already-fired id is a no-op.
//! - "Next frame" work is just a timer with a deadline of `now`.
//!
//! ## Minimal example
//!
//! ```rust
//! use core::time::Duration;
//! use vista_timing::TimerQueue;
//!
//! let mut timers = TimerQueue::new();
//! let now = Duration::ZERO;
//!
//! let hover = timers.schedule_after(now, Duration::from_millis(50), "hover");
//! let frame = timers.schedule(now, "frame");
//!
//! // A newer hover request supersedes the old one.
//! assert_eq!(timers.cancel(hover), Some("hover"));
//!
//! let due: Vec<_> = timers.drain_due(Duration::from_millis(16)).collect();
//! assert_eq!(due.len(), 1);
//! assert_eq!(due[0].id, frame);
//! assert!(timers.is_empty());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod queue;

pub use queue::{Due, DrainDue, TimerId, TimerQueue};
