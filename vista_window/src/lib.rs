// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vista Window: incrementally growing windows over lists.
//!
//! A long list is materialized one page at a time. The host renders the items
//! in [`GrowingWindow::range`] followed by a sentinel marker while
//! [`GrowingWindow::shows_sentinel`] is true; when the sentinel scrolls into
//! view (see [`Sentinel`]) the window hands out a [`GrowthTicket`], and the
//! host applies it on the next frame.
//!
//! [`EntranceTracker`] records which items already played their entrance, so
//! newly materialized items animate exactly once.
//!
//! ## Minimal example
//!
//! ```rust
//! use vista_window::{GrowingWindow, WindowConfig};
//!
//! let mut window = GrowingWindow::with_config(30, &WindowConfig::default());
//! assert_eq!(window.range(), 0..12);
//!
//! // The sentinel came into view.
//! let ticket = window.observe(true).expect("more items to show");
//! // A second notification before the frame is coalesced.
//! assert!(window.observe(true).is_none());
//!
//! // Next frame.
//! let growth = window.apply(ticket).expect("ticket is current");
//! assert_eq!(growth.added, 12..24);
//! assert_eq!(window.range(), 0..24);
//!
//! // The user picked a filter that leaves two items.
//! window.reset(2);
//! assert_eq!(window.range(), 0..2);
//! assert!(!window.shows_sentinel());
//! ```
//!
//! This crate is `no_std` compatible and uses `alloc`.

#![no_std]

extern crate alloc;

mod entrance;
mod sentinel;
mod window;

pub use entrance::EntranceTracker;
pub use sentinel::Sentinel;
pub use window::{Growth, GrowingWindow, GrowthTicket, WindowConfig};
