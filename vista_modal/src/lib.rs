// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vista Modal: a shared-element image lightbox.
//!
//! [`ImageModal`] runs `Opening → Open → Closing → Closed`:
//!
//! - Opening places the image exactly on the clicked card's rectangle, then
//!   grows it into a centered frame while the scrim fades in; the caption and
//!   close control follow with a short stagger.
//! - Closing can start from `Opening` or `Open`, via the scrim, the close
//!   control, or a cancel affordance. The caption and close control fade out
//!   together, the image returns to the card (re-measured at close time), and
//!   the scrim fades last.
//! - If the card cannot be re-measured or is off screen, the image shrinks
//!   toward the last known card rectangle while fading out.
//! - Page scroll stays suppressed through a [`ScrollLockGuard`] from open until
//!   the modal is closed, torn down, or dropped.
//!
//! Transitions are driven through [`vista_motion::Animator`]. The host routes
//! every finished handle to [`ImageModal::on_complete`].
//!
//! ## Minimal example
//!
//! ```rust
//! use core::time::Duration;
//! use kurbo::Rect;
//! use vista_modal::{CloseTrigger, ImageModal, ModalConfig, ModalEvent, ModalPart, ScrollLock};
//! use vista_motion::Motion;
//!
//! let viewport = Rect::new(0.0, 0.0, 1280.0, 800.0);
//! let card = Rect::new(24.0, 200.0, 424.0, 500.0);
//! let lock = ScrollLock::new();
//! let mut motion = Motion::<ModalPart>::new();
//!
//! let config = ModalConfig::default();
//! let mut modal = ImageModal::open(7, Some(card), viewport, config, &lock, &mut motion);
//! assert!(lock.is_locked());
//!
//! // Closed before the opening transition finished.
//! modal.request_close(CloseTrigger::Cancel, Some(card), viewport, &mut motion);
//!
//! let mut events = Vec::new();
//! for handle in motion.advance(Duration::from_secs(2)) {
//!     events.extend(modal.on_complete(handle));
//! }
//! assert_eq!(events, [ModalEvent::Closed]);
//! assert!(!lock.is_locked());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod modal;
mod scroll;

pub use config::ModalConfig;
pub use modal::{CloseTarget, CloseTrigger, ImageModal, ModalEvent, ModalPart, ModalPhase};
pub use scroll::{ScrollLock, ScrollLockGuard};
