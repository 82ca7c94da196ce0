// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vista Motion: easing, tweens, timelines, and a cancellable animator interface.
//!
//! UI state machines in Vista never drive pixels directly. They describe what
//! should move through small value types and hand those to an [`Animator`]:
//!
//! - [`Easing`]: progress curves (power in/out/in-out families and a back-out
//!   overshoot).
//! - [`Props`]: a sparse bag of animatable properties (opacity, vertical
//!   offset, scale, and an absolute [`kurbo::Rect`] frame).
//! - [`Tween`]: one target moving to new property values over a duration,
//!   optionally after a delay, optionally from explicit start values.
//! - [`Timeline`]: tweens placed in sequence, in parallel, overlapping, or
//!   staggered, resolved to absolute start offsets.
//! - [`Animator`]: the narrow capability a host provides. Every started tween
//!   returns an [`AnimationHandle`]; callers keep the handle, cancel it on
//!   teardown, and match it when the host reports completion.
//! - [`Motion`]: a deterministic, clock-fed [`Animator`] implementation that
//!   hosts can render from directly and that tests use to step time.
//!
//! ## Minimal example
//!
//! ```rust
//! use core::time::Duration;
//! use vista_motion::{Animator, Easing, Motion, Position, Props, Timeline, Tween, play};
//!
//! let mut motion = Motion::new();
//!
//! let mut entrance = Timeline::new().with_default_easing(Easing::Power3Out);
//! entrance.stagger(
//!     ["a", "b", "c"]
//!         .into_iter()
//!         .map(|t| Tween::from_to(t, Props::hidden_below(20.0), Props::shown()).millis(700)),
//!     Duration::from_millis(100),
//!     Position::After,
//! );
//! let playback = play(&mut motion, entrance);
//!
//! // Nothing has moved yet; explicit start values apply immediately.
//! assert_eq!(motion.current(&"c").opacity, Some(0.0));
//!
//! let finished = motion.advance(Duration::from_millis(900));
//! assert_eq!(finished.len(), 3);
//! assert!(playback.is_finished_by(*finished.last().unwrap()));
//! ```
//!
//! All times are [`core::time::Duration`]s from a host-chosen epoch.
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod animator;
mod easing;
mod motion;
mod props;
mod timeline;
mod tween;

pub use animator::{AnimationHandle, Animator, Playback, play};
pub use easing::Easing;
pub use motion::Motion;
pub use props::{Props, lerp, lerp_rect};
pub use timeline::{Position, Timeline};
pub use tween::Tween;
