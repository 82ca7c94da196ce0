// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vista Event State: small state machines for UI interactions.
//!
//! Each module handles one interaction pattern that needs state across events:
//!
//! - [`hover`]: debounced enter/leave with monotonic token invalidation, so a
//!   burst of pointer movement commits only its final state.
//! - [`choice`]: one selected value out of a set that reports a change only
//!   when the selection actually changes.
//!
//! Neither module owns a clock or a timer. Hover hands back deadlines for the
//! host to arm (for example in a `vista_timing::TimerQueue`) and accepts the
//! fired token later; a token that has been superseded is simply ignored.
//!
//! This crate is `no_std` compatible.

#![no_std]

pub mod choice;
pub mod hover;
