// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Observability hooks.
//!
//! The gallery reports its state transitions to a [`GalleryTrace`] sink. Every
//! method has an empty default, and `()` ignores everything, so components can
//! be driven without any tracing at all. With the `tracing` feature,
//! [`TracingTrace`] forwards events to the `tracing` ecosystem.

use core::ops::Range;

use kurbo::Rect;
use vista_modal::{CloseTrigger, ModalPhase};

use crate::{CategoryFilter, ImageId, Route};

/// A callback sink for gallery state transitions.
pub trait GalleryTrace {
    /// The category selection changed and the filtered list now has `len` items.
    fn category_changed(&mut self, filter: CategoryFilter, len: usize) {
        let _ = (filter, len);
    }

    /// The window was reset for a list of `len` items.
    fn window_reset(&mut self, len: usize, range: Range<usize>) {
        let _ = (len, range);
    }

    /// A growth step materialized `added` out of `len` items.
    fn window_grew(&mut self, added: Range<usize>, len: usize) {
        let _ = (added, len);
    }

    /// Entrance animations were scheduled for `cards` newly rendered cards.
    fn entrance_scheduled(&mut self, cards: usize) {
        let _ = cards;
    }

    /// The modal for `image` entered `phase`.
    fn modal_phase(&mut self, image: ImageId, phase: ModalPhase) {
        let _ = (image, phase);
    }

    /// The modal for `image` started closing because of `trigger`, toward
    /// `target`. `fallback` is `true` when the card could not be used.
    fn modal_closing(
        &mut self,
        image: ImageId,
        trigger: CloseTrigger,
        target: Rect,
        fallback: bool,
    ) {
        let _ = (image, trigger, target, fallback);
    }

    /// Navigation to `route` was requested.
    fn navigated(&mut self, route: Route) {
        let _ = route;
    }
}

impl GalleryTrace for () {}

impl<T: GalleryTrace + ?Sized> GalleryTrace for &mut T {
    fn category_changed(&mut self, filter: CategoryFilter, len: usize) {
        (**self).category_changed(filter, len);
    }

    fn window_reset(&mut self, len: usize, range: Range<usize>) {
        (**self).window_reset(len, range);
    }

    fn window_grew(&mut self, added: Range<usize>, len: usize) {
        (**self).window_grew(added, len);
    }

    fn entrance_scheduled(&mut self, cards: usize) {
        (**self).entrance_scheduled(cards);
    }

    fn modal_phase(&mut self, image: ImageId, phase: ModalPhase) {
        (**self).modal_phase(image, phase);
    }

    fn modal_closing(
        &mut self,
        image: ImageId,
        trigger: CloseTrigger,
        target: Rect,
        fallback: bool,
    ) {
        (**self).modal_closing(image, trigger, target, fallback);
    }

    fn navigated(&mut self, route: Route) {
        (**self).navigated(route);
    }
}

/// Forwards every event to `tracing` at debug level, with structured fields.
#[cfg(feature = "tracing")]
#[derive(Copy, Clone, Debug, Default)]
pub struct TracingTrace;

#[cfg(feature = "tracing")]
impl GalleryTrace for TracingTrace {
    fn category_changed(&mut self, filter: CategoryFilter, len: usize) {
        tracing::debug!(filter = filter.label(), len, "category changed");
    }

    fn window_reset(&mut self, len: usize, range: Range<usize>) {
        tracing::debug!(len, start = range.start, end = range.end, "window reset");
    }

    fn window_grew(&mut self, added: Range<usize>, len: usize) {
        tracing::debug!(from = added.start, to = added.end, len, "window grew");
    }

    fn entrance_scheduled(&mut self, cards: usize) {
        tracing::trace!(cards, "card entrance scheduled");
    }

    fn modal_phase(&mut self, image: ImageId, phase: ModalPhase) {
        tracing::debug!(image = image.0, ?phase, "modal phase");
    }

    fn modal_closing(
        &mut self,
        image: ImageId,
        trigger: CloseTrigger,
        target: Rect,
        fallback: bool,
    ) {
        if fallback {
            tracing::info!(
                image = image.0,
                ?trigger,
                ?target,
                "modal closing toward fallback target"
            );
        } else {
            tracing::debug!(image = image.0, ?trigger, ?target, "modal closing");
        }
    }

    fn navigated(&mut self, route: Route) {
        tracing::info!(path = route.path(), "navigating");
    }
}

/// Test helper that records events as strings.
#[cfg(test)]
pub(crate) mod record {
    use alloc::format;
    use alloc::string::String;
    use alloc::vec::Vec;

    use super::*;

    #[derive(Debug, Default)]
    pub(crate) struct Recorder(pub(crate) Vec<String>);

    impl GalleryTrace for Recorder {
        fn category_changed(&mut self, filter: CategoryFilter, len: usize) {
            self.0.push(format!("category {filter} {len}"));
        }

        fn window_reset(&mut self, len: usize, range: Range<usize>) {
            self.0.push(format!("reset {len} {range:?}"));
        }

        fn window_grew(&mut self, added: Range<usize>, len: usize) {
            self.0.push(format!("grew {added:?} of {len}"));
        }

        fn entrance_scheduled(&mut self, cards: usize) {
            self.0.push(format!("entrance {cards}"));
        }

        fn modal_phase(&mut self, image: ImageId, phase: ModalPhase) {
            self.0.push(format!("modal {image} {phase:?}"));
        }

        fn navigated(&mut self, route: Route) {
            self.0.push(format!("navigate {route}"));
        }
    }
}
