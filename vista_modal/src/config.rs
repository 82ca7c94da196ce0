// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Modal layout and transition timings.

use core::time::Duration;

use kurbo::{Rect, Size};
use vista_motion::{Easing, Position, Props, Timeline, Tween};

use crate::ModalPart;

const fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

/// Layout and timings of the modal transitions.
///
/// The defaults open over 0.9s: scrim and image start together, the caption
/// follows at 0.3s and the close control pops in at 0.4s. Closing takes 0.7s
/// and always ends with the scrim.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ModalConfig {
    /// Enlarged image width as a fraction of the viewport width.
    pub width_fraction: f64,
    /// Upper bound on the enlarged image width, in logical pixels.
    pub max_width: f64,
    /// Enlarged image height as a fraction of the viewport height.
    pub height_fraction: f64,
    /// Vertical offset the caption slides in from and out to.
    pub content_offset: f64,
    /// Scale of the close control while hidden.
    pub close_hidden_scale: f64,
    /// Overshoot of the close control's pop-in.
    pub close_overshoot: f64,

    /// Scrim fade-in.
    pub scrim_in: Duration,
    /// Image growth from the card to the centered frame.
    pub image_in: Duration,
    /// Caption fade/slide-in.
    pub content_in: Duration,
    /// Delay before the caption starts.
    pub content_in_delay: Duration,
    /// Close control pop-in.
    pub close_in: Duration,
    /// Delay before the close control starts.
    pub close_in_delay: Duration,

    /// Caption and close control fade-out, run in parallel.
    pub fade_out: Duration,
    /// Image return to the close target.
    pub image_out: Duration,
    /// How much the image return overlaps the end of the fade-out.
    pub image_out_overlap: Duration,
    /// Scrim fade-out.
    pub scrim_out: Duration,
    /// How much the scrim fade-out overlaps the end of the image return.
    pub scrim_out_overlap: Duration,
}

impl Default for ModalConfig {
    fn default() -> Self {
        Self {
            width_fraction: 0.8,
            max_width: 1200.0,
            height_fraction: 0.8,
            content_offset: 20.0,
            close_hidden_scale: 0.8,
            close_overshoot: 1.7,

            scrim_in: ms(500),
            image_in: ms(700),
            content_in: ms(500),
            content_in_delay: ms(300),
            close_in: ms(500),
            close_in_delay: ms(400),

            fade_out: ms(300),
            image_out: ms(500),
            image_out_overlap: ms(100),
            scrim_out: ms(300),
            scrim_out_overlap: ms(300),
        }
    }
}

impl ModalConfig {
    /// Returns a copy with a different enlarged-image width cap.
    #[must_use]
    pub fn with_max_width(mut self, max_width: f64) -> Self {
        self.max_width = max_width.max(0.0);
        self
    }

    /// Returns a copy with every duration and delay set to zero.
    ///
    /// Useful for hosts honoring a reduced-motion preference: the state
    /// machine still passes through every phase, just instantly.
    #[must_use]
    pub fn instant(self) -> Self {
        Self {
            scrim_in: Duration::ZERO,
            image_in: Duration::ZERO,
            content_in: Duration::ZERO,
            content_in_delay: Duration::ZERO,
            close_in: Duration::ZERO,
            close_in_delay: Duration::ZERO,
            fade_out: Duration::ZERO,
            image_out: Duration::ZERO,
            image_out_overlap: Duration::ZERO,
            scrim_out: Duration::ZERO,
            scrim_out_overlap: Duration::ZERO,
            ..self
        }
    }

    /// The centered frame the image grows into.
    #[must_use]
    pub fn target_frame(&self, viewport: Rect) -> Rect {
        let viewport = viewport.abs();
        let width = (viewport.width() * self.width_fraction).min(self.max_width);
        let height = viewport.height() * self.height_fraction;
        Rect::from_center_size(viewport.center(), Size::new(width, height))
    }

    /// Hidden state of the caption.
    #[must_use]
    pub fn content_hidden(&self) -> Props {
        Props::hidden_below(self.content_offset)
    }

    /// Hidden state of the close control.
    #[must_use]
    pub fn close_hidden(&self) -> Props {
        Props::NONE
            .with_opacity(0.0)
            .with_scale(self.close_hidden_scale)
    }

    /// The opening timeline toward `target`. All parts start together; the
    /// caption and close control wait out their delays.
    pub fn open_timeline<T: From<ModalPart>>(&self, target: Rect) -> Timeline<T> {
        let start = Position::At(Duration::ZERO);
        let mut tl = Timeline::new();
        tl.add(
            Tween::to(ModalPart::Scrim.into(), Props::NONE.with_opacity(1.0))
                .duration(self.scrim_in)
                .easing(Easing::Power2InOut),
            start,
        )
        .add(
            Tween::to(
                ModalPart::Image.into(),
                Props::NONE.with_frame(target).with_opacity(1.0),
            )
            .duration(self.image_in)
            .easing(Easing::Power3Out),
            start,
        )
        .add(
            Tween::to(ModalPart::Content.into(), Props::shown())
                .duration(self.content_in)
                .delay(self.content_in_delay)
                .easing(Easing::Power3Out),
            start,
        )
        .add(
            Tween::to(
                ModalPart::Close.into(),
                Props::NONE.with_opacity(1.0).with_scale(1.0),
            )
            .duration(self.close_in)
            .delay(self.close_in_delay)
            .easing(Easing::BackOut(self.close_overshoot)),
            start,
        );
        tl
    }

    /// The closing timeline back to `target`.
    ///
    /// Caption and close control fade out together, then the image returns,
    /// then the scrim fades. The scrim tween is added last so it finishes the
    /// timeline even when it ends together with the image.
    pub fn close_timeline<T: From<ModalPart>>(
        &self,
        target: Rect,
        fade_image: bool,
    ) -> Timeline<T> {
        let mut image = Props::NONE.with_frame(target);
        if fade_image {
            image = image.with_opacity(0.0);
        }
        let mut tl = Timeline::new();
        tl.add(
            Tween::to(ModalPart::Content.into(), self.content_hidden())
                .duration(self.fade_out)
                .easing(Easing::Power3In),
            Position::After,
        )
        .add(
            Tween::to(ModalPart::Close.into(), self.close_hidden())
                .duration(self.fade_out)
                .easing(Easing::Power3In),
            Position::WithPrevious,
        )
        .add(
            Tween::to(ModalPart::Image.into(), image)
                .duration(self.image_out)
                .easing(Easing::Power3InOut),
            Position::Overlap(self.image_out_overlap),
        )
        .add(
            Tween::to(ModalPart::Scrim.into(), Props::NONE.with_opacity(0.0))
                .duration(self.scrim_out)
                .easing(Easing::Power2InOut),
            Position::Overlap(self.scrim_out_overlap),
        );
        tl
    }
}
