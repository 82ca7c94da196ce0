// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Responsive image requests.
//!
//! The gallery never decodes or resizes images. It tells the host's image
//! service how wide each image slot will be at every viewport breakpoint (the
//! `sizes` descriptor) and how eagerly to load it, and can pick the smallest
//! adequate candidate width itself for hosts without such a service.

use core::fmt;

use crate::GalleryImage;

/// Candidate widths offered by a typical image service, ascending.
pub const DEFAULT_CANDIDATE_WIDTHS: [u32; 8] = [640, 750, 828, 1080, 1200, 1920, 2048, 3840];

/// One breakpoint: below `max_width` (inclusive), the slot is `vw` percent of
/// the viewport width.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SizeRule {
    /// Upper viewport bound in logical pixels, or `None` for the fallback rule.
    pub max_width: Option<u32>,
    /// Slot width in percent of the viewport width.
    pub vw: u32,
}

/// An ordered list of [`SizeRule`]s; the first matching rule wins.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Sizes {
    rules: &'static [SizeRule],
}

impl Sizes {
    /// Grid cards: one column on phones, two on tablets, three on desktop.
    pub const CARD: Self = Self {
        rules: &[
            SizeRule {
                max_width: Some(768),
                vw: 100,
            },
            SizeRule {
                max_width: Some(1200),
                vw: 50,
            },
            SizeRule {
                max_width: None,
                vw: 33,
            },
        ],
    };

    /// The enlarged modal image.
    pub const MODAL: Self = Self {
        rules: &[
            SizeRule {
                max_width: Some(768),
                vw: 100,
            },
            SizeRule {
                max_width: None,
                vw: 80,
            },
        ],
    };

    /// Builds a descriptor from static rules.
    #[must_use]
    pub const fn new(rules: &'static [SizeRule]) -> Self {
        Self { rules }
    }

    /// The rules, in match order.
    #[must_use]
    pub fn rules(&self) -> &'static [SizeRule] {
        self.rules
    }

    /// Slot width in logical pixels at `viewport_width`.
    ///
    /// With no matching rule the slot is the full viewport.
    #[must_use]
    pub fn slot_width(&self, viewport_width: f64) -> f64 {
        let vw = self
            .rules
            .iter()
            .find(|r| r.max_width.is_none_or(|m| viewport_width <= f64::from(m)))
            .map_or(100, |r| r.vw);
        viewport_width.max(0.0) * f64::from(vw) / 100.0
    }
}

impl fmt::Display for Sizes {
    /// Formats as an HTML `sizes` attribute value.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, rule) in self.rules.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            match rule.max_width {
                Some(m) => write!(f, "(max-width: {m}px) {}vw", rule.vw)?,
                None => write!(f, "{}vw", rule.vw)?,
            }
        }
        Ok(())
    }
}

/// Picks the smallest candidate covering `slot_width * dpr` device pixels.
///
/// Falls back to the largest candidate when none is wide enough. `candidates`
/// need not be sorted. Returns `None` only for an empty list.
#[must_use]
pub fn pick_candidate(candidates: &[u32], slot_width: f64, dpr: f64) -> Option<u32> {
    let needed = slot_width.max(0.0) * if dpr > 0.0 { dpr } else { 1.0 };
    candidates
        .iter()
        .copied()
        .filter(|&c| f64::from(c) >= needed)
        .min()
        .or_else(|| candidates.iter().copied().max())
}

/// How soon the host should fetch an image.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Loading {
    /// When the image nears the viewport.
    Lazy,
    /// Immediately.
    Eager,
}

/// Everything the host's image service needs for one image slot.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ImageRequest<'a> {
    /// Source URI.
    pub src: &'a str,
    /// Alternative text.
    pub alt: &'a str,
    /// Intrinsic width.
    pub width: u32,
    /// Intrinsic height.
    pub height: u32,
    /// Slot widths per breakpoint.
    pub sizes: Sizes,
    /// Encoder quality hint, if any.
    pub quality: Option<u8>,
    /// Fetch timing.
    pub loading: Loading,
    /// Fetch ahead of other images.
    pub priority: bool,
}

impl<'a> ImageRequest<'a> {
    /// A grid card: lazy, quality 75.
    #[must_use]
    pub fn card(image: &'a GalleryImage) -> Self {
        Self {
            src: &image.src,
            alt: &image.alt,
            width: image.width,
            height: image.height,
            sizes: Sizes::CARD,
            quality: Some(75),
            loading: Loading::Lazy,
            priority: false,
        }
    }

    /// The modal image: eager and prioritized.
    #[must_use]
    pub fn modal(image: &'a GalleryImage) -> Self {
        Self {
            src: &image.src,
            alt: &image.alt,
            width: image.width,
            height: image.height,
            sizes: Sizes::MODAL,
            quality: None,
            loading: Loading::Eager,
            priority: true,
        }
    }

    /// The candidate width to fetch for this slot.
    #[must_use]
    pub fn resolve(&self, candidates: &[u32], viewport_width: f64, dpr: f64) -> Option<u32> {
        pick_candidate(candidates, self.sizes.slot_width(viewport_width), dpr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn attribute_strings() {
        assert_eq!(
            Sizes::CARD.to_string(),
            "(max-width: 768px) 100vw, (max-width: 1200px) 50vw, 33vw"
        );
        assert_eq!(Sizes::MODAL.to_string(), "(max-width: 768px) 100vw, 80vw");
    }

    #[test]
    fn slot_widths_follow_breakpoints() {
        assert_eq!(Sizes::CARD.slot_width(400.0), 400.0);
        assert_eq!(Sizes::CARD.slot_width(768.0), 768.0);
        assert_eq!(Sizes::CARD.slot_width(1000.0), 500.0);
        assert_eq!(Sizes::CARD.slot_width(1500.0), 495.0);
        assert_eq!(Sizes::MODAL.slot_width(1500.0), 1200.0);
        assert_eq!(Sizes::new(&[]).slot_width(300.0), 300.0);
    }

    #[test]
    fn candidate_choice() {
        let c = DEFAULT_CANDIDATE_WIDTHS;
        assert_eq!(pick_candidate(&c, 495.0, 1.0), Some(640));
        assert_eq!(pick_candidate(&c, 495.0, 2.0), Some(1080));
        assert_eq!(pick_candidate(&c, 5000.0, 1.0), Some(3840));
        assert_eq!(pick_candidate(&[], 100.0, 1.0), None);
        assert_eq!(pick_candidate(&[900, 300], 200.0, 0.0), Some(300));
    }

    #[test]
    fn card_and_modal_requests_differ() {
        let catalog = crate::Catalog::builtin();
        let image = &catalog.images()[0];
        let card = ImageRequest::card(image);
        let modal = ImageRequest::modal(image);
        assert_eq!((card.loading, card.priority, card.quality), (Loading::Lazy, false, Some(75)));
        assert_eq!((modal.loading, modal.priority), (Loading::Eager, true));
        assert_eq!(modal.resolve(&DEFAULT_CANDIDATE_WIDTHS, 1500.0, 1.0), Some(1200));
    }
}
