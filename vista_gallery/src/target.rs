// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Animation targets for every part of the site.

use vista_modal::ModalPart;

use crate::ImageId;

/// Sections of the gallery page revealed by its entrance timeline.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PagePart {
    /// The heading.
    Title,
    /// The filter bar.
    Filters,
    /// The grid container.
    Grid,
}

/// Elements of the landing screen.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum LandingPart {
    /// The camera badge.
    Logo,
    /// The headline.
    Title,
    /// The tagline under the headline.
    Subtitle,
    /// The "Enter Gallery" button.
    Button,
}

/// Everything the site animates, so one [`Animator`](vista_motion::Animator)
/// can drive all components.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Target {
    /// A grid card's container: entrance offset and pointer scale.
    Card(ImageId),
    /// A grid card's location caption.
    Caption(ImageId),
    /// The filter button at this index in the filter bar.
    FilterButton(usize),
    /// A gallery page section.
    Page(PagePart),
    /// A landing screen element.
    Landing(LandingPart),
    /// A modal part.
    Modal(ModalPart),
    /// The full-screen page transition overlay.
    Overlay,
}

impl From<ModalPart> for Target {
    fn from(part: ModalPart) -> Self {
        Self::Modal(part)
    }
}

impl From<PagePart> for Target {
    fn from(part: PagePart) -> Self {
        Self::Page(part)
    }
}

impl From<LandingPart> for Target {
    fn from(part: LandingPart) -> Self {
        Self::Landing(part)
    }
}
