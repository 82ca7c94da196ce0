// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The category filter bar.

use core::time::Duration;

use smallvec::SmallVec;
use vista_event_state::choice::Choice;
use vista_motion::{Easing, Position, Props, Timeline, Tween};

use crate::{CategoryFilter, Target};

/// Visual style of a filter button.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ButtonVariant {
    /// Filled, for the selected filter.
    Default,
    /// Outlined, for the others.
    Outline,
}

/// One button per filter, exactly one selected.
///
/// Selecting the already-selected filter reports nothing; re-rendering never
/// reports anything.
#[derive(Clone, Debug)]
pub struct GalleryFilters {
    options: SmallVec<[CategoryFilter; 6]>,
    choice: Choice<CategoryFilter>,
}

impl Default for GalleryFilters {
    fn default() -> Self {
        Self::new(CategoryFilter::ALL)
    }
}

impl GalleryFilters {
    /// Offset the buttons rise from on entrance.
    pub const ENTRANCE_OFFSET: f64 = 20.0;
    /// Per-button entrance duration.
    pub const ENTRANCE_DURATION: Duration = Duration::from_millis(700);
    /// Gap between consecutive buttons' entrances.
    pub const ENTRANCE_STAGGER: Duration = Duration::from_millis(100);
    /// Delay before the first button moves.
    pub const ENTRANCE_DELAY: Duration = Duration::from_millis(500);

    /// Creates a bar over `options`, selecting the first (or `All` if empty).
    #[must_use]
    pub fn new(options: impl IntoIterator<Item = CategoryFilter>) -> Self {
        let options: SmallVec<[CategoryFilter; 6]> = options.into_iter().collect();
        let initial = options.first().copied().unwrap_or_default();
        Self {
            options,
            choice: Choice::new(initial),
        }
    }

    /// The buttons, in order.
    #[must_use]
    pub fn options(&self) -> &[CategoryFilter] {
        &self.options
    }

    /// The selected filter.
    #[must_use]
    pub fn selected(&self) -> CategoryFilter {
        *self.choice.current()
    }

    /// Style of the button for `filter`.
    #[must_use]
    pub fn variant(&self, filter: CategoryFilter) -> ButtonVariant {
        if self.choice.is_selected(&filter) {
            ButtonVariant::Default
        } else {
            ButtonVariant::Outline
        }
    }

    /// A press on the button for `filter`.
    ///
    /// Returns the new selection if it changed. Filters that have no button
    /// are ignored.
    pub fn select(&mut self, filter: CategoryFilter) -> Option<CategoryFilter> {
        if !self.options.contains(&filter) {
            return None;
        }
        self.choice.select(filter)
    }

    /// Buttons rise and fade in one after another.
    #[must_use]
    pub fn entrance_timeline(&self) -> Timeline<Target> {
        let mut tl = Timeline::new()
            .with_default_easing(Easing::Power3Out)
            .with_delay(Self::ENTRANCE_DELAY);
        tl.stagger(
            (0..self.options.len()).map(|i| {
                Tween::from_to(
                    Target::FilterButton(i),
                    Props::hidden_below(Self::ENTRANCE_OFFSET),
                    Props::shown(),
                )
                .duration(Self::ENTRANCE_DURATION)
            }),
            Self::ENTRANCE_STAGGER,
            Position::After,
        );
        tl
    }
}
