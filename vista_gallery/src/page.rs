// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The gallery page: heading, filter bar, and grid.

use alloc::vec::Vec;
use core::time::Duration;

use kurbo::Rect;
use vista_modal::{CloseTrigger, ScrollLock};
use vista_motion::{
    AnimationHandle, Animator, Easing, Playback, Position, Props, Timeline, Tween, play,
};
use vista_timing::{TimerId, TimerQueue};
use vista_window::{Growth, GrowthTicket};

use crate::{
    CardClick, Catalog, CategoryFilter, GalleryFilters, GalleryGrid, GalleryImage, GalleryTrace,
    GridConfig, GridEvent, OverlayMode, PagePart, Route, Router, Target, TransitionOverlay,
};

/// The page heading.
pub const GALLERY_TITLE: &str = "Discover Beautiful Destinations";

/// Gallery page tuning.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PageConfig {
    /// Grid, card, and modal tuning.
    pub grid: GridConfig,
    /// Delay before the entrance timeline starts.
    pub entrance_delay: Duration,
    /// Offset the sections rise from.
    pub entrance_offset: f64,
    /// Duration of the heading's entrance.
    pub title_duration: Duration,
    /// Duration of the filter bar's and grid's entrances.
    pub section_duration: Duration,
    /// How much each section overlaps the previous one.
    pub section_overlap: Duration,
    /// How long the incoming overlay stays mounted.
    pub overlay_hold: Duration,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            grid: GridConfig::default(),
            entrance_delay: Duration::from_millis(200),
            entrance_offset: 20.0,
            title_duration: Duration::from_millis(400),
            section_duration: Duration::from_millis(300),
            section_overlap: Duration::from_millis(200),
            overlay_hold: Duration::from_millis(100),
        }
    }
}

impl PageConfig {
    /// The heading, filter bar, and grid rise in one after another.
    #[must_use]
    pub fn entrance_timeline(&self) -> Timeline<Target> {
        let hidden = Props::hidden_below(self.entrance_offset);
        let section = |part: PagePart, duration| {
            Tween::from_to(Target::Page(part), hidden, Props::shown()).duration(duration)
        };
        let mut tl = Timeline::new()
            .with_delay(self.entrance_delay)
            .with_default_easing(Easing::Power2Out);
        tl.add(section(PagePart::Title, self.title_duration), Position::After)
            .add(
                section(PagePart::Filters, self.section_duration),
                Position::Overlap(self.section_overlap),
            )
            .add(
                section(PagePart::Grid, self.section_duration),
                Position::Overlap(self.section_overlap),
            );
        tl
    }
}

/// Reported by [`GalleryPage::tick`] and [`GalleryPage::on_complete`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PageEvent {
    /// Every section has finished its entrance.
    EntranceFinished,
    /// The incoming overlay was unmounted.
    OverlayDismissed,
    /// Something happened in the grid.
    Grid(GridEvent),
}

/// The gallery route.
///
/// Owns the catalog, the filter selection, and the grid. Selecting a new
/// category swaps the grid's list and resets its window in one step.
#[derive(Debug)]
pub struct GalleryPage<Tr = ()> {
    config: PageConfig,
    catalog: Catalog,
    filters: GalleryFilters,
    grid: GalleryGrid,
    entrance: Playback,
    filter_entrance: Playback,
    overlay: Option<TransitionOverlay>,
    dismiss: Option<TimerId>,
    timers: TimerQueue<()>,
    trace: Tr,
}

impl GalleryPage<()> {
    /// Mounts the page at `now` without tracing.
    pub fn mount<A>(
        now: Duration,
        catalog: Catalog,
        config: PageConfig,
        scroll: ScrollLock,
        animator: &mut A,
    ) -> Self
    where
        A: Animator<Target> + ?Sized,
    {
        Self::mount_with_trace(now, catalog, config, scroll, animator, ())
    }
}

impl<Tr: GalleryTrace> GalleryPage<Tr> {
    /// Mounts the page at `now`, reporting to `trace`.
    ///
    /// Sections start hidden and rise in. The transition overlay left by the
    /// previous page fades out and is unmounted after
    /// [`PageConfig::overlay_hold`].
    pub fn mount_with_trace<A>(
        now: Duration,
        catalog: Catalog,
        config: PageConfig,
        scroll: ScrollLock,
        animator: &mut A,
        trace: Tr,
    ) -> Self
    where
        A: Animator<Target> + ?Sized,
    {
        for part in [PagePart::Title, PagePart::Filters, PagePart::Grid] {
            animator.set(part.into(), Props::hidden_below(config.entrance_offset));
        }
        let filters = GalleryFilters::default();
        let entrance = play(animator, config.entrance_timeline());
        let filter_entrance = play(animator, filters.entrance_timeline());
        let overlay = TransitionOverlay::start(OverlayMode::Reveal, animator);
        let mut timers = TimerQueue::new();
        let dismiss = timers.schedule_after(now, config.overlay_hold, ());
        let mut page = Self {
            config,
            catalog,
            filters,
            grid: GalleryGrid::new(config.grid, scroll),
            entrance,
            filter_entrance,
            overlay: Some(overlay),
            dismiss: Some(dismiss),
            timers,
            trace,
        };
        page.refilter(animator);
        page
    }

    /// The page's tuning.
    #[must_use]
    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    /// The catalog in use.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The filter bar.
    #[must_use]
    pub fn filters(&self) -> &GalleryFilters {
        &self.filters
    }

    /// The grid.
    #[must_use]
    pub fn grid(&self) -> &GalleryGrid {
        &self.grid
    }

    /// The grid, for pointer input.
    pub fn grid_mut(&mut self) -> &mut GalleryGrid {
        &mut self.grid
    }

    /// The trace sink.
    pub fn trace(&self) -> &Tr {
        &self.trace
    }

    /// Whether the incoming overlay is still mounted.
    #[must_use]
    pub fn shows_overlay(&self) -> bool {
        self.overlay.is_some()
    }

    /// The selected category.
    #[must_use]
    pub fn selected(&self) -> CategoryFilter {
        self.filters.selected()
    }

    /// Images passing the selected filter, in catalog order.
    pub fn filtered(&self) -> impl Iterator<Item = &GalleryImage> + '_ {
        self.catalog.filtered(self.filters.selected())
    }

    /// Images the grid currently renders.
    pub fn visible_images(&self) -> impl Iterator<Item = &GalleryImage> + '_ {
        self.grid
            .visible()
            .iter()
            .filter_map(|id| self.catalog.get(*id))
    }

    /// Replaces the catalog and re-applies the selected filter.
    pub fn set_catalog<A>(&mut self, catalog: Catalog, animator: &mut A)
    where
        A: Animator<Target> + ?Sized,
    {
        self.catalog = catalog;
        self.refilter(animator);
    }

    /// A press on a filter button. Returns `true` if the selection changed.
    pub fn select_category<A>(&mut self, filter: CategoryFilter, animator: &mut A) -> bool
    where
        A: Animator<Target> + ?Sized,
    {
        if self.filters.select(filter).is_none() {
            return false;
        }
        let len = self.refilter(animator);
        self.trace.category_changed(filter, len);
        true
    }

    /// See [`GalleryGrid::on_sentinel_visibility`].
    pub fn on_sentinel_visibility(&mut self, visible: bool) -> Option<GrowthTicket> {
        self.grid.on_sentinel_visibility(visible)
    }

    /// See [`GalleryGrid::on_frame`].
    #[must_use = "a chained `next` ticket keeps the window busy until applied"]
    pub fn on_frame<A>(&mut self, ticket: GrowthTicket, animator: &mut A) -> Option<Growth>
    where
        A: Animator<Target> + ?Sized,
    {
        self.grid.on_frame(ticket, animator, &mut self.trace)
    }

    /// Opens the modal for a clicked card.
    pub fn click<A>(&mut self, click: CardClick, viewport: Rect, animator: &mut A) -> bool
    where
        A: Animator<Target> + ?Sized,
    {
        self.grid.open(click, viewport, animator, &mut self.trace)
    }

    /// See [`GalleryGrid::request_close`].
    pub fn request_close<A>(
        &mut self,
        trigger: CloseTrigger,
        remeasured: Option<Rect>,
        viewport: Rect,
        animator: &mut A,
    ) -> bool
    where
        A: Animator<Target> + ?Sized,
    {
        self.grid
            .request_close(trigger, remeasured, viewport, animator, &mut self.trace)
    }

    /// Earliest pending timer on the page or in the grid.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        match (self.timers.next_deadline(), self.grid.next_deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Fires due timers.
    pub fn tick<A>(&mut self, now: Duration, animator: &mut A) -> Vec<PageEvent>
    where
        A: Animator<Target> + ?Sized,
    {
        let mut events = Vec::new();
        for due in self.timers.drain_due(now) {
            if self.dismiss == Some(due.id) {
                self.dismiss = None;
                if let Some(mut overlay) = self.overlay.take() {
                    overlay.teardown(animator);
                    events.push(PageEvent::OverlayDismissed);
                }
            }
        }
        self.grid.tick(now, animator);
        events
    }

    /// Routes a finished animation handle.
    pub fn on_complete(&mut self, handle: AnimationHandle) -> Option<PageEvent> {
        if self.entrance.contains(handle) {
            return self
                .entrance
                .is_finished_by(handle)
                .then_some(PageEvent::EntranceFinished);
        }
        if self.filter_entrance.contains(handle) {
            return None;
        }
        if let Some(overlay) = self.overlay.as_mut()
            && overlay.on_complete(handle)
        {
            self.overlay = None;
            if let Some(timer) = self.dismiss.take() {
                self.timers.cancel(timer);
            }
            return Some(PageEvent::OverlayDismissed);
        }
        self.grid
            .on_complete(handle, &mut self.trace)
            .map(PageEvent::Grid)
    }

    /// Leaves the page through the back or home control.
    ///
    /// Tears everything down first, so an open modal releases the scroll lock
    /// before the router runs.
    pub fn navigate<A, R>(&mut self, route: Route, router: &mut R, animator: &mut A)
    where
        A: Animator<Target> + ?Sized,
        R: Router + ?Sized,
    {
        self.teardown(animator);
        self.trace.navigated(route);
        router.push(route);
    }

    /// Cancels every tween and timer the page or grid holds.
    pub fn teardown<A>(&mut self, animator: &mut A)
    where
        A: Animator<Target> + ?Sized,
    {
        self.entrance.cancel_all(animator);
        self.filter_entrance.cancel_all(animator);
        if let Some(mut overlay) = self.overlay.take() {
            overlay.teardown(animator);
        }
        self.dismiss = None;
        self.timers.clear();
        self.grid.teardown(animator);
    }

    fn refilter<A>(&mut self, animator: &mut A) -> usize
    where
        A: Animator<Target> + ?Sized,
    {
        let ids = self.catalog.filtered_ids(self.filters.selected());
        let len = ids.len();
        self.grid.set_images(ids, animator, &mut self.trace);
        len
    }
}
