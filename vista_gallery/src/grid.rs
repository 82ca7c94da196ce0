// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The windowed image grid and its modal.

use alloc::vec::Vec;
use core::time::Duration;

use hashbrown::{HashMap, HashSet};
use kurbo::Rect;
use vista_event_state::hover::{HoverRequest, HoverToken};
use vista_modal::{CloseTrigger, ImageModal, ModalConfig, ModalEvent, ModalPhase, ScrollLock};
use vista_motion::{AnimationHandle, Animator, Easing, Position, Props, Timeline, Tween, play};
use vista_timing::{TimerId, TimerQueue};
use vista_window::{EntranceTracker, Growth, GrowingWindow, GrowthTicket, Sentinel, WindowConfig};

use crate::{CardClick, CardConfig, GalleryTrace, ImageCard, ImageId, Target};

/// Grid tuning.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GridConfig {
    /// Paging and sentinel visibility.
    pub window: WindowConfig,
    /// Card interaction.
    pub card: CardConfig,
    /// Modal layout and timings.
    pub modal: ModalConfig,
    /// Offset new cards rise from.
    pub entrance_offset: f64,
    /// Per-card entrance duration.
    pub entrance_duration: Duration,
    /// Gap between consecutive cards' entrances.
    pub entrance_stagger: Duration,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            card: CardConfig::default(),
            modal: ModalConfig::default(),
            entrance_offset: 30.0,
            entrance_duration: Duration::from_millis(400),
            entrance_stagger: Duration::from_millis(30),
        }
    }
}

/// Reported by [`GalleryGrid::on_complete`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum GridEvent {
    /// The modal finished opening.
    ModalOpened(ImageId),
    /// The modal finished closing and was unmounted.
    ModalClosed(ImageId),
}

/// Renders a growing window of a filtered image list and owns the modal.
///
/// - [`GalleryGrid::set_images`] replaces the list and resets the window in
///   the same call, before any later growth check can run.
/// - Cards entering the window rise in once each; a card that stays rendered
///   across a reset or growth is never animated again.
/// - Cards leaving the window are torn down with their tweens and timers.
/// - At most one modal exists. It holds the page scroll lock until it closes.
#[derive(Debug)]
pub struct GalleryGrid {
    config: GridConfig,
    items: Vec<ImageId>,
    window: GrowingWindow,
    sentinel: Sentinel,
    entrance: EntranceTracker<ImageId>,
    entering: HashMap<AnimationHandle, ImageId>,
    cards: HashMap<ImageId, ImageCard>,
    hover_timers: TimerQueue<(ImageId, HoverToken)>,
    armed: HashMap<ImageId, TimerId>,
    modal: Option<ImageModal<ImageId>>,
    scroll: ScrollLock,
}

impl GalleryGrid {
    /// Creates an empty grid. Open modals hold `scroll`.
    #[must_use]
    pub fn new(config: GridConfig, scroll: ScrollLock) -> Self {
        Self {
            config,
            items: Vec::new(),
            window: GrowingWindow::with_config(0, &config.window),
            sentinel: Sentinel::from_config(&config.window),
            entrance: EntranceTracker::new(),
            entering: HashMap::new(),
            cards: HashMap::new(),
            hover_timers: TimerQueue::new(),
            armed: HashMap::new(),
            modal: None,
            scroll,
        }
    }

    /// The full filtered list.
    #[must_use]
    pub fn items(&self) -> &[ImageId] {
        &self.items
    }

    /// The window over [`GalleryGrid::items`].
    #[must_use]
    pub fn window(&self) -> &GrowingWindow {
        &self.window
    }

    /// The rendered items, in order.
    #[must_use]
    pub fn visible(&self) -> &[ImageId] {
        &self.items[self.window.range()]
    }

    /// Whether the load-more sentinel is rendered after the cards.
    #[must_use]
    pub fn shows_sentinel(&self) -> bool {
        self.window.shows_sentinel()
    }

    /// A rendered card.
    #[must_use]
    pub fn card(&self, id: ImageId) -> Option<&ImageCard> {
        self.cards.get(&id)
    }

    /// Returns `true` once `id` has had its entrance scheduled.
    #[must_use]
    pub fn has_entered(&self, id: ImageId) -> bool {
        self.entrance.is_claimed(&id)
    }

    /// The modal, while mounted.
    #[must_use]
    pub fn modal(&self) -> Option<&ImageModal<ImageId>> {
        self.modal.as_ref()
    }

    /// The image shown in the modal.
    #[must_use]
    pub fn selected(&self) -> Option<ImageId> {
        self.modal.as_ref().map(|m| *m.key())
    }

    /// The lock modals hold while mounted.
    #[must_use]
    pub fn scroll_lock(&self) -> &ScrollLock {
        &self.scroll
    }

    /// Earliest pending hover timer.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.hover_timers.next_deadline()
    }

    /// Replaces the list and resets the window to its first page.
    pub fn set_images<A, Tr>(&mut self, items: Vec<ImageId>, animator: &mut A, trace: &mut Tr)
    where
        A: Animator<Target> + ?Sized,
        Tr: GalleryTrace + ?Sized,
    {
        self.items = items;
        self.window.reset(self.items.len());
        trace.window_reset(self.items.len(), self.window.range());
        self.sync_rendered(animator, trace);
    }

    /// The host's visibility observer reported the sentinel.
    ///
    /// Returns a ticket to apply on the next frame with
    /// [`GalleryGrid::on_frame`].
    pub fn on_sentinel_visibility(&mut self, visible: bool) -> Option<GrowthTicket> {
        self.window.observe(visible)
    }

    /// Like [`GalleryGrid::on_sentinel_visibility`], computing visibility from
    /// the sentinel's rectangle and the viewport.
    pub fn observe_sentinel(&mut self, sentinel: Rect, viewport: Rect) -> Option<GrowthTicket> {
        let visible = self.sentinel.is_in_view(sentinel, viewport);
        self.window.observe(visible)
    }

    /// Applies a growth step on a frame. Stale tickets do nothing.
    ///
    /// The returned [`Growth::next`] ticket, if any, should be applied on a
    /// later frame.
    #[must_use = "a chained `next` ticket keeps the window busy until applied"]
    pub fn on_frame<A, Tr>(
        &mut self,
        ticket: GrowthTicket,
        animator: &mut A,
        trace: &mut Tr,
    ) -> Option<Growth>
    where
        A: Animator<Target> + ?Sized,
        Tr: GalleryTrace + ?Sized,
    {
        let growth = self.window.apply(ticket)?;
        if !growth.added.is_empty() {
            trace.window_grew(growth.added.clone(), self.items.len());
            self.sync_rendered(animator, trace);
        }
        Some(growth)
    }

    /// The pointer entered a card. Returns `false` if it is not rendered.
    pub fn pointer_enter<A>(&mut self, id: ImageId, now: Duration, animator: &mut A) -> bool
    where
        A: Animator<Target> + ?Sized,
    {
        let Some(card) = self.cards.get_mut(&id) else {
            return false;
        };
        let request = card.pointer_enter(now, animator);
        self.rearm(id, request);
        true
    }

    /// The pointer left a card. Returns `false` if it is not rendered.
    pub fn pointer_leave<A>(&mut self, id: ImageId, now: Duration, animator: &mut A) -> bool
    where
        A: Animator<Target> + ?Sized,
    {
        let Some(card) = self.cards.get_mut(&id) else {
            return false;
        };
        let request = card.pointer_leave(now, animator);
        self.rearm(id, request);
        true
    }

    /// Pointer down on a card.
    pub fn press<A>(&mut self, id: ImageId, animator: &mut A) -> bool
    where
        A: Animator<Target> + ?Sized,
    {
        self.cards
            .get_mut(&id)
            .map(|card| card.press(animator))
            .is_some()
    }

    /// Pointer up on a card.
    pub fn release<A>(&mut self, id: ImageId, animator: &mut A) -> bool
    where
        A: Animator<Target> + ?Sized,
    {
        self.cards
            .get_mut(&id)
            .map(|card| card.release(animator))
            .is_some()
    }

    /// Fires due hover timers.
    pub fn tick<A>(&mut self, now: Duration, animator: &mut A)
    where
        A: Animator<Target> + ?Sized,
    {
        for due in self.hover_timers.drain_due(now) {
            let (id, token) = due.payload;
            if self.armed.get(&id) == Some(&due.id) {
                self.armed.remove(&id);
            }
            if let Some(card) = self.cards.get_mut(&id) {
                card.on_hover_timer(token, animator);
            }
        }
    }

    /// Opens the modal for a clicked card.
    ///
    /// Ignored (returning `false`) while a modal is mounted or if the card is
    /// not rendered.
    pub fn open<A, Tr>(
        &mut self,
        click: CardClick,
        viewport: Rect,
        animator: &mut A,
        trace: &mut Tr,
    ) -> bool
    where
        A: Animator<Target> + ?Sized,
        Tr: GalleryTrace + ?Sized,
    {
        if self.modal.is_some() || !self.cards.contains_key(&click.id) {
            return false;
        }
        let modal = ImageModal::open(
            click.id,
            click.rect,
            viewport,
            self.config.modal,
            &self.scroll,
            animator,
        );
        trace.modal_phase(click.id, modal.phase());
        self.modal = Some(modal);
        true
    }

    /// Asks the modal to close.
    ///
    /// `remeasured` is the card's rectangle now. It is ignored when the card
    /// has left the window, and the modal falls back to its last known anchor.
    pub fn request_close<A, Tr>(
        &mut self,
        trigger: CloseTrigger,
        remeasured: Option<Rect>,
        viewport: Rect,
        animator: &mut A,
        trace: &mut Tr,
    ) -> bool
    where
        A: Animator<Target> + ?Sized,
        Tr: GalleryTrace + ?Sized,
    {
        let Some(modal) = self.modal.as_mut() else {
            return false;
        };
        let id = *modal.key();
        let remeasured = remeasured.filter(|_| self.cards.contains_key(&id));
        if !modal.request_close(trigger, remeasured, viewport, animator) {
            return false;
        }
        if let Some(target) = modal.close_target() {
            trace.modal_closing(id, trigger, target.rect(), target.is_fallback());
        }
        trace.modal_phase(id, modal.phase());
        if !modal.phase().is_mounted() {
            self.modal = None;
        }
        true
    }

    /// Routes a finished animation handle.
    pub fn on_complete<Tr>(&mut self, handle: AnimationHandle, trace: &mut Tr) -> Option<GridEvent>
    where
        Tr: GalleryTrace + ?Sized,
    {
        if self.entering.remove(&handle).is_some() {
            return None;
        }
        if let Some(modal) = self.modal.as_mut() {
            let id = *modal.key();
            match modal.on_complete(handle) {
                Some(ModalEvent::Opened) => {
                    trace.modal_phase(id, ModalPhase::Open);
                    return Some(GridEvent::ModalOpened(id));
                }
                Some(ModalEvent::Closed) => {
                    self.modal = None;
                    trace.modal_phase(id, ModalPhase::Closed);
                    return Some(GridEvent::ModalClosed(id));
                }
                None => {}
            }
        }
        for card in self.cards.values_mut() {
            if card.on_complete(handle) {
                break;
            }
        }
        None
    }

    /// Cancels every tween and timer and unmounts the modal, releasing the
    /// scroll lock. The list and window are kept.
    pub fn teardown<A>(&mut self, animator: &mut A)
    where
        A: Animator<Target> + ?Sized,
    {
        if let Some(mut modal) = self.modal.take() {
            modal.teardown(animator);
        }
        for (handle, _) in self.entering.drain() {
            animator.cancel(handle);
        }
        for card in self.cards.values_mut() {
            card.teardown(animator);
        }
        self.cards.clear();
        self.entrance.clear();
        self.hover_timers.clear();
        self.armed.clear();
        self.window.cancel_growth();
    }

    fn rearm(&mut self, id: ImageId, request: Option<HoverRequest>) {
        if let Some(old) = self.armed.remove(&id) {
            self.hover_timers.cancel(old);
        }
        if let Some(req) = request {
            let timer = self.hover_timers.schedule(req.deadline, (id, req.token));
            self.armed.insert(id, timer);
        }
    }

    fn sync_rendered<A, Tr>(&mut self, animator: &mut A, trace: &mut Tr)
    where
        A: Animator<Target> + ?Sized,
        Tr: GalleryTrace + ?Sized,
    {
        let visible: Vec<ImageId> = self.visible().to_vec();
        let live: HashSet<ImageId> = visible.iter().copied().collect();

        let gone: Vec<ImageId> = self
            .cards
            .keys()
            .copied()
            .filter(|id| !live.contains(id))
            .collect();
        for id in gone {
            if let Some(mut card) = self.cards.remove(&id) {
                card.teardown(animator);
            }
            if let Some(timer) = self.armed.remove(&id) {
                self.hover_timers.cancel(timer);
            }
            self.entering.retain(|handle, entering| {
                if *entering == id {
                    animator.cancel(*handle);
                    false
                } else {
                    true
                }
            });
        }
        self.entrance.retain(visible.iter().copied());

        for &id in &visible {
            if !self.cards.contains_key(&id) {
                let card = ImageCard::mount(id, self.config.card, animator);
                self.cards.insert(id, card);
            }
        }

        let fresh = self.entrance.claim(visible.iter().copied());
        if fresh.is_empty() {
            return;
        }
        let mut batch = Timeline::new().with_default_easing(Easing::Power2Out);
        batch.stagger(
            fresh.iter().map(|&id| {
                Tween::from_to(
                    Target::Card(id),
                    Props::hidden_below(self.config.entrance_offset),
                    Props::shown(),
                )
                .duration(self.config.entrance_duration)
            }),
            self.config.entrance_stagger,
            Position::After,
        );
        let playback = play(animator, batch);
        self.entering
            .extend(playback.handles().iter().copied().zip(fresh.iter().copied()));
        trace.entrance_scheduled(fresh.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::record::Recorder;
    use vista_motion::Motion;

    fn ids(range: core::ops::Range<u32>) -> Vec<ImageId> {
        range.map(ImageId).collect()
    }

    fn grid() -> (GalleryGrid, Motion<Target>) {
        (
            GalleryGrid::new(GridConfig::default(), ScrollLock::new()),
            Motion::new(),
        )
    }

    #[test]
    fn set_images_mounts_first_page_and_animates_it() {
        let (mut g, mut m) = grid();
        let mut rec = Recorder::default();
        g.set_images(ids(0..30), &mut m, &mut rec);
        assert_eq!(g.visible(), &ids(0..12)[..]);
        assert!(g.shows_sentinel());
        assert!(g.card(ImageId(11)).is_some());
        assert!(g.card(ImageId(12)).is_none());
        assert_eq!(rec.0, ["reset 30 0..12", "entrance 12"]);
        assert_eq!(m.current(&Target::Card(ImageId(3))), Props::hidden_below(30.0));
    }

    #[test]
    fn growth_animates_only_new_cards() {
        let (mut g, mut m) = grid();
        g.set_images(ids(0..30), &mut m, &mut ());
        m.advance(Duration::from_secs(2));
        let t = g.on_sentinel_visibility(true).unwrap();
        let _ = g.on_sentinel_visibility(false);
        let mut rec = Recorder::default();
        let _ = g.on_frame(t, &mut m, &mut rec).unwrap();
        assert_eq!(rec.0, ["grew 12..24 of 30", "entrance 12"]);
        assert_eq!(m.current(&Target::Card(ImageId(0))), Props::shown());
        assert_eq!(m.current(&Target::Card(ImageId(12))), Props::hidden_below(30.0));
    }

    #[test]
    fn narrowing_keeps_surviving_cards_settled() {
        let (mut g, mut m) = grid();
        g.set_images(ids(1..10), &mut m, &mut ());
        m.advance(Duration::from_secs(2));
        let mut rec = Recorder::default();
        g.set_images(alloc::vec![ImageId(1), ImageId(6)], &mut m, &mut rec);
        assert_eq!(g.window().range(), 0..2);
        // Both cards were already rendered; nothing replays.
        assert_eq!(rec.0, ["reset 2 0..2"]);
        assert!(g.card(ImageId(2)).is_none());
        assert!(!g.has_entered(ImageId(2)));
    }

    #[test]
    fn second_open_is_ignored() {
        let (mut g, mut m) = grid();
        g.set_images(ids(0..5), &mut m, &mut ());
        let vp = Rect::new(0.0, 0.0, 1000.0, 800.0);
        let click = CardClick {
            id: ImageId(1),
            rect: Some(Rect::new(0.0, 0.0, 300.0, 200.0)),
        };
        assert!(g.open(click, vp, &mut m, &mut ()));
        let other = CardClick {
            id: ImageId(2),
            rect: None,
        };
        assert!(!g.open(other, vp, &mut m, &mut ()));
        assert_eq!(g.selected(), Some(ImageId(1)));
        assert_eq!(g.scroll_lock().holders(), 1);
    }

    #[test]
    fn hover_jitter_commits_last_state_only() {
        let (mut g, mut m) = grid();
        g.set_images(ids(0..3), &mut m, &mut ());
        let id = ImageId(0);
        let ms = Duration::from_millis;
        g.pointer_enter(id, ms(0), &mut m);
        g.pointer_leave(id, ms(20), &mut m);
        g.pointer_enter(id, ms(30), &mut m);
        assert_eq!(g.next_deadline(), Some(ms(80)));
        g.tick(ms(60), &mut m);
        assert!(!g.card(id).unwrap().is_hovered());
        g.tick(ms(80), &mut m);
        assert!(g.card(id).unwrap().is_hovered());
        assert_eq!(g.next_deadline(), None);
    }
}
