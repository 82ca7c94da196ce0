// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The modal state machine.

use kurbo::{Rect, Size};
use vista_motion::{AnimationHandle, Animator, Playback, Props, play};

use crate::{ModalConfig, ScrollLock, ScrollLockGuard};

/// Lifecycle of an [`ImageModal`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ModalPhase {
    /// Growing out of the card.
    Opening,
    /// Fully open, waiting for a close request.
    Open,
    /// Returning to the card.
    Closing,
    /// Finished or torn down. The host unmounts the modal.
    Closed,
}

impl ModalPhase {
    /// Returns `true` until the modal is closed.
    #[must_use]
    pub fn is_mounted(self) -> bool {
        self != Self::Closed
    }

    /// Returns `true` while a transition runs.
    #[must_use]
    pub fn is_transitioning(self) -> bool {
        matches!(self, Self::Opening | Self::Closing)
    }
}

/// Visual parts of the modal, used as animation targets and hit targets.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ModalPart {
    /// The dimmed backdrop covering the page.
    Scrim,
    /// The enlarged image, positioned by an absolute frame.
    Image,
    /// Caption panel with the location and description.
    Content,
    /// The close control.
    Close,
}

impl ModalPart {
    /// Every part, back to front.
    pub const ALL: [Self; 4] = [Self::Scrim, Self::Image, Self::Content, Self::Close];
}

/// What asked the modal to close.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CloseTrigger {
    /// A press on the backdrop.
    Scrim,
    /// A press on the close control.
    CloseButton,
    /// A cancel affordance such as the Escape key or a back gesture.
    Cancel,
}

impl CloseTrigger {
    /// Maps a pointer press on `part` to a close request.
    ///
    /// Presses on the image or its caption do not close the modal.
    #[must_use]
    pub fn for_pointer(part: ModalPart) -> Option<Self> {
        match part {
            ModalPart::Scrim => Some(Self::Scrim),
            ModalPart::Close => Some(Self::CloseButton),
            ModalPart::Image | ModalPart::Content => None,
        }
    }

    /// Maps a key name to a close request. Only `"Escape"` closes.
    #[must_use]
    pub fn for_key(key: &str) -> Option<Self> {
        (key == "Escape").then_some(Self::Cancel)
    }
}

/// Where the image returns to when closing.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum CloseTarget {
    /// The card, re-measured at close time and on screen.
    Card(Rect),
    /// The card could not be used; the image shrinks toward this rectangle
    /// while fading out.
    Fallback(Rect),
}

impl CloseTarget {
    /// The rectangle the image animates to.
    #[must_use]
    pub fn rect(self) -> Rect {
        match self {
            Self::Card(r) | Self::Fallback(r) => r,
        }
    }

    /// Returns `true` for the fade-and-shrink fallback.
    #[must_use]
    pub fn is_fallback(self) -> bool {
        matches!(self, Self::Fallback(_))
    }
}

/// Reported by [`ImageModal::on_complete`] when a transition finishes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ModalEvent {
    /// The opening transition finished.
    Opened,
    /// The closing transition finished. The modal can be unmounted.
    Closed,
}

/// A lightbox showing one item enlarged with a shared-element transition.
///
/// The modal owns its retained animation handles and a scroll-lock guard.
/// Both are released when closing finishes, on [`ImageModal::teardown`], or
/// when the modal is dropped. Animation targets are any `T` that
/// [`ModalPart`] converts into, so one animator can serve the whole page.
#[derive(Debug)]
pub struct ImageModal<K> {
    key: K,
    phase: ModalPhase,
    config: ModalConfig,
    anchor: Option<Rect>,
    close_target: Option<CloseTarget>,
    close_trigger: Option<CloseTrigger>,
    playback: Playback,
    scroll: Option<ScrollLockGuard>,
}

impl<K> ImageModal<K> {
    /// Opens a modal for `key`.
    ///
    /// The image is first placed exactly on `anchor` (the card's rectangle at
    /// click time) and then grows into [`ModalConfig::target_frame`]. Without
    /// an anchor the image fades in at its target frame instead.
    pub fn open<T, A>(
        key: K,
        anchor: Option<Rect>,
        viewport: Rect,
        config: ModalConfig,
        scroll: &ScrollLock,
        animator: &mut A,
    ) -> Self
    where
        T: From<ModalPart>,
        A: Animator<T> + ?Sized,
    {
        let guard = scroll.acquire();
        let target = config.target_frame(viewport);
        let (start, opacity) = match anchor {
            Some(rect) => (rect, 1.0),
            None => (target, 0.0),
        };
        animator.set(ModalPart::Scrim.into(), Props::NONE.with_opacity(0.0));
        animator.set(
            ModalPart::Image.into(),
            Props::NONE.with_frame(start).with_opacity(opacity),
        );
        animator.set(ModalPart::Content.into(), config.content_hidden());
        animator.set(ModalPart::Close.into(), config.close_hidden());
        let playback = play(animator, config.open_timeline(target));
        Self {
            key,
            phase: ModalPhase::Opening,
            config,
            anchor,
            close_target: None,
            close_trigger: None,
            playback,
            scroll: Some(guard),
        }
    }

    /// The item shown.
    #[must_use]
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> ModalPhase {
        self.phase
    }

    /// The card rectangle captured at open time, if there was one.
    #[must_use]
    pub fn anchor(&self) -> Option<Rect> {
        self.anchor
    }

    /// Where the image is returning to, once closing has started.
    #[must_use]
    pub fn close_target(&self) -> Option<CloseTarget> {
        self.close_target
    }

    /// What started the close, once closing has started.
    #[must_use]
    pub fn close_trigger(&self) -> Option<CloseTrigger> {
        self.close_trigger
    }

    /// Returns `true` while this modal keeps page scroll suppressed.
    #[must_use]
    pub fn holds_scroll_lock(&self) -> bool {
        self.scroll.is_some()
    }

    /// Handles of the running transition.
    #[must_use]
    pub fn playback(&self) -> &Playback {
        &self.playback
    }

    /// Routes a finished animation handle to the modal.
    ///
    /// Returns an event when `handle` ends the running transition. Handles
    /// that belong to a cancelled or unrelated transition are ignored.
    pub fn on_complete(&mut self, handle: AnimationHandle) -> Option<ModalEvent> {
        if !self.playback.is_finished_by(handle) {
            return None;
        }
        match self.phase {
            ModalPhase::Opening => {
                self.phase = ModalPhase::Open;
                self.playback = Playback::default();
                Some(ModalEvent::Opened)
            }
            ModalPhase::Closing => {
                self.finish();
                Some(ModalEvent::Closed)
            }
            ModalPhase::Open | ModalPhase::Closed => None,
        }
    }

    /// Starts closing.
    ///
    /// `remeasured` is the card's rectangle now, or `None` if the card is no
    /// longer rendered. Works while opening, by stopping the open transition
    /// where it is and reversing from there. Returns `false` if the modal is
    /// already closing or closed.
    pub fn request_close<T, A>(
        &mut self,
        trigger: CloseTrigger,
        remeasured: Option<Rect>,
        viewport: Rect,
        animator: &mut A,
    ) -> bool
    where
        T: From<ModalPart>,
        A: Animator<T> + ?Sized,
    {
        match self.phase {
            ModalPhase::Opening | ModalPhase::Open => {}
            ModalPhase::Closing | ModalPhase::Closed => return false,
        }
        self.playback.cancel_all(animator);
        let target = self.resolve_close_target(remeasured, viewport);
        self.close_target = Some(target);
        self.close_trigger = Some(trigger);
        self.phase = ModalPhase::Closing;
        self.playback = play(
            animator,
            self.config.close_timeline(target.rect(), target.is_fallback()),
        );
        if self.playback.is_empty() {
            self.finish();
        }
        true
    }

    /// Cancels every running tween and releases the scroll lock immediately.
    ///
    /// Used when the host goes away mid-transition. No completion will be
    /// reported afterwards. Returns how many tweens were stopped.
    pub fn teardown<T, A>(&mut self, animator: &mut A) -> usize
    where
        A: Animator<T> + ?Sized,
    {
        let stopped = self.playback.cancel_all(animator);
        self.finish();
        stopped
    }

    fn finish(&mut self) {
        self.phase = ModalPhase::Closed;
        self.playback = Playback::default();
        self.scroll = None;
    }

    fn resolve_close_target(&self, remeasured: Option<Rect>, viewport: Rect) -> CloseTarget {
        let viewport = viewport.abs();
        match remeasured.map(|r| r.abs()) {
            Some(card) if card.area() > 0.0 && card.intersect(viewport).area() > 0.0 => {
                CloseTarget::Card(card)
            }
            _ => CloseTarget::Fallback(
                self.anchor
                    .unwrap_or_else(|| Rect::from_center_size(viewport.center(), Size::ZERO)),
            ),
        }
    }
}
