// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A single gallery card.

use core::time::Duration;

use kurbo::Rect;
use vista_event_state::hover::{HoverDebounce, HoverRequest, HoverToken};
use vista_motion::{AnimationHandle, Animator, Easing, Props, Tween};

use crate::{ImageId, Target};

/// Card interaction tuning.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CardConfig {
    /// Scale while the pointer is over the card.
    pub hover_scale: f64,
    /// Scale while the card is pressed.
    pub press_scale: f64,
    /// Duration of scale changes.
    pub scale_duration: Duration,
    /// Caption opacity while hovered.
    pub caption_hovered: f64,
    /// Caption opacity otherwise.
    pub caption_idle: f64,
    /// Offset the caption rises from when the card mounts.
    pub caption_offset: f64,
    /// Duration of caption changes.
    pub caption_duration: Duration,
    /// Quiet period before a hover change takes effect.
    pub hover_delay: Duration,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            hover_scale: 1.02,
            press_scale: 0.98,
            scale_duration: Duration::from_millis(150),
            caption_hovered: 1.0,
            caption_idle: 0.9,
            caption_offset: 20.0,
            caption_duration: Duration::from_millis(200),
            hover_delay: HoverDebounce::DEFAULT_DELAY,
        }
    }
}

/// A click on a card, with the card's on-screen rectangle if it could be
/// measured.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CardClick {
    /// The clicked image.
    pub id: ImageId,
    /// The card's rectangle at click time.
    pub rect: Option<Rect>,
}

/// Interaction state of one rendered card.
///
/// Pointer scale reacts immediately. The caption emphasis follows the
/// debounced hover state, so a pointer skimming across the grid does not
/// flicker every caption it crosses. Timers are armed by the owner; the card
/// only hands out [`HoverRequest`]s and accepts fired tokens.
#[derive(Debug)]
pub struct ImageCard {
    id: ImageId,
    config: CardConfig,
    hover: HoverDebounce,
    pointer_over: bool,
    pressed: bool,
    scale: Option<AnimationHandle>,
    caption: Option<AnimationHandle>,
}

impl ImageCard {
    /// Mounts the card and fades its caption in.
    pub fn mount<A>(id: ImageId, config: CardConfig, animator: &mut A) -> Self
    where
        A: Animator<Target> + ?Sized,
    {
        let caption = animator.animate(
            Tween::from_to(
                Target::Caption(id),
                Props::hidden_below(config.caption_offset),
                Props::shown().with_opacity(config.caption_idle),
            )
            .duration(config.caption_duration),
        );
        Self {
            id,
            config,
            hover: HoverDebounce::with_delay(config.hover_delay),
            pointer_over: false,
            pressed: false,
            scale: None,
            caption: Some(caption),
        }
    }

    /// The card's image.
    #[must_use]
    pub fn id(&self) -> ImageId {
        self.id
    }

    /// The debounced hover state.
    #[must_use]
    pub fn is_hovered(&self) -> bool {
        self.hover.is_hovered()
    }

    /// Whether the pointer is over the card right now.
    #[must_use]
    pub fn is_pointer_over(&self) -> bool {
        self.pointer_over
    }

    /// Whether the card is held down.
    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// The scale the card is heading to.
    #[must_use]
    pub fn scale_target(&self) -> f64 {
        if self.pressed {
            self.config.press_scale
        } else if self.pointer_over {
            self.config.hover_scale
        } else {
            1.0
        }
    }

    /// The caption opacity the card is heading to.
    #[must_use]
    pub fn caption_target(&self) -> f64 {
        if self.hover.is_hovered() {
            self.config.caption_hovered
        } else {
            self.config.caption_idle
        }
    }

    /// The pointer entered. Returns a debounce timer to arm, if any.
    pub fn pointer_enter<A>(&mut self, now: Duration, animator: &mut A) -> Option<HoverRequest>
    where
        A: Animator<Target> + ?Sized,
    {
        self.pointer_over = true;
        self.retarget_scale(animator);
        let request = self.hover.enter(now);
        if request.is_none() {
            // A pending leave was superseded; the caption stays emphasized.
            self.retarget_caption(animator);
        }
        request
    }

    /// The pointer left. Also releases a press. Returns a debounce timer to
    /// arm, if any.
    pub fn pointer_leave<A>(&mut self, now: Duration, animator: &mut A) -> Option<HoverRequest>
    where
        A: Animator<Target> + ?Sized,
    {
        self.pointer_over = false;
        self.pressed = false;
        self.retarget_scale(animator);
        self.hover.leave(now)
    }

    /// Pointer down on the card.
    pub fn press<A>(&mut self, animator: &mut A)
    where
        A: Animator<Target> + ?Sized,
    {
        self.pressed = true;
        self.retarget_scale(animator);
    }

    /// Pointer up on the card.
    pub fn release<A>(&mut self, animator: &mut A)
    where
        A: Animator<Target> + ?Sized,
    {
        self.pressed = false;
        self.retarget_scale(animator);
    }

    /// A debounce timer fired. Returns the committed hover state, or `None`
    /// for a superseded token.
    pub fn on_hover_timer<A>(&mut self, token: HoverToken, animator: &mut A) -> Option<bool>
    where
        A: Animator<Target> + ?Sized,
    {
        let committed = self.hover.fire(token)?;
        self.retarget_caption(animator);
        Some(committed)
    }

    /// A click, carrying the card's current rectangle.
    #[must_use]
    pub fn click(&self, rect: Option<Rect>) -> CardClick {
        CardClick { id: self.id, rect }
    }

    /// Routes a finished handle. Returns `true` if it was one of the card's.
    pub fn on_complete(&mut self, handle: AnimationHandle) -> bool {
        if self.scale == Some(handle) {
            self.scale = None;
            true
        } else if self.caption == Some(handle) {
            self.caption = None;
            true
        } else {
            false
        }
    }

    /// Cancels the card's tweens and any pending hover change.
    pub fn teardown<A>(&mut self, animator: &mut A)
    where
        A: Animator<Target> + ?Sized,
    {
        for handle in [self.scale.take(), self.caption.take()].into_iter().flatten() {
            animator.cancel(handle);
        }
        self.hover.cancel();
    }

    fn retarget_scale<A>(&mut self, animator: &mut A)
    where
        A: Animator<Target> + ?Sized,
    {
        if let Some(old) = self.scale.take() {
            animator.cancel(old);
        }
        self.scale = Some(
            animator.animate(
                Tween::to(Target::Card(self.id), Props::NONE.with_scale(self.scale_target()))
                    .duration(self.config.scale_duration)
                    .easing(Easing::Power2Out),
            ),
        );
    }

    fn retarget_caption<A>(&mut self, animator: &mut A)
    where
        A: Animator<Target> + ?Sized,
    {
        if let Some(old) = self.caption.take() {
            animator.cancel(old);
        }
        self.caption = Some(
            animator.animate(
                Tween::to(
                    Target::Caption(self.id),
                    Props::shown().with_opacity(self.caption_target()),
                )
                .duration(self.config.caption_duration),
            ),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vista_motion::Motion;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn caption_settles_at_idle_opacity() {
        let mut m = Motion::new();
        let id = ImageId(1);
        ImageCard::mount(id, CardConfig::default(), &mut m);
        assert_eq!(m.current(&Target::Caption(id)).opacity, Some(0.0));
        m.advance(ms(200));
        assert_eq!(m.current(&Target::Caption(id)), Props::shown().with_opacity(0.9));
    }

    #[test]
    fn scale_follows_pointer_immediately() {
        let mut m = Motion::new();
        let mut card = ImageCard::mount(ImageId(1), CardConfig::default(), &mut m);
        card.pointer_enter(ms(0), &mut m);
        assert_eq!(card.scale_target(), 1.02);
        card.press(&mut m);
        assert_eq!(card.scale_target(), 0.98);
        card.release(&mut m);
        assert_eq!(card.scale_target(), 1.02);
        card.pointer_leave(ms(10), &mut m);
        assert_eq!(card.scale_target(), 1.0);
        m.advance(ms(500));
        assert_eq!(m.current(&Target::Card(ImageId(1))).scale, Some(1.0));
    }

    #[test]
    fn caption_emphasis_waits_for_debounce() {
        let mut m = Motion::new();
        let mut card = ImageCard::mount(ImageId(1), CardConfig::default(), &mut m);
        let req = card.pointer_enter(ms(0), &mut m).unwrap();
        assert_eq!(req.deadline, ms(50));
        assert!(!card.is_hovered());
        assert_eq!(card.on_hover_timer(req.token, &mut m), Some(true));
        assert_eq!(card.caption_target(), 1.0);
        m.advance(ms(500));
        assert_eq!(m.current(&Target::Caption(ImageId(1))).opacity, Some(1.0));
    }

    #[test]
    fn teardown_cancels_everything() {
        let mut m = Motion::new();
        let mut card = ImageCard::mount(ImageId(1), CardConfig::default(), &mut m);
        let req = card.pointer_enter(ms(0), &mut m).unwrap();
        card.teardown(&mut m);
        assert!(m.is_idle());
        assert_eq!(card.on_hover_timer(req.token, &mut m), None);
    }
}
