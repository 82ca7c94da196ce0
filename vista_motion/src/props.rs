// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Animatable property bags.

use kurbo::Rect;

/// A sparse set of animatable visual properties.
///
/// Every field is optional: a `Props` value only speaks for the properties it
/// names. Merging and interpolation leave unnamed properties untouched, which
/// lets several tweens drive different properties of the same target.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Props {
    /// Opacity in `[0, 1]`.
    pub opacity: Option<f64>,
    /// Vertical offset from the laid-out position, in logical pixels.
    pub translate_y: Option<f64>,
    /// Uniform scale factor around the element center.
    pub scale: Option<f64>,
    /// Absolute on-screen frame, for elements positioned out of flow.
    pub frame: Option<Rect>,
}

impl Props {
    /// A bag that names no properties.
    pub const NONE: Self = Self {
        opacity: None,
        translate_y: None,
        scale: None,
        frame: None,
    };

    /// Returns a copy with `opacity` set.
    #[must_use]
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }

    /// Returns a copy with `translate_y` set.
    #[must_use]
    pub fn with_translate_y(mut self, y: f64) -> Self {
        self.translate_y = Some(y);
        self
    }

    /// Returns a copy with `scale` set.
    #[must_use]
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = Some(scale);
        self
    }

    /// Returns a copy with `frame` set.
    #[must_use]
    pub fn with_frame(mut self, frame: Rect) -> Self {
        self.frame = Some(frame);
        self
    }

    /// Shorthand for the hidden, shifted state used by fade-and-rise entrances.
    #[must_use]
    pub fn hidden_below(offset: f64) -> Self {
        Self::NONE.with_opacity(0.0).with_translate_y(offset)
    }

    /// Shorthand for the fully shown, settled state.
    #[must_use]
    pub fn shown() -> Self {
        Self::NONE.with_opacity(1.0).with_translate_y(0.0)
    }

    /// Returns `true` if no property is named.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::NONE
    }

    /// Overlays `over` on top of `self`; properties named by `over` win.
    #[must_use]
    pub fn merge(self, over: Self) -> Self {
        Self {
            opacity: over.opacity.or(self.opacity),
            translate_y: over.translate_y.or(self.translate_y),
            scale: over.scale.or(self.scale),
            frame: over.frame.or(self.frame),
        }
    }

    /// Keeps only the properties that `mask` names.
    #[must_use]
    pub fn restrict_to(self, mask: &Self) -> Self {
        Self {
            opacity: self.opacity.filter(|_| mask.opacity.is_some()),
            translate_y: self.translate_y.filter(|_| mask.translate_y.is_some()),
            scale: self.scale.filter(|_| mask.scale.is_some()),
            frame: self.frame.filter(|_| mask.frame.is_some()),
        }
    }

    /// Interpolates every property named by `to`.
    ///
    /// A property missing from `from` snaps to its `to` value, since there is
    /// nothing to interpolate from. Properties not named by `to` are omitted.
    #[must_use]
    pub fn lerp(from: &Self, to: &Self, t: f64) -> Self {
        Self {
            opacity: lerp_opt(from.opacity, to.opacity, t),
            translate_y: lerp_opt(from.translate_y, to.translate_y, t),
            scale: lerp_opt(from.scale, to.scale, t),
            frame: match (from.frame, to.frame) {
                (Some(a), Some(b)) => Some(lerp_rect(a, b, t)),
                (None, b) => b,
                (Some(_), None) => None,
            },
        }
    }
}

fn lerp_opt(from: Option<f64>, to: Option<f64>, t: f64) -> Option<f64> {
    let to = to?;
    Some(match from {
        Some(from) => lerp(from, to, t),
        None => to,
    })
}

/// Linear interpolation between two scalars, exact at both ends.
#[must_use]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    if t == 1.0 {
        return b;
    }
    a + (b - a) * t
}

/// Interpolates each edge of a rectangle.
///
/// At `t = 0` and `t = 1` the result equals the inputs exactly, so a
/// shared-element transition starts with no visible jump.
#[must_use]
pub fn lerp_rect(a: Rect, b: Rect, t: f64) -> Rect {
    if t == 0.0 {
        return a;
    }
    if t == 1.0 {
        return b;
    }
    Rect::new(
        lerp(a.x0, b.x0, t),
        lerp(a.y0, b.y0, t),
        lerp(a.x1, b.x1, t),
        lerp(a.y1, b.y1, t),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_prefers_overlay() {
        let base = Props::NONE.with_opacity(0.2).with_scale(0.8);
        let over = Props::NONE.with_opacity(1.0).with_translate_y(5.0);
        let merged = base.merge(over);
        assert_eq!(merged.opacity, Some(1.0));
        assert_eq!(merged.scale, Some(0.8));
        assert_eq!(merged.translate_y, Some(5.0));
        assert_eq!(merged.frame, None);
    }

    #[test]
    fn lerp_only_touches_named_properties() {
        let from = Props::hidden_below(20.0).with_scale(0.5);
        let to = Props::NONE.with_opacity(1.0);
        let mid = Props::lerp(&from, &to, 0.5);
        assert_eq!(mid.opacity, Some(0.5));
        assert_eq!(mid.translate_y, None);
        assert_eq!(mid.scale, None);
    }

    #[test]
    fn lerp_without_origin_snaps() {
        let to = Props::NONE.with_translate_y(0.0);
        assert_eq!(Props::lerp(&Props::NONE, &to, 0.1).translate_y, Some(0.0));
    }

    #[test]
    fn rect_endpoints_are_exact() {
        let a = Rect::new(10.3, 20.7, 110.1, 95.9);
        let b = Rect::new(0.0, 0.0, 1200.0, 800.0);
        assert_eq!(lerp_rect(a, b, 0.0), a);
        assert_eq!(lerp_rect(a, b, 1.0), b);
        let from = Rect::new(0.0, 0.0, 10.0, 10.0);
        let mid = lerp_rect(from, Rect::new(10.0, 10.0, 30.0, 30.0), 0.5);
        assert_eq!(mid, Rect::new(5.0, 5.0, 20.0, 20.0));
    }

    #[test]
    fn restrict_drops_unmasked() {
        let p = Props::shown().with_scale(1.0);
        let r = p.restrict_to(&Props::NONE.with_scale(0.0));
        assert_eq!(r, Props::NONE.with_scale(1.0));
        assert!(Props::NONE.is_empty());
    }
}
