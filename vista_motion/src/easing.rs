// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Easing curves.
//!
//! The power curves follow the common naming where `Power1` is quadratic,
//! `Power2` cubic and `Power3` quartic.

/// An easing curve mapping linear progress in `[0, 1]` to eased progress.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Easing {
    /// No easing.
    Linear,
    /// Quadratic, accelerating.
    Power1In,
    /// Quadratic, decelerating.
    Power1Out,
    /// Quadratic S-curve.
    Power1InOut,
    /// Cubic, accelerating.
    Power2In,
    /// Cubic, decelerating.
    Power2Out,
    /// Cubic S-curve.
    Power2InOut,
    /// Quartic, accelerating.
    Power3In,
    /// Quartic, decelerating.
    Power3Out,
    /// Quartic S-curve.
    Power3InOut,
    /// Decelerating with a slight overshoot past the end before settling.
    ///
    /// The payload is the overshoot amount; `1.7` gives a gentle pop.
    BackOut(f64),
}

impl Easing {
    /// The curve used when a tween does not pick one.
    pub const DEFAULT: Self = Self::Power1Out;

    /// Applies the curve. Input is clamped to `[0, 1]`.
    ///
    /// Every curve maps `0` to `0` and `1` to `1` exactly.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        if t == 0.0 || t == 1.0 {
            return t;
        }
        match self {
            Self::Linear => t,
            Self::Power1In => ease_in(t, 2),
            Self::Power1Out => ease_out(t, 2),
            Self::Power1InOut => ease_in_out(t, 2),
            Self::Power2In => ease_in(t, 3),
            Self::Power2Out => ease_out(t, 3),
            Self::Power2InOut => ease_in_out(t, 3),
            Self::Power3In => ease_in(t, 4),
            Self::Power3Out => ease_out(t, 4),
            Self::Power3InOut => ease_in_out(t, 4),
            Self::BackOut(overshoot) => {
                let c3 = overshoot + 1.0;
                let u = t - 1.0;
                1.0 + c3 * u * u * u + overshoot * u * u
            }
        }
    }

    /// Returns `true` if the curve can leave the `[0, 1]` range mid-flight.
    #[must_use]
    pub fn can_overshoot(self) -> bool {
        matches!(self, Self::BackOut(o) if o > 0.0)
    }

    /// Returns `true` if the curve slows down as it approaches the end.
    #[must_use]
    pub fn decelerates(self) -> bool {
        !matches!(self, Self::Linear | Self::Power1In | Self::Power2In | Self::Power3In)
    }
}

fn powi(x: f64, n: u32) -> f64 {
    let mut acc = 1.0;
    for _ in 0..n {
        acc *= x;
    }
    acc
}

fn ease_in(t: f64, p: u32) -> f64 {
    powi(t, p)
}

fn ease_out(t: f64, p: u32) -> f64 {
    1.0 - powi(1.0 - t, p)
}

fn ease_in_out(t: f64, p: u32) -> f64 {
    if t < 0.5 {
        powi(2.0, p - 1) * powi(t, p)
    } else {
        1.0 - powi(-2.0 * t + 2.0, p) / 2.0
    }
}
