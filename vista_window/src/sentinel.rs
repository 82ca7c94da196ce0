// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sentinel visibility geometry.
//!
//! Hosts with a native visibility observer can feed its notifications straight
//! into [`GrowingWindow::observe`](crate::GrowingWindow::observe). Hosts that
//! only know rectangles (native shells, tests) can compute the same answer with
//! [`Sentinel::is_in_view`].

use kurbo::Rect;

use crate::WindowConfig;

/// Visibility test for the trailing load-more marker.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Sentinel {
    lookahead: f64,
    threshold: f64,
}

impl Default for Sentinel {
    fn default() -> Self {
        Self::from_config(&WindowConfig::default())
    }
}

impl Sentinel {
    /// Uses the lookahead and threshold from `config`.
    #[must_use]
    pub fn from_config(config: &WindowConfig) -> Self {
        Self {
            lookahead: config.lookahead.max(0.0),
            threshold: config.threshold.clamp(0.0, 1.0),
        }
    }

    /// The viewport grown by the lookahead margin on every side.
    #[must_use]
    pub fn observation_root(&self, viewport: Rect) -> Rect {
        viewport.abs().inflate(self.lookahead, self.lookahead)
    }

    /// Returns `true` if `sentinel` counts as visible in `viewport`.
    ///
    /// A sentinel with area counts once at least `threshold` of it lies inside
    /// the expanded viewport. A degenerate (zero-area) sentinel counts when it
    /// touches the expanded viewport at all.
    #[must_use]
    pub fn is_in_view(&self, sentinel: Rect, viewport: Rect) -> bool {
        let root = self.observation_root(viewport);
        let sentinel = sentinel.abs();
        let touches = sentinel.x0 <= root.x1
            && sentinel.x1 >= root.x0
            && sentinel.y0 <= root.y1
            && sentinel.y1 >= root.y0;
        if !touches {
            return false;
        }
        let area = sentinel.area();
        if area <= 0.0 {
            return true;
        }
        let ratio = sentinel.intersect(root).area() / area;
        ratio > 0.0 && ratio >= self.threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Rect {
        Rect::new(0.0, 0.0, 1000.0, 800.0)
    }

    #[test]
    fn sentinel_below_fold_within_lookahead_is_visible() {
        let s = Sentinel::default();
        // 150px below the viewport bottom, inside the 200px margin.
        assert!(s.is_in_view(Rect::new(0.0, 950.0, 1000.0, 1000.0), viewport()));
    }

    #[test]
    fn sentinel_far_below_is_not_visible() {
        let s = Sentinel::default();
        assert!(!s.is_in_view(Rect::new(0.0, 1200.0, 1000.0, 1264.0), viewport()));
    }

    #[test]
    fn threshold_applies_to_partial_overlap() {
        let s = Sentinel::default();
        // Root bottom is at 1000; 5px of a 100px-tall sentinel is 5%.
        assert!(!s.is_in_view(Rect::new(0.0, 995.0, 100.0, 1095.0), viewport()));
        // 20px is 20%.
        assert!(s.is_in_view(Rect::new(0.0, 980.0, 100.0, 1080.0), viewport()));
    }

    #[test]
    fn zero_area_sentinel_counts_when_touching() {
        let s = Sentinel::default();
        assert!(s.is_in_view(Rect::new(10.0, 990.0, 10.0, 990.0), viewport()));
        assert!(!s.is_in_view(Rect::new(10.0, 1001.0, 10.0, 1001.0), viewport()));
    }

    #[test]
    fn zero_lookahead_uses_viewport_edges() {
        let s = Sentinel::from_config(&WindowConfig::default().with_lookahead(0.0));
        assert!(!s.is_in_view(Rect::new(0.0, 850.0, 100.0, 900.0), viewport()));
        assert_eq!(s.observation_root(viewport()), viewport());
    }
}
