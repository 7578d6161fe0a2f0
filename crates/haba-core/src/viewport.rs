//! Viewport metrics reported by the host window or device.
//!
//! Readings are never rejected. Non-finite or negative sides clamp to zero
//! and a broken pixel ratio clamps to 1.0, so a degenerate viewport still
//! produces a renderable layout (smallest tier, floor scale).

use serde::{Deserialize, Serialize};

/// Width, height and density of the drawable area, in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub pixel_ratio: f32,
}

/// Screen orientation derived from the viewport sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Portrait,
    Landscape,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        let clamped = Self {
            width: clamp_side(width),
            height: clamp_side(height),
            pixel_ratio: 1.0,
        };
        if clamped.width != width || clamped.height != height {
            tracing::debug!("Clamped viewport {width}x{height} to {}x{}", clamped.width, clamped.height);
        }
        clamped
    }

    /// Set the physical-to-logical pixel ratio (e.g. 3.0 on a dense phone).
    pub fn with_pixel_ratio(mut self, ratio: f32) -> Self {
        self.pixel_ratio = if ratio.is_finite() && ratio > 0.0 {
            ratio
        } else {
            1.0
        };
        self
    }

    pub fn orientation(&self) -> Orientation {
        if self.width > self.height {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        }
    }

    /// True when the reported width was unusable and has been clamped to zero.
    pub fn is_degenerate(&self) -> bool {
        self.width <= 0.0
    }

    pub fn short_side(&self) -> f32 {
        self.width.min(self.height)
    }

    pub fn long_side(&self) -> f32 {
        self.width.max(self.height)
    }
}

impl Default for Viewport {
    /// The 375x812 reference phone the design scale is drawn against.
    fn default() -> Self {
        Self::new(375.0, 812.0)
    }
}

fn clamp_side(value: f32) -> f32 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Anything that can report the current viewport.
///
/// The layout owner asks its source once at startup and again whenever the
/// host signals a dimension change.
pub trait ViewportSource {
    fn viewport(&self) -> Viewport;
}

/// A source that always reports the same reading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedViewport(pub Viewport);

impl ViewportSource for FixedViewport {
    fn viewport(&self) -> Viewport {
        self.0
    }
}

impl ViewportSource for Viewport {
    fn viewport(&self) -> Viewport {
        *self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_and_nan_clamp_to_zero() {
        let vp = Viewport::new(-20.0, f32::NAN);
        assert_eq!(vp.width, 0.0);
        assert_eq!(vp.height, 0.0);
        assert!(vp.is_degenerate());
    }

    #[test]
    fn test_infinite_width_is_degenerate() {
        assert!(Viewport::new(f32::INFINITY, 600.0).is_degenerate());
    }

    #[test]
    fn test_orientation() {
        assert_eq!(Viewport::new(375.0, 812.0).orientation(), Orientation::Portrait);
        assert_eq!(Viewport::new(812.0, 375.0).orientation(), Orientation::Landscape);
        assert_eq!(Viewport::new(500.0, 500.0).orientation(), Orientation::Portrait);
    }

    #[test]
    fn test_pixel_ratio_fallback() {
        assert_eq!(Viewport::default().with_pixel_ratio(3.0).pixel_ratio, 3.0);
        assert_eq!(Viewport::default().with_pixel_ratio(0.0).pixel_ratio, 1.0);
        assert_eq!(Viewport::default().with_pixel_ratio(f32::NAN).pixel_ratio, 1.0);
    }

    #[test]
    fn test_sides() {
        let vp = Viewport::new(812.0, 375.0);
        assert_eq!(vp.short_side(), 375.0);
        assert_eq!(vp.long_side(), 812.0);
    }

    #[test]
    fn test_fixed_source() {
        let source = FixedViewport(Viewport::new(320.0, 568.0));
        assert_eq!(source.viewport().width, 320.0);
    }
}
