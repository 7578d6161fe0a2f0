//! Nominal-to-device size conversion.
//!
//! A nominal size is what the designer drew on the reference phone. The
//! scaler multiplies it by `viewport.width / base_width` and never lets the
//! result fall below `nominal * floor_ratio`.

use serde::Serialize;

use crate::config::ResponsiveConfig;
use crate::viewport::Viewport;

/// Pre-computed scale factors for one viewport reading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Scaler {
    width_factor: f32,
    height_factor: f32,
    floor_ratio: f32,
    pixel_ratio: f32,
}

impl Scaler {
    /// `config` is assumed validated (positive bases, floor in `(0, 1]`).
    pub fn new(config: &ResponsiveConfig, viewport: Viewport) -> Self {
        Self {
            width_factor: viewport.width / config.base_width,
            height_factor: viewport.height / config.base_height,
            floor_ratio: config.floor_ratio,
            pixel_ratio: viewport.pixel_ratio,
        }
    }

    /// Raw `width / base_width` ratio before the floor applies.
    pub fn factor(&self) -> f32 {
        self.width_factor
    }

    pub fn floor_ratio(&self) -> f32 {
        self.floor_ratio
    }

    /// Horizontal scale with floor clamp.
    pub fn scale(&self, nominal: f32) -> f32 {
        floored(nominal, self.width_factor, self.floor_ratio)
    }

    /// Same rule against the reference height.
    pub fn vertical_scale(&self, nominal: f32) -> f32 {
        floored(nominal, self.height_factor, self.floor_ratio)
    }

    /// Move only part of the way from `nominal` towards `scale(nominal)`.
    ///
    /// `weight` is clamped to `[0, 1]`; 0 keeps the nominal size, 1 is a
    /// full `scale`. Fonts typically use 0.5.
    pub fn moderate_scale(&self, nominal: f32, weight: f32) -> f32 {
        let weight = if weight.is_nan() { 0.0 } else { weight.clamp(0.0, 1.0) };
        nominal + (self.scale(nominal) - nominal) * weight
    }

    /// Round to the nearest physical pixel.
    pub fn snap(&self, value: f32) -> f32 {
        (value * self.pixel_ratio).round() / self.pixel_ratio
    }
}

fn floored(nominal: f32, factor: f32, floor_ratio: f32) -> f32 {
    (nominal * factor).max(nominal * floor_ratio)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scaler(width: f32) -> Scaler {
        Scaler::new(&ResponsiveConfig::default(), Viewport::new(width, 812.0))
    }

    #[test]
    fn test_identity_at_base_width() {
        let s = scaler(375.0);
        assert_eq!(s.factor(), 1.0);
        for n in [1.0, 12.0, 16.0, 33.3, 240.0] {
            assert_eq!(s.scale(n), n);
        }
    }

    #[test]
    fn test_small_device_shrinks_above_floor() {
        let s = scaler(320.0);
        let v = s.scale(16.0);
        assert!(v >= 12.8);
        assert!(v < 16.0);
        assert!((v - 16.0 * 320.0 / 375.0).abs() < 1e-4);
    }

    #[test]
    fn test_floor_applies_on_narrow_devices() {
        let s = scaler(200.0);
        assert_eq!(s.scale(20.0), 20.0 * 0.8);
    }

    #[test]
    fn test_scales_proportionally_above_base() {
        let s = scaler(750.0);
        assert_eq!(s.scale(16.0), 32.0);
    }

    #[test]
    fn test_degenerate_viewport_uses_floor() {
        let s = Scaler::new(&ResponsiveConfig::default(), Viewport::new(-1.0, 0.0));
        assert_eq!(s.scale(16.0), 16.0 * 0.8);
        assert_eq!(s.vertical_scale(10.0), 10.0 * 0.8);
    }

    #[test]
    fn test_floor_holds_for_all_widths() {
        let mut w = 1.0_f32;
        while w < 2000.0 {
            let s = scaler(w);
            for n in [0.5_f32, 4.0, 14.0, 48.0] {
                assert!(s.scale(n) >= n * s.floor_ratio());
            }
            w += 7.0;
        }
    }

    #[test]
    fn test_vertical_scale_uses_height() {
        let s = Scaler::new(&ResponsiveConfig::default(), Viewport::new(375.0, 406.0));
        assert_eq!(s.vertical_scale(100.0), 80.0);
        let s = Scaler::new(&ResponsiveConfig::default(), Viewport::new(375.0, 1624.0));
        assert_eq!(s.vertical_scale(100.0), 200.0);
    }

    #[test]
    fn test_moderate_scale() {
        let s = scaler(750.0);
        assert_eq!(s.moderate_scale(16.0, 0.5), 24.0);
        assert_eq!(s.moderate_scale(16.0, 0.0), 16.0);
        assert_eq!(s.moderate_scale(16.0, 4.0), 32.0);
    }

    #[test]
    fn test_snap_to_physical_pixels() {
        let s = Scaler::new(
            &ResponsiveConfig::default(),
            Viewport::new(375.0, 812.0).with_pixel_ratio(2.0),
        );
        assert_eq!(s.snap(13.3), 13.5);
        assert_eq!(s.snap(13.2), 13.0);
    }

    #[test]
    fn test_idempotent() {
        let s = scaler(412.0);
        assert_eq!(s.scale(18.0), s.scale(18.0));
        assert_eq!(scaler(412.0), s);
    }
}
