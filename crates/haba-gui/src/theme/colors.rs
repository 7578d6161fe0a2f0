//! Semantic color tokens for the preview chrome.
//!
//! Deserialized from TOML theme files via hex color strings.

use iced::Color;
use serde::Deserialize;

// ── Hex color serde ─────────────────────────────────────────────────

mod hex_color {
    use iced::Color;
    use serde::{self, Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Color, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        super::parse_hex_color(&s).map_err(serde::de::Error::custom)
    }
}

/// Parse `#RRGGBB` or `#RRGGBBAA`.
pub(crate) fn parse_hex_color(s: &str) -> Result<Color, String> {
    let hex = s.strip_prefix('#').unwrap_or(s);
    let channel = |i: usize| {
        hex.get(i..i + 2)
            .ok_or_else(|| format!("invalid hex color: {s}"))
            .and_then(|c| u8::from_str_radix(c, 16).map_err(|e| e.to_string()))
    };
    match hex.len() {
        6 => Ok(Color::from_rgb8(channel(0)?, channel(2)?, channel(4)?)),
        8 => {
            let a = channel(6)?;
            Ok(Color::from_rgba8(
                channel(0)?,
                channel(2)?,
                channel(4)?,
                a as f32 / 255.0,
            ))
        }
        _ => Err(format!("invalid hex color: {s}")),
    }
}

// ── TOML intermediate structs ──────────────────────────────────────

/// Raw TOML theme file: one theme with dark and light variants.
#[derive(Debug, Deserialize)]
pub struct ThemeFile {
    pub meta: ThemeMeta,
    pub dark: ThemeVariant,
    pub light: ThemeVariant,
}

#[derive(Debug, Deserialize)]
pub struct ThemeMeta {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct ThemeVariant {
    pub surface: SurfaceColors,
    pub text: TextColors,
    pub primary: PrimaryColors,
    pub accent: AccentColors,
}

#[derive(Debug, Deserialize)]
pub struct SurfaceColors {
    #[serde(with = "hex_color")]
    pub base: Color,
    #[serde(with = "hex_color")]
    pub container_low: Color,
    #[serde(with = "hex_color")]
    pub container: Color,
    #[serde(with = "hex_color")]
    pub container_high: Color,
    #[serde(with = "hex_color")]
    pub bright: Color,
}

#[derive(Debug, Deserialize)]
pub struct TextColors {
    #[serde(with = "hex_color")]
    pub on_surface: Color,
    #[serde(with = "hex_color")]
    pub on_surface_variant: Color,
    #[serde(with = "hex_color")]
    pub outline: Color,
    #[serde(with = "hex_color")]
    pub outline_variant: Color,
}

#[derive(Debug, Deserialize)]
pub struct PrimaryColors {
    #[serde(with = "hex_color")]
    pub base: Color,
    #[serde(with = "hex_color")]
    pub hover: Color,
    #[serde(with = "hex_color")]
    pub dim: Color,
    #[serde(with = "hex_color")]
    pub on_primary: Color,
    #[serde(with = "hex_color")]
    pub container: Color,
    #[serde(with = "hex_color")]
    pub on_container: Color,
}

#[derive(Debug, Deserialize)]
pub struct AccentColors {
    /// Highlight for the active device tier.
    #[serde(with = "hex_color")]
    pub tier: Color,
    #[serde(with = "hex_color")]
    pub on_tier: Color,
    #[serde(with = "hex_color")]
    pub error: Color,
}

// Single source of truth for the mode enum lives in the config.
pub use haba_core::ThemeMode;

// ── ColorScheme ────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct ColorScheme {
    pub surface: Color,
    pub surface_container_low: Color,
    pub surface_container: Color,
    pub surface_container_high: Color,
    pub surface_bright: Color,

    pub on_surface: Color,
    pub on_surface_variant: Color,
    pub outline: Color,
    pub outline_variant: Color,

    pub primary: Color,
    pub primary_hover: Color,
    pub primary_dim: Color,
    pub on_primary: Color,
    pub primary_container: Color,
    pub on_primary_container: Color,

    pub tier: Color,
    pub on_tier: Color,
    pub error: Color,
}

impl ColorScheme {
    pub fn from_variant(v: &ThemeVariant) -> Self {
        Self {
            surface: v.surface.base,
            surface_container_low: v.surface.container_low,
            surface_container: v.surface.container,
            surface_container_high: v.surface.container_high,
            surface_bright: v.surface.bright,

            on_surface: v.text.on_surface,
            on_surface_variant: v.text.on_surface_variant,
            outline: v.text.outline,
            outline_variant: v.text.outline_variant,

            primary: v.primary.base,
            primary_hover: v.primary.hover,
            primary_dim: v.primary.dim,
            on_primary: v.primary.on_primary,
            primary_container: v.primary.container,
            on_primary_container: v.primary.on_container,

            tier: v.accent.tier,
            on_tier: v.accent.on_tier,
            error: v.accent.error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        let c = parse_hex_color("#FF8000").unwrap();
        assert_eq!(c, Color::from_rgb8(255, 128, 0));
        let c = parse_hex_color("00000080").unwrap();
        assert!((c.a - 128.0 / 255.0).abs() < 1e-6);
        assert!(parse_hex_color("#FFF").is_err());
        assert!(parse_hex_color("#GG0000").is_err());
    }
}
