//! JavaScript bindings for the sizing core, using the built-in defaults.

use haba_core::tokens::find_embedded_token_table;
use haba_core::{ResponsiveConfig, Scaler, Viewport};
use wasm_bindgen::prelude::*;

/// Tier name (`small` .. `tablet`) for a viewport width.
#[wasm_bindgen]
pub fn classify(width: f32) -> String {
    ResponsiveConfig::default()
        .breakpoints
        .classify(width)
        .to_string()
}

/// Floor-clamped scaled size of `nominal` on a viewport `width` pixels wide.
#[wasm_bindgen]
pub fn scale(nominal: f32, width: f32) -> f32 {
    let viewport = Viewport::new(width, ResponsiveConfig::default().base_height);
    Scaler::new(&ResponsiveConfig::default(), viewport).scale(nominal)
}

/// Tokens of embedded `table` for the tier of `width`, as a flat JSON object.
///
/// Returns `"{}"` when no table with that name exists.
#[wasm_bindgen]
pub fn tokens_json(width: f32, table: &str) -> String {
    let Some(table) = find_embedded_token_table(table) else {
        return "{}".to_string();
    };
    let config = ResponsiveConfig::default();
    let viewport = Viewport::new(width, config.base_height);
    table
        .tokens(config.breakpoints.classify(viewport.width))
        .to_json()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_names() {
        assert_eq!(classify(320.0), "small");
        assert_eq!(classify(800.0), "tablet");
        assert_eq!(classify(-1.0), "small");
    }

    #[test]
    fn test_infinite_width_matches_token_tier() {
        let small = tokens_json(320.0, "default");
        assert_eq!(classify(f32::INFINITY), "small");
        assert_eq!(tokens_json(f32::INFINITY, "default"), small);
        assert_eq!(tokens_json(f32::NEG_INFINITY, "default"), small);
    }

    #[test]
    fn test_scale_baseline() {
        assert_eq!(scale(16.0, 375.0), 16.0);
    }

    #[test]
    fn test_tokens_json() {
        let json = tokens_json(800.0, "default");
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["padding"], serde_json::json!(24.0));
        assert_eq!(tokens_json(800.0, "no-such-table"), "{}");
    }
}
