//! End-to-end sizing scenarios over the default configuration and tokens.

use std::collections::BTreeMap;
use std::sync::Arc;

use haba_core::{
    DeviceTier, FixedViewport, HabaError, Responsive, ResponsiveConfig, Scaler, TokenSet,
    TokenTable, Viewport,
};

fn default_responsive(source: &FixedViewport) -> Responsive {
    Responsive::from_source(
        ResponsiveConfig::default(),
        Arc::new(TokenTable::default_table()),
        source,
    )
    .expect("default config is valid")
}

#[test]
fn baseline_width_keeps_nominal_sizes() {
    let r = default_responsive(&FixedViewport(Viewport::new(375.0, 812.0)));
    assert_eq!(r.context().scale(16.0), 16.0);
}

#[test]
fn small_phone_shrinks_but_respects_floor() {
    let r = default_responsive(&FixedViewport(Viewport::new(320.0, 568.0)));
    let ctx = r.context();
    assert_eq!(ctx.tier(), DeviceTier::Small);
    let body = ctx.scale(16.0);
    assert!(body >= 16.0 * 0.8);
    assert!(body < 16.0);
}

#[test]
fn tablet_gets_largest_padding() {
    let r = default_responsive(&FixedViewport(Viewport::new(800.0, 1280.0)));
    let ctx = r.context();
    assert_eq!(ctx.tier(), DeviceTier::Tablet);

    let padding = ctx.token("padding").unwrap();
    for tier in DeviceTier::ALL {
        assert!(ctx.table().value(tier, "padding").unwrap() <= padding);
    }
}

#[test]
fn degenerate_viewports_fall_back_to_smallest() {
    for width in [0.0, -375.0, f32::NAN] {
        let r = default_responsive(&FixedViewport(Viewport::new(width, 812.0)));
        assert_eq!(r.context().tier(), DeviceTier::Small);
        assert_eq!(r.context().scale(10.0), 10.0 * 0.8);
    }
}

#[test]
fn table_missing_a_tier_fails_before_use() {
    let tiers: BTreeMap<DeviceTier, TokenSet> = DeviceTier::ALL
        .into_iter()
        .filter(|t| *t != DeviceTier::Medium)
        .map(|t| (t, TokenSet::from_iter([("padding", 12.0)])))
        .collect();
    let err = TokenTable::new("partial", tiers).unwrap_err();
    assert!(matches!(err, HabaError::MissingTier(DeviceTier::Medium)));
}

#[test]
fn every_token_is_non_decreasing_across_tiers() {
    let table = TokenTable::default_table();
    for name in table.names() {
        let mut previous = 0.0_f32;
        for tier in DeviceTier::ALL {
            let value = table.value(tier, name).unwrap();
            assert!(value >= previous, "{name} shrinks at {tier}");
            previous = value;
        }
    }
}

#[test]
fn classifier_and_scale_are_total_and_deterministic() {
    let config = ResponsiveConfig::default();
    let mut width = 0.0_f32;
    while width <= 2048.0 {
        let tier = config.breakpoints.classify(width);
        assert_eq!(tier, config.breakpoints.classify(width));
        assert!(DeviceTier::ALL.contains(&tier));

        let scaler = Scaler::new(&config, Viewport::new(width, 812.0));
        let once = scaler.scale(14.0);
        assert_eq!(once, scaler.scale(14.0));
        assert!(once >= 14.0 * config.floor_ratio);
        width += 3.25;
    }
}

#[test]
fn rotation_reclassifies() {
    let mut r = default_responsive(&FixedViewport(Viewport::new(390.0, 844.0)));
    assert_eq!(r.context().tier(), DeviceTier::Medium);
    let change = r.update(Viewport::new(844.0, 390.0)).expect("tier changes");
    assert_eq!(change.to, DeviceTier::Tablet);
    let back = r.update(Viewport::new(390.0, 844.0)).expect("tier changes back");
    assert_eq!(back.to, DeviceTier::Medium);
}

#[test]
fn classifier_and_layout_agree_on_every_reading() {
    let config = ResponsiveConfig::default();
    for width in [
        f32::INFINITY,
        f32::NEG_INFINITY,
        f32::NAN,
        -1.0,
        0.0,
        359.99,
        360.0,
        768.0,
        1.0e6,
    ] {
        let r = default_responsive(&FixedViewport(Viewport::new(width, 812.0)));
        assert_eq!(
            config.breakpoints.classify(width),
            r.context().tier(),
            "width {width}"
        );
    }
}
