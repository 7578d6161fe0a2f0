//! Layout context handed to screens, and the root owner that keeps it current.
//!
//! `Responsive` is owned by the root view. It recomputes tier and scale
//! whenever the host reports a new viewport and passes a `LayoutContext`
//! down; screens only ever see the context by shared reference.

use std::sync::Arc;

use crate::config::ResponsiveConfig;
use crate::error::HabaError;
use crate::scale::Scaler;
use crate::tier::DeviceTier;
use crate::tokens::{TokenSet, TokenTable};
use crate::viewport::{Viewport, ViewportSource};

/// Everything a screen needs to size itself for the current viewport.
#[derive(Debug, Clone)]
pub struct LayoutContext {
    viewport: Viewport,
    tier: DeviceTier,
    scaler: Scaler,
    table: Arc<TokenTable>,
}

impl LayoutContext {
    pub fn new(config: &ResponsiveConfig, table: Arc<TokenTable>, viewport: Viewport) -> Self {
        Self {
            viewport,
            tier: config.breakpoints.classify(viewport.width),
            scaler: Scaler::new(config, viewport),
            table,
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn tier(&self) -> DeviceTier {
        self.tier
    }

    pub fn scaler(&self) -> &Scaler {
        &self.scaler
    }

    pub fn table(&self) -> &TokenTable {
        &self.table
    }

    /// Tokens for the current tier.
    pub fn tokens(&self) -> &TokenSet {
        self.table.tokens(self.tier)
    }

    pub fn token(&self, name: &str) -> Option<f32> {
        self.tokens().get(name)
    }

    pub fn token_or(&self, name: &str, fallback: f32) -> f32 {
        self.token(name).unwrap_or(fallback)
    }

    pub fn scale(&self, nominal: f32) -> f32 {
        self.scaler.scale(nominal)
    }
}

/// A tier transition caused by a viewport update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierChange {
    pub from: DeviceTier,
    pub to: DeviceTier,
}

/// Root layout owner: config, shared token table and the live context.
#[derive(Debug, Clone)]
pub struct Responsive {
    config: ResponsiveConfig,
    context: LayoutContext,
}

impl Responsive {
    /// Validate `config` and compute the initial context.
    pub fn new(
        config: ResponsiveConfig,
        table: Arc<TokenTable>,
        viewport: Viewport,
    ) -> Result<Self, HabaError> {
        config.validate()?;
        let context = LayoutContext::new(&config, table, viewport);
        tracing::debug!(
            tier = %context.tier(),
            width = viewport.width,
            tokens = context.table().name(),
            "Initial layout"
        );
        Ok(Self { config, context })
    }

    /// Read the initial viewport from a source.
    pub fn from_source(
        config: ResponsiveConfig,
        table: Arc<TokenTable>,
        source: &impl ViewportSource,
    ) -> Result<Self, HabaError> {
        Self::new(config, table, source.viewport())
    }

    pub fn context(&self) -> &LayoutContext {
        &self.context
    }

    pub fn config(&self) -> &ResponsiveConfig {
        &self.config
    }

    /// Recompute for a new viewport. Returns the tier change, if any.
    pub fn update(&mut self, viewport: Viewport) -> Option<TierChange> {
        if viewport == self.context.viewport {
            return None;
        }
        let from = self.context.tier;
        self.context = LayoutContext::new(&self.config, Arc::clone(&self.context.table), viewport);
        let to = self.context.tier;
        if from == to {
            return None;
        }
        tracing::debug!(%from, %to, width = viewport.width, "Device tier changed");
        Some(TierChange { from, to })
    }

    /// Swap the token table, keeping the current viewport.
    pub fn set_table(&mut self, table: Arc<TokenTable>) {
        tracing::debug!(tokens = table.name(), "Token table switched");
        self.context = LayoutContext::new(&self.config, table, self.context.viewport);
    }
}

/// Mobile-first per-tier values: a base plus overrides from chosen tiers up.
///
/// ```
/// use haba_core::{ByTier, DeviceTier};
///
/// let columns = ByTier::new(1).at(DeviceTier::Large, 2).at(DeviceTier::Tablet, 3);
/// assert_eq!(*columns.resolve(DeviceTier::Medium), 1);
/// assert_eq!(*columns.resolve(DeviceTier::XLarge), 2);
/// assert_eq!(*columns.resolve(DeviceTier::Tablet), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ByTier<T> {
    base: T,
    overrides: [Option<T>; DeviceTier::COUNT],
}

impl<T> ByTier<T> {
    pub fn new(base: T) -> Self {
        Self {
            base,
            overrides: [None, None, None, None, None],
        }
    }

    /// Use `value` for `tier` and every larger tier without its own override.
    pub fn at(mut self, tier: DeviceTier, value: T) -> Self {
        self.overrides[tier.index()] = Some(value);
        self
    }

    pub fn resolve(&self, tier: DeviceTier) -> &T {
        self.overrides[..=tier.index()]
            .iter()
            .rev()
            .find_map(Option::as_ref)
            .unwrap_or(&self.base)
    }
}
