//! Device-responsive sizing.
//!
//! Viewport in, tier and scaled sizes out: a breakpoint classifier, a
//! floor-clamped scale function and validated per-tier token tables, tied
//! together by a [`Responsive`] owner that recomputes on viewport changes.

pub mod config;
pub mod error;
pub mod layout;
pub mod scale;
pub mod tier;
pub mod tokens;
pub mod viewport;

pub use config::{AppConfig, ResponsiveConfig, ThemeMode};
pub use error::HabaError;
pub use layout::{ByTier, LayoutContext, Responsive, TierChange};
pub use scale::Scaler;
pub use tier::{Breakpoints, DeviceTier};
pub use tokens::{TokenSet, TokenTable};
pub use viewport::{FixedViewport, Orientation, Viewport, ViewportSource};
