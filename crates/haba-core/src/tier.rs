//! Device tiers and the breakpoint classifier.
//!
//! Each breakpoint is the lower bound of the tier that starts there. A width
//! equal to a breakpoint belongs to the larger tier (lower bound inclusive,
//! upper bound exclusive).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::HabaError;

/// Named width bucket, ordered from the narrowest phone to tablets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceTier {
    #[serde(alias = "xs")]
    Small,
    #[serde(alias = "sm")]
    Medium,
    #[serde(alias = "md")]
    Large,
    #[serde(alias = "lg")]
    XLarge,
    #[serde(alias = "xl")]
    Tablet,
}

impl DeviceTier {
    /// All tiers in increasing size order.
    pub const ALL: [DeviceTier; 5] = [
        Self::Small,
        Self::Medium,
        Self::Large,
        Self::XLarge,
        Self::Tablet,
    ];

    pub const COUNT: usize = Self::ALL.len();

    /// Position in `ALL`.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
            Self::XLarge => "xlarge",
            Self::Tablet => "tablet",
        }
    }

    /// Short alias in the xs..xl naming scheme.
    pub fn short_name(self) -> &'static str {
        match self {
            Self::Small => "xs",
            Self::Medium => "sm",
            Self::Large => "md",
            Self::XLarge => "lg",
            Self::Tablet => "xl",
        }
    }

    /// The next larger tier, if any.
    pub fn larger(self) -> Option<DeviceTier> {
        Self::ALL.get(self.index() + 1).copied()
    }
}

impl fmt::Display for DeviceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeviceTier {
    type Err = HabaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        DeviceTier::ALL
            .into_iter()
            .find(|t| t.as_str() == lowered || t.short_name() == lowered)
            .ok_or_else(|| HabaError::Config(format!("unknown device tier: {s}")))
    }
}

// ── Breakpoints ──────────────────────────────────────────────────

/// Ascending width thresholds separating the five tiers.
///
/// `thresholds[i]` is where `DeviceTier::ALL[i + 1]` begins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BreakpointsFile", into = "BreakpointsFile")]
pub struct Breakpoints {
    thresholds: [f32; DeviceTier::COUNT - 1],
}

/// On-disk shape: one named lower bound per non-smallest tier.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct BreakpointsFile {
    medium: f32,
    large: f32,
    xlarge: f32,
    tablet: f32,
}

impl TryFrom<BreakpointsFile> for Breakpoints {
    type Error = HabaError;

    fn try_from(file: BreakpointsFile) -> Result<Self, Self::Error> {
        Breakpoints::new([file.medium, file.large, file.xlarge, file.tablet])
    }
}

impl From<Breakpoints> for BreakpointsFile {
    fn from(bp: Breakpoints) -> Self {
        let [medium, large, xlarge, tablet] = bp.thresholds;
        Self {
            medium,
            large,
            xlarge,
            tablet,
        }
    }
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            thresholds: [360.0, 414.0, 600.0, 768.0],
        }
    }
}

impl Breakpoints {
    /// Build from the lower bounds of `Medium`, `Large`, `XLarge` and `Tablet`.
    ///
    /// Thresholds must be finite, positive and strictly ascending.
    pub fn new(thresholds: [f32; DeviceTier::COUNT - 1]) -> Result<Self, HabaError> {
        let mut previous = 0.0_f32;
        for (i, &t) in thresholds.iter().enumerate() {
            let tier = DeviceTier::ALL[i + 1];
            if !t.is_finite() || t <= 0.0 {
                return Err(HabaError::Config(format!(
                    "breakpoint for `{tier}` must be a positive width, got {t}"
                )));
            }
            if t <= previous {
                return Err(HabaError::Config(format!(
                    "breakpoint for `{tier}` ({t}) must be greater than {previous}"
                )));
            }
            previous = t;
        }
        Ok(Self { thresholds })
    }

    pub fn thresholds(&self) -> &[f32] {
        &self.thresholds
    }

    /// Map a width to its tier. Never fails: zero, negative and
    /// non-finite widths fall back to `Small`, matching how `Viewport`
    /// clamps them. Anything past the last threshold is `Tablet`.
    pub fn classify(&self, width: f32) -> DeviceTier {
        if !width.is_finite() || width <= 0.0 {
            return DeviceTier::Small;
        }
        self.thresholds
            .iter()
            .position(|&upper| width < upper)
            .map(|i| DeviceTier::ALL[i])
            .unwrap_or(DeviceTier::Tablet)
    }

    /// Width interval `[lower, upper)` covered by `tier`; `Tablet` is unbounded.
    pub fn range(&self, tier: DeviceTier) -> (f32, Option<f32>) {
        let i = tier.index();
        let lower = if i == 0 { 0.0 } else { self.thresholds[i - 1] };
        let upper = self.thresholds.get(i).copied();
        (lower, upper)
    }
}
