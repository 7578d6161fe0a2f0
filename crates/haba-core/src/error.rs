use thiserror::Error;

use crate::tier::DeviceTier;

#[derive(Debug, Error)]
pub enum HabaError {
    #[error("config error: {0}")]
    Config(String),

    #[error("token table has no entry for tier `{0}`")]
    MissingTier(DeviceTier),

    #[error("token `{token}` is missing for tier `{tier}`")]
    MissingToken { tier: DeviceTier, token: String },

    #[error("token `{token}` has invalid value {value} for tier `{tier}`")]
    InvalidToken {
        tier: DeviceTier,
        token: String,
        value: f32,
    },

    #[error("token `{token}` shrinks from {lower_value} ({lower}) to {upper_value} ({upper})")]
    NonMonotonic {
        token: String,
        lower: DeviceTier,
        lower_value: f32,
        upper: DeviceTier,
        upper_value: f32,
    },

    #[error("unknown token: {0}")]
    UnknownToken(String),

    #[error("parse failed: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl HabaError {
    /// Whether this error describes a broken token table or config,
    /// as opposed to an I/O or lookup failure.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::Config(_)
                | Self::MissingTier(_)
                | Self::MissingToken { .. }
                | Self::InvalidToken { .. }
                | Self::NonMonotonic { .. }
                | Self::Parse(_)
        )
    }
}
