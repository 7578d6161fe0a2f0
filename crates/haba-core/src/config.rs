use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use semver::{Version, VersionReq};
use serde::{Deserialize, Serialize};

use crate::error::HabaError;
use crate::tier::Breakpoints;

const DEFAULT_CONFIG: &str = include_str!("../../../config/default.toml");

/// Config schema versions this build understands.
const SUPPORTED_VERSION: &str = "^1";

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub responsive: ResponsiveConfig,
    #[serde(default)]
    pub appearance: AppearanceConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// The one shared sizing configuration every screen reads from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResponsiveConfig {
    pub version: Version,
    /// Reference width the nominal design sizes were drawn at.
    pub base_width: f32,
    /// Reference height used by vertical scaling.
    pub base_height: f32,
    /// Smallest fraction of a nominal size that scaling may shrink to.
    pub floor_ratio: f32,
    pub breakpoints: Breakpoints,
}

impl Default for ResponsiveConfig {
    fn default() -> Self {
        Self {
            version: Version::new(1, 0, 0),
            base_width: 375.0,
            base_height: 812.0,
            floor_ratio: 0.8,
            breakpoints: Breakpoints::default(),
        }
    }
}

impl ResponsiveConfig {
    pub fn validate(&self) -> Result<(), HabaError> {
        let req = VersionReq::parse(SUPPORTED_VERSION)
            .map_err(|e| HabaError::Config(e.to_string()))?;
        if !req.matches(&self.version) {
            return Err(HabaError::Config(format!(
                "unsupported responsive config version {} (expected {SUPPORTED_VERSION})",
                self.version
            )));
        }
        if !(self.base_width.is_finite() && self.base_width > 0.0) {
            return Err(HabaError::Config(format!(
                "base_width must be positive, got {}",
                self.base_width
            )));
        }
        if !(self.base_height.is_finite() && self.base_height > 0.0) {
            return Err(HabaError::Config(format!(
                "base_height must be positive, got {}",
                self.base_height
            )));
        }
        if !(self.floor_ratio > 0.0 && self.floor_ratio <= 1.0) {
            return Err(HabaError::Config(format!(
                "floor_ratio must be in (0, 1], got {}",
                self.floor_ratio
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppearanceConfig {
    /// Name of the token table to size layouts with.
    pub tokens: String,
    pub mode: ThemeMode,
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            tokens: "default".into(),
            mode: ThemeMode::System,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing` env-filter directive.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "haba=info".into(),
        }
    }
}

/// Light, dark or follow the OS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Dark,
    Light,
    #[default]
    System,
}

impl ThemeMode {
    pub const ALL: &[ThemeMode] = &[Self::System, Self::Dark, Self::Light];
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dark => write!(f, "Dark"),
            Self::Light => write!(f, "Light"),
            Self::System => write!(f, "System"),
        }
    }
}

impl AppConfig {
    /// Load the user config file if present, otherwise the built-in defaults.
    pub fn load() -> Result<Self, HabaError> {
        Self::load_from(&Self::config_path())
    }

    /// Load from an explicit path, falling back to defaults when it doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self, HabaError> {
        let config = if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Self::from_toml_str(&content)?
        } else {
            tracing::debug!("No config at {}, using defaults", path.display());
            Self::from_toml_str(DEFAULT_CONFIG)?
        };
        Ok(config)
    }

    /// Parse and validate a config document. Missing sections take defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, HabaError> {
        let config: AppConfig = toml::from_str(content)?;
        config.responsive.validate()?;
        Ok(config)
    }

    /// Save current config to the user config file.
    pub fn save(&self) -> Result<(), HabaError> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<(), HabaError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| HabaError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Path to user config file (XDG on Linux, AppData on Windows).
    pub fn config_path() -> PathBuf {
        Self::project_dirs()
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }

    /// Directory scanned for user token tables.
    pub fn tokens_dir() -> Option<PathBuf> {
        Self::project_dirs().map(|d| d.config_dir().join("tokens"))
    }

    /// Directory for logs and window state.
    pub fn data_dir() -> Option<PathBuf> {
        Self::project_dirs().map(|d| d.data_dir().to_path_buf())
    }

    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("", "", "haba")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_default_config_parses() {
        let config = AppConfig::from_toml_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.responsive, ResponsiveConfig::default());
        assert_eq!(config.appearance.tokens, "default");
        assert_eq!(config.appearance.mode, ThemeMode::System);
        assert_eq!(config.logging.filter, "haba=info");
    }

    #[test]
    fn test_missing_sections_take_defaults() {
        let config = AppConfig::from_toml_str("[appearance]\ntokens = \"compact\"\nmode = \"dark\"\n")
            .unwrap();
        assert_eq!(config.appearance.tokens, "compact");
        assert_eq!(config.responsive.base_width, 375.0);
    }

    #[test]
    fn test_rejects_bad_floor_ratio() {
        let mut responsive = ResponsiveConfig::default();
        responsive.floor_ratio = 1.5;
        assert!(responsive.validate().is_err());
        responsive.floor_ratio = 0.0;
        assert!(responsive.validate().is_err());
        responsive.floor_ratio = 1.0;
        assert!(responsive.validate().is_ok());
    }

    #[test]
    fn test_rejects_unsupported_version() {
        let mut responsive = ResponsiveConfig::default();
        responsive.version = Version::new(2, 0, 0);
        let err = responsive.validate().unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_rejects_bad_breakpoints_on_load() {
        let doc = r#"
[responsive]
version = "1.0.0"
base_width = 375.0
base_height = 812.0
floor_ratio = 0.8

[responsive.breakpoints]
medium = 414.0
large = 360.0
xlarge = 600.0
tablet = 768.0
"#;
        assert!(AppConfig::from_toml_str(doc).is_err());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let mut config = AppConfig::default();
        config.responsive.floor_ratio = 0.85;
        config.appearance.mode = ThemeMode::Light;
        config.save_to(&path).unwrap();

        let reloaded = AppConfig::load_from(&path).unwrap();
        assert_eq!(reloaded.responsive.floor_ratio, 0.85);
        assert_eq!(reloaded.appearance.mode, ThemeMode::Light);
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.responsive, ResponsiveConfig::default());
    }
}
