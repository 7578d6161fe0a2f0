//! Persist and restore the previewer window size and position.
//!
//! Saves a small JSON file to the platform data dir (e.g.
//! `~/.local/share/haba/window.json`).

use std::path::{Path, PathBuf};

use iced::{Point, Size};
use serde::{Deserialize, Serialize};

const FILE_NAME: &str = "window.json";

/// Persisted window geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowState {
    pub width: f32,
    pub height: f32,
    pub x: f32,
    pub y: f32,
}

impl Default for WindowState {
    /// Opens at the reference phone size so the first paint is the baseline tier.
    fn default() -> Self {
        Self {
            width: 375.0 + crate::style::NAV_RAIL_WIDTH,
            height: 812.0,
            x: -1.0,
            y: -1.0,
        }
    }
}

impl WindowState {
    /// Window size, never smaller than the narrowest supported device.
    pub fn size(&self) -> Size {
        Size::new(self.width.max(320.0), self.height.max(480.0))
    }

    /// Saved position, if one was recorded.
    pub fn position(&self) -> Option<Point> {
        if self.x >= 0.0 && self.y >= 0.0 {
            Some(Point::new(self.x, self.y))
        } else {
            None
        }
    }

    /// Load from disk, returning default if file doesn't exist or is invalid.
    pub fn load() -> Self {
        state_path()
            .map(|path| Self::load_from(&path))
            .unwrap_or_default()
    }

    pub fn load_from(path: &Path) -> Self {
        std::fs::read_to_string(path)
            .ok()
            .and_then(|content| serde_json::from_str(&content).ok())
            .unwrap_or_default()
    }

    /// Save to disk. Errors are logged but not propagated.
    pub fn save_to(&self, path: &Path) {
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(path, json) {
                    tracing::warn!("Failed to save window state: {e}");
                }
            }
            Err(e) => tracing::warn!("Failed to serialize window state: {e}"),
        }
    }
}

/// Default location of the state file in the platform data dir.
pub fn state_path() -> Option<PathBuf> {
    haba_core::AppConfig::data_dir().map(|dir| dir.join(FILE_NAME))
}
