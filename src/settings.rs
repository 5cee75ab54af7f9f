//! Palette settings and preferences
//!
//! Persisted as JSON in the user's config directory.

use glam::Vec2;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::consts::DEFAULT_GRID_STEP;
use crate::error::{Result, StyleError};
use crate::geometry::snap_point;

/// Saved position and size of the palette dock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DockGeometry {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

/// Palette settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaletteSettings {
    /// Style file opened last, reloaded on refresh
    #[serde(default)]
    pub style_file: Option<PathBuf>,
    /// Dock geometry from the last close
    #[serde(default)]
    pub dock: Option<DockGeometry>,
    /// Grid step used when snapping node positions (0 disables snapping)
    #[serde(default = "default_grid_step")]
    pub grid_step: f32,
    /// Whether the palette was open
    #[serde(default = "default_visible")]
    pub visible: bool,
}

fn default_grid_step() -> f32 {
    DEFAULT_GRID_STEP
}

fn default_visible() -> bool {
    true
}

impl Default for PaletteSettings {
    fn default() -> Self {
        Self {
            style_file: None,
            dock: None,
            grid_step: DEFAULT_GRID_STEP,
            visible: true,
        }
    }
}

impl PaletteSettings {
    const APP_DIR: &'static str = "tikzit-styles";
    const FILE_NAME: &'static str = "settings.json";

    /// `<config dir>/tikzit-styles/settings.json`, if the platform has one
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(Self::APP_DIR).join(Self::FILE_NAME))
    }

    /// Snap a position to the configured grid
    pub fn snap(&self, p: Vec2) -> Vec2 {
        snap_point(self.grid_step, p)
    }

    /// Load settings, falling back to defaults when the file is missing or bad
    pub fn load_from(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    warn!("Ignoring unreadable settings {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(_) => {
                info!("Using default settings");
                Self::default()
            }
        }
    }

    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| StyleError::io(parent, e))?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|e| StyleError::io(path, e))?;
        info!("Settings saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = PaletteSettings::default();
        assert_eq!(settings.style_file, None);
        assert_eq!(settings.grid_step, DEFAULT_GRID_STEP);
        assert!(settings.visible);
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let settings = PaletteSettings {
            style_file: Some(PathBuf::from("/tmp/styles.tikzstyles")),
            dock: Some(DockGeometry {
                x: 10,
                y: -4,
                width: 240,
                height: 600,
            }),
            grid_step: 0.5,
            visible: false,
        };
        settings.save_to(&path).unwrap();
        assert_eq!(PaletteSettings::load_from(&path), settings);
    }

    #[test]
    fn test_missing_or_bad_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json");
        assert_eq!(PaletteSettings::load_from(&missing), PaletteSettings::default());

        let bad = dir.path().join("bad.json");
        std::fs::write(&bad, "{ not json").unwrap();
        assert_eq!(PaletteSettings::load_from(&bad), PaletteSettings::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let settings: PaletteSettings = serde_json::from_str(r#"{"visible": false}"#).unwrap();
        assert!(!settings.visible);
        assert_eq!(settings.grid_step, DEFAULT_GRID_STEP);
    }

    #[test]
    fn test_snap_uses_grid_step() {
        let mut settings = PaletteSettings::default();
        assert_eq!(settings.snap(Vec2::new(0.3, 0.9)), Vec2::new(0.25, 1.0));
        settings.grid_step = 0.0;
        assert_eq!(settings.snap(Vec2::new(0.3, 0.9)), Vec2::new(0.3, 0.9));
    }
}
