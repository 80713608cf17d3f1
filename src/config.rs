/// Toolbar configuration
///
/// Stored as JSON next to the user's other config:
/// - Linux: ~/.config/canvas-staging/toolbar.json
/// - macOS: ~/Library/Application Support/canvas-staging/toolbar.json
/// - Windows: %APPDATA%\canvas-staging\toolbar.json
///
/// `CANVAS_STAGING_CONFIG` overrides the location. Every field is optional.

use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

const CONFIG_ENV: &str = "CANVAS_STAGING_CONFIG";

/// Where the toolbar floats over the canvas
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Top,
    #[default]
    Bottom,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct ToolbarConfig {
    /// Glyph size of the button icons in pixels
    pub icon_size: f32,
    /// Gap between buttons
    pub spacing: f32,
    /// Inner padding of the toolbar container
    pub padding: f32,
    pub position: Position,
    /// Left/Right/Enter shortcuts while images are staged
    pub hotkeys: bool,
}

impl Default for ToolbarConfig {
    fn default() -> Self {
        Self {
            icon_size: 18.0,
            spacing: 6.0,
            padding: 8.0,
            position: Position::Bottom,
            hotkeys: true,
        }
    }
}

impl ToolbarConfig {
    /// Parse from a JSON string
    pub fn from_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Default config file location
    pub fn path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Some(PathBuf::from(path));
        }

        let mut path = dirs::config_dir()?;
        path.push("canvas-staging");
        path.push("toolbar.json");
        Some(path)
    }

    /// Read the config file at `path`. A missing file yields the defaults.
    pub async fn load(path: &Path) -> Result<Self> {
        let json = match tokio::fs::read_to_string(path).await {
            Ok(json) => json,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(Error::ConfigRead {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        Self::from_json(&json).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load from the default location, falling back to defaults on any error
    pub async fn load_or_default() -> Self {
        let Some(path) = Self::path() else {
            warn!("⚠️  No config directory available, using default toolbar settings");
            return Self::default();
        };

        match Self::load(&path).await {
            Ok(config) => {
                info!("⚙️  Toolbar config loaded from {}", path.display());
                config
            }
            Err(err) => {
                warn!("⚠️  {}; using default toolbar settings", err);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_fills_defaults() {
        let config = ToolbarConfig::from_json(r#"{ "position": "top", "icon_size": 24 }"#).unwrap();

        assert_eq!(config.position, Position::Top);
        assert_eq!(config.icon_size, 24.0);
        assert_eq!(config.spacing, ToolbarConfig::default().spacing);
        assert!(config.hotkeys);
    }

    #[test]
    fn test_empty_object_is_default() {
        let config = ToolbarConfig::from_json("{}").unwrap();
        assert_eq!(config, ToolbarConfig::default());
    }

    #[test]
    fn test_unknown_position_is_rejected() {
        assert!(ToolbarConfig::from_json(r#"{ "position": "left" }"#).is_err());
    }

    #[test]
    fn test_load_missing_file_is_default() {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        let path = std::env::temp_dir().join("canvas-staging-test-missing/toolbar.json");

        let config = runtime.block_on(ToolbarConfig::load(&path)).unwrap();
        assert_eq!(config, ToolbarConfig::default());
    }

    #[test]
    fn test_load_malformed_file_errors() {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        let dir = std::env::temp_dir().join(format!("canvas-staging-test-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("toolbar.json");
        std::fs::write(&path, "{ not json").unwrap();

        let result = runtime.block_on(ToolbarConfig::load(&path));
        assert!(matches!(result, Err(Error::ConfigParse { .. })));

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
