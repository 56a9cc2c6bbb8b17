//! Editor configuration.
//!
//! The interaction tunables (proximity threshold, canvas size) with
//! TOML persistence in the platform config directory. Defaults match
//! the reference UI constants in `polydraw-core`.

use anyhow::{Context, Result};
use polydraw_core::constants;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Tunable interaction settings for one editing session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Half-width of the proximity box used for the closing click.
    /// Independent of the marker radius; see
    /// [`polydraw_core::proximity`].
    pub proximity_threshold: f64,
    /// Interactive canvas width in canvas units.
    pub canvas_width: u32,
    /// Interactive canvas height in canvas units.
    pub canvas_height: u32,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            proximity_threshold: constants::PROXIMITY_THRESHOLD,
            canvas_width: constants::CANVAS_WIDTH,
            canvas_height: constants::CANVAS_HEIGHT,
        }
    }
}

impl EditorConfig {
    /// Default config file location
    /// (`<platform config dir>/polydraw/editor.toml`).
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("polydraw").join("editor.toml"))
    }

    /// Loads from a TOML file, falling back to defaults when the file
    /// does not exist.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("reading editor config from {}", path.display()))?;
        let config: Self = toml::from_str(&contents)
            .with_context(|| format!("parsing editor config {}", path.display()))?;
        Ok(config.sanitized())
    }

    /// Saves as TOML, creating parent directories as needed.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating config directory {}", parent.display()))?;
        }
        let contents = toml::to_string_pretty(self).context("serializing editor config")?;
        std::fs::write(path, contents)
            .with_context(|| format!("writing editor config to {}", path.display()))?;
        Ok(())
    }

    /// Replaces values that would break the interaction rules with
    /// the defaults: the threshold must be positive and the canvas
    /// must have area.
    pub fn sanitized(mut self) -> Self {
        if !self.proximity_threshold.is_finite() || self.proximity_threshold <= 0.0 {
            self.proximity_threshold = constants::PROXIMITY_THRESHOLD;
        }
        if self.canvas_width == 0 {
            self.canvas_width = constants::CANVAS_WIDTH;
        }
        if self.canvas_height == 0 {
            self.canvas_height = constants::CANVAS_HEIGHT;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_ui() {
        let config = EditorConfig::default();
        assert_eq!(config.proximity_threshold, 35.0);
        assert_eq!(config.canvas_width, 750);
        assert_eq!(config.canvas_height, 650);
    }

    #[test]
    fn test_sanitize_rejects_nonpositive_threshold() {
        let config = EditorConfig {
            proximity_threshold: -1.0,
            ..Default::default()
        };
        assert_eq!(config.sanitized().proximity_threshold, 35.0);

        let config = EditorConfig {
            proximity_threshold: f64::NAN,
            ..Default::default()
        };
        assert_eq!(config.sanitized().proximity_threshold, 35.0);
    }

    #[test]
    fn test_toml_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("editor.toml");

        let config = EditorConfig {
            proximity_threshold: 20.0,
            canvas_width: 640,
            canvas_height: 480,
        };
        config.save_to_file(&path).unwrap();
        let loaded = EditorConfig::load_from_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = EditorConfig::load_from_file(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(loaded, EditorConfig::default());
    }

    #[test]
    fn test_partial_toml_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("editor.toml");
        std::fs::write(&path, "proximity_threshold = 50.0\n").unwrap();

        let loaded = EditorConfig::load_from_file(&path).unwrap();
        assert_eq!(loaded.proximity_threshold, 50.0);
        assert_eq!(loaded.canvas_width, 750);
    }
}
