//! Rendering settings and the config file they are loaded from
//!
//! ```toml
//! block_highlighting = true
//! saturation = 0.8
//! theme = "base16-ocean.dark"
//! font_family = "Source Code Pro"
//! syntax_dir = "~/.config/codemark/syntaxes"
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

/// Settings shared with the theme provider and highlighter, read on every render
pub type SharedSettings = Arc<RwLock<Settings>>;

/// Saturation used for highlighted code in rendered documents
pub const DEFAULT_SATURATION: f32 = 0.8;

pub const DEFAULT_THEME: &str = "base16-ocean.dark";

pub const DEFAULT_FONT_FAMILY: &str = "Source Code Pro";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Semantic highlighting for fenced and indented blocks
    pub block_highlighting: bool,
    /// Color saturation factor, 0.0 (gray) to 1.0 (theme colors)
    pub saturation: f32,
    /// syntect theme name
    pub theme: String,
    /// Monospace font used by the code stylesheet
    pub font_family: String,
    /// Extra `.sublime-syntax` definitions
    pub syntax_dir: Option<PathBuf>,
    /// Extra `.tmTheme` themes
    pub theme_dir: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            block_highlighting: true,
            saturation: DEFAULT_SATURATION,
            theme: DEFAULT_THEME.to_string(),
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            syntax_dir: None,
            theme_dir: None,
        }
    }
}

impl Settings {
    /// Default config location: `<config dir>/codemark/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("codemark").join("config.toml"))
    }

    /// Load settings from a TOML file; a missing file yields the defaults
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let settings: Self = toml::from_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        Ok(settings)
    }

    /// Saturation clamped to `0.0..=1.0`; NaN counts as fully saturated
    pub fn effective_saturation(&self) -> f32 {
        if self.saturation.is_nan() {
            1.0
        } else {
            self.saturation.clamp(0.0, 1.0)
        }
    }

    pub fn into_shared(self) -> SharedSettings {
        Arc::new(RwLock::new(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load(&dir.path().join("config.toml")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "block_highlighting = false\ntheme = \"InspiredGitHub\"").unwrap();

        let settings = Settings::load(file.path()).unwrap();
        assert!(!settings.block_highlighting);
        assert_eq!(settings.theme, "InspiredGitHub");
        assert_eq!(settings.saturation, DEFAULT_SATURATION);
        assert_eq!(settings.font_family, DEFAULT_FONT_FAMILY);
        assert_eq!(settings.syntax_dir, None);
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "saturation = \"very\"").unwrap();

        let err = Settings::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("Invalid config file"));
    }

    #[test]
    fn test_saturation_is_clamped() {
        let mut settings = Settings {
            saturation: 3.0,
            ..Settings::default()
        };
        assert_eq!(settings.effective_saturation(), 1.0);
        settings.saturation = -1.0;
        assert_eq!(settings.effective_saturation(), 0.0);
        settings.saturation = f32::NAN;
        assert_eq!(settings.effective_saturation(), 1.0);
    }
}
