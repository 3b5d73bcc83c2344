//! Shared syntax and theme definitions

use std::path::Path;
use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use syntect::highlighting::{Theme, ThemeSet};
use syntect::parsing::{SyntaxReference, SyntaxSet};

use super::HighlightError;
use crate::config::Settings;

/// Registry shared between resolvers, highlighters and theme providers.
///
/// Tokenization holds the read lock; extending the registry takes the write lock.
pub type SharedRegistry = Arc<RwLock<SyntaxRegistry>>;

/// Global registry with syntect's bundled syntaxes and themes - loaded on first use
static DEFAULT_REGISTRY: Lazy<SharedRegistry> =
    Lazy::new(|| Arc::new(RwLock::new(SyntaxRegistry::load_defaults())));

/// Syntaxes and themes available for highlighting
pub struct SyntaxRegistry {
    syntaxes: SyntaxSet,
    themes: ThemeSet,
}

impl SyntaxRegistry {
    /// Bundled syntaxes (newline-terminated lines) and themes
    pub fn load_defaults() -> Self {
        Self {
            syntaxes: SyntaxSet::load_defaults_newlines(),
            themes: ThemeSet::load_defaults(),
        }
    }

    /// Handle to the process-wide default registry
    pub fn shared_default() -> SharedRegistry {
        Arc::clone(&DEFAULT_REGISTRY)
    }

    /// Defaults plus any extra syntax/theme folders named in the settings
    pub fn from_settings(settings: &Settings) -> Result<Self, HighlightError> {
        let mut registry = Self::load_defaults();
        if let Some(dir) = &settings.syntax_dir {
            registry.add_syntaxes_from_folder(dir)?;
        }
        if let Some(dir) = &settings.theme_dir {
            registry.add_themes_from_folder(dir)?;
        }
        Ok(registry)
    }

    pub fn into_shared(self) -> SharedRegistry {
        Arc::new(RwLock::new(self))
    }

    pub fn syntaxes(&self) -> &SyntaxSet {
        &self.syntaxes
    }

    /// Load every `.sublime-syntax` file below `path`
    pub fn add_syntaxes_from_folder(&mut self, path: &Path) -> Result<(), HighlightError> {
        // Build from a copy so a failed load leaves the current set intact
        let mut builder = self.syntaxes.clone().into_builder();
        builder
            .add_from_folder(path, true)
            .map_err(|source| HighlightError::Load {
                kind: "syntaxes",
                path: path.to_path_buf(),
                source,
            })?;
        self.syntaxes = builder.build();
        tracing::debug!(path = %path.display(), "Loaded extra syntaxes");
        Ok(())
    }

    /// Load every `.tmTheme` file below `path`
    pub fn add_themes_from_folder(&mut self, path: &Path) -> Result<(), HighlightError> {
        self.themes
            .add_from_folder(path)
            .map_err(|source| HighlightError::Load {
                kind: "themes",
                path: path.to_path_buf(),
                source,
            })?;
        tracing::debug!(path = %path.display(), "Loaded extra themes");
        Ok(())
    }

    /// Find a syntax for a language tag.
    ///
    /// Tries the tag as a token (name or extension), then as a file
    /// extension, then as a case-insensitive syntax name.
    pub fn find_syntax(&self, tag: &str) -> Option<&SyntaxReference> {
        let tag = tag.trim();
        if tag.is_empty() {
            return None;
        }

        self.syntaxes
            .find_syntax_by_token(tag)
            .or_else(|| self.syntaxes.find_syntax_by_extension(tag))
            .or_else(|| {
                self.syntaxes
                    .syntaxes()
                    .iter()
                    .find(|syntax| syntax.name.eq_ignore_ascii_case(tag))
            })
    }

    pub fn theme(&self, name: &str) -> Result<&Theme, HighlightError> {
        self.themes
            .themes
            .get(name)
            .ok_or_else(|| HighlightError::ThemeNotFound(name.to_string()))
    }

    /// Names of all known syntaxes, sorted
    pub fn language_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .syntaxes
            .syntaxes()
            .iter()
            .map(|syntax| syntax.name.clone())
            .collect();
        names.sort();
        names
    }

    /// Names of all known themes, sorted
    pub fn theme_names(&self) -> Vec<String> {
        // BTreeMap keys are already ordered
        self.themes.themes.keys().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_syntax_by_token_and_extension() {
        let registry = SyntaxRegistry::load_defaults();
        assert_eq!(registry.find_syntax("rust").map(|s| s.name.as_str()), Some("Rust"));
        assert_eq!(registry.find_syntax("rs").map(|s| s.name.as_str()), Some("Rust"));
        assert_eq!(
            registry.find_syntax("py").map(|s| s.name.as_str()),
            Some("Python")
        );
    }

    #[test]
    fn test_find_syntax_by_name_ignores_case() {
        let registry = SyntaxRegistry::load_defaults();
        assert_eq!(
            registry.find_syntax("PYTHON").map(|s| s.name.as_str()),
            Some("Python")
        );
    }

    #[test]
    fn test_unknown_and_empty_tags() {
        let registry = SyntaxRegistry::load_defaults();
        assert!(registry.find_syntax("not-a-real-language").is_none());
        assert!(registry.find_syntax("   ").is_none());
    }

    #[test]
    fn test_theme_lookup() {
        let registry = SyntaxRegistry::load_defaults();
        assert!(registry.theme("base16-ocean.dark").is_ok());
        assert!(matches!(
            registry.theme("no-such-theme"),
            Err(HighlightError::ThemeNotFound(_))
        ));
        assert!(registry
            .theme_names()
            .contains(&"base16-ocean.dark".to_string()));
    }

    #[test]
    fn test_missing_syntax_folder_keeps_defaults() {
        let mut registry = SyntaxRegistry::load_defaults();
        let before = registry.language_names().len();
        let result = registry.add_syntaxes_from_folder(Path::new("/definitely/not/here"));
        assert!(result.is_err());
        assert_eq!(registry.language_names().len(), before);
    }
}
