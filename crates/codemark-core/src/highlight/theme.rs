use super::{ColorStyle, HighlightError, Rgb, SharedRegistry, ThemeProvider};
use crate::config::SharedSettings;

/// Theme provider reading the shared settings on every call
pub struct SettingsThemeProvider {
    registry: SharedRegistry,
    settings: SharedSettings,
}

impl SettingsThemeProvider {
    pub fn new(registry: SharedRegistry, settings: SharedSettings) -> Self {
        Self { registry, settings }
    }
}

impl ThemeProvider for SettingsThemeProvider {
    fn default_code_style(&self) -> Result<ColorStyle, HighlightError> {
        let theme_name = self.settings.read().theme.clone();
        let registry = self.registry.read();
        let theme = registry.theme(&theme_name)?;

        let style = ColorStyle {
            foreground: theme.settings.foreground.map(Rgb::from),
            background: theme.settings.background.map(Rgb::from),
            ..ColorStyle::default()
        };
        Ok(style.without_background())
    }

    fn saturation(&self) -> f32 {
        self.settings.read().effective_saturation()
    }

    fn block_highlighting_enabled(&self) -> bool {
        self.settings.read().block_highlighting
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::highlight::SyntaxRegistry;

    #[test]
    fn test_default_code_style_has_no_background() {
        let provider = SettingsThemeProvider::new(
            SyntaxRegistry::shared_default(),
            Settings::default().into_shared(),
        );
        let style = provider.default_code_style().unwrap();
        // base16-ocean.dark foreground
        assert_eq!(style.foreground, Some(Rgb::new(192, 197, 206)));
        assert_eq!(style.background, None);
    }

    #[test]
    fn test_settings_are_read_fresh() {
        let settings = Settings::default().into_shared();
        let provider = SettingsThemeProvider::new(SyntaxRegistry::shared_default(), settings.clone());
        assert!(provider.block_highlighting_enabled());

        settings.write().block_highlighting = false;
        settings.write().saturation = 0.25;
        assert!(!provider.block_highlighting_enabled());
        assert_eq!(provider.saturation(), 0.25);

        settings.write().theme = "no-such-theme".to_string();
        assert!(matches!(
            provider.default_code_style(),
            Err(HighlightError::ThemeNotFound(_))
        ));
    }
}
