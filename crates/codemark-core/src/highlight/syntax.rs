//! Syntax highlighting using syntect

use syntect::easy::HighlightLines;
use syntect::util::LinesWithEndings;

use super::{
    ColorStyle, HighlightError, HighlightService, LanguageHandle, LanguageResolver, Rgb,
    SharedRegistry, StyledToken,
};
use crate::config::SharedSettings;

/// Resolves fence tags against the syntaxes in a [`SharedRegistry`]
pub struct SyntectLanguageResolver {
    registry: SharedRegistry,
}

impl SyntectLanguageResolver {
    pub fn new(registry: SharedRegistry) -> Self {
        Self { registry }
    }
}

impl LanguageResolver for SyntectLanguageResolver {
    fn resolve(&self, tag: &str) -> Option<LanguageHandle> {
        let registry = self.registry.read();
        registry
            .find_syntax(tag)
            .map(|syntax| LanguageHandle::new(syntax.name.as_str()))
    }
}

/// Tokenizes with syntect using the theme named in the settings
pub struct SyntectHighlighter {
    registry: SharedRegistry,
    settings: SharedSettings,
}

impl SyntectHighlighter {
    pub fn new(registry: SharedRegistry, settings: SharedSettings) -> Self {
        Self { registry, settings }
    }
}

impl HighlightService for SyntectHighlighter {
    fn highlight(
        &self,
        language: &LanguageHandle,
        text: &str,
        saturation: f32,
    ) -> Result<Vec<StyledToken>, HighlightError> {
        let theme_name = self.settings.read().theme.clone();

        // Held until tokenization finishes; dropped on every return path
        let registry = self.registry.read();
        let syntaxes = registry.syntaxes();
        let syntax = syntaxes
            .find_syntax_by_name(language.name())
            .ok_or_else(|| HighlightError::UnresolvableLanguage(language.name().to_string()))?;
        let theme = registry.theme(&theme_name)?;

        // Token backgrounds matching the theme background are left to the page
        let theme_background: Option<Rgb> = theme.settings.background.map(Rgb::from);
        let mut highlighter = HighlightLines::new(syntax, theme);
        let mut tokens: Vec<StyledToken> = Vec::new();

        for line in LinesWithEndings::from(text) {
            for (style, piece) in highlighter.highlight_line(line, syntaxes)? {
                let mut style = ColorStyle::from(style);
                if style.background == theme_background {
                    style.background = None;
                }
                let style = style.desaturated(saturation);

                // Newlines stay in the token text, `<pre>` needs them
                match tokens.last_mut() {
                    Some(last) if last.style == style => last.text.push_str(piece),
                    _ => tokens.push(StyledToken::new(piece, style)),
                }
            }
        }

        Ok(tokens)
    }
}
