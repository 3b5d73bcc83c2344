//! Code snippet to HTML

use std::sync::Arc;

use crate::config::SharedSettings;
use crate::escape::{escape_xml, push_escaped};
use crate::highlight::{
    ColorStyle, HighlightError, HighlightService, HighlightingMode, LanguageHandle,
    LanguageResolver, SettingsThemeProvider, SharedRegistry, StyledToken, SyntectHighlighter,
    SyntectLanguageResolver, ThemeProvider,
};

const CODE_OPEN: &str = "<code style='font-size:14pt'>";
const CODE_CLOSE: &str = "</code>";

/// Renders one code snippet as an HTML fragment.
///
/// Block code is wrapped in `<pre><code>`, inline code in `<code>`. Raw
/// snippet text never reaches the output unescaped, and no failure of a
/// collaborator makes rendering fail: output just gets plainer.
pub struct CodeSnippetHighlighter {
    resolver: Arc<dyn LanguageResolver>,
    service: Arc<dyn HighlightService>,
    theme: Arc<dyn ThemeProvider>,
}

impl CodeSnippetHighlighter {
    pub fn new(
        resolver: Arc<dyn LanguageResolver>,
        service: Arc<dyn HighlightService>,
        theme: Arc<dyn ThemeProvider>,
    ) -> Self {
        Self {
            resolver,
            service,
            theme,
        }
    }

    /// Highlighter backed by syntect, reading `settings` on every render
    pub fn with_syntect(registry: SharedRegistry, settings: SharedSettings) -> Self {
        Self::new(
            Arc::new(SyntectLanguageResolver::new(registry.clone())),
            Arc::new(SyntectHighlighter::new(registry.clone(), settings.clone())),
            Arc::new(SettingsThemeProvider::new(registry, settings)),
        )
    }

    /// Render `snippet` as block or inline code.
    ///
    /// `language_tag` only matters for block code with highlighting enabled;
    /// an empty or unknown tag falls back to plain text.
    pub fn render(&self, snippet: &str, language_tag: Option<&str>, is_block: bool) -> String {
        let mode = HighlightingMode::determine(is_block, self.theme.block_highlighting_enabled());

        let body = match mode {
            HighlightingMode::Semantic => self.highlighted_body(snippet, language_tag),
            HighlightingMode::Escaped | HighlightingMode::InlineEscaped => {
                escape_xml(snippet).into_owned()
            }
        };

        wrap(mode, &body)
    }

    fn highlighted_body(&self, snippet: &str, language_tag: Option<&str>) -> String {
        let saturation = self.theme.saturation();
        let language = self.resolve_language(language_tag);

        let spans = match self.tokenize(&language, snippet, saturation) {
            Ok(tokens) => token_spans(&tokens),
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    language = language.name(),
                    "Highlighting failed, falling back to escaped code"
                );
                escape_xml(snippet).into_owned()
            }
        };

        match self.theme.default_code_style() {
            Ok(style) => styled_span(&style.without_background().desaturated(saturation), &spans),
            Err(e) => {
                tracing::warn!(error = %e, "No default code style, rendering without outer span");
                spans
            }
        }
    }

    fn resolve_language(&self, language_tag: Option<&str>) -> LanguageHandle {
        let Some(tag) = language_tag.map(str::trim).filter(|tag| !tag.is_empty()) else {
            return self.resolver.plain_text();
        };

        self.resolver.resolve(tag).unwrap_or_else(|| {
            tracing::debug!(tag, "Unknown language, highlighting as plain text");
            self.resolver.plain_text()
        })
    }

    /// Tokenize, retrying as plain text when the language vanished since it was resolved
    fn tokenize(
        &self,
        language: &LanguageHandle,
        snippet: &str,
        saturation: f32,
    ) -> Result<Vec<StyledToken>, HighlightError> {
        match self.service.highlight(language, snippet, saturation) {
            Err(HighlightError::UnresolvableLanguage(name)) if !language.is_plain_text() => {
                tracing::debug!(language = %name, "Language not available, retrying as plain text");
                self.service
                    .highlight(&self.resolver.plain_text(), snippet, saturation)
            }
            result => result,
        }
    }
}

/// One `<span>` per token, text escaped
fn token_spans(tokens: &[StyledToken]) -> String {
    let mut out = String::new();
    for token in tokens {
        out.push_str("<span style=\"");
        out.push_str(&token.style.to_css());
        out.push_str("\">");
        push_escaped(&mut out, &token.text);
        out.push_str("</span>");
    }
    out
}

/// Wrap already-escaped HTML in a styled span
fn styled_span(style: &ColorStyle, inner_html: &str) -> String {
    format!("<span style=\"{}\">{}</span>", style.to_css(), inner_html)
}

fn wrap(mode: HighlightingMode, body: &str) -> String {
    if mode.is_block() {
        format!("\n<pre>{CODE_OPEN}{body}{CODE_CLOSE}</pre>\n")
    } else {
        format!("\n{CODE_OPEN}{body}{CODE_CLOSE}\n")
    }
}
