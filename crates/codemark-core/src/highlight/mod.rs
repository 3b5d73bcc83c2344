//! Syntax highlighting collaborators
//!
//! The snippet highlighter only talks to three traits: a [`LanguageResolver`]
//! that maps fence tags to languages, a [`HighlightService`] that tokenizes,
//! and a [`ThemeProvider`] that answers settings and default colors. The
//! syntect-backed implementations live in the submodules.

mod error;
mod mode;
mod registry;
mod style;
mod syntax;
mod theme;

pub use error::HighlightError;
pub use mode::HighlightingMode;
pub use registry::{SharedRegistry, SyntaxRegistry};
pub use style::{ColorStyle, Rgb};
pub use syntax::{SyntectHighlighter, SyntectLanguageResolver};
pub use theme::SettingsThemeProvider;

/// Name syntect gives its plain text syntax
pub const PLAIN_TEXT: &str = "Plain Text";

/// Identity of a resolved language.
///
/// Owned, so it can be carried around without holding a lock on the registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LanguageHandle {
    name: String,
}

impl LanguageHandle {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The plain text fallback
    pub fn plain_text() -> Self {
        Self::new(PLAIN_TEXT)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_plain_text(&self) -> bool {
        self.name == PLAIN_TEXT
    }
}

/// A slice of source text with the style it was highlighted with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledToken {
    pub text: String,
    pub style: ColorStyle,
}

impl StyledToken {
    pub fn new(text: impl Into<String>, style: ColorStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

/// Maps free-text language tags to a tokenizer-capable language
pub trait LanguageResolver: Send + Sync {
    /// Resolve a tag such as `rust`, `rs` or `Python`; `None` when unknown
    fn resolve(&self, tag: &str) -> Option<LanguageHandle>;

    /// Language used when a tag is absent or unknown
    fn plain_text(&self) -> LanguageHandle {
        LanguageHandle::plain_text()
    }
}

/// Lexical tokenizer producing styled slices of the input
pub trait HighlightService: Send + Sync {
    /// Tokenize `text` as `language`.
    ///
    /// Colors are desaturated by `saturation` (1.0 leaves them untouched).
    /// Concatenating the returned token texts yields `text` again.
    fn highlight(
        &self,
        language: &LanguageHandle,
        text: &str,
        saturation: f32,
    ) -> Result<Vec<StyledToken>, HighlightError>;
}

/// Current color scheme and highlighting settings
///
/// Queried on every render, implementations must not cache across calls.
pub trait ThemeProvider: Send + Sync {
    /// Default text style of the active scheme, background cleared
    fn default_code_style(&self) -> Result<ColorStyle, HighlightError>;

    /// Saturation factor applied to highlighted colors
    fn saturation(&self) -> f32;

    /// Whether block code gets semantic highlighting
    fn block_highlighting_enabled(&self) -> bool;
}
