/// How a code snippet is turned into HTML
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HighlightingMode {
    /// Tokenized, one colored span per token, block wrapper
    Semantic,
    /// Escaped verbatim, block wrapper
    Escaped,
    /// Escaped verbatim, inline wrapper
    InlineEscaped,
}

impl HighlightingMode {
    /// Pick the mode for a snippet.
    ///
    /// Only block code is ever tokenized; inline spans stay plain regardless
    /// of the setting.
    pub fn determine(is_block: bool, block_highlighting_enabled: bool) -> Self {
        match (is_block, block_highlighting_enabled) {
            (true, true) => Self::Semantic,
            (true, false) => Self::Escaped,
            (false, _) => Self::InlineEscaped,
        }
    }

    pub fn is_block(self) -> bool {
        !matches!(self, Self::InlineEscaped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_mode_follows_setting() {
        assert_eq!(
            HighlightingMode::determine(true, true),
            HighlightingMode::Semantic
        );
        assert_eq!(
            HighlightingMode::determine(true, false),
            HighlightingMode::Escaped
        );
    }

    #[test]
    fn test_inline_never_semantic() {
        assert_eq!(
            HighlightingMode::determine(false, true),
            HighlightingMode::InlineEscaped
        );
        assert_eq!(
            HighlightingMode::determine(false, false),
            HighlightingMode::InlineEscaped
        );
        assert!(!HighlightingMode::InlineEscaped.is_block());
    }
}
