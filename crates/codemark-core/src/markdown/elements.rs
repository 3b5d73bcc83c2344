//! Markdown node types

use pulldown_cmark::Event;

/// Code found in a Markdown document, with its literal (unescaped) text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeNode {
    /// Block indented by four spaces
    IndentedBlock { literal: String },
    /// Fenced block with its info string (may be empty)
    FencedBlock { info: String, literal: String },
    /// Backtick-delimited inline span
    InlineSpan { literal: String },
}

impl CodeNode {
    pub fn literal(&self) -> &str {
        match self {
            Self::IndentedBlock { literal }
            | Self::FencedBlock { literal, .. }
            | Self::InlineSpan { literal } => literal,
        }
    }

    pub fn is_block(&self) -> bool {
        !matches!(self, Self::InlineSpan { .. })
    }

    /// Language tag taken from a fenced block's info string
    pub fn language_tag(&self) -> Option<&str> {
        match self {
            Self::FencedBlock { info, .. } => fence_language(info),
            _ => None,
        }
    }
}

/// A parsed document item: either collapsed code or any other parser event
#[derive(Debug, Clone, PartialEq)]
pub enum Node<'a> {
    Code(CodeNode),
    Event(Event<'a>),
}

/// Extract the language word from a fence info string.
///
/// `rust` -> `rust`, `rust,ignore` -> `rust`, `{.python .numberLines}` -> `python`
pub fn fence_language(info: &str) -> Option<&str> {
    let word = info.split_whitespace().next()?;
    let word = word.trim_start_matches('{').trim_start_matches('.');
    let word = word
        .split(&[',', '}'][..])
        .next()
        .unwrap_or_default()
        .trim();

    if word.is_empty() {
        None
    } else {
        Some(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fence_language() {
        assert_eq!(fence_language("rust"), Some("rust"));
        assert_eq!(fence_language("  python  extra words"), Some("python"));
        assert_eq!(fence_language("rust,ignore"), Some("rust"));
        assert_eq!(fence_language("{.haskell .numberLines}"), Some("haskell"));
        assert_eq!(fence_language(""), None);
        assert_eq!(fence_language("{}"), None);
    }

    #[test]
    fn test_code_node_accessors() {
        let fenced = CodeNode::FencedBlock {
            info: "js title=app.js".to_string(),
            literal: "let a;".to_string(),
        };
        assert!(fenced.is_block());
        assert_eq!(fenced.language_tag(), Some("js"));
        assert_eq!(fenced.literal(), "let a;");

        let inline = CodeNode::InlineSpan {
            literal: "x".to_string(),
        };
        assert!(!inline.is_block());
        assert_eq!(inline.language_tag(), None);
    }
}
