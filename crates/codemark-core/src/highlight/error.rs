use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the highlighting collaborators.
///
/// None of these abort a render: the snippet highlighter logs them and
/// degrades its output instead.
#[derive(Debug, Error)]
pub enum HighlightError {
    #[error("no syntax available for language `{0}`")]
    UnresolvableLanguage(String),

    #[error("theme `{0}` not found")]
    ThemeNotFound(String),

    #[error("tokenization failed: {0}")]
    Tokenize(#[from] syntect::Error),

    #[error("failed to load {kind} from {}: {source}", path.display())]
    Load {
        kind: &'static str,
        path: PathBuf,
        #[source]
        source: syntect::LoadingError,
    },
}
