//! HTML rendering of code nodes

mod node;
mod snippet;

pub use node::CodeNodeRenderer;
pub use snippet::CodeSnippetHighlighter;
