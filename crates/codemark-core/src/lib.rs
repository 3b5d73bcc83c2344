//! Core library for codemark
//!
//! Turns the code found in Markdown documents (fenced blocks, indented blocks
//! and inline spans) into syntax-highlighted HTML.
//!
//! ```ignore
//! let settings = Settings::default().into_shared();
//! let renderer = CodeNodeRenderer::with_syntect(SyntaxRegistry::shared_default(), settings);
//! let html = codemark_core::render_markdown("```rust\nfn main() {}\n```", &renderer);
//! ```

pub mod config;
pub mod escape;
pub mod highlight;
pub mod markdown;
pub mod renderer;
pub mod stylesheet;

pub use config::{Settings, SharedSettings};
pub use highlight::{
    ColorStyle, HighlightError, HighlightService, HighlightingMode, LanguageHandle,
    LanguageResolver, Rgb, SharedRegistry, StyledToken, SyntaxRegistry, ThemeProvider,
};
pub use markdown::{code_nodes, parse, render_markdown, render_page, CodeNode, Node};
pub use renderer::{CodeNodeRenderer, CodeSnippetHighlighter};
