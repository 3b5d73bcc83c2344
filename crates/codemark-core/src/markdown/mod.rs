//! Markdown rendering with highlighted code
//!
//! Only code is rendered by codemark itself; every other element goes
//! through pulldown-cmark's HTML writer unchanged.

mod elements;
mod html;
mod parser;

pub use elements::{fence_language, CodeNode, Node};
pub use html::{render_markdown, render_page};
pub use parser::{code_nodes, parse};
