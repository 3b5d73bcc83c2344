use super::CodeSnippetHighlighter;
use crate::config::SharedSettings;
use crate::highlight::SharedRegistry;
use crate::markdown::{CodeNode, Node};

/// Dispatches Markdown code nodes to the snippet highlighter
pub struct CodeNodeRenderer {
    highlighter: CodeSnippetHighlighter,
}

impl CodeNodeRenderer {
    pub fn new(highlighter: CodeSnippetHighlighter) -> Self {
        Self { highlighter }
    }

    pub fn with_syntect(registry: SharedRegistry, settings: SharedSettings) -> Self {
        Self::new(CodeSnippetHighlighter::with_syntect(registry, settings))
    }

    /// Render a node; anything but code renders to nothing and is logged
    pub fn render_node(&self, node: &Node<'_>) -> String {
        match node {
            Node::Code(code) => self.render_code(code),
            Node::Event(event) => {
                tracing::warn!(?event, "Unknown node type, not rendering it");
                String::new()
            }
        }
    }

    pub fn render_code(&self, code: &CodeNode) -> String {
        match code {
            CodeNode::IndentedBlock { literal } => self.highlighter.render(literal, None, true),
            CodeNode::FencedBlock { literal, .. } => {
                self.highlighter.render(literal, code.language_tag(), true)
            }
            CodeNode::InlineSpan { literal } => self.highlighter.render(literal, None, false),
        }
    }
}
