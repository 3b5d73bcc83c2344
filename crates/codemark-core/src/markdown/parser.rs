//! Markdown parsing using pulldown-cmark

use pulldown_cmark::{CodeBlockKind, Event, Options, Parser, Tag, TagEnd};

use super::elements::{CodeNode, Node};

/// Parse markdown text into nodes, collapsing every code region into one [`CodeNode`]
pub fn parse(text: &str) -> Vec<Node<'_>> {
    let options =
        Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS;

    let mut events = Parser::new_ext(text, options);
    let mut nodes = Vec::new();

    while let Some(event) = events.next() {
        match event {
            Event::Start(Tag::CodeBlock(kind)) => {
                let literal = collect_code_block(&mut events);
                let code = match kind {
                    CodeBlockKind::Fenced(info) => CodeNode::FencedBlock {
                        info: info.into_string(),
                        literal,
                    },
                    CodeBlockKind::Indented => CodeNode::IndentedBlock { literal },
                };
                nodes.push(Node::Code(code));
            }
            Event::Code(code) => {
                nodes.push(Node::Code(CodeNode::InlineSpan {
                    literal: code.into_string(),
                }));
            }
            other => nodes.push(Node::Event(other)),
        }
    }

    nodes
}

/// Code nodes of a document, in document order
pub fn code_nodes(text: &str) -> Vec<CodeNode> {
    parse(text)
        .into_iter()
        .filter_map(|node| match node {
            Node::Code(code) => Some(code),
            Node::Event(_) => None,
        })
        .collect()
}

/// Concatenate text events up to the end of the current code block
fn collect_code_block<'a>(events: &mut impl Iterator<Item = Event<'a>>) -> String {
    let mut code = String::new();

    for event in events.by_ref() {
        match event {
            Event::End(TagEnd::CodeBlock) => break,
            Event::Text(text) => code.push_str(&text),
            _ => {}
        }
    }

    code
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fenced_block_collapsed() {
        let nodes = code_nodes("Intro\n\n```rust\nfn main() {}\nlet x = 1;\n```\n");
        assert_eq!(
            nodes,
            vec![CodeNode::FencedBlock {
                info: "rust".to_string(),
                literal: "fn main() {}\nlet x = 1;\n".to_string(),
            }]
        );
    }

    #[test]
    fn test_indented_block() {
        let nodes = code_nodes("Para\n\n    a < b\n    c\n");
        assert_eq!(
            nodes,
            vec![CodeNode::IndentedBlock {
                literal: "a < b\nc\n".to_string(),
            }]
        );
    }

    #[test]
    fn test_inline_code_in_order() {
        let nodes = code_nodes("Use `foo` and `<bar>`.\n\n```\nplain\n```");
        assert_eq!(nodes.len(), 3);
        assert_eq!(nodes[0].literal(), "foo");
        assert_eq!(nodes[1].literal(), "<bar>");
        assert!(matches!(&nodes[2], CodeNode::FencedBlock { info, .. } if info.is_empty()));
    }

    #[test]
    fn test_other_events_pass_through() {
        let nodes = parse("# Title\n\n```\nx\n```\n");
        assert!(matches!(
            nodes.first(),
            Some(Node::Event(Event::Start(Tag::Heading { .. })))
        ));
        // No raw code block events survive
        assert!(!nodes.iter().any(|node| matches!(
            node,
            Node::Event(Event::Start(Tag::CodeBlock(_)) | Event::End(TagEnd::CodeBlock))
        )));
    }

    #[test]
    fn test_code_in_list_item() {
        let nodes = code_nodes("- item\n\n  ```sh\n  ls -la\n  ```\n");
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].language_tag(), Some("sh"));
        assert_eq!(nodes[0].literal(), "ls -la\n");
    }
}
