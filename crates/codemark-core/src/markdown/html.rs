//! HTML output for whole documents

use pulldown_cmark::{html, Event, Tag, TagEnd};

use super::elements::Node;
use super::parser;
use crate::escape::escape_xml;
use crate::renderer::CodeNodeRenderer;
use crate::stylesheet;

/// Render a Markdown document to HTML, code rendered by `renderer`.
///
/// Inline code inside image descriptions ends up in the `alt` attribute, so it
/// is passed through as plain code text there instead of highlighted markup.
pub fn render_markdown(text: &str, renderer: &CodeNodeRenderer) -> String {
    let mut image_depth = 0usize;
    let events = parser::parse(text).into_iter().map(move |node| match node {
        Node::Code(code) if image_depth > 0 => Event::Code(code.literal().to_owned().into()),
        Node::Code(code) => {
            let fragment = renderer.render_code(&code);
            if code.is_block() {
                Event::Html(fragment.into())
            } else {
                Event::InlineHtml(fragment.into())
            }
        }
        Node::Event(event) => {
            match &event {
                Event::Start(Tag::Image { .. }) => image_depth += 1,
                Event::End(TagEnd::Image) => image_depth = image_depth.saturating_sub(1),
                _ => {}
            }
            event
        }
    });

    let mut out = String::with_capacity(text.len() + text.len() / 2);
    html::push_html(&mut out, events);
    out
}

/// Render a Markdown document as a standalone page with the code stylesheet
pub fn render_page(
    text: &str,
    renderer: &CodeNodeRenderer,
    title: &str,
    font_family: &str,
) -> String {
    let body = render_markdown(text, renderer);
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n<style>\n{}\n</style>\n</head>\n<body>\n{}</body>\n</html>\n",
        escape_xml(title),
        stylesheet::code_stylesheet(font_family),
        body
    )
}
