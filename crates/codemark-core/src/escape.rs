//! XML/HTML entity escaping

use std::borrow::Cow;

use pulldown_cmark_escape::escape_html;

/// Escape `&`, `<`, `>`, `"` and `'` as XML entities.
///
/// Everything else, control characters included, is passed through untouched.
/// Borrows the input when nothing needs escaping.
pub fn escape_xml(text: &str) -> Cow<'_, str> {
    if !text.contains(&['&', '<', '>', '"', '\''][..]) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() + text.len() / 4);
    push_escaped(&mut out, text);
    Cow::Owned(out)
}

/// Append `text` to `out` with XML entities escaped
pub fn push_escaped(out: &mut String, text: &str) {
    // Writing into a String never fails
    let _ = escape_html(out, text);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_special_characters() {
        assert_eq!(
            escape_xml(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_quotes_are_escaped_for_attributes() {
        assert_eq!(escape_xml("'"), "&#39;");
        assert_eq!(escape_xml("\""), "&quot;");
    }

    #[test]
    fn test_push_appends_after_existing_text() {
        let mut out = String::from("<b>");
        push_escaped(&mut out, "1 < 2");
        assert_eq!(out, "<b>1 &lt; 2");
    }

    #[test]
    fn test_plain_text_is_borrowed() {
        assert!(matches!(escape_xml("let x = 1;"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_already_escaped_text_is_escaped_again() {
        assert_eq!(escape_xml("&lt;b&gt;"), "&amp;lt;b&amp;gt;");
    }

    #[test]
    fn test_control_characters_pass_through() {
        assert_eq!(escape_xml("a\tb\u{0}c\r\n"), "a\tb\u{0}c\r\n");
    }
}
