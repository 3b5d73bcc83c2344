//! CSS for code elements

/// Stylesheet rule applied to `code`, `pre` and `.pre` elements
pub fn code_stylesheet(font_family: &str) -> String {
    // Quotes or markup in the font name would break out of the rule
    let font_family: String = font_family
        .chars()
        .filter(|c| !matches!(c, '\'' | '"' | '\\' | '<' | '>' | '{' | '}' | ';'))
        .collect();

    format!(
        "code, pre, .pre {{ font-family: '{}'; font-size: 14pt; }}",
        font_family.trim()
    )
}
