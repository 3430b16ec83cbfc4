use minijinja::HtmlEscape;

/// Escape text for insertion into HTML element content or attribute values.
///
/// Shares minijinja's escaping so token values and rendered templates agree.
pub fn escape_html(input: &str) -> String {
    HtmlEscape(input).to_string()
}
