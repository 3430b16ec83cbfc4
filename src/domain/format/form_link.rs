use std::sync::OnceLock;

use regex::Regex;

use crate::domain::SpecificText;

static FORM_URL: OnceLock<Regex> = OnceLock::new();

/// Report form for `text`: the explicit link, else the first forms.gle URL in its content.
pub fn form_link(text: &SpecificText) -> Option<String> {
    if let Some(link) = text.form_link.as_deref().filter(|l| !l.trim().is_empty()) {
        return Some(link.trim().to_string());
    }

    let pattern = FORM_URL.get_or_init(|| {
        Regex::new(r"https://forms\.gle/[a-zA-Z0-9_-]+").expect("form URL pattern is valid")
    });
    pattern.find(&text.content).map(|m| m.as_str().to_string())
}
