//! Canonical form used for every name, partner, and method comparison.

/// Lower-case `text`, strip all whitespace and byte-order marks, and fold `ё` into `е`.
///
/// Missing input normalizes to the empty string.
pub fn normalize(text: Option<&str>) -> String {
    let Some(text) = text else {
        return String::new();
    };

    text.chars()
        .filter(|c| !c.is_whitespace() && *c != '\u{feff}')
        .flat_map(char::to_lowercase)
        .map(|c| if c == 'ё' { 'е' } else { c })
        .collect()
}
