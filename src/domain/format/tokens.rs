//! Single-pass placeholder substitution.
//!
//! Replacement values are never rescanned, so a value that happens to contain
//! another token's text is inserted as-is.

#[derive(Debug, Clone, Default)]
pub struct TokenTable {
    entries: Vec<(String, String)>,
}

impl TokenTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `label` in both its raw `<label>` and escaped `&lt;label&gt;` spellings.
    pub fn placeholder(self, label: &str, value: impl Into<String>) -> Self {
        let value = value.into();
        self.literal(format!("&lt;{label}&gt;"), value.clone()).literal(format!("<{label}>"), value)
    }

    /// Register an exact token.
    pub fn literal(mut self, token: impl Into<String>, value: impl Into<String>) -> Self {
        let token = token.into();
        if !token.is_empty() {
            self.entries.push((token, value.into()));
        }
        self
    }

    pub fn substitute(&self, input: &str) -> String {
        let mut ordered: Vec<&(String, String)> = self.entries.iter().collect();
        ordered.sort_by(|a, b| b.0.len().cmp(&a.0.len()));

        let mut out = String::with_capacity(input.len());
        let mut rest = input;
        'scan: while let Some(ch) = rest.chars().next() {
            for (token, value) in &ordered {
                if let Some(after) = rest.strip_prefix(token.as_str()) {
                    out.push_str(value);
                    rest = after;
                    continue 'scan;
                }
            }
            out.push(ch);
            rest = &rest[ch.len_utf8()..];
        }
        out
    }
}
