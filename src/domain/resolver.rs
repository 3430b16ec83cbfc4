//! Resolution of instruction text for a (partner, method) pair.
//!
//! Strategies are tried in order; the first one that answers wins.

use crate::domain::normalize::normalize;
use crate::domain::{LegacyTextTable, SpecificText, TextBank};

/// Outcome of a text lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextResult {
    /// Entry from the JSON text bank; rendered through the general template.
    Structured(SpecificText),
    /// Pre-rendered plain text from the workbook's texts sheet.
    Legacy(String),
    /// Nothing found anywhere.
    None,
}

impl TextResult {
    pub fn kind(&self) -> &'static str {
        match self {
            TextResult::Structured(_) => "structured",
            TextResult::Legacy(_) => "legacy",
            TextResult::None => "none",
        }
    }
}

/// Normalized lookup key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextQuery {
    partner: String,
    method: String,
}

impl TextQuery {
    pub fn new(partner: &str, method: &str) -> Self {
        Self { partner: normalize(Some(partner)), method: normalize(Some(method)) }
    }

    fn matches(&self, partner: &str, method: &str) -> bool {
        normalize(Some(partner)) == self.partner && normalize(Some(method)) == self.method
    }
}

/// One step of the resolution chain.
pub trait TextStrategy {
    fn resolve(&self, query: &TextQuery) -> Option<TextResult>;
}

/// Exact normalized match against the text bank, first entry in document order.
pub struct StructuredLookup<'a>(pub &'a TextBank);

impl TextStrategy for StructuredLookup<'_> {
    fn resolve(&self, query: &TextQuery) -> Option<TextResult> {
        self.0
            .entries()
            .find(|text| query.matches(&text.partner, &text.method))
            .map(|text| TextResult::Structured(text.clone()))
    }
}

/// Column scan of the texts sheet, falling back to its last text.
pub struct LegacyLookup<'a>(pub &'a LegacyTextTable);

impl TextStrategy for LegacyLookup<'_> {
    fn resolve(&self, query: &TextQuery) -> Option<TextResult> {
        let table = self.0;
        if !table.is_populated() {
            return None;
        }

        let (partners, methods, texts) = (table.partners(), table.methods(), table.texts());
        let matched = (1..table.width())
            .find(|&i| query.matches(&partners[i], &methods[i]))
            .map(|i| texts[i].as_str());

        matched
            .or_else(|| table.catch_all())
            .filter(|text| !text.is_empty())
            .map(|text| TextResult::Legacy(text.to_string()))
    }
}

/// Run `strategies` in order for `partner`/`method`.
pub fn resolve_with(strategies: &[&dyn TextStrategy], partner: &str, method: &str) -> TextResult {
    let query = TextQuery::new(partner, method);
    strategies.iter().find_map(|s| s.resolve(&query)).unwrap_or(TextResult::None)
}

/// Structured bank first, legacy table second.
pub fn resolve_text(
    partner: &str,
    method: &str,
    bank: Option<&TextBank>,
    legacy: Option<&LegacyTextTable>,
) -> TextResult {
    let structured = bank.map(StructuredLookup);
    let tabular = legacy.map(LegacyLookup);

    let mut chain: Vec<&dyn TextStrategy> = Vec::with_capacity(2);
    if let Some(s) = &structured {
        chain.push(s);
    }
    if let Some(l) = &tabular {
        chain.push(l);
    }

    resolve_with(&chain, partner, method)
}
