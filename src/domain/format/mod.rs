//! Instruction and list markup.

mod escape;
mod form_link;
mod markup;
mod tokens;

pub use escape::escape_html;
pub use form_link::form_link;
pub use markup::{MarkupRenderer, MarkupTemplate};
pub use tokens::TokenTable;

use serde_json::json;

use crate::domain::{AppError, Assignment, PlaceholderConfig, SpecificText, TextResult};

/// Shown when neither the text bank nor the texts sheet has an instruction.
pub const INSTRUCTION_NOT_FOUND: &str =
    "Instruction not found for this partner and verification method combination.";

/// Shown in place of an empty result list.
pub const NO_ADDRESSES_FOUND: &str = "No addresses found for this wave";

/// Builds instruction markup for a picked assignment.
pub struct InstructionFormatter<'a, R: MarkupRenderer> {
    placeholders: &'a PlaceholderConfig,
    general_template: Option<&'a str>,
    renderer: &'a R,
}

impl<'a, R: MarkupRenderer> InstructionFormatter<'a, R> {
    pub fn new(
        placeholders: &'a PlaceholderConfig,
        general_template: Option<&'a str>,
        renderer: &'a R,
    ) -> Self {
        Self { placeholders, general_template, renderer }
    }

    pub fn format(
        &self,
        result: &TextResult,
        item: &Assignment,
        tester: &str,
    ) -> Result<String, AppError> {
        match result {
            TextResult::Legacy(text) => Ok(line_breaks(text)),
            TextResult::None => Ok(INSTRUCTION_NOT_FOUND.to_string()),
            TextResult::Structured(text) => self.format_structured(text, item, tester),
        }
    }

    fn format_structured(
        &self,
        text: &SpecificText,
        item: &Assignment,
        tester: &str,
    ) -> Result<String, AppError> {
        let p = self.placeholders;

        let fragment = TokenTable::new()
            .placeholder(&p.restaurant, escape_html(&item.restaurant))
            .placeholder(&p.address, escape_html(&item.address))
            .placeholder(&p.method, escape_html(&item.method))
            .placeholder(&p.delivery_service, p.delivery_service_text.as_str())
            .substitute(&text.content);

        let general = self.general_template.unwrap_or(p.specific_text_marker.as_str());
        let body = TokenTable::new()
            .placeholder(&p.tester, escape_html(tester))
            .placeholder(&p.restaurant, escape_html(&item.restaurant))
            .placeholder(&p.address, escape_html(&item.address))
            .placeholder(&p.method, escape_html(&item.method))
            .literal(p.specific_text_marker.as_str(), fragment)
            .substitute(general);

        let mut out = line_breaks(&body);

        for section in &text.collapsible_sections {
            let context = json!({
                "title": section.title,
                "content": line_breaks(&section.content),
            });
            out.push_str(&self.renderer.render(MarkupTemplate::Collapsible, &context)?);
        }

        if let Some(link) = form_link(text) {
            let context = json!({
                "form_link": link,
                "partner": item.partner,
                "restaurant": item.restaurant,
            });
            out.push_str(&self.renderer.render(MarkupTemplate::Report, &context)?);
        }

        Ok(out)
    }
}

/// Result list markup; an empty list renders [`NO_ADDRESSES_FOUND`].
pub fn render_addresses<R: MarkupRenderer>(
    renderer: &R,
    items: &[Assignment],
) -> Result<String, AppError> {
    let context = json!({ "items": items, "empty_message": NO_ADDRESSES_FOUND });
    renderer.render(MarkupTemplate::Addresses, &context)
}

/// Detail panel for `item` wrapping already-formatted instruction markup.
pub fn render_details<R: MarkupRenderer>(
    renderer: &R,
    item: &Assignment,
    tester: &str,
    instruction_html: &str,
) -> Result<String, AppError> {
    let context = json!({ "item": item, "tester": tester, "text": instruction_html });
    renderer.render(MarkupTemplate::Details, &context)
}

fn line_breaks(text: &str) -> String {
    text.replace('\n', "<br>")
}
