//! Structured instruction texts loaded from the JSON text bank.

use std::fmt;

use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize};

use crate::domain::AppError;

/// Parsed `restaurant-texts.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TextBank {
    /// Entries in document order. Keys carry no meaning for lookup.
    #[serde(default, deserialize_with = "ordered_entries")]
    pub specific_texts: Vec<(String, SpecificText)>,
    #[serde(default)]
    pub templates: Templates,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Templates {
    #[serde(default)]
    pub general: Option<GeneralTemplate>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GeneralTemplate {
    #[serde(default)]
    pub content: String,
}

/// Instruction fragment for one (partner, method) pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SpecificText {
    #[serde(default)]
    pub partner: String,
    #[serde(default)]
    pub method: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub collapsible_sections: Vec<CollapsibleSection>,
    #[serde(default)]
    pub form_link: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollapsibleSection {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

impl TextBank {
    pub fn from_json(bytes: &[u8]) -> Result<Self, AppError> {
        serde_json::from_slice(bytes).map_err(|e| AppError::parse_error("text bank", e))
    }

    /// General template content, if the bank defines one.
    pub fn general_template(&self) -> Option<&str> {
        self.templates.general.as_ref().map(|g| g.content.as_str()).filter(|c| !c.is_empty())
    }

    pub fn entries(&self) -> impl Iterator<Item = &SpecificText> {
        self.specific_texts.iter().map(|(_, text)| text)
    }
}

fn ordered_entries<'de, D>(deserializer: D) -> Result<Vec<(String, SpecificText)>, D::Error>
where
    D: Deserializer<'de>,
{
    struct OrderedEntries;

    impl<'de> Visitor<'de> for OrderedEntries {
        type Value = Vec<(String, SpecificText)>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("an object of specific texts")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
            let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((key, text)) = map.next_entry::<String, SpecificText>()? {
                entries.push((key, text));
            }
            Ok(entries)
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(Vec::new())
        }
    }

    deserializer.deserialize_any(OrderedEntries)
}
