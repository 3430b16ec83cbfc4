//! Resolved lookup configuration.
//!
//! File parsing lives in `app::config`; these types only carry final values.

use url::Url;

use crate::domain::WaveFilter;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LookupConfig {
    pub source: SourceConfig,
    pub sheets: SheetNames,
    pub columns: ColumnNames,
    pub wave: WaveFilter,
    pub placeholders: PlaceholderConfig,
}

/// Where the workbook and text bank are fetched from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceConfig {
    pub base_url: Url,
    /// Tried in order, relative to `base_url`.
    pub workbook_candidates: Vec<String>,
    pub text_bank: String,
    pub timeout_secs: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            workbook_candidates: vec!["data.xlsx".to_string(), "../data.xlsx".to_string()],
            text_bank: "restaurant-texts.json".to_string(),
            timeout_secs: 30,
        }
    }
}

fn default_base_url() -> Url {
    Url::parse("http://localhost:8080/").expect("default base URL is valid")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetNames {
    pub assignments: String,
    pub texts: String,
}

impl Default for SheetNames {
    fn default() -> Self {
        Self { assignments: "selection".to_string(), texts: "texts".to_string() }
    }
}

/// Header labels of the assignments sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnNames {
    pub tester: String,
    pub wave: String,
    pub partner: String,
    pub restaurant: String,
    pub address: String,
    pub city: String,
    pub method: String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            tester: "Tester".to_string(),
            wave: "Wave Number".to_string(),
            partner: "Partner".to_string(),
            restaurant: "Restaurant".to_string(),
            address: "Address".to_string(),
            city: "City".to_string(),
            method: "Verification Method".to_string(),
        }
    }
}

/// Placeholder labels used inside text bank content.
///
/// A label `Name` matches both `<Name>` and its escaped form `&lt;Name&gt;`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderConfig {
    pub tester: String,
    pub restaurant: String,
    pub address: String,
    pub method: String,
    pub delivery_service: String,
    /// Literal inserted for `delivery_service`.
    pub delivery_service_text: String,
    /// Marker in the general template replaced by the specific fragment.
    pub specific_text_marker: String,
}

impl Default for PlaceholderConfig {
    fn default() -> Self {
        Self {
            tester: "FullName".to_string(),
            restaurant: "Name".to_string(),
            address: "Address".to_string(),
            method: "Method".to_string(),
            delivery_service: "DeliveryService".to_string(),
            delivery_service_text: "the required delivery service".to_string(),
            specific_text_marker: "{SPECIFIC_TEXT}".to_string(),
        }
    }
}
