//! Loading of `wavecheck.toml` into a [`LookupConfig`].

use std::fs;
use std::path::Path;

use serde::Deserialize;
use url::Url;

use crate::domain::{
    AppError, ColumnNames, LookupConfig, PlaceholderConfig, SheetNames, SourceConfig, WaveFilter,
};

/// Default config file looked up in the working directory.
pub const CONFIG_FILE: &str = "wavecheck.toml";

/// Environment variable overriding `source.base_url`.
pub const BASE_URL_ENV: &str = "WAVECHECK_BASE_URL";

/// Command-line overrides applied on top of the file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub base_url: Option<String>,
    pub wave: Option<String>,
}

/// Load configuration from `path`, or from `wavecheck.toml` when present.
///
/// Precedence: overrides, then `WAVECHECK_BASE_URL`, then the file, then defaults.
pub fn load_config(
    path: Option<&Path>,
    overrides: &ConfigOverrides,
) -> Result<LookupConfig, AppError> {
    let mut config = match path {
        Some(path) => {
            if !path.exists() {
                return Err(AppError::config_error(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            parse_config_content(&fs::read_to_string(path)?)?
        }
        None if Path::new(CONFIG_FILE).exists() => {
            parse_config_content(&fs::read_to_string(CONFIG_FILE)?)?
        }
        None => LookupConfig::default(),
    };

    let base_url = overrides.base_url.clone().or_else(|| std::env::var(BASE_URL_ENV).ok());
    if let Some(base_url) = base_url {
        config.source.base_url = parse_base_url(&base_url)?;
    }
    if let Some(wave) = &overrides.wave {
        config.wave = WaveFilter::new(wave);
    }

    Ok(config)
}

/// Parse configuration from string content.
pub fn parse_config_content(content: &str) -> Result<LookupConfig, AppError> {
    let dto: LookupConfigDto = toml::from_str(content)?;
    dto.try_into()
}

/// Base URLs are treated as directories so relative candidates resolve beside them.
fn parse_base_url(raw: &str) -> Result<Url, AppError> {
    let raw = raw.trim();
    let with_slash = if raw.ends_with('/') { raw.to_string() } else { format!("{}/", raw) };
    Url::parse(&with_slash)
        .map_err(|e| AppError::config_error(format!("Invalid base URL '{}': {}", raw, e)))
}

// --- DTOs for TOML deserialization ---

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct LookupConfigDto {
    source: Option<SourceConfigDto>,
    sheets: Option<SheetNamesDto>,
    columns: Option<ColumnNamesDto>,
    matching: Option<MatchingDto>,
    placeholders: Option<PlaceholderConfigDto>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SourceConfigDto {
    base_url: Option<String>,
    workbook_candidates: Option<Vec<String>>,
    text_bank: Option<String>,
    timeout_secs: Option<u64>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SheetNamesDto {
    assignments: Option<String>,
    texts: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ColumnNamesDto {
    tester: Option<String>,
    wave: Option<String>,
    partner: Option<String>,
    restaurant: Option<String>,
    address: Option<String>,
    city: Option<String>,
    method: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct MatchingDto {
    wave: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PlaceholderConfigDto {
    tester: Option<String>,
    restaurant: Option<String>,
    address: Option<String>,
    method: Option<String>,
    delivery_service: Option<String>,
    delivery_service_text: Option<String>,
    specific_text_marker: Option<String>,
}

impl TryFrom<LookupConfigDto> for LookupConfig {
    type Error = AppError;

    fn try_from(dto: LookupConfigDto) -> Result<Self, Self::Error> {
        let default_source = SourceConfig::default();
        let source = match dto.source {
            Some(d) => {
                let candidates =
                    d.workbook_candidates.unwrap_or(default_source.workbook_candidates);
                if candidates.is_empty() {
                    return Err(AppError::config_error(
                        "source.workbook_candidates must list at least one file",
                    ));
                }
                SourceConfig {
                    base_url: match d.base_url {
                        Some(raw) => parse_base_url(&raw)?,
                        None => default_source.base_url,
                    },
                    workbook_candidates: candidates,
                    text_bank: d.text_bank.unwrap_or(default_source.text_bank),
                    timeout_secs: d.timeout_secs.unwrap_or(default_source.timeout_secs),
                }
            }
            None => default_source,
        };

        let default_sheets = SheetNames::default();
        let sheets = match dto.sheets {
            Some(d) => SheetNames {
                assignments: d.assignments.unwrap_or(default_sheets.assignments),
                texts: d.texts.unwrap_or(default_sheets.texts),
            },
            None => default_sheets,
        };

        let default_columns = ColumnNames::default();
        let columns = match dto.columns {
            Some(d) => ColumnNames {
                tester: d.tester.unwrap_or(default_columns.tester),
                wave: d.wave.unwrap_or(default_columns.wave),
                partner: d.partner.unwrap_or(default_columns.partner),
                restaurant: d.restaurant.unwrap_or(default_columns.restaurant),
                address: d.address.unwrap_or(default_columns.address),
                city: d.city.unwrap_or(default_columns.city),
                method: d.method.unwrap_or(default_columns.method),
            },
            None => default_columns,
        };

        let wave = dto
            .matching
            .and_then(|m| m.wave)
            .map(|label| WaveFilter::new(&label))
            .unwrap_or_default();

        let default_placeholders = PlaceholderConfig::default();
        let placeholders = match dto.placeholders {
            Some(d) => PlaceholderConfig {
                tester: d.tester.unwrap_or(default_placeholders.tester),
                restaurant: d.restaurant.unwrap_or(default_placeholders.restaurant),
                address: d.address.unwrap_or(default_placeholders.address),
                method: d.method.unwrap_or(default_placeholders.method),
                delivery_service: d
                    .delivery_service
                    .unwrap_or(default_placeholders.delivery_service),
                delivery_service_text: d
                    .delivery_service_text
                    .unwrap_or(default_placeholders.delivery_service_text),
                specific_text_marker: d
                    .specific_text_marker
                    .unwrap_or(default_placeholders.specific_text_marker),
            },
            None => default_placeholders,
        };

        Ok(LookupConfig { source, sheets, columns, wave, placeholders })
    }
}
