use crate::catalog::record::ModelRecord;
use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use tracing::{info, warn};

/// Catalog data file structure
///
/// The same shape is used for the embedded default dataset and for on-disk
/// overrides passed via `--catalog`.
#[derive(Debug, Deserialize)]
pub struct CatalogFile {
    /// Snapshot date of the pricing data, `YYYY-MM-DD`.
    #[serde(default)]
    pub as_of: Option<String>,
    pub models: Vec<ModelRecord>,
}

/// Hard failure loading a catalog file. Per-entry problems never produce
/// this; they become [`CatalogWarning`]s instead.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A validation finding for a single catalog entry.
///
/// Warnings are logged at load time and retained on the store so surfaces
/// (the `test` command, server startup) can report them. They are never
/// fatal: a malformed entry is dropped or kept-with-flag, the rest of the
/// catalog loads normally.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogWarning {
    #[error("duplicate model id '{id}' (entry #{index} dropped, first entry wins)")]
    DuplicateId { id: String, index: usize },
    #[error("model '{id}' has negative input price {price} (entry dropped)")]
    NegativeInputPrice { id: String, price: f64 },
    #[error("model '{id}' has negative output price {price} (entry dropped)")]
    NegativeOutputPrice { id: String, price: f64 },
    #[error("models '{first}' and '{second}' share display name '{name}' under provider '{provider}'")]
    DuplicateName {
        name: String,
        provider: String,
        first: String,
        second: String,
    },
    #[error("model '{id}' quality {quality} outside 0-100")]
    QualityOutOfRange { id: String, quality: i32 },
    #[error("catalog as_of date '{value}' is not YYYY-MM-DD")]
    BadAsOfDate { value: String },
}

/// Result of parsing and validating a catalog file.
#[derive(Debug)]
pub struct LoadedCatalog {
    pub records: Vec<ModelRecord>,
    pub warnings: Vec<CatalogWarning>,
    pub as_of: Option<NaiveDate>,
}

/// Parse catalog JSON and validate every entry.
///
/// Entries violating hard invariants (duplicate id, negative price) are
/// dropped with a warning. Entries that are merely suspicious (repeated
/// display name under the same provider, quality outside 0-100) are kept
/// and flagged for review.
pub fn parse_catalog_json(json: &str) -> Result<LoadedCatalog, CatalogError> {
    let file: CatalogFile = serde_json::from_str(json)?;

    let mut warnings = Vec::new();

    let as_of = match &file.as_of {
        Some(value) => match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
            Ok(date) => Some(date),
            Err(_) => {
                warnings.push(CatalogWarning::BadAsOfDate {
                    value: value.clone(),
                });
                None
            }
        },
        None => None,
    };

    let mut seen_ids: HashSet<String> = HashSet::new();
    let mut records: Vec<ModelRecord> = Vec::with_capacity(file.models.len());

    for (index, model) in file.models.into_iter().enumerate() {
        if seen_ids.contains(&model.id) {
            warnings.push(CatalogWarning::DuplicateId {
                id: model.id,
                index,
            });
            continue;
        }
        if model.input_price < 0.0 {
            warnings.push(CatalogWarning::NegativeInputPrice {
                id: model.id,
                price: model.input_price,
            });
            continue;
        }
        if model.output_price < 0.0 {
            warnings.push(CatalogWarning::NegativeOutputPrice {
                id: model.id,
                price: model.output_price,
            });
            continue;
        }
        if !(0..=100).contains(&model.quality) {
            // Kept: the pricing core does not clamp quality.
            warnings.push(CatalogWarning::QualityOutOfRange {
                id: model.id.clone(),
                quality: model.quality,
            });
        }

        seen_ids.insert(model.id.clone());
        records.push(model);
    }

    // Repeated display names under the same provider are ambiguous (billing
    // tier or data-entry duplicate). Preserve both entries, flag for review.
    let mut first_by_name: HashMap<(&str, &str), &str> = HashMap::new();
    for record in &records {
        let key = (record.provider.name.as_str(), record.name.as_str());
        match first_by_name.get(&key) {
            Some(first) => {
                warnings.push(CatalogWarning::DuplicateName {
                    name: record.name.clone(),
                    provider: record.provider.name.clone(),
                    first: (*first).to_string(),
                    second: record.id.clone(),
                });
            }
            None => {
                first_by_name.insert(key, record.id.as_str());
            }
        }
    }

    for warning in &warnings {
        warn!("catalog: {}", warning);
    }
    info!(
        "Parsed {} model records ({} warnings)",
        records.len(),
        warnings.len()
    );

    Ok(LoadedCatalog {
        records,
        warnings,
        as_of,
    })
}
