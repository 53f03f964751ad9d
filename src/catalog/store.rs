use crate::catalog::loader::{self, CatalogError, CatalogWarning};
use crate::catalog::record::ModelRecord;
use chrono::NaiveDate;
use std::path::Path;

/// Default catalog dataset compiled into the binary.
const EMBEDDED_CATALOG: &str = include_str!("../../data/models.json");

/// Immutable, in-memory catalog of model pricing records.
///
/// Constructed once at process start and never mutated afterwards. The
/// record order is the declaration order of the data file and is the
/// canonical order for every listing and for ranking tie-breaks.
#[derive(Debug)]
pub struct CatalogStore {
    records: Vec<ModelRecord>,
    warnings: Vec<CatalogWarning>,
    as_of: Option<NaiveDate>,
}

impl CatalogStore {
    /// Load the catalog: an explicit file if given, the embedded default
    /// dataset otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self, CatalogError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Self::from_embedded(),
        }
    }

    /// Load the embedded default dataset.
    pub fn from_embedded() -> Result<Self, CatalogError> {
        Self::from_json(EMBEDDED_CATALOG)
    }

    /// Load a catalog data file from disk.
    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Parse and validate catalog JSON.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let loaded = loader::parse_catalog_json(json)?;
        Ok(Self {
            records: loaded.records,
            warnings: loaded.warnings,
            as_of: loaded.as_of,
        })
    }

    /// Full catalog in declaration order.
    pub fn all(&self) -> &[ModelRecord] {
        &self.records
    }

    /// Look up a record by id. `None` is the common "nothing selected"
    /// state, not an error.
    pub fn find_by_id(&self, id: &str) -> Option<&ModelRecord> {
        self.records.iter().find(|m| m.id == id)
    }

    /// Validation findings retained from load time.
    pub fn warnings(&self) -> &[CatalogWarning] {
        &self.warnings
    }

    /// Snapshot date of the pricing data, if the file declared one.
    pub fn as_of(&self) -> Option<NaiveDate> {
        self.as_of
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
