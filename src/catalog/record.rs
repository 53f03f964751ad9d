use serde::{Deserialize, Serialize};

/// One pricing entry for a specific model/provider combination.
///
/// Prices are USD per 1M tokens. `context` and `knowledge` are display-only
/// strings and are never parsed by the pricing engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelRecord {
    /// Unique stable identifier (primary key). Display names may repeat
    /// across entries; ids never do.
    pub id: String,
    pub name: String,
    pub provider: ProviderInfo,
    /// Relative quality score, semantic range 0-100. The engine does not
    /// clamp this; out-of-range values are flagged at load time.
    pub quality: i32,
    /// Context window as shown to users, e.g. "128K" or "1M".
    pub context: String,
    pub input_price: f64,
    pub output_price: f64,
    /// Knowledge cutoff: a date, "Unknown", or "Online".
    pub knowledge: String,
}

/// Provider display information. `logo` is an opaque asset locator for the
/// presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderInfo {
    pub name: String,
    pub logo: String,
}
