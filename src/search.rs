//! Catalog text search.
//!
//! Pure substring containment against model name or provider name, no
//! fuzzy matching, no ranking by match quality.

use crate::catalog::ModelRecord;

/// Filter records by a free-text query.
///
/// An empty or whitespace-only query returns the full input unchanged.
/// Matching is case-insensitive and the result preserves the original
/// catalog order (stable filter, never a re-sort).
pub fn filter_by_query<'a>(records: &'a [ModelRecord], query: &str) -> Vec<&'a ModelRecord> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return records.iter().collect();
    }

    records
        .iter()
        .filter(|model| {
            model.name.to_lowercase().contains(&needle)
                || model.provider.name.to_lowercase().contains(&needle)
        })
        .collect()
}
