use std::io::Write;

use llm_pricing::catalog::{CatalogStore, CatalogWarning};

fn write_catalog(json: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_embedded_dataset_loads_completely() -> anyhow::Result<()> {
    let store = CatalogStore::from_embedded()?;

    // The shipped dataset: 77 entries, all ids unique, prices non-negative.
    assert_eq!(store.len(), 77);

    let mut ids = std::collections::HashSet::new();
    for record in store.all() {
        assert!(ids.insert(record.id.as_str()), "duplicate id {}", record.id);
        assert!(record.input_price >= 0.0, "{} has negative input", record.id);
        assert!(record.output_price >= 0.0, "{} has negative output", record.id);
        assert!(!record.name.is_empty());
        assert!(!record.provider.name.is_empty());
    }

    println!("✓ Embedded dataset loaded with {} models", store.len());
    Ok(())
}

#[test]
fn test_embedded_dataset_known_entries() -> anyhow::Result<()> {
    let store = CatalogStore::from_embedded()?;

    let opus = store.find_by_id("claude-3-opus").unwrap();
    assert_eq!(opus.provider.name, "Anthropic");
    assert_eq!(opus.input_price, 15.0);
    assert_eq!(opus.output_price, 75.0);
    assert_eq!(opus.context, "200K");

    // Same display name, different providers - both present by design.
    let sonnets: Vec<_> = store
        .all()
        .iter()
        .filter(|m| m.name == "claude-3-sonnet")
        .collect();
    assert_eq!(sonnets.len(), 2);

    Ok(())
}

#[test]
fn test_load_from_file() -> anyhow::Result<()> {
    let file = write_catalog(
        r#"{
            "as_of": "2024-06-01",
            "models": [
                {"id": "m1", "name": "model-one", "provider": {"name": "Acme", "logo": "a.png"},
                 "quality": 80, "context": "32K", "input_price": 1.0, "output_price": 3.0,
                 "knowledge": "2024-01"}
            ]
        }"#,
    );

    let store = CatalogStore::load(Some(file.path()))?;
    assert_eq!(store.len(), 1);
    assert_eq!(store.find_by_id("m1").unwrap().output_price, 3.0);
    assert_eq!(store.as_of().unwrap().to_string(), "2024-06-01");
    assert!(store.warnings().is_empty());

    Ok(())
}

#[test]
fn test_load_missing_file_is_hard_error() {
    let result = CatalogStore::load(Some(std::path::Path::new("/no/such/catalog.json")));
    assert!(result.is_err());
}

#[test]
fn test_load_malformed_file_is_hard_error() {
    let file = write_catalog("{this is not json");
    let result = CatalogStore::load(Some(file.path()));
    assert!(result.is_err());
}

#[test]
fn test_malformed_entries_dropped_not_fatal() -> anyhow::Result<()> {
    let file = write_catalog(
        r#"{
            "models": [
                {"id": "good", "name": "good", "provider": {"name": "Acme", "logo": "a.png"},
                 "quality": 80, "context": "32K", "input_price": 1.0, "output_price": 3.0,
                 "knowledge": "2024-01"},
                {"id": "good", "name": "good-again", "provider": {"name": "Acme", "logo": "a.png"},
                 "quality": 80, "context": "32K", "input_price": 1.0, "output_price": 3.0,
                 "knowledge": "2024-01"},
                {"id": "negative", "name": "negative", "provider": {"name": "Acme", "logo": "a.png"},
                 "quality": 80, "context": "32K", "input_price": -1.0, "output_price": 3.0,
                 "knowledge": "2024-01"}
            ]
        }"#,
    );

    let store = CatalogStore::load(Some(file.path()))?;

    // The catalog still loads; only the offending entries are gone.
    assert_eq!(store.len(), 1);
    assert!(store.find_by_id("good").is_some());
    assert!(store.find_by_id("negative").is_none());
    assert_eq!(store.warnings().len(), 2);
    assert!(store
        .warnings()
        .iter()
        .any(|w| matches!(w, CatalogWarning::DuplicateId { .. })));
    assert!(store
        .warnings()
        .iter()
        .any(|w| matches!(w, CatalogWarning::NegativeInputPrice { .. })));

    Ok(())
}

#[test]
fn test_duplicate_display_names_preserved() -> anyhow::Result<()> {
    let store = CatalogStore::from_embedded()?;

    // The two Replicate "llama-2-13b" billing entries are ambiguous in the
    // source data; they are kept and flagged rather than deduplicated.
    let tiers: Vec<_> = store
        .all()
        .iter()
        .filter(|m| m.name == "llama-2-13b" && m.provider.name == "Replicate")
        .collect();
    assert_eq!(tiers.len(), 2);

    assert!(store.warnings().iter().any(|w| matches!(
        w,
        CatalogWarning::DuplicateName { name, provider, .. }
            if name == "llama-2-13b" && provider == "Replicate"
    )));

    Ok(())
}
