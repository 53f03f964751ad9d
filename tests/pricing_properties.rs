use llm_pricing::catalog::CatalogStore;
use llm_pricing::pricing::{
    compute_cost, convert_to_tokens, rank_all_by_cost, Scenario, Unit,
};
use llm_pricing::search::filter_by_query;

const TWO_MODEL_CATALOG: &str = r#"{
    "models": [
        {"id": "claude-3-opus", "name": "claude-3-opus",
         "provider": {"name": "Anthropic", "logo": "a.png"},
         "quality": 100, "context": "200K", "input_price": 15.0, "output_price": 75.0,
         "knowledge": "2023-08"},
        {"id": "gpt-4", "name": "gpt-4",
         "provider": {"name": "OpenAI", "logo": "o.png"},
         "quality": 84, "context": "8K", "input_price": 30.0, "output_price": 60.0,
         "knowledge": "2021-09"}
    ]
}"#;

const M1_CATALOG: &str = r#"{
    "models": [
        {"id": "m1", "name": "m1", "provider": {"name": "Acme", "logo": "a.png"},
         "quality": 90, "context": "128K", "input_price": 2.0, "output_price": 8.0,
         "knowledge": "2024-01"}
    ]
}"#;

#[test]
fn test_filter_is_order_preserving_subsequence() -> anyhow::Result<()> {
    let store = CatalogStore::from_embedded()?;

    for query in ["", "gpt", "claude", "mistral", "AWS", "zzz-nothing"] {
        let filtered = filter_by_query(store.all(), query);

        // Subsequence check: every filtered element appears in catalog
        // order, so walking the catalog must consume them in sequence.
        let mut remaining = filtered.iter().peekable();
        for record in store.all() {
            if let Some(next) = remaining.peek() {
                if next.id == record.id {
                    remaining.next();
                }
            }
        }
        assert!(
            remaining.peek().is_none(),
            "filter for '{}' broke catalog order",
            query
        );
    }

    Ok(())
}

#[test]
fn test_empty_query_equals_full_catalog() -> anyhow::Result<()> {
    let store = CatalogStore::from_embedded()?;

    let all = filter_by_query(store.all(), "");
    assert_eq!(all.len(), store.len());
    for (filtered, original) in all.iter().zip(store.all()) {
        assert_eq!(filtered.id, original.id);
    }

    Ok(())
}

#[test]
fn test_query_claude_matches_only_claude() -> anyhow::Result<()> {
    let store = CatalogStore::from_json(TWO_MODEL_CATALOG)?;

    let hits = filter_by_query(store.all(), "claude");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, "claude-3-opus");

    Ok(())
}

#[test]
fn test_unit_conversion_ratios() {
    for n in [0.0, 1.0, 250.0, 1_000_000.0] {
        assert_eq!(convert_to_tokens(n, Unit::Tokens), n);
        assert_eq!(convert_to_tokens(n, Unit::Words), n * 1.3);
        assert_eq!(convert_to_tokens(n, Unit::Characters), n / 4.0);
    }
}

#[test]
fn test_no_selection_yields_no_cost() -> anyhow::Result<()> {
    let store = CatalogStore::from_json(M1_CATALOG)?;
    let scenario = Scenario::from_raw(123_456.0, 654_321.0, Unit::Tokens, 3);

    assert!(compute_cost(&store, None, &scenario).is_none());

    Ok(())
}

#[test]
fn test_zero_volume_is_exactly_zero() -> anyhow::Result<()> {
    let store = CatalogStore::from_json(M1_CATALOG)?;

    for calls in [1, 5, 1000] {
        let scenario = Scenario::from_raw(0.0, 0.0, Unit::Tokens, calls);
        let breakdown = compute_cost(&store, Some("m1"), &scenario).unwrap();
        assert_eq!(breakdown.total_cost, 0.0);
    }

    Ok(())
}

#[test]
fn test_reference_scenarios() -> anyhow::Result<()> {
    let store = CatalogStore::from_json(M1_CATALOG)?;

    // 1M tokens each way at $2/$8 per 1M: exactly $10.
    let scenario = Scenario::from_raw(1_000_000.0, 1_000_000.0, Unit::Tokens, 1);
    let breakdown = compute_cost(&store, Some("m1"), &scenario).unwrap();
    assert_eq!(breakdown.total_cost, 10.0);

    // 1300 words in, nothing out: 2.0 * (1300 * 1.3) / 1M.
    let scenario = Scenario::from_raw(1300.0, 0.0, Unit::Words, 1);
    let breakdown = compute_cost(&store, Some("m1"), &scenario).unwrap();
    assert!((breakdown.total_cost - 0.00338).abs() < 1e-9);

    Ok(())
}

#[test]
fn test_zero_call_count_coerced_to_one() -> anyhow::Result<()> {
    let store = CatalogStore::from_json(M1_CATALOG)?;

    let with_zero = Scenario::from_raw(500_000.0, 0.0, Unit::Tokens, 0);
    let with_one = Scenario::from_raw(500_000.0, 0.0, Unit::Tokens, 1);

    let zero_cost = compute_cost(&store, Some("m1"), &with_zero).unwrap();
    let one_cost = compute_cost(&store, Some("m1"), &with_one).unwrap();
    assert_eq!(zero_cost.total_cost, one_cost.total_cost);
    assert!(zero_cost.total_cost > 0.0);

    Ok(())
}

#[test]
fn test_ranking_is_complete_and_non_decreasing() -> anyhow::Result<()> {
    let store = CatalogStore::from_embedded()?;
    let scenario = Scenario::from_raw(10_000.0, 2_000.0, Unit::Tokens, 5);

    let ranked = rank_all_by_cost(&store, &scenario, None);
    assert_eq!(ranked.len(), store.len());
    for pair in ranked.windows(2) {
        assert!(pair[0].cost <= pair[1].cost);
    }

    Ok(())
}

#[test]
fn test_ranking_matches_individual_estimates() -> anyhow::Result<()> {
    let store = CatalogStore::from_embedded()?;
    let scenario = Scenario::from_raw(50_000.0, 10_000.0, Unit::Words, 2);

    let ranked = rank_all_by_cost(&store, &scenario, None);
    for entry in &ranked {
        let individual = compute_cost(&store, Some(entry.model_id.as_str()), &scenario).unwrap();
        assert_eq!(entry.cost, individual.total_cost, "mismatch for {}", entry.model_id);
    }

    Ok(())
}
