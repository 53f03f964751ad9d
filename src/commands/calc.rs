use anyhow::{bail, Result};
use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};
use std::path::Path;

use llm_pricing::catalog::CatalogStore;
use llm_pricing::pricing::{cost_for_model, Scenario, Unit};

/// Execute the calc command
///
/// Prices one scenario against one model and prints the cost breakdown.
pub fn execute(
    catalog_path: Option<&Path>,
    model_id: &str,
    input: f64,
    output: f64,
    unit: Unit,
    calls: i64,
    json: bool,
) -> Result<()> {
    let store = CatalogStore::load(catalog_path)?;

    let Some(model) = store.find_by_id(model_id) else {
        bail!("model '{}' not found in catalog", model_id);
    };

    let scenario = Scenario::from_raw(input, output, unit, calls);
    let breakdown = cost_for_model(model, &scenario);

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "model": model.id,
                "scenario": scenario,
                "input_tokens": scenario.input_tokens(),
                "output_tokens": scenario.output_tokens(),
                "breakdown": breakdown,
            }))?
        );
        return Ok(());
    }

    println!(
        "{} ({}) - {} {} in, {} {} out, {} call(s)\n",
        model.name, model.provider.name, scenario.input_qty, unit, scenario.output_qty, unit,
        scenario.calls
    );

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("COMPONENT").fg(Color::Cyan),
        Cell::new("TOKENS").fg(Color::Cyan),
        Cell::new("PRICE $/1M").fg(Color::Cyan),
        Cell::new("COST").fg(Color::Cyan),
    ]);

    table.add_row(vec![
        Cell::new("Input"),
        Cell::new(format!("{:.0}", scenario.input_tokens())),
        Cell::new(format!("${}", model.input_price)),
        Cell::new(format!("${:.6}", breakdown.input_cost)),
    ]);
    table.add_row(vec![
        Cell::new("Output"),
        Cell::new(format!("{:.0}", scenario.output_tokens())),
        Cell::new(format!("${}", model.output_price)),
        Cell::new(format!("${:.6}", breakdown.output_cost)),
    ]);

    println!("{}", table);

    println!("\nPer call:  ${:.6}", breakdown.per_call_cost);
    println!(
        "Total:     ${:.6} ({} calls)",
        breakdown.total_cost, scenario.calls
    );

    Ok(())
}
