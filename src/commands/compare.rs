use anyhow::Result;
use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};
use std::path::Path;

use llm_pricing::catalog::CatalogStore;
use llm_pricing::pricing::{chart_value, rank_all_by_cost, Scenario, Unit};

/// Width of the relative-cost bar column.
const BAR_WIDTH: usize = 24;

/// Execute the compare command
///
/// Ranks every catalog model by scenario cost, cheapest first, with a
/// log-scale bar so the orders-of-magnitude spread stays readable.
#[allow(clippy::too_many_arguments)]
pub fn execute(
    catalog_path: Option<&Path>,
    input: f64,
    output: f64,
    unit: Unit,
    calls: i64,
    select: Option<&str>,
    top: Option<usize>,
    json: bool,
) -> Result<()> {
    let store = CatalogStore::load(catalog_path)?;
    let scenario = Scenario::from_raw(input, output, unit, calls);

    let mut ranked = rank_all_by_cost(&store, &scenario, select);
    if let Some(top) = top {
        ranked.truncate(top);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&ranked)?);
        return Ok(());
    }

    println!(
        "Price comparison for {} {} input, {} {} output, {} call(s)\n",
        scenario.input_qty, unit, scenario.output_qty, unit, scenario.calls
    );

    // Log-scale bounds over the displayed entries; chart_value keeps zero
    // costs on the axis.
    let log_min = ranked
        .iter()
        .map(|r| chart_value(r.cost).log10())
        .fold(f64::INFINITY, f64::min);
    let log_max = ranked
        .iter()
        .map(|r| chart_value(r.cost).log10())
        .fold(f64::NEG_INFINITY, f64::max);
    let log_span = log_max - log_min;

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("RANK").fg(Color::Cyan),
        Cell::new("MODEL").fg(Color::Cyan),
        Cell::new("PROVIDER").fg(Color::Cyan),
        Cell::new("EST. COST").fg(Color::Cyan),
        Cell::new("COST (LOG SCALE)").fg(Color::Cyan),
    ]);

    for (rank, entry) in ranked.iter().enumerate() {
        let bar = render_bar(chart_value(entry.cost).log10(), log_min, log_span);

        let model_cell = if entry.is_selected {
            Cell::new(format!("{} *", entry.name)).fg(Color::Green)
        } else {
            Cell::new(&entry.name)
        };

        table.add_row(vec![
            Cell::new(rank + 1),
            model_cell,
            Cell::new(&entry.provider_name),
            Cell::new(format!("${:.6}", entry.cost)),
            Cell::new(bar),
        ]);
    }

    println!("{}", table);

    if select.is_some() {
        println!("\n* selected model");
    }
    println!(
        "{} of {} models shown, cheapest first",
        ranked.len(),
        store.len()
    );

    Ok(())
}

fn render_bar(log_cost: f64, log_min: f64, log_span: f64) -> String {
    let filled = if log_span > 0.0 {
        let fraction = (log_cost - log_min) / log_span;
        1 + (fraction * (BAR_WIDTH - 1) as f64).round() as usize
    } else {
        // Every entry costs the same; draw identical minimal bars.
        1
    };

    "█".repeat(filled.min(BAR_WIDTH))
}
