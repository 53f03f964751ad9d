use anyhow::Result;
use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};
use std::path::Path;

use llm_pricing::catalog::CatalogStore;
use llm_pricing::search;

/// Execute the list command
///
/// Prints the catalog as a table (or JSON), optionally filtered the same
/// way the API's `q` parameter filters.
pub fn execute(catalog_path: Option<&Path>, query: Option<&str>, json: bool) -> Result<()> {
    let store = CatalogStore::load(catalog_path)?;
    let records = search::filter_by_query(store.all(), query.unwrap_or(""));

    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    if records.is_empty() {
        println!("No models found matching your search criteria.");
        return Ok(());
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("MODEL").fg(Color::Cyan),
        Cell::new("PROVIDER").fg(Color::Cyan),
        Cell::new("QUALITY").fg(Color::Cyan),
        Cell::new("CONTEXT").fg(Color::Cyan),
        Cell::new("INPUT $/1M").fg(Color::Cyan),
        Cell::new("OUTPUT $/1M").fg(Color::Cyan),
        Cell::new("KNOWLEDGE").fg(Color::Cyan),
    ]);

    for model in &records {
        table.add_row(vec![
            Cell::new(&model.name),
            Cell::new(&model.provider.name),
            Cell::new(model.quality),
            Cell::new(&model.context),
            Cell::new(format!("${}", model.input_price)),
            Cell::new(format!("${}", model.output_price)),
            Cell::new(&model.knowledge),
        ]);
    }

    println!("{}", table);

    match store.as_of() {
        Some(date) => println!(
            "\n{} of {} models shown (pricing as of {})",
            records.len(),
            store.len(),
            date
        ),
        None => println!("\n{} of {} models shown", records.len(), store.len()),
    }

    if !store.warnings().is_empty() {
        println!(
            "{} catalog warnings - run 'llm-pricing test' for details",
            store.warnings().len()
        );
    }

    Ok(())
}
