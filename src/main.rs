use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use llm_pricing::init_tracing;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let args = cli::Cli::parse();

    // Initialize tracing/logging early (except for the serve command,
    // which initializes it from the loaded configuration)
    let needs_early_tracing = !matches!(args.get_command(), cli::Commands::Serve);

    if needs_early_tracing {
        init_tracing();
    }

    // Dispatch to appropriate command handler
    match args.get_command() {
        cli::Commands::Serve => {
            commands::serve::execute(&args.config, args.catalog.as_deref()).await?;
        }
        cli::Commands::List { query, json } => {
            commands::list::execute(args.catalog.as_deref(), query.as_deref(), json)?;
        }
        cli::Commands::Calc {
            model,
            input,
            output,
            unit,
            calls,
            json,
        } => {
            commands::calc::execute(
                args.catalog.as_deref(),
                &model,
                input,
                output,
                unit,
                calls,
                json,
            )?;
        }
        cli::Commands::Compare {
            input,
            output,
            unit,
            calls,
            select,
            top,
            json,
        } => {
            commands::compare::execute(
                args.catalog.as_deref(),
                input,
                output,
                unit,
                calls,
                select.as_deref(),
                top,
                json,
            )?;
        }
        cli::Commands::Test => {
            commands::test::execute(args.catalog.as_deref())?;
        }
        cli::Commands::Version => {
            println!("LLM Pricing v{}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
