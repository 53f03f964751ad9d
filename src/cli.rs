use clap::{Parser, Subcommand};
use llm_pricing::pricing::Unit;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "llm-pricing", version, about = "LLM pricing catalog and cost calculator")]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config.toml", global = true)]
    pub config: PathBuf,

    /// Catalog data file (overrides the embedded dataset)
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Start the pricing API server (default)
    Serve,

    /// List catalog models, optionally filtered by a search query
    List {
        /// Filter matched against model and provider names
        query: Option<String>,

        /// Print raw JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Estimate the cost of one usage scenario
    Calc {
        /// Model id to price
        #[arg(short, long)]
        model: String,

        /// Input volume in the selected unit
        #[arg(long, default_value = "1000")]
        input: f64,

        /// Output volume in the selected unit
        #[arg(long, default_value = "1000")]
        output: f64,

        /// Unit the volumes are expressed in
        #[arg(long, value_enum, default_value_t = Unit::Tokens)]
        unit: Unit,

        /// Number of API calls
        #[arg(long, default_value = "1")]
        calls: i64,

        /// Print raw JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Rank every catalog model by cost for a scenario
    Compare {
        /// Input volume in the selected unit
        #[arg(long, default_value = "1000")]
        input: f64,

        /// Output volume in the selected unit
        #[arg(long, default_value = "1000")]
        output: f64,

        /// Unit the volumes are expressed in
        #[arg(long, value_enum, default_value_t = Unit::Tokens)]
        unit: Unit,

        /// Number of API calls
        #[arg(long, default_value = "1")]
        calls: i64,

        /// Model id to highlight in the ranking
        #[arg(short, long)]
        select: Option<String>,

        /// Show only the N cheapest models
        #[arg(long)]
        top: Option<usize>,

        /// Print raw JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Validate the catalog data file and report warnings
    Test,

    /// Show version information
    Version,
}

impl Cli {
    /// Get the command to execute, defaulting to Serve if none provided
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Serve)
    }
}
