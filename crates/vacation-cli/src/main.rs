//! `vacation` CLI — list public holidays, free blocks, and leave suggestions.
//!
//! ## Usage
//!
//! ```sh
//! # Public holidays for a year
//! vacation holidays --year 2025
//!
//! # Weekends and holidays grouped into free blocks, as JSON
//! vacation blocks --year 2025 --format json
//!
//! # Top suggestions with a three-day chunk limit and a ten-day budget
//! vacation suggest --year 2025 --max-chunk 3 --budget 10
//!
//! # Load the policy from a file and write the result to disk
//! vacation suggest --year 2025 --config policy.json -o plan.json --format json
//! ```
//!
//! Diagnostics go to stderr; set `RUST_LOG=debug` for pipeline counts.

mod render;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;
use vacation_engine::{
    compute_free_blocks, compute_public_holidays, plan_year, OpportunityPolicy,
};

#[derive(Parser)]
#[command(
    name = "vacation",
    version,
    about = "Find the leave days that buy the longest breaks in a year"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the public holidays of a year
    Holidays {
        /// Calendar year (1900-2300)
        #[arg(short, long)]
        year: i32,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Show runs of consecutive weekend days and holidays
    Blocks {
        /// Calendar year (1900-2300)
        #[arg(short, long)]
        year: i32,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Suggest leave days that yield long continuous time off
    Suggest {
        /// Calendar year (1900-2300)
        #[arg(short, long)]
        year: i32,
        /// JSON file with an opportunity policy (flags below override it)
        #[arg(long)]
        config: Option<String>,
        /// Longest run of leave days suggested as one chunk
        #[arg(long)]
        max_chunk: Option<u32>,
        /// Number of suggestions to show
        #[arg(long)]
        top: Option<usize>,
        /// Skip suggestions costing more leave days than this
        #[arg(long)]
        budget: Option<u32>,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Holidays { year, format } => {
            let holidays = compute_public_holidays(year)
                .with_context(|| format!("Failed to compute holidays for {}", year))?;
            let content = match format {
                Format::Text => render::holidays_text(&holidays)?,
                Format::Json => serde_json::to_string_pretty(&holidays)?,
            };
            write_output(None, &content)?;
        }
        Commands::Blocks { year, format } => {
            let holidays = compute_public_holidays(year)
                .with_context(|| format!("Failed to compute holidays for {}", year))?;
            let blocks = compute_free_blocks(year, &holidays)
                .with_context(|| format!("Failed to compute free blocks for {}", year))?;
            let content = match format {
                Format::Text => render::blocks_text(year, &blocks, &holidays)?,
                Format::Json => serde_json::to_string_pretty(&blocks)?,
            };
            write_output(None, &content)?;
        }
        Commands::Suggest {
            year,
            config,
            max_chunk,
            top,
            budget,
            format,
            output,
        } => {
            let policy = build_policy(config.as_deref(), max_chunk, top, budget)?;
            let plan = plan_year(year, &policy)
                .with_context(|| format!("Failed to compute suggestions for {}", year))?;
            let content = match format {
                Format::Text => render::suggestions_text(year, &plan.opportunities)?,
                Format::Json => serde_json::to_string_pretty(&plan)?,
            };
            write_output(output.as_deref(), &content)?;
        }
    }

    Ok(())
}

/// Install a stderr subscriber filtered by `RUST_LOG` (default `warn`).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Start from the config file (or defaults) and apply any explicit flags.
fn build_policy(
    config: Option<&str>,
    max_chunk: Option<u32>,
    top: Option<usize>,
    budget: Option<u32>,
) -> Result<OpportunityPolicy> {
    let mut policy = match config {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {}", path))?;
            OpportunityPolicy::from_json(&json)
                .with_context(|| format!("Failed to parse config file: {}", path))?
        }
        None => OpportunityPolicy::default(),
    };

    if let Some(max_chunk) = max_chunk {
        policy.max_chunk_size = max_chunk;
    }
    if let Some(top) = top {
        policy.top_n = top;
    }
    if budget.is_some() {
        policy.leave_budget = budget;
    }

    tracing::debug!(?policy, "resolved opportunity policy");
    Ok(policy)
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
