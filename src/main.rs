// src/main.rs

use std::path::PathBuf;
use std::process;

use clap::Parser;

use divscreen::config::DEFAULT_MIN_YIELD;
use divscreen::{FilterCriteria, HttpSession, RunOutcome, ScreenConfig, ScreenError, Screener};

/// Collects the dividend histories of B3 stocks passing a dividend screen.
#[derive(Debug, Parser)]
#[command(name = "divscreen", version, about)]
struct Cli {
    /// Output CSV file.
    #[arg(long, default_value = "dividends.csv")]
    output: PathBuf,

    /// Minimum trailing dividend yield (0.06 = 6%).
    #[arg(long, default_value_t = DEFAULT_MIN_YIELD)]
    min_yield: f64,

    /// Optional cap on the trailing price/earnings ratio.
    #[arg(long)]
    max_pe: Option<f64>,

    /// Optional cap on the payout ratio.
    #[arg(long)]
    max_payout: Option<f64>,

    /// Provider requests in flight per stage (1 = strictly sequential).
    #[arg(long, default_value_t = 1)]
    concurrency: usize,
}

#[tokio::main]
async fn main() {
    if let Err(error) = run(Cli::parse()).await {
        eprintln!("error: {error}");
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), ScreenError> {
    let session = HttpSession::new()?;
    let config = ScreenConfig {
        output_path: cli.output,
        criteria: FilterCriteria {
            min_yield: cli.min_yield,
            max_pe: cli.max_pe,
            max_payout: cli.max_payout,
        },
        concurrency: cli.concurrency,
    };

    match Screener::live(&session).run(&config).await? {
        RunOutcome::Written { path, rows } => {
            println!("saved {rows} dividend rows to {}", path.display());
        }
        RunOutcome::NothingCollected => println!("no data collected"),
    }
    Ok(())
}
