//! Wind direction period finder CLI.
//!
//! Reads a series of wind direction fields (or pre-extracted directions),
//! finds the periods a forecast text can describe with a single direction
//! and prints them as a JSON report on stdout.

mod config;
mod input;
mod report;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use config::{load_config, ConfigOverrides};
use input::SeriesInput;
use report::Report;
use wind_direction::WindDirectionPeriodFinder;

#[derive(Parser, Debug)]
#[command(name = "wind-periods")]
#[command(about = "Find wind direction periods in a forecast term series")]
struct Args {
    /// Series file (JSON or YAML, chosen by extension)
    #[arg(short, long)]
    input: PathBuf,

    /// Finder configuration file (YAML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Coverage policy: first_and_last, strict or keep_all
    #[arg(long)]
    coverage_policy: Option<String>,

    /// Share of valid pixels (0-100] the extracted sectors must cover
    #[arg(long)]
    percent_min: Option<f64>,

    /// Extract term directions on a single thread
    #[arg(long)]
    sequential: bool,

    /// Leave the per-term summary out of the report
    #[arg(long)]
    no_summary: bool,

    /// Pretty-print the JSON report
    #[arg(long)]
    pretty: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    json_logs: bool,

    /// Log level
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    init_tracing(&args.log_level, args.json_logs)?;

    let overrides = ConfigOverrides {
        coverage_policy: args.coverage_policy.clone(),
        percent_min: args.percent_min,
        sequential: args.sequential,
    };
    let config = load_config(args.config.as_deref(), &overrides)?;
    info!(
        percent_min = config.percent_min,
        policy = %config.coverage_policy,
        parallel = config.parallel_extraction,
        "Loaded finder configuration"
    );

    let input = SeriesInput::load(&args.input)?;
    let finder = WindDirectionPeriodFinder::new(config);
    let mut report = Report::build(&finder, input)?;
    if args.no_summary {
        report.summary = None;
    }

    let json = if args.pretty {
        serde_json::to_string_pretty(&report)
    } else {
        serde_json::to_string(&report)
    }
    .context("Failed to serialize report")?;
    println!("{}", json);

    Ok(())
}

/// Install the global subscriber. Logs go to stderr, stdout carries the report.
fn init_tracing(log_level: &str, json: bool) -> Result<()> {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let builder = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_writer(std::io::stderr);

    if json {
        tracing::subscriber::set_global_default(builder.json().finish())?;
    } else {
        tracing::subscriber::set_global_default(builder.finish())?;
    }

    Ok(())
}
