//! Grain grader - command line entry point
//!
//! Reads a JSON grading request from a file or stdin and prints the grading
//! report as JSON on stdout. Logs go to stderr.

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use grain_grader::{Config, GradingService};

/// Classify corn and soybean samples and compute lot weight discounts
#[derive(Debug, Parser)]
#[command(name = "grain-grader", version)]
struct Cli {
    /// JSON grading request; read from stdin when omitted
    #[arg(value_name = "REQUEST")]
    request: Option<PathBuf>,

    /// Configuration file overriding the standard threshold tables
    #[arg(long, short, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Pretty-print the report
    #[arg(long)]
    pretty: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::load(cli.config.as_deref())?;

    // Initialize tracing
    let json_logs = config.log_json;
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.as_str().into()),
        )
        .with(json_logs.then(|| {
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr)
        }))
        .with((!json_logs).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr)))
        .init();

    tracing::debug!("Environment: {}", config.environment);

    let service = GradingService::new(config.tables)?;

    let outcome = match &cli.request {
        Some(path) => {
            tracing::debug!("Reading request from {}", path.display());
            service.grade_reader(BufReader::new(File::open(path)?))?
        }
        None => service.grade_reader(std::io::stdin().lock())?,
    };

    let report = if cli.pretty {
        serde_json::to_string_pretty(&outcome)?
    } else {
        serde_json::to_string(&outcome)?
    };
    println!("{}", report);

    Ok(())
}
