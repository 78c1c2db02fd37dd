use anyhow::{Context, Result};
use bankofx_ingest::normalize_path;
use bankofx_ofx::render_statement;
use clap::Parser;
use std::io::stderr;
use std::path::PathBuf;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{Layer, fmt};

mod config;
mod output;

use config::{ACCOUNT_ENV, load_config};
use output::{default_output_path, write_output};

const LONG_VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("BANKOFX_BUILD_SHA"), ")");

#[derive(Parser, Debug)]
#[command(
    name = "bankofx",
    version,
    long_version = LONG_VERSION,
    about = "Convert a bank CSV export into an OFX 1.02 statement"
)]
struct Cli {
    /// CSV export to convert
    input: PathBuf,

    /// Statement to write (default: INPUT with its extension replaced by .ofx)
    output: Option<PathBuf>,

    /// TOML config with account details and column names
    #[arg(long)]
    config: Option<PathBuf>,

    /// error, warn, info, debug or trace
    #[arg(long, default_value = "warn")]
    log_level: LevelFilter,

    /// Print the normalized transactions as JSON instead of writing OFX
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.log_level);

    let settings = load_config(cli.config.as_deref())?
        .resolve(std::env::var(ACCOUNT_ENV).ok())
        .context("invalid configuration")?;

    let txns = normalize_path(&cli.input, &settings.normalizer)
        .with_context(|| format!("converting {}", cli.input.display()))?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&txns)?);
        return Ok(());
    }

    let ofx = render_statement(&txns, &settings.statement_context())
        .with_context(|| format!("converting {}", cli.input.display()))?;

    let output = cli.output.unwrap_or_else(|| default_output_path(&cli.input));
    write_output(&output, &ofx)?;

    info!(
        count = txns.len(),
        output = %output.display(),
        "wrote statement"
    );
    Ok(())
}

fn setup_logging(level: LevelFilter) {
    // stdout carries --json output, so logs go to stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry().with(terminal_log).init();
}
