mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Args;
use lvinfo_core::{JsonFileProvider, config, export};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr; RUST_LOG overrides the default filter
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("lvinfo_cli=info,lvinfo_core=info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    info!("lvinfo {} starting", env!("CARGO_PKG_VERSION"));

    let provider = JsonFileProvider::new(&args.levels);
    let summary = export(&provider, config::OUTPUT_PATH)
        .with_context(|| format!("Failed to export level table to {}", config::OUTPUT_PATH))?;

    info!(
        "Level table written to {} ({} rows)",
        config::OUTPUT_PATH,
        summary.written
    );
    Ok(())
}
