//! CLI argument definitions for lvinfo.

use std::path::PathBuf;

use clap::Parser;
use lvinfo_core::config::DEFAULT_LEVELS_PATH;

#[derive(Parser, Debug)]
#[command(name = "lvinfo")]
#[command(about = "International chart level table exporter", version)]
pub struct Args {
    /// Levels document (JSON array of song records)
    #[arg(long, value_name = "FILE", default_value = DEFAULT_LEVELS_PATH)]
    pub levels: PathBuf,
}
