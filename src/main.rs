//! hicache - A fast lookup cache for pluggable syntax highlighting components
//!
//! hicache provides:
//! - One-time discovery of the component catalog
//! - A persisted key-to-component mapping in a single JSON file
//! - Fast lookups by filename, extension or short name

use anyhow::Result;
use clap::Parser;

use hicache::cli;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::run(cli)
}
