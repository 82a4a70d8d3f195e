//! # Vend Entry Point
//!
//! ## Startup Sequence
//! 1. Parse flags
//! 2. Initialize tracing (stderr)
//! 3. Load the built-in catalog into a fresh session
//! 4. Run the command loop on stdin/stdout

use anyhow::Context;
use clap::Parser;
use vend_cli::{Args, CliConfig};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::from(Args::parse());
    vend_cli::init_tracing(&config.log_filter);

    vend_cli::run(&config).context("vending machine stopped unexpectedly")?;
    Ok(())
}
