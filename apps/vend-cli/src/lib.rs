//! # Vend Console Library
//!
//! Core library for the console vending machine. `main.rs` only parses flags
//! and calls into here, so the whole loop can be driven from tests.
//!
//! ## Module Organization
//! ```text
//! vend_cli/
//! ├── lib.rs          ◄─── You are here (setup & run)
//! ├── config.rs       ◄─── Flags and runtime configuration
//! ├── console.rs      ◄─── Prompt / line reader over BufRead + Write
//! ├── machine.rs      ◄─── Top-level command loop
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command parsing
//! │   ├── menu.rs     ◄─── Menu rendering
//! │   ├── insert.rs   ◄─── Insert money
//! │   ├── select.rs   ◄─── Select item
//! │   └── change.rs   ◄─── Return change / quit
//! └── error.rs        ◄─── App error type
//! ```

pub mod commands;
pub mod config;
pub mod console;
pub mod error;
pub mod machine;

use std::io::{self, BufRead, Write};

use tracing::info;
use tracing_subscriber::EnvFilter;
use vend_core::{default_catalog, Inventory, Session};

pub use config::{Args, CliConfig, MenuMode};
pub use error::{AppError, AppResult};
pub use machine::VendingMachine;

/// Runs the machine on the process's stdin and stdout.
pub fn run(config: &CliConfig) -> AppResult<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_with(config, stdin.lock(), stdout.lock())?;
    Ok(())
}

/// Runs the machine with the built-in catalog on arbitrary streams.
///
/// Returns the session as it stood when the loop ended.
pub fn run_with<R: BufRead, W: Write>(
    config: &CliConfig,
    input: R,
    output: W,
) -> AppResult<Session> {
    let inventory = Inventory::new(default_catalog())?;
    let session = Session::new(inventory);

    let session = VendingMachine::new(config, session, input, output).run()?;
    info!(balance = session.balance().pence(), "session ended");
    Ok(session)
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=vend_core=trace` - Trace the core crate only
/// - Default: `default_filter` (from `-v` flags)
///
/// Logs go to stderr; stdout is the customer's panel.
pub fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
