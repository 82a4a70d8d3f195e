//! # Configuration
//!
//! Command-line flags and the runtime configuration derived from them.
//!
//! ## Configuration Sources (Priority Order)
//! 1. `RUST_LOG` (diagnostics only, never behaviour)
//! 2. Command-line flags
//! 3. Defaults (this file)

use clap::{ArgAction, Parser};

/// Command-line flags.
#[derive(Debug, Parser)]
#[command(name = "vend", version, about = "Console vending machine simulator")]
pub struct Args {
    /// Show the full menu only once at startup
    #[arg(long)]
    pub no_menu: bool,

    /// Raise diagnostic log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// When the item table is drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MenuMode {
    /// Before every command prompt.
    #[default]
    EveryTurn,
    /// Once at startup, then just the balance line.
    Once,
}

/// Runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    pub menu_mode: MenuMode,

    /// Default `EnvFilter` directive when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for CliConfig {
    /// Full menu every turn, warnings only.
    fn default() -> Self {
        CliConfig {
            menu_mode: MenuMode::EveryTurn,
            log_filter: "warn".to_string(),
        }
    }
}

impl From<Args> for CliConfig {
    fn from(args: Args) -> Self {
        let log_filter = match args.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        CliConfig {
            menu_mode: if args.no_menu {
                MenuMode::Once
            } else {
                MenuMode::EveryTurn
            },
            log_filter: log_filter.to_string(),
        }
    }
}
