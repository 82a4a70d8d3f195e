//! # Vending Machine Loop
//!
//! The top-level "awaiting command" state.
//!
//! ## Loop
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   ┌──► show menu ──► "Choose [I/S/R/Q]: " ──► EOF ──► stop (no change)  │
//! │   │                         │                                           │
//! │   │                         ▼                                           │
//! │   │                  dispatch command                                   │
//! │   │                         │                                           │
//! │   └─────────────────────────┤                                           │
//! │                             └── Q ──► return balance ──► "Goodbye!"     │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{BufRead, Write};

use tracing::{debug, info};
use vend_core::Session;

use crate::commands::{change, insert, menu, select, Command};
use crate::config::{CliConfig, MenuMode};
use crate::console::Console;
use crate::error::AppResult;

/// Console, session and display settings for one run.
pub struct VendingMachine<R, W> {
    console: Console<R, W>,
    session: Session,
    menu_mode: MenuMode,
}

impl<R: BufRead, W: Write> VendingMachine<R, W> {
    pub fn new(config: &CliConfig, session: Session, input: R, output: W) -> Self {
        VendingMachine {
            console: Console::new(input, output),
            session,
            menu_mode: config.menu_mode,
        }
    }

    /// Runs until `Q` or end of input and hands back the final session.
    pub fn run(mut self) -> AppResult<Session> {
        info!(items = self.session.inventory().len(), "machine ready");

        let mut first_turn = true;

        loop {
            if first_turn || self.menu_mode == MenuMode::EveryTurn {
                menu::show_menu(&mut self.console, &self.session)?;
            } else {
                menu::show_balance(&mut self.console, &self.session)?;
            }
            first_turn = false;

            let Some(line) = self.console.prompt("Choose [I/S/R/Q]: ")? else {
                info!(
                    balance = self.session.balance().pence(),
                    "input closed, stopping without returning change"
                );
                break;
            };

            let Some(command) = Command::parse(&line) else {
                continue;
            };
            debug!(?command, "command received");

            match command {
                Command::Insert => insert::insert_money(&mut self.console, &mut self.session)?,
                Command::Select => select::select_item(&mut self.console, &mut self.session)?,
                Command::ReturnChange => {
                    change::return_change(&mut self.console, &mut self.session)?
                }
                Command::Quit => {
                    change::quit(&mut self.console, &mut self.session)?;
                    break;
                }
                Command::Unknown(_) => self
                    .console
                    .say("Unknown option. Please choose I, S, R or Q.")?,
            }
        }

        Ok(self.session)
    }
}
