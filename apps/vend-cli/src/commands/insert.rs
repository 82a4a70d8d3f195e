//! # Insert Money
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  "Coin (pence) or 'done': " ◄────────────────────────────┐              │
//! │        │                                                 │              │
//! │        ├── done / EOF ──► back to main menu              │              │
//! │        ├── not digits ──► "Invalid input..."  ───────────┤              │
//! │        ├── too large  ──► "Invalid number."   ───────────┤              │
//! │        ├── 25         ──► "Unsupported coin: 25p" ───────┤              │
//! │        └── 50         ──► "Added 50p. New balance 50p" ──┘              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{BufRead, Write};

use tracing::debug;
use vend_core::validation::{parse_coin_token, CoinToken};
use vend_core::{Session, ValidationError, VendError, COIN_DENOMINATIONS};

use crate::console::Console;
use crate::error::AppResult;

/// Accepted coins smallest first, as the panel lists them: `5, 10, ... 200`.
fn coin_list(separator: &str) -> String {
    COIN_DENOMINATIONS
        .iter()
        .rev()
        .map(|coin| coin.pence().to_string())
        .collect::<Vec<_>>()
        .join(separator)
}

/// `5, 10, 20, 50, 100, or 200`
fn coin_list_with_or() -> String {
    let mut list = coin_list(", ");
    if let Some(last_sep) = list.rfind(", ") {
        list.insert_str(last_sep + 2, "or ");
    }
    list
}

pub fn insert_money<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    session: &mut Session,
) -> AppResult<()> {
    console.say(format!("\nInsert coins (in pence): {}", coin_list(", ")))?;
    console.say("Type value in pence (e.g., 50) or 'done' to finish.")?;

    while let Some(line) = console.prompt("Coin (pence) or 'done': ")? {
        match parse_coin_token(&line) {
            Ok(CoinToken::Done) => break,
            Ok(CoinToken::Coin(coin)) => match session.insert_coin(coin) {
                Ok(balance) => console.say(format!("  Added {coin}. New balance {balance}"))?,
                Err(VendError::UnsupportedCoin(coin)) => {
                    console.say(format!("  Unsupported coin: {coin}"))?
                }
                Err(err) => console.say(format!("  {err}"))?,
            },
            Err(ValidationError::OutOfRange { .. }) => {
                debug!(token = %line, "coin value out of range");
                console.say("  Invalid number.")?
            }
            Err(err) => {
                debug!(token = %line, error = %err, "malformed coin token");
                console.say(format!(
                    "  Invalid input. Please enter {}.",
                    coin_list_with_or()
                ))?
            }
        }
    }

    Ok(())
}
