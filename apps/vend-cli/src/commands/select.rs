//! # Select Item
//!
//! ## User Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  "Code: " A1                                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  session.purchase("A1")                                                 │
//! │       │                                                                 │
//! │       ├── UnknownCode       → "Unknown code. Please try again."         │
//! │       ├── OutOfStock        → "Sorry, Coffee is out of stock."          │
//! │       ├── InsufficientFunds → "Insufficient funds. Need 50p more."      │
//! │       │                                                                 │
//! │       └── OK → "*** DISPENSING: Coffee (A1) ***"                        │
//! │                    │                                                    │
//! │                    └── balance > 0? → "Return change now? (y/n): "      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{BufRead, Write};

use tracing::debug;
use vend_core::validation::{is_affirmative, parse_code_token, CodeToken};
use vend_core::{Session, VendError};

use crate::commands::change::return_change;
use crate::console::Console;
use crate::error::AppResult;

pub fn select_item<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    session: &mut Session,
) -> AppResult<()> {
    console.say("\nEnter item code (e.g., A1). Type 'back' to cancel.")?;

    let Some(line) = console.prompt("Code: ")? else {
        return Ok(());
    };
    let code = match parse_code_token(&line) {
        CodeToken::Back => {
            debug!("selection cancelled");
            return Ok(());
        }
        CodeToken::Code(code) => code,
    };

    let purchase = match session.purchase(&code) {
        Ok(purchase) => purchase,
        Err(err) => return report_rejection(console, &err),
    };

    console.say(format!(
        "\n*** DISPENSING: {} ({}) ***",
        purchase.name, purchase.code
    ))?;
    console.say(format!(
        "Price: {} | Remaining balance: {}",
        purchase.price, purchase.balance
    ))?;

    if purchase.balance.is_positive() {
        if let Some(answer) = console.prompt("Return change now? (y/n): ")? {
            if is_affirmative(&answer) {
                return_change(console, session)?;
            }
        }
    }

    Ok(())
}

fn report_rejection<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    err: &VendError,
) -> AppResult<()> {
    match err {
        VendError::UnknownCode(_) => console.say("  Unknown code. Please try again."),
        VendError::OutOfStock { name, .. } => {
            console.say(format!("  Sorry, {name} is out of stock."))
        }
        VendError::InsufficientFunds { shortfall, .. } => {
            console.say(format!("  Insufficient funds. Need {shortfall} more."))
        }
        other => console.say(format!("  {other}")),
    }
}
