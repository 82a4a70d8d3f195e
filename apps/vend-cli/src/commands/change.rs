//! Return change and quit.

use std::io::{BufRead, Write};

use tracing::info;
use vend_core::Session;

use crate::console::Console;
use crate::error::AppResult;

const BANNER_RULE: &str = "***************************************";

/// Pays out the whole balance and lists the coins.
pub fn return_change<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    session: &mut Session,
) -> AppResult<()> {
    let Some(change) = session.return_change() else {
        return console.say("No change to return.");
    };

    console.say(format!("\n*** RETURNING CHANGE: {} ***", change.total()))?;
    for line in change.coins() {
        console.say(format!("  {} x {}", line.coin, line.count))?;
    }
    console.say(BANNER_RULE)
}

/// Returns any outstanding balance, then says goodbye.
pub fn quit<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    session: &mut Session,
) -> AppResult<()> {
    if session.balance().is_positive() {
        console.say("\nYou have a remaining balance.")?;
        return_change(console, session)?;
    }

    info!("customer quit");
    console.say("Goodbye!")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use vend_core::{default_catalog, Inventory, Money};

    fn session_with(coins: &[i64]) -> Session {
        let mut session = Session::new(Inventory::new(default_catalog()).unwrap());
        for &coin in coins {
            session.insert_coin(Money::from_pence(coin)).unwrap();
        }
        session
    }

    fn output_of(console: Console<Cursor<&str>, Vec<u8>>) -> String {
        String::from_utf8(console.into_inner().1).unwrap()
    }

    #[test]
    fn test_nothing_to_return() {
        let mut session = session_with(&[]);
        let mut console = Console::new(Cursor::new(""), Vec::new());
        return_change(&mut console, &mut session).unwrap();
        assert_eq!(output_of(console), "No change to return.\n");
    }

    #[test]
    fn test_lists_non_zero_coins() {
        let mut session = session_with(&[50, 20, 20, 5]);
        let mut console = Console::new(Cursor::new(""), Vec::new());
        return_change(&mut console, &mut session).unwrap();

        assert!(session.balance().is_zero());
        assert_eq!(
            output_of(console),
            concat!(
                "\n*** RETURNING CHANGE: 95p ***\n",
                "  50p x 1\n  20p x 2\n  5p x 1\n",
                "***************************************\n",
            )
        );
    }

    #[test]
    fn test_quit_returns_balance_first() {
        let mut session = session_with(&[50, 20, 5]);
        let mut console = Console::new(Cursor::new(""), Vec::new());
        quit(&mut console, &mut session).unwrap();

        assert!(session.balance().is_zero());
        let text = output_of(console);
        let returned = text.find("RETURNING CHANGE: 75p").unwrap();
        let goodbye = text.find("Goodbye!").unwrap();
        assert!(returned < goodbye);
        assert!(text.contains("  50p x 1\n  20p x 1\n  5p x 1\n"));
    }

    #[test]
    fn test_quit_with_empty_balance() {
        let mut session = session_with(&[]);
        let mut console = Console::new(Cursor::new(""), Vec::new());
        quit(&mut console, &mut session).unwrap();
        assert_eq!(output_of(console), "Goodbye!\n");
    }
}
