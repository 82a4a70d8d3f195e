//! Menu rendering.
//!
//! ```text
//! ========== VENDING MACHINE ==========
//! Balance: 0p
//! -------------------------------------
//! Code  Item                 Price   Stock
//! -------------------------------------
//! A1    Coffee                150p       5
//! ...
//! -------------------------------------
//! Options: I) Insert money   S) Select item   R) Return change   Q) Quit
//! ```

use std::io::{BufRead, Write};

use vend_core::{Item, Session};

use crate::console::Console;
use crate::error::AppResult;

pub const RULE: &str = "-------------------------------------";

pub const OPTIONS: &str =
    "Options: I) Insert money   S) Select item   R) Return change   Q) Quit";

/// One table row: code, name, price, stock.
pub fn format_row(item: &Item) -> String {
    format!(
        "{:<6}{:<18}{:>8}{:>8}",
        item.code,
        item.name,
        item.price().to_string(),
        item.stock
    )
}

/// Draws the full menu.
pub fn show_menu<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    session: &Session,
) -> AppResult<()> {
    console.say("\n========== VENDING MACHINE ==========")?;
    show_balance(console, session)?;
    console.say(RULE)?;
    console.say(format!(
        "{:<6}{:<18}{:>8}{:>8}",
        "Code", "Item", "Price", "Stock"
    ))?;
    console.say(RULE)?;
    for item in session.inventory() {
        console.say(format_row(item))?;
    }
    console.say(RULE)?;
    console.say(OPTIONS)
}

pub fn show_balance<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    session: &Session,
) -> AppResult<()> {
    console.say(format!("Balance: {}", session.balance()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use vend_core::{default_catalog, Inventory};

    #[test]
    fn test_format_row_alignment() {
        let row = format_row(&Item::new("D1", "Crisps (Salt)", 90, 5));
        assert_eq!(row, "D1    Crisps (Salt)          90p       5");
    }

    #[test]
    fn test_show_menu_lists_every_item() {
        let session = Session::new(Inventory::new(default_catalog()).unwrap());
        let mut console = Console::new(Cursor::new(""), Vec::new());
        show_menu(&mut console, &session).unwrap();

        let (_, output) = console.into_inner();
        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Balance: 0p"));
        assert!(text.contains("A1    Coffee                150p       5"));
        assert!(text.contains("E1    Biscuits              110p       4"));
        assert!(text.trim_end().ends_with(OPTIONS));
    }
}
