//! # Panel Commands
//!
//! One handler per menu option. Each borrows the console and the session for
//! the duration of a single command.
//!
//! ## Command Dispatch
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  "Choose [I/S/R/Q]: "                                                   │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  Command::parse(first char, any case)                                   │
//! │        │                                                                │
//! │        ├── I ──► insert::insert_money()                                 │
//! │        ├── S ──► select::select_item()                                  │
//! │        ├── R ──► change::return_change()                                │
//! │        ├── Q ──► change::quit()            (loop ends)                  │
//! │        └── ? ──► "Unknown option..."                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod change;
pub mod insert;
pub mod menu;
pub mod select;

/// A top-level menu choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Insert,
    Select,
    ReturnChange,
    Quit,
    Unknown(char),
}

impl Command {
    /// Parses a command line; `None` for a blank line.
    ///
    /// Only the first non-blank character matters, so `insert` and `I` both
    /// mean insert.
    pub fn parse(line: &str) -> Option<Command> {
        let first = line.trim().chars().next()?;

        Some(match first.to_ascii_uppercase() {
            'I' => Command::Insert,
            'S' => Command::Select,
            'R' => Command::ReturnChange,
            'Q' => Command::Quit,
            _ => Command::Unknown(first),
        })
    }
}
