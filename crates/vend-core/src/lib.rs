//! # vend-core: Pure Business Logic for the Vending Machine
//!
//! This crate holds every rule the machine follows, as plain functions and
//! owned state with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Vend Architecture                                │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐    │
//! │  │                    vend-cli (Console)                           │    │
//! │  │    Menu ──► Insert ──► Select ──► Return change ──► Quit        │    │
//! │  └─────────────────────────────┬───────────────────────────────────┘    │
//! │                                │ &mut Session                           │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐    │
//! │  │               ★ vend-core (THIS CRATE) ★                        │    │
//! │  │                                                                 │    │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐   │    │
//! │  │   │   money   │  │   coins   │  │ inventory │  │  session  │   │    │
//! │  │   │   Money   │  │  table    │  │   Item    │  │  balance  │   │    │
//! │  │   │           │  │  change   │  │  lookup   │  │  purchase │   │    │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘   │    │
//! │  │                                                                 │    │
//! │  │   NO I/O • NO GLOBALS • PURE FUNCTIONS + OWNED STATE            │    │
//! │  └─────────────────────────────────────────────────────────────────┘    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer pence (no floating point!)
//! - [`coins`] - Accepted denominations and the greedy change calculator
//! - [`types`] - `Item` and the built-in catalog
//! - [`inventory`] - Ordered, case-insensitive item lookup
//! - [`session`] - Balance and stock transitions
//! - [`validation`] - Console token parsing and catalog checks
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use vend_core::{default_catalog, Inventory, Money, Session};
//!
//! let mut session = Session::new(Inventory::new(default_catalog()).unwrap());
//! session.insert_coin(Money::from_pence(200)).unwrap();
//!
//! let purchase = session.purchase("A1").unwrap();
//! assert_eq!(purchase.balance, Money::from_pence(50));
//!
//! let change = session.return_change().unwrap();
//! assert_eq!(change.count_of(Money::from_pence(50)), 1);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod coins;
pub mod error;
pub mod inventory;
pub mod money;
pub mod session;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use coins::{make_change, ChangeBreakdown, ChangeLine, COIN_DENOMINATIONS};
pub use error::{ValidationError, VendError, VendResult};
pub use inventory::Inventory;
pub use money::Money;
pub use session::{Purchase, Session};
pub use types::{default_catalog, Item};
