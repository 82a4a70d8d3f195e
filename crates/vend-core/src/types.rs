//! # Domain Types
//!
//! The catalog item and the machine's built-in stock list.
//!
//! ## Item Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  default_catalog() ──► Inventory::new() ──► Session                     │
//! │                                                │                        │
//! │                                  purchase ─────┴──► stock -= 1          │
//! │                                                                         │
//! │  Items are never created, removed or restocked after startup.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Item
// =============================================================================

/// A product slot in the machine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Slot code shown on the panel (e.g. `A1`). Matched case-insensitively.
    pub code: String,

    /// Display name.
    pub name: String,

    /// Price in pence.
    pub price_pence: i64,

    /// Units left in the slot.
    pub stock: u32,
}

impl Item {
    /// Creates an item.
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        price_pence: i64,
        stock: u32,
    ) -> Self {
        Item {
            code: code.into(),
            name: name.into(),
            price_pence,
            stock,
        }
    }

    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_pence(self.price_pence)
    }

    /// Checks if at least one unit can be dispensed.
    #[inline]
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Case-insensitive code comparison; `code` is trimmed first.
    pub fn matches_code(&self, code: &str) -> bool {
        self.code.eq_ignore_ascii_case(code.trim())
    }
}

// =============================================================================
// Built-in Catalog
// =============================================================================

/// The stock list the machine is loaded with at startup, in display order.
pub fn default_catalog() -> Vec<Item> {
    vec![
        Item::new("A1", "Coffee", 150, 5),
        Item::new("A2", "Tea", 120, 5),
        Item::new("B1", "Cola", 130, 6),
        Item::new("B2", "Orange Soda", 120, 6),
        Item::new("C1", "Chocolate Bar", 100, 4),
        Item::new("D1", "Crisps (Salt)", 90, 5),
        Item::new("E1", "Biscuits", 110, 4),
    ]
}

// =============================================================================
// Unit Tests
// =============================================================================
