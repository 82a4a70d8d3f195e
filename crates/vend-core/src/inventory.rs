//! # Inventory
//!
//! Ordered collection of catalog items, owned by the session.
//!
//! Lookup is by code, case-insensitively, first match wins. Catalog
//! validation makes codes unique, so "first" only matters for display order.

use serde::Serialize;

use crate::types::Item;
use crate::validation::{validate_catalog, ValidationResult};

/// The machine's slots, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Inventory {
    items: Vec<Item>,
}

impl Inventory {
    /// Builds an inventory from a validated catalog.
    ///
    /// ## Example
    /// ```rust
    /// use vend_core::{default_catalog, Inventory};
    ///
    /// let inventory = Inventory::new(default_catalog()).unwrap();
    /// assert_eq!(inventory.find("a1").unwrap().name, "Coffee");
    /// assert!(inventory.find("Z9").is_none());
    /// ```
    pub fn new(items: Vec<Item>) -> ValidationResult<Self> {
        validate_catalog(&items)?;
        Ok(Inventory { items })
    }

    /// All items in display order.
    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Looks an item up by code (trimmed, case-insensitive).
    pub fn find(&self, code: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.matches_code(code))
    }

    /// Remaining stock for a code, if the code exists.
    pub fn stock_of(&self, code: &str) -> Option<u32> {
        self.find(code).map(|item| item.stock)
    }

    pub(crate) fn find_mut(&mut self, code: &str) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| item.matches_code(code))
    }
}

impl<'a> IntoIterator for &'a Inventory {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
