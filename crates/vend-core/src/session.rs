//! # Session State
//!
//! Balance plus inventory, and the transitions the panel commands drive.
//!
//! ## Transitions
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Session Operations                                   │
//! │                                                                         │
//! │  Panel Command        Operation             State Change                │
//! │  ─────────────        ─────────             ────────────                │
//! │                                                                         │
//! │  I (coin)  ─────────► insert_coin()  ─────► balance += coin             │
//! │                                                                         │
//! │  S (code)  ─────────► purchase()     ─────► balance -= price            │
//! │                                              stock   -= 1               │
//! │                                                                         │
//! │  R / Q     ─────────► return_change() ────► balance = 0                 │
//! │                                                                         │
//! │  Every Err leaves balance and stock untouched.                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - `balance >= 0` at all times
//! - A purchase only happens when `balance >= price` and `stock > 0`

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::coins::{is_accepted_coin, make_change, ChangeBreakdown};
use crate::error::{ValidationError, VendError, VendResult};
use crate::inventory::Inventory;
use crate::money::Money;

/// What a successful purchase handed out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Purchase {
    pub code: String,
    pub name: String,
    pub price: Money,
    /// Balance left after paying.
    pub balance: Money,
}

/// One customer's interaction with the machine.
#[derive(Debug, Clone)]
pub struct Session {
    balance: Money,
    inventory: Inventory,
}

impl Session {
    /// Starts a session with a zero balance.
    pub fn new(inventory: Inventory) -> Self {
        Session {
            balance: Money::zero(),
            inventory,
        }
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Accepts one coin and returns the new balance.
    ///
    /// ## Example
    /// ```rust
    /// use vend_core::{default_catalog, Inventory, Money, Session};
    ///
    /// let mut session = Session::new(Inventory::new(default_catalog()).unwrap());
    /// session.insert_coin(Money::from_pence(50)).unwrap();
    /// session.insert_coin(Money::from_pence(20)).unwrap();
    /// assert_eq!(session.balance(), Money::from_pence(70));
    ///
    /// assert!(session.insert_coin(Money::from_pence(25)).is_err());
    /// assert_eq!(session.balance(), Money::from_pence(70));
    /// ```
    pub fn insert_coin(&mut self, coin: Money) -> VendResult<Money> {
        if !is_accepted_coin(coin) {
            debug!(coin = coin.pence(), "rejected unsupported coin");
            return Err(VendError::UnsupportedCoin(coin));
        }

        self.balance = self
            .balance
            .checked_add(coin)
            .ok_or_else(|| ValidationError::OutOfRange {
                field: "balance".to_string(),
                min: 0,
                max: i64::MAX,
            })?;

        debug!(coin = coin.pence(), balance = self.balance.pence(), "coin accepted");
        Ok(self.balance)
    }

    /// Buys one unit of the item with `code`.
    ///
    /// ## Checks (in order)
    /// 1. Code resolves → else `UnknownCode`
    /// 2. Stock > 0 → else `OutOfStock`
    /// 3. Balance covers price → else `InsufficientFunds` with the shortfall
    ///
    /// ## Example
    /// ```rust
    /// use vend_core::{default_catalog, Inventory, Money, Session, VendError};
    ///
    /// let mut session = Session::new(Inventory::new(default_catalog()).unwrap());
    /// session.insert_coin(Money::from_pence(100)).unwrap();
    ///
    /// match session.purchase("A1") {
    ///     Err(VendError::InsufficientFunds { shortfall, .. }) => {
    ///         assert_eq!(shortfall, Money::from_pence(50));
    ///     }
    ///     other => panic!("unexpected: {other:?}"),
    /// }
    /// ```
    pub fn purchase(&mut self, code: &str) -> VendResult<Purchase> {
        let balance = self.balance;

        let item = self
            .inventory
            .find_mut(code)
            .ok_or_else(|| VendError::UnknownCode(code.trim().to_string()))?;

        if !item.in_stock() {
            debug!(code = %item.code, "selection out of stock");
            return Err(VendError::OutOfStock {
                code: item.code.clone(),
                name: item.name.clone(),
            });
        }

        let price = item.price();
        if balance < price {
            let shortfall = price - balance;
            debug!(
                code = %item.code,
                price = price.pence(),
                balance = balance.pence(),
                shortfall = shortfall.pence(),
                "insufficient funds"
            );
            return Err(VendError::InsufficientFunds {
                code: item.code.clone(),
                price,
                balance,
                shortfall,
            });
        }

        item.stock -= 1;
        self.balance -= price;

        info!(
            code = %item.code,
            price = price.pence(),
            balance = self.balance.pence(),
            stock = item.stock,
            "item dispensed"
        );

        Ok(Purchase {
            code: item.code.clone(),
            name: item.name.clone(),
            price,
            balance: self.balance,
        })
    }

    /// Pays out the whole balance as coins and zeroes it.
    ///
    /// Returns `None` when there is nothing to return.
    ///
    /// ## Example
    /// ```rust
    /// use vend_core::{default_catalog, Inventory, Money, Session};
    ///
    /// let mut session = Session::new(Inventory::new(default_catalog()).unwrap());
    /// assert!(session.return_change().is_none());
    ///
    /// session.insert_coin(Money::from_pence(50)).unwrap();
    /// session.insert_coin(Money::from_pence(20)).unwrap();
    /// session.insert_coin(Money::from_pence(5)).unwrap();
    ///
    /// let change = session.return_change().unwrap();
    /// assert_eq!(change.total(), Money::from_pence(75));
    /// assert!(session.balance().is_zero());
    /// ```
    pub fn return_change(&mut self) -> Option<ChangeBreakdown> {
        if !self.balance.is_positive() {
            return None;
        }

        let change = make_change(self.balance);
        if !change.is_exact() {
            warn!(
                balance = self.balance.pence(),
                remainder = change.remainder().pence(),
                "balance could not be fully paid out in coins"
            );
        }

        info!(
            total = change.total().pence(),
            coins = change.coin_count(),
            "change returned"
        );
        self.balance = Money::zero();
        Some(change)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
