//! # Coins Module
//!
//! The coin table and the change calculator.
//!
//! ## Greedy Change
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  make_change(95p)                                                       │
//! │                                                                         │
//! │   coin   fits   take   remaining                                        │
//! │   ────   ────   ────   ─────────                                        │
//! │   200p    no      0       95p                                           │
//! │   100p    no      0       95p                                           │
//! │    50p    yes     1       45p                                           │
//! │    20p    yes     2        5p                                           │
//! │    10p    no      0        5p                                           │
//! │     5p    yes     1        0p   ✅ exact                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Canonical Coin Systems
//! Greedy reduction is only guaranteed to be exact and minimal for a
//! *canonical* coin system. The fixed table here is canonical and every
//! denomination is a multiple of 5p, so any multiple of 5p decomposes
//! exactly. [`make_change_with`] accepts arbitrary tables; for those the
//! result may use more coins than necessary, or leave a
//! [`remainder`](ChangeBreakdown::remainder) even when an exact breakdown
//! exists (e.g. 6p from `[4p, 3p]`). Callers check
//! [`is_exact`](ChangeBreakdown::is_exact) rather than assume it.

use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Coin Table
// =============================================================================

/// Accepted coin denominations, largest first.
pub const COIN_DENOMINATIONS: [Money; 6] = [
    Money::from_pence(200),
    Money::from_pence(100),
    Money::from_pence(50),
    Money::from_pence(20),
    Money::from_pence(10),
    Money::from_pence(5),
];

/// Returns true when `value` is one of [`COIN_DENOMINATIONS`].
///
/// ## Example
/// ```rust
/// use vend_core::coins::is_accepted_coin;
/// use vend_core::Money;
///
/// assert!(is_accepted_coin(Money::from_pence(50)));
/// assert!(!is_accepted_coin(Money::from_pence(25)));
/// ```
pub fn is_accepted_coin(value: Money) -> bool {
    COIN_DENOMINATIONS.contains(&value)
}

// =============================================================================
// Change Breakdown
// =============================================================================

/// One denomination in a breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeLine {
    pub coin: Money,
    pub count: u64,
}

impl ChangeLine {
    /// Value of this line (`coin × count`).
    #[inline]
    pub fn value(&self) -> Money {
        self.coin * self.count
    }
}

/// Result of decomposing an amount into coins.
///
/// Lines follow the order of the denomination table, zero counts included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeBreakdown {
    total: Money,
    lines: Vec<ChangeLine>,
    remainder: Money,
}

impl ChangeBreakdown {
    /// The amount that was asked for.
    pub fn total(&self) -> Money {
        self.total
    }

    /// The part of [`total`](Self::total) no denomination could cover.
    pub fn remainder(&self) -> Money {
        self.remainder
    }

    /// True when the coins add up to the full total.
    pub fn is_exact(&self) -> bool {
        self.remainder.is_zero()
    }

    /// Sum of the coins actually handed out.
    pub fn dispensed(&self) -> Money {
        self.lines
            .iter()
            .fold(Money::zero(), |acc, line| acc + line.value())
    }

    /// Count for one denomination (0 if absent from the table).
    pub fn count_of(&self, coin: Money) -> u64 {
        self.lines
            .iter()
            .find(|line| line.coin == coin)
            .map_or(0, |line| line.count)
    }

    /// Every line, including denominations with a zero count.
    pub fn lines(&self) -> &[ChangeLine] {
        &self.lines
    }

    /// Only the denominations that are actually handed out.
    pub fn coins(&self) -> impl Iterator<Item = &ChangeLine> {
        self.lines.iter().filter(|line| line.count > 0)
    }

    /// Total number of coins handed out.
    pub fn coin_count(&self) -> u64 {
        self.lines.iter().map(|line| line.count).sum()
    }
}

// =============================================================================
// Change Calculator
// =============================================================================

/// Breaks `amount` into the fixed coin table, largest coin first.
///
/// ## Example
/// ```rust
/// use vend_core::coins::make_change;
/// use vend_core::Money;
///
/// let change = make_change(Money::from_pence(95));
/// assert_eq!(change.count_of(Money::from_pence(50)), 1);
/// assert_eq!(change.count_of(Money::from_pence(20)), 2);
/// assert_eq!(change.count_of(Money::from_pence(5)), 1);
/// assert!(change.is_exact());
/// ```
pub fn make_change(amount: Money) -> ChangeBreakdown {
    make_change_with(&COIN_DENOMINATIONS, amount)
}

/// Greedy breakdown over an arbitrary descending denomination table.
///
/// Takes as many of each denomination as fit, then moves on to the next.
/// Whatever is left after the smallest denomination is reported as the
/// remainder. Non-positive denominations never match, and a negative amount
/// is returned whole as the remainder.
///
/// See the module docs for the canonical-system caveat.
///
/// ## Example
/// ```rust
/// use vend_core::coins::make_change_with;
/// use vend_core::Money;
///
/// let table = [Money::from_pence(4), Money::from_pence(3)];
/// let change = make_change_with(&table, Money::from_pence(6));
///
/// // Greedy takes one 4p and then cannot cover 2p, although 3p + 3p works.
/// assert_eq!(change.remainder(), Money::from_pence(2));
/// assert!(!change.is_exact());
/// ```
pub fn make_change_with(denominations: &[Money], amount: Money) -> ChangeBreakdown {
    let mut remaining = amount;

    let lines = denominations
        .iter()
        .map(|&coin| {
            let count = if coin.is_positive() && remaining.is_positive() {
                let (take, rest) = remaining.div_rem(coin);
                remaining = rest;
                take as u64
            } else {
                0
            };
            ChangeLine { coin, count }
        })
        .collect();

    ChangeBreakdown {
        total: amount,
        lines,
        remainder: remaining,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
