//! Account identity and state.
//!
//! Maintains the invariant: `balance >= 0` after every successful operation.

use crate::money::Money;
use std::fmt;

/// Composite account identifier: the ordered `(card_number, pin)` pair.
///
/// Equality and hashing are over the pair exactly as given, so
/// `(1234, 5678)` and `(5678, 1234)` identify two different accounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AccountKey {
    /// Card number printed on the card.
    pub card_number: u64,

    /// Personal identification number.
    pub pin: u32,
}

impl AccountKey {
    pub fn new(card_number: u64, pin: u32) -> Self {
        AccountKey { card_number, pin }
    }
}

// Pin omitted: keys show up in log lines and error messages.
impl fmt::Display for AccountKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "card {}", self.card_number)
    }
}

/// A registered account.
///
/// # Invariants
///
/// - `balance >= 0` is maintained by every successful operation
/// - A failed operation leaves the account untouched
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    /// Name of the account holder.
    pub owner_name: String,

    /// Current balance.
    pub balance: Money,
}

impl Account {
    /// Creates a new account with the given opening balance.
    pub fn new(owner_name: impl Into<String>, balance: Money) -> Self {
        Account {
            owner_name: owner_name.into(),
            balance,
        }
    }

    /// Deposits funds into the account.
    ///
    /// Returns the updated balance, or `None` if the sum does not fit in a
    /// decimal (the balance is left unchanged in that case).
    pub fn deposit(&mut self, amount: Money) -> Option<Money> {
        let updated = self.balance.checked_add(amount)?;
        self.balance = updated;
        Some(updated)
    }

    /// Withdraws funds from the account.
    ///
    /// Returns the updated balance, or `None` if `amount > balance`.
    /// Withdrawing exactly the balance succeeds and leaves it at zero.
    pub fn withdraw(&mut self, amount: Money) -> Option<Money> {
        if amount > self.balance {
            return None;
        }

        self.balance -= amount;
        Some(self.balance)
    }

    /// Verifies the invariant: `balance >= 0`.
    #[cfg(debug_assertions)]
    pub fn check_invariant(&self) -> bool {
        !self.balance.is_negative()
    }
}
