//! Error types for the ATM ledger.

use crate::account::AccountKey;
use crate::money::Money;
use thiserror::Error;

/// Result type alias for ledger operations
pub type Result<T> = std::result::Result<T, LedgerError>;

/// Errors that can occur while operating the ledger.
#[derive(Error, Debug)]
pub enum LedgerError {
    /// No account is registered under the given key
    #[error("No account registered for {0}")]
    AccountNotFound(AccountKey),

    /// An account is already registered under the given key
    #[error("An account is already registered for {0}")]
    DuplicateAccount(AccountKey),

    /// Negative amount, or an amount the balance cannot absorb
    #[error("Invalid amount: {0}")]
    InvalidAmount(Money),

    /// Withdrawal exceeds the current balance
    #[error("Insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds { requested: Money, available: Money },

    /// Failed to open, read or write a file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing error
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    /// Missing script file argument
    #[error("Missing script file argument. Usage: atm-ledger <script.csv>")]
    MissingArgument,
}
