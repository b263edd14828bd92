//! # ATM Ledger
//!
//! An in-memory account ledger for a simulated automated teller. Accounts
//! are keyed by their `(card_number, pin)` pair, carry an exact decimal
//! balance, and keep a chronological log of every withdrawal and deposit
//! that can be rendered to a plain-text ledger file.
//!
//! ## Design Principles
//!
//! - **Exact arithmetic**: balances are `rust_decimal` values, never floats
//! - **No partial mutation**: every operation validates before it changes state
//! - **Append-only history**: transaction logs are never reordered or pruned
//! - **Deterministic output**: ledger files and summaries render identically run to run
//!
//! ## Example
//!
//! ```
//! use std::str::FromStr;
//! use atm_ledger::{Atm, Money};
//!
//! let mut atm = Atm::new();
//! atm.register_account(12345678, 1234, "Sam Sepiol", Money::from_str("300.30").unwrap())
//!     .unwrap();
//! atm.withdraw_cash(12345678, 1234, Money::from_str("20").unwrap()).unwrap();
//! assert_eq!(atm.check_balance(12345678, 1234).unwrap().to_string(), "280.30");
//! ```

pub mod account;
pub mod atm;
pub mod command;
pub mod error;
pub mod money;
pub mod transaction;

pub use account::{Account, AccountKey};
pub use atm::Atm;
pub use command::{Command, CommandKind, CommandRecord};
pub use error::{LedgerError, Result};
pub use money::Money;
pub use transaction::{Transaction, TransactionKind, TransactionLog};
