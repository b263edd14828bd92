//! Transaction records and per-account history.

use crate::money::Money;
use std::fmt;
use std::slice;

/// Kind of balance-changing operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    /// Cash paid out of the account.
    Withdrawal,

    /// Cash paid into the account.
    Deposit,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Withdrawal => "Withdrawal",
            TransactionKind::Deposit => "Deposit",
        }
    }
}

/// A completed withdrawal or deposit.
///
/// Renders as the ledger line
/// `Withdrawal - Amount: $20.00, Updated Balance: $280.30`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transaction {
    pub kind: TransactionKind,

    /// Amount moved by the operation.
    pub amount: Money,

    /// Balance right after the operation.
    pub balance: Money,
}

impl Transaction {
    pub fn new(kind: TransactionKind, amount: Money, balance: Money) -> Self {
        Transaction {
            kind,
            amount,
            balance,
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - Amount: ${}, Updated Balance: ${}",
            self.kind.as_str(),
            self.amount,
            self.balance
        )
    }
}

/// Append-only, chronological list of ledger lines for one account.
///
/// Entries are stored as rendered text so lines recorded out-of-band sit
/// next to generated ones unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionLog {
    entries: Vec<String>,
}

impl TransactionLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        TransactionLog::default()
    }

    /// Appends a line at the end of the log.
    pub fn push(&mut self, entry: impl Into<String>) {
        self.entries.push(entry.into());
    }

    /// All lines in insertion order.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, String> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a TransactionLog {
    type Item = &'a String;
    type IntoIter = slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn money(s: &str) -> Money {
        Money::from_str(s).unwrap()
    }

    #[test]
    fn test_withdrawal_line_format() {
        let tx = Transaction::new(
            TransactionKind::Withdrawal,
            money("200.4"),
            money("99.9"),
        );
        assert_eq!(
            tx.to_string(),
            "Withdrawal - Amount: $200.40, Updated Balance: $99.90"
        );
    }

    #[test]
    fn test_deposit_line_format() {
        let tx = Transaction::new(
            TransactionKind::Deposit,
            money("40000"),
            money("40099.90"),
        );
        assert_eq!(
            tx.to_string(),
            "Deposit - Amount: $40000.00, Updated Balance: $40099.90"
        );
    }

    #[test]
    fn test_new_log_is_empty() {
        let log = TransactionLog::new();
        assert!(log.is_empty());
        assert_eq!(log.len(), 0);
        assert!(log.entries().is_empty());
    }

    #[test]
    fn test_log_keeps_insertion_order() {
        let mut log = TransactionLog::new();
        log.push("first");
        log.push(String::from("second"));
        log.push("third");

        let lines: Vec<&str> = log.iter().map(String::as_str).collect();
        assert_eq!(lines, ["first", "second", "third"]);
        assert_eq!(log.len(), 3);
    }
}
