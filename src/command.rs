//! Command-script records for CSV replay and their parsed form.

use crate::account::AccountKey;
use crate::money::Money;
use serde::Deserialize;
use std::path::PathBuf;
use std::str::FromStr;

/// Raw command record as read from CSV.
///
/// The `amount` and `detail` columns are only meaningful for some
/// operations; `detail` carries the owner name for `register` and the
/// output path for `print`.
#[derive(Debug, Deserialize)]
pub struct CommandRecord {
    /// Operation: register, withdraw, deposit, balance, print
    #[serde(rename = "type")]
    pub op: String,

    /// Card number of the target account
    pub card: u64,

    /// PIN of the target account
    pub pin: u32,

    /// Amount (register, withdraw, deposit)
    #[serde(default)]
    pub amount: Option<String>,

    /// Owner name (register) or ledger path (print)
    #[serde(default)]
    pub detail: Option<String>,
}

impl CommandRecord {
    /// Parses the raw CSV record into a typed command.
    ///
    /// Returns `None` if the record is invalid (unknown op, missing amount, etc.).
    /// Negative amounts parse fine; the ledger rejects them when applied.
    pub fn parse(&self) -> Option<Command> {
        let op = self.op.trim().to_lowercase();

        let kind = match op.as_str() {
            "register" => CommandKind::Register {
                owner_name: self.parse_detail()?.to_string(),
                initial_balance: self.parse_amount()?,
            },
            "withdraw" | "withdrawal" => CommandKind::Withdraw(self.parse_amount()?),
            "deposit" => CommandKind::Deposit(self.parse_amount()?),
            "balance" => CommandKind::Balance,
            "print" => CommandKind::Print(PathBuf::from(self.parse_detail()?)),
            _ => return None,
        };

        Some(Command {
            key: AccountKey::new(self.card, self.pin),
            kind,
        })
    }

    fn parse_amount(&self) -> Option<Money> {
        let trimmed = self.amount.as_deref()?.trim();
        if trimmed.is_empty() {
            return None;
        }
        Money::from_str(trimmed).ok()
    }

    fn parse_detail(&self) -> Option<&str> {
        let trimmed = self.detail.as_deref()?.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed)
        }
    }
}

/// A parsed command ready to apply to an [`Atm`](crate::Atm).
#[derive(Debug, Clone, PartialEq)]
pub struct Command {
    /// Account the command targets
    pub key: AccountKey,

    /// Operation with its arguments
    pub kind: CommandKind,
}

/// Command variants with associated data.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandKind {
    /// Open an account with an opening balance.
    Register {
        owner_name: String,
        initial_balance: Money,
    },

    /// Pay cash out of the account.
    Withdraw(Money),

    /// Pay cash into the account.
    Deposit(Money),

    /// Report the current balance.
    Balance,

    /// Render the account's ledger to a file.
    Print(PathBuf),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(op: &str, amount: Option<&str>, detail: Option<&str>) -> CommandRecord {
        CommandRecord {
            op: op.to_string(),
            card: 12345678,
            pin: 1234,
            amount: amount.map(str::to_string),
            detail: detail.map(str::to_string),
        }
    }

    #[test]
    fn test_parse_register() {
        let parsed = record("register", Some("300.30"), Some("Sam Sepiol"))
            .parse()
            .unwrap();
        assert_eq!(parsed.key, AccountKey::new(12345678, 1234));
        match parsed.kind {
            CommandKind::Register {
                owner_name,
                initial_balance,
            } => {
                assert_eq!(owner_name, "Sam Sepiol");
                assert_eq!(initial_balance.to_string(), "300.30");
            }
            _ => panic!("Expected Register"),
        }
    }

    #[test]
    fn test_parse_withdraw_accepts_both_spellings() {
        for op in ["withdraw", "withdrawal"] {
            let parsed = record(op, Some("20"), None).parse().unwrap();
            match parsed.kind {
                CommandKind::Withdraw(amt) => assert_eq!(amt.to_string(), "20.00"),
                _ => panic!("Expected Withdraw"),
            }
        }
    }

    #[test]
    fn test_parse_keeps_negative_amount() {
        let parsed = record("deposit", Some("-50"), None).parse().unwrap();
        match parsed.kind {
            CommandKind::Deposit(amt) => assert!(amt.is_negative()),
            _ => panic!("Expected Deposit"),
        }
    }

    #[test]
    fn test_parse_balance_ignores_extra_columns() {
        let parsed = record("balance", Some("1"), Some("x")).parse().unwrap();
        assert!(matches!(parsed.kind, CommandKind::Balance));
    }

    #[test]
    fn test_parse_print() {
        let parsed = record("print", None, Some(" out/ledger.txt ")).parse().unwrap();
        assert_eq!(parsed.kind, CommandKind::Print(PathBuf::from("out/ledger.txt")));
    }

    #[test]
    fn test_parse_handles_case_and_whitespace() {
        let parsed = record("  DePoSiT  ", Some("  10.5  "), None).parse().unwrap();
        match parsed.kind {
            CommandKind::Deposit(amt) => assert_eq!(amt.to_string(), "10.50"),
            _ => panic!("Expected Deposit"),
        }
    }

    #[test]
    fn test_parse_rejects_unknown_op() {
        assert!(record("transfer", Some("10"), None).parse().is_none());
    }

    #[test]
    fn test_parse_rejects_missing_fields() {
        assert!(record("deposit", None, None).parse().is_none());
        assert!(record("withdraw", Some("  "), None).parse().is_none());
        assert!(record("withdraw", Some("ten"), None).parse().is_none());
        assert!(record("register", Some("10"), None).parse().is_none());
        assert!(record("register", None, Some("Name")).parse().is_none());
        assert!(record("print", None, Some("")).parse().is_none());
    }

    #[test]
    fn test_parse_rejects_amount_beyond_decimal_precision() {
        let too_precise = record("withdraw", Some("99.99000000000000000000000000001"), None);
        assert!(too_precise.parse().is_none());
    }
}
