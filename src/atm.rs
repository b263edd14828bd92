//! The ledger store.
//!
//! Owns every account and its transaction log, both keyed by the same
//! [`AccountKey`]. Every operation validates fully before it touches state,
//! so a failed call leaves the store exactly as it found it.

use crate::account::{Account, AccountKey};
use crate::command::{Command, CommandKind, CommandRecord};
use crate::error::{LedgerError, Result};
use crate::money::Money;
use crate::transaction::{Transaction, TransactionKind, TransactionLog};
use csv::{ReaderBuilder, Trim};
use log::{debug, info, warn};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

/// Separator between the ledger header and its transaction lines.
pub const LEDGER_SEPARATOR: &str = "----------------------------";

/// In-memory account ledger for a simulated teller.
///
/// Accounts and transaction logs are created together on registration
/// and live as long as the store. There is no deletion.
///
/// Not synchronized: callers sharing one store across threads must
/// serialize access themselves.
#[derive(Debug, Default)]
pub struct Atm {
    /// Accounts indexed by `(card_number, pin)`.
    accounts: HashMap<AccountKey, Account>,

    /// Transaction logs, keyed like `accounts`.
    transactions: HashMap<AccountKey, TransactionLog>,
}

impl Atm {
    /// Creates an empty store.
    pub fn new() -> Self {
        Atm {
            accounts: HashMap::new(),
            transactions: HashMap::new(),
        }
    }

    /// Registers a new account with an empty transaction log.
    ///
    /// Fails with `DuplicateAccount` if the key is taken (the existing
    /// account is left alone). Zero is allowed as an opening balance, but a
    /// negative one is refused with `InvalidAmount` so no registered account
    /// ever starts below zero.
    pub fn register_account(
        &mut self,
        card_number: u64,
        pin: u32,
        owner_name: impl Into<String>,
        initial_balance: Money,
    ) -> Result<()> {
        let key = AccountKey::new(card_number, pin);
        if self.accounts.contains_key(&key) {
            return Err(LedgerError::DuplicateAccount(key));
        }
        if initial_balance.is_negative() {
            return Err(LedgerError::InvalidAmount(initial_balance));
        }

        let account = Account::new(owner_name, initial_balance);
        debug!(
            "Registered {} for {} with balance {}",
            key, account.owner_name, initial_balance
        );
        self.accounts.insert(key, account);
        self.transactions.insert(key, TransactionLog::new());
        Ok(())
    }

    /// Returns the current balance of an account.
    pub fn check_balance(&self, card_number: u64, pin: u32) -> Result<Money> {
        let key = AccountKey::new(card_number, pin);
        self.accounts
            .get(&key)
            .map(|account| account.balance)
            .ok_or(LedgerError::AccountNotFound(key))
    }

    /// Withdraws cash and logs the transaction.
    ///
    /// An amount equal to the balance succeeds; anything above it fails with
    /// `InsufficientFunds`. A zero amount succeeds and is still logged.
    /// Returns the updated balance.
    pub fn withdraw_cash(&mut self, card_number: u64, pin: u32, amount: Money) -> Result<Money> {
        let key = AccountKey::new(card_number, pin);
        let account = self
            .accounts
            .get_mut(&key)
            .ok_or(LedgerError::AccountNotFound(key))?;

        if amount.is_negative() {
            return Err(LedgerError::InvalidAmount(amount));
        }

        let available = account.balance;
        let balance = account
            .withdraw(amount)
            .ok_or(LedgerError::InsufficientFunds {
                requested: amount,
                available,
            })?;

        self.log_transaction(key, Transaction::new(TransactionKind::Withdrawal, amount, balance));
        debug!("Withdrew {} from {}, balance now {}", amount, key, balance);
        Ok(balance)
    }

    /// Deposits cash and logs the transaction.
    ///
    /// A zero amount succeeds and is still logged. Returns the updated balance.
    pub fn deposit_cash(&mut self, card_number: u64, pin: u32, amount: Money) -> Result<Money> {
        let key = AccountKey::new(card_number, pin);
        let account = self
            .accounts
            .get_mut(&key)
            .ok_or(LedgerError::AccountNotFound(key))?;

        if amount.is_negative() {
            return Err(LedgerError::InvalidAmount(amount));
        }

        let balance = account
            .deposit(amount)
            .ok_or(LedgerError::InvalidAmount(amount))?;

        self.log_transaction(key, Transaction::new(TransactionKind::Deposit, amount, balance));
        debug!("Deposited {} to {}, balance now {}", amount, key, balance);
        Ok(balance)
    }

    /// Appends a free-form line to an account's transaction log.
    ///
    /// The balance is not touched.
    pub fn record_transaction(
        &mut self,
        card_number: u64,
        pin: u32,
        entry: impl Into<String>,
    ) -> Result<()> {
        let key = AccountKey::new(card_number, pin);
        let log = self
            .transactions
            .get_mut(&key)
            .ok_or(LedgerError::AccountNotFound(key))?;
        log.push(entry);
        Ok(())
    }

    /// Renders an account's ledger into a file.
    ///
    /// The account is looked up before the file is created. Parent
    /// directories are not created; a missing one surfaces as `Io`.
    pub fn print_ledger<P: AsRef<Path>>(&self, path: P, card_number: u64, pin: u32) -> Result<()> {
        let path = path.as_ref();
        let (account, log) = self.lookup(AccountKey::new(card_number, pin))?;

        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        render_ledger(&mut writer, account, card_number, pin, log)?;
        writer.flush()?;

        debug!("Printed ledger for card {} to {}", card_number, path.display());
        Ok(())
    }

    /// Renders an account's ledger into any writer.
    ///
    /// Format, one `\n`-terminated line each:
    ///
    /// ```text
    /// Name: <owner_name>
    /// Card Number: <card_number>
    /// PIN: <pin>
    /// ----------------------------
    /// <transaction lines, oldest first>
    /// ```
    pub fn write_ledger<W: Write>(&self, mut writer: W, card_number: u64, pin: u32) -> Result<()> {
        let (account, log) = self.lookup(AccountKey::new(card_number, pin))?;
        render_ledger(&mut writer, account, card_number, pin, log)?;
        writer.flush()?;
        Ok(())
    }

    /// All registered accounts.
    pub fn accounts(&self) -> &HashMap<AccountKey, Account> {
        &self.accounts
    }

    /// All transaction logs, keyed like [`accounts`](Self::accounts).
    pub fn transactions(&self) -> &HashMap<AccountKey, TransactionLog> {
        &self.transactions
    }

    /// Replays a CSV command script against this store.
    ///
    /// Records are read one at a time. Rows that fail to parse or whose
    /// operation fails are logged at warn level and skipped.
    pub fn process_csv<R: Read>(&mut self, reader: R) -> Result<()> {
        let mut csv_reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(reader);

        for (row_idx, result) in csv_reader.deserialize::<CommandRecord>().enumerate() {
            let row_num = row_idx + 2; // 1-indexed, accounting for header row

            match result {
                Ok(record) => {
                    if let Some(command) = record.parse() {
                        if let Err(e) = self.apply(command, row_num) {
                            warn!("Row {}: {}", row_num, e);
                        }
                    } else {
                        warn!("Row {}: Failed to parse command record", row_num);
                    }
                }
                Err(e) => {
                    warn!("Row {}: CSV parse error: {}", row_num, e);
                }
            }
        }

        Ok(())
    }

    /// Applies a single parsed command.
    fn apply(&mut self, command: Command, row: usize) -> Result<()> {
        let AccountKey { card_number, pin } = command.key;

        match command.kind {
            CommandKind::Register {
                owner_name,
                initial_balance,
            } => {
                self.register_account(card_number, pin, owner_name, initial_balance)?;
            }
            CommandKind::Withdraw(amount) => {
                self.withdraw_cash(card_number, pin, amount)?;
            }
            CommandKind::Deposit(amount) => {
                self.deposit_cash(card_number, pin, amount)?;
            }
            CommandKind::Balance => {
                let balance = self.check_balance(card_number, pin)?;
                info!("Row {}: Balance for {} is {}", row, command.key, balance);
            }
            CommandKind::Print(path) => {
                self.print_ledger(&path, card_number, pin)?;
            }
        }

        Ok(())
    }

    /// Writes every account's balance as CSV.
    ///
    /// Output is sorted by `(card_number, pin)` for deterministic results.
    /// Balances are formatted with exactly 2 decimal places.
    pub fn write_summary<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer.write_record(["card_number", "pin", "owner_name", "balance"])?;

        let mut accounts: Vec<_> = self.accounts.iter().collect();
        accounts.sort_by_key(|(key, _)| **key);

        for (key, account) in accounts {
            csv_writer.write_record([
                key.card_number.to_string(),
                key.pin.to_string(),
                account.owner_name.clone(),
                account.balance.to_string(),
            ])?;
        }

        csv_writer.flush()?;
        Ok(())
    }

    fn lookup(&self, key: AccountKey) -> Result<(&Account, &TransactionLog)> {
        match (self.accounts.get(&key), self.transactions.get(&key)) {
            (Some(account), Some(log)) => Ok((account, log)),
            _ => Err(LedgerError::AccountNotFound(key)),
        }
    }

    fn log_transaction(&mut self, key: AccountKey, transaction: Transaction) {
        self.transactions
            .entry(key)
            .or_default()
            .push(transaction.to_string());
    }
}

fn render_ledger<W: Write>(
    writer: &mut W,
    account: &Account,
    card_number: u64,
    pin: u32,
    log: &TransactionLog,
) -> Result<()> {
    writeln!(writer, "Name: {}", account.owner_name)?;
    writeln!(writer, "Card Number: {}", card_number)?;
    writeln!(writer, "PIN: {}", pin)?;
    writeln!(writer, "{}", LEDGER_SEPARATOR)?;
    for entry in log {
        writeln!(writer, "{}", entry)?;
    }
    Ok(())
}
