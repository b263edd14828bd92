//! ATM Ledger CLI
//!
//! Replays a CSV command script against a fresh ledger and prints the
//! final balance of every account.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- script.csv > balances.csv
//! ```
//!
//! The script has the header `type,card,pin,amount,detail`; see
//! [`atm_ledger::CommandRecord`] for the supported operations.
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug`, `info` or `warn` to control logging verbosity

use atm_ledger::{Atm, LedgerError, Result};
use std::env;
use std::fs::File;
use std::io::{self, BufReader};
use std::process;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let script_path = env::args().nth(1).ok_or(LedgerError::MissingArgument)?;
    let file = File::open(&script_path)?;
    let reader = BufReader::new(file);

    let mut atm = Atm::new();
    atm.process_csv(reader)?;

    let stdout = io::stdout();
    let handle = stdout.lock();
    atm.write_summary(handle)?;

    Ok(())
}
