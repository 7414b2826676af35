// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use std::io::Cursor;

use anyhow::{Context, Result};
use bankroll::cli::Session;
use bankroll::{CustomerId, Ledger, TIMESTAMP_FORMAT};
use chrono::NaiveDateTime;

/// Helper to create a ledger with the stock configuration (IDs from A1000, "$").
pub fn test_ledger() -> Ledger {
    Ledger::default()
}

/// Helper to open an account and hand back its ID.
pub fn open_account(ledger: &mut Ledger, name: &str) -> Result<CustomerId> {
    Ok(ledger.create_account(name)?.id.clone())
}

/// Entries of the last history listing in `output`, timestamps checked and stripped.
/// "[2024-03-01 09:30:05] Deposit: $100.00" becomes "Deposit: $100.00".
pub fn history_entries(output: &str) -> Result<Vec<String>> {
    let (_, listing) = output
        .rsplit_once("------ Transaction History ------\n")
        .context("no history listing in output")?;

    listing
        .lines()
        .take_while(|line| !line.is_empty())
        .map(|line| -> Result<String> {
            let (stamp, entry) = line
                .strip_prefix('[')
                .and_then(|rest| rest.split_once("] "))
                .with_context(|| format!("history line without timestamp: {line:?}"))?;
            NaiveDateTime::parse_from_str(stamp, TIMESTAMP_FORMAT)
                .with_context(|| format!("bad timestamp {stamp:?}"))?;
            Ok(entry.to_string())
        })
        .collect()
}

/// Test fixture: a scripted terminal session
pub struct Script {
    lines: Vec<String>,
}

impl Script {
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Add one line of user input.
    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.lines.push(line.into());
        self
    }

    pub fn create(self, name: &str) -> Self {
        self.line("1").line(name)
    }

    pub fn deposit(self, id: &str, amount: &str) -> Self {
        self.line("2").line(id).line(amount)
    }

    pub fn withdraw(self, id: &str, amount: &str) -> Self {
        self.line("3").line(id).line(amount)
    }

    pub fn apply_atm(self, id: &str) -> Self {
        self.line("4").line(id)
    }

    pub fn apply_checkbook(self, id: &str) -> Self {
        self.line("5").line(id)
    }

    pub fn history(self, id: &str) -> Self {
        self.line("6").line(id)
    }

    pub fn exit(self) -> Self {
        self.line("7")
    }

    /// Feed the script to a fresh ledger and capture everything printed.
    pub fn run(self) -> Result<(Ledger, String)> {
        self.run_on(test_ledger())
    }

    pub fn run_on(self, ledger: Ledger) -> Result<(Ledger, String)> {
        let mut input = self.lines.join("\n");
        input.push('\n');

        let mut session = Session::new(ledger, Cursor::new(input), Vec::new());
        session.run()?;
        let (ledger, output) = session.into_parts();
        Ok((ledger, String::from_utf8(output)?))
    }
}
