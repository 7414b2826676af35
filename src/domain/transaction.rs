use chrono::{DateTime, Utc};

use super::Cents;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Deposit => "Deposit",
            TransactionKind::Withdrawal => "Withdrawal",
        }
    }

    /// Lowercase verb used in validation messages ("... for deposit.").
    pub fn verb(&self) -> &'static str {
        match self {
            TransactionKind::Deposit => "deposit",
            TransactionKind::Withdrawal => "withdrawal",
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single entry in a customer's history.
/// Entries are append-only; two identical deposits are two distinct entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    /// Position in the customer's history, starting at 1
    pub sequence: u64,
    pub kind: TransactionKind,
    /// Amount in cents (always positive)
    pub amount_cents: Cents,
    /// Balance right after this transaction was applied
    pub balance_after: Cents,
    pub recorded_at: DateTime<Utc>,
}

/// How `recorded_at` is shown in the history listing (UTC).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

impl Transaction {
    pub fn new(
        sequence: u64,
        kind: TransactionKind,
        amount_cents: Cents,
        balance_after: Cents,
    ) -> Self {
        assert!(amount_cents > 0, "Transaction amount must be positive");
        Self {
            sequence,
            kind,
            amount_cents,
            balance_after,
            recorded_at: Utc::now(),
        }
    }

    /// Human-readable description, e.g. "Deposit".
    pub fn description(&self) -> &'static str {
        self.kind.as_str()
    }

    /// When the transaction was applied, e.g. "2024-03-01 09:30:00".
    pub fn timestamp(&self) -> String {
        self.recorded_at.format(TIMESTAMP_FORMAT).to_string()
    }
}
