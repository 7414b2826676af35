use thiserror::Error;

use super::{BankService, Cents, TransactionKind};

/// Business-rule violations. The messages are shown to the customer as-is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid amount. Please enter a positive value for {}.", .0.verb())]
    InvalidAmount(TransactionKind),

    #[error("Insufficient funds. Withdrawal failed.")]
    InsufficientFunds { balance: Cents, requested: Cents },

    #[error("Amount too large. The account balance cannot hold it.")]
    BalanceOverflow,

    #[error("{} application is already pending approval.", .0.title())]
    AlreadyPending(BankService),

    #[error("You already have an active {}.", .0.noun())]
    AlreadyActive(BankService),

    #[error("There is no {} application to approve.", .0.noun())]
    NotApplied(BankService),
}
