use std::collections::HashMap;

use tracing::{debug, info, warn};

use crate::domain::{
    format_cents, ApplicationStatus, BankService, Cents, Customer, CustomerId, DomainError,
    Transaction,
};

use super::{AppError, LedgerConfig};

/// In-memory registry of customer accounts.
/// This is the primary interface for any client (interactive menu, tests, ...).
///
/// The ledger is the only owner of its customers; every mutation goes through
/// `&mut self`, which keeps operations on one account strictly sequential.
#[derive(Debug)]
pub struct Ledger {
    customers: HashMap<CustomerId, Customer>,
    /// `None` once the last representable ID has been issued
    next_id: Option<u64>,
    config: LedgerConfig,
}

impl Ledger {
    /// Create an empty ledger with the given configuration.
    pub fn new(config: LedgerConfig) -> Self {
        Self {
            customers: HashMap::new(),
            next_id: Some(config.first_id),
            config,
        }
    }

    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.customers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }

    // ========================
    // Account operations
    // ========================

    /// Open a new account with a zero balance. Any name is accepted, including "".
    /// IDs are never reused; once the counter is exhausted creation fails.
    pub fn create_account(
        &mut self,
        name: impl Into<String>,
    ) -> Result<&Customer, AppError> {
        let number = self.next_id.ok_or_else(|| {
            warn!("customer ID space exhausted");
            AppError::IdSpaceExhausted
        })?;
        self.next_id = number.checked_add(1);

        let id = format!("{}{}", self.config.id_prefix, number);
        info!(customer_id = %id, "account created");

        let customer = Customer::new(id.clone(), name.into());
        Ok(self.customers.entry(id).or_insert(customer))
    }

    /// Look up a customer by ID.
    pub fn customer(&self, id: &str) -> Result<&Customer, AppError> {
        self.customers
            .get(id)
            .ok_or_else(|| AppError::CustomerNotFound(id.to_string()))
    }

    fn customer_mut(&mut self, id: &str) -> Result<&mut Customer, AppError> {
        self.customers.get_mut(id).ok_or_else(|| {
            debug!(customer_id = %id, "unknown customer");
            AppError::CustomerNotFound(id.to_string())
        })
    }

    /// Current balance of a customer.
    pub fn balance(&self, id: &str) -> Result<Cents, AppError> {
        Ok(self.customer(id)?.balance())
    }

    /// Transactions of a customer, oldest first.
    pub fn history(&self, id: &str) -> Result<&[Transaction], AppError> {
        Ok(self.customer(id)?.history())
    }

    // ========================
    // Money operations
    // ========================

    /// Deposit money into an account.
    pub fn deposit(&mut self, id: &str, amount_cents: Cents) -> Result<Transaction, AppError> {
        let customer = self.customer_mut(id)?;
        let tx = customer
            .deposit(amount_cents)
            .inspect_err(|err| log_rejection(id, err))?
            .clone();

        info!(
            customer_id = %id,
            amount = %format_cents(tx.amount_cents),
            balance = %format_cents(tx.balance_after),
            "deposit recorded"
        );
        Ok(tx)
    }

    /// Withdraw money from an account. Overdrafts are refused.
    pub fn withdraw(&mut self, id: &str, amount_cents: Cents) -> Result<Transaction, AppError> {
        let customer = self.customer_mut(id)?;
        let tx = customer
            .withdraw(amount_cents)
            .inspect_err(|err| log_rejection(id, err))?
            .clone();

        info!(
            customer_id = %id,
            amount = %format_cents(tx.amount_cents),
            balance = %format_cents(tx.balance_after),
            "withdrawal recorded"
        );
        Ok(tx)
    }

    // ========================
    // Service applications
    // ========================

    /// Submit an application for an ATM card or a checkbook.
    pub fn apply_for(
        &mut self,
        id: &str,
        service: BankService,
    ) -> Result<ApplicationStatus, AppError> {
        let customer = self.customer_mut(id)?;
        let status = customer
            .apply_for(service)
            .inspect_err(|err| log_rejection(id, err))?;

        info!(customer_id = %id, %service, %status, "application submitted");
        Ok(status)
    }

    /// Approve a pending application.
    /// Hook for a back-office process; the interactive menu never calls it.
    pub fn approve(
        &mut self,
        id: &str,
        service: BankService,
    ) -> Result<ApplicationStatus, AppError> {
        let customer = self.customer_mut(id)?;
        let status = customer
            .approve(service)
            .inspect_err(|err| log_rejection(id, err))?;

        info!(customer_id = %id, %service, %status, "application approved");
        Ok(status)
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new(LedgerConfig::default())
    }
}

fn log_rejection(id: &str, err: &DomainError) {
    debug!(customer_id = %id, error = ?err, "operation rejected");
}
