use super::{ApplicationStatus, BankService, Cents, DomainError, Transaction, TransactionKind};

pub type CustomerId = String;

/// One bank account. The balance never goes negative.
#[derive(Debug, Clone)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    balance: Cents,
    atm_status: ApplicationStatus,
    checkbook_status: ApplicationStatus,
    history: Vec<Transaction>,
}

impl Customer {
    pub fn new(id: CustomerId, name: String) -> Self {
        Self {
            id,
            name,
            balance: 0,
            atm_status: ApplicationStatus::NotApplied,
            checkbook_status: ApplicationStatus::NotApplied,
            history: Vec::new(),
        }
    }

    pub fn balance(&self) -> Cents {
        self.balance
    }

    pub fn status(&self, service: BankService) -> ApplicationStatus {
        match service {
            BankService::Atm => self.atm_status,
            BankService::Checkbook => self.checkbook_status,
        }
    }

    pub fn atm_status(&self) -> ApplicationStatus {
        self.atm_status
    }

    pub fn checkbook_status(&self) -> ApplicationStatus {
        self.checkbook_status
    }

    /// Transactions in the order they were applied.
    pub fn history(&self) -> &[Transaction] {
        &self.history
    }

    pub fn deposit(&mut self, amount_cents: Cents) -> Result<&Transaction, DomainError> {
        if amount_cents <= 0 {
            return Err(DomainError::InvalidAmount(TransactionKind::Deposit));
        }
        let new_balance = self
            .balance
            .checked_add(amount_cents)
            .ok_or(DomainError::BalanceOverflow)?;

        Ok(self.record(TransactionKind::Deposit, amount_cents, new_balance))
    }

    pub fn withdraw(&mut self, amount_cents: Cents) -> Result<&Transaction, DomainError> {
        if amount_cents <= 0 {
            return Err(DomainError::InvalidAmount(TransactionKind::Withdrawal));
        }
        if amount_cents > self.balance {
            return Err(DomainError::InsufficientFunds {
                balance: self.balance,
                requested: amount_cents,
            });
        }

        let new_balance = self.balance - amount_cents;
        Ok(self.record(TransactionKind::Withdrawal, amount_cents, new_balance))
    }

    /// Submit an application for a service. Returns the new status.
    pub fn apply_for(&mut self, service: BankService) -> Result<ApplicationStatus, DomainError> {
        let next = self.status(service).apply(service)?;
        self.set_status(service, next);
        Ok(next)
    }

    /// Approve a pending application. Never called by the interactive menu;
    /// approval belongs to the back office.
    pub fn approve(&mut self, service: BankService) -> Result<ApplicationStatus, DomainError> {
        let next = self.status(service).approve(service)?;
        self.set_status(service, next);
        Ok(next)
    }

    fn set_status(&mut self, service: BankService, status: ApplicationStatus) {
        match service {
            BankService::Atm => self.atm_status = status,
            BankService::Checkbook => self.checkbook_status = status,
        }
    }

    fn record(
        &mut self,
        kind: TransactionKind,
        amount_cents: Cents,
        new_balance: Cents,
    ) -> &Transaction {
        let sequence = self.history.len() as u64 + 1;
        self.balance = new_balance;
        self.history
            .push(Transaction::new(sequence, kind, amount_cents, new_balance));
        &self.history[self.history.len() - 1]
    }
}
