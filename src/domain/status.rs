use super::DomainError;

/// Optional banking services a customer can apply for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BankService {
    Atm,
    Checkbook,
}

impl BankService {
    pub fn as_str(&self) -> &'static str {
        match self {
            BankService::Atm => "atm",
            BankService::Checkbook => "checkbook",
        }
    }

    /// Capitalized name used at the start of a sentence.
    pub fn title(&self) -> &'static str {
        match self {
            BankService::Atm => "ATM",
            BankService::Checkbook => "Checkbook",
        }
    }

    /// Name used mid-sentence.
    pub fn noun(&self) -> &'static str {
        match self {
            BankService::Atm => "ATM",
            BankService::Checkbook => "checkbook",
        }
    }
}

impl std::fmt::Display for BankService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Lifecycle of a service application. Transitions only move forward:
/// `NotApplied -> PendingApproval -> Active`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApplicationStatus {
    #[default]
    NotApplied,
    PendingApproval,
    Active,
}

impl ApplicationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::NotApplied => "Not Applied",
            ApplicationStatus::PendingApproval => "Pending Approval",
            ApplicationStatus::Active => "Active",
        }
    }

    /// Status after the customer submits an application.
    pub fn apply(self, service: BankService) -> Result<Self, DomainError> {
        match self {
            ApplicationStatus::NotApplied => Ok(ApplicationStatus::PendingApproval),
            ApplicationStatus::PendingApproval => Err(DomainError::AlreadyPending(service)),
            ApplicationStatus::Active => Err(DomainError::AlreadyActive(service)),
        }
    }

    /// Status after the back office approves a pending application.
    pub fn approve(self, service: BankService) -> Result<Self, DomainError> {
        match self {
            ApplicationStatus::NotApplied => Err(DomainError::NotApplied(service)),
            ApplicationStatus::PendingApproval => Ok(ApplicationStatus::Active),
            ApplicationStatus::Active => Err(DomainError::AlreadyActive(service)),
        }
    }
}

impl std::fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
