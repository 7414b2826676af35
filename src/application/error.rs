use thiserror::Error;

use crate::domain::{CustomerId, DomainError};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error("Customer not found. Please enter a valid customer ID.")]
    CustomerNotFound(CustomerId),

    #[error("No more customer IDs are available. Account not created.")]
    IdSpaceExhausted,

    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl AppError {
    /// True when the request named an unknown customer.
    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::CustomerNotFound(_))
    }
}
