pub mod application;
pub mod cli;
pub mod domain;
pub mod io;
pub mod observability;

pub use application::{Ledger, LedgerConfig};
pub use domain::*;
