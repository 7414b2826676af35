// Application layer - the ledger and its configuration.
// Clients (the interactive menu, tests) only talk to `Ledger`.

pub mod config;
pub mod error;
pub mod service;

pub use config::*;
pub use error::*;
pub use service::*;
