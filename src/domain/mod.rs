mod customer;
mod error;
mod money;
mod status;
mod transaction;

pub use customer::*;
pub use error::*;
pub use money::*;
pub use status::*;
pub use transaction::*;
