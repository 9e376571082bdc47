//! Claims Domain
//!
//! An insurance claim records a dated loss against one car with a
//! description and a monetary amount. Amounts are exact decimals.
//!
//! Claims are immutable once registered; the domain only creates and
//! lists them.

pub mod claim;
pub mod ports;
pub mod error;

pub use claim::{InsuranceClaim, NewClaim};
pub use ports::ClaimPort;
pub use error::ClaimError;
