//! Repository implementations
//!
//! Each repository owns the SQL for one table group and maps result sets
//! into `FromRow` row types. Queries are bound at runtime.

pub mod car;
pub mod policy;
pub mod claims;

pub use car::{CarRepository, CarRow};
pub use policy::{PolicyRepository, PolicyRow};
pub use claims::{ClaimsRepository, ClaimRow};
