//! Policy Domain
//!
//! This crate holds the insurance policy model and the rules that read it:
//!
//! - **Policy**: a provider's coverage of one car over an inclusive date interval
//! - **Validity**: whether any policy on record covers a given calendar day
//! - **Expiry notification**: a periodic scan that logs each policy that
//!   expired yesterday, once per process lifetime
//! - **Ports**: the storage interface the domain needs, with an in-memory
//!   adapter behind the `mock` feature
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_policy::{is_insurance_valid, InsurancePolicy};
//!
//! let policies: Vec<InsurancePolicy> = port.list_policies_for_car(car_id).await?;
//! let covered = is_insurance_valid(&policies, date);
//! ```

pub mod policy;
pub mod validity;
pub mod expiry;
pub mod ports;

pub use policy::{InsurancePolicy, NewPolicy};
pub use validity::is_insurance_valid;
pub use expiry::{ExpiredPolicy, PolicyExpiryNotifier};
pub use ports::PolicyPort;
