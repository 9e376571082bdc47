//! Car Domain - Cars, owners and their insurance history
//!
//! This crate provides:
//! - Car and owner models
//! - The chronological policy/claim history of a car
//! - `CarInsuranceService`, which combines the car, policy and claim ports
//!   into the operations exposed over HTTP

pub mod car;
pub mod history;
pub mod ports;
pub mod services;
pub mod error;

pub use car::{Car, Owner};
pub use history::{build_history, CarEvent};
pub use ports::CarPort;
pub use services::{CarInsuranceService, InsuranceValidity};
pub use error::CarError;
