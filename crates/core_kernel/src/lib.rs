//! Core Kernel - Foundational types and utilities for the car insurance service
//!
//! This crate provides the building blocks shared by all domain modules:
//! - Strongly-typed identifiers for cars, owners, policies and claims
//! - Calendar date handling (inclusive date ranges, supported query range, timezones)
//! - Port abstractions used by storage adapters

pub mod temporal;
pub mod identifiers;
pub mod error;
pub mod ports;

pub use temporal::{DateRange, TemporalError, Timezone};
pub use identifiers::{CarId, OwnerId, PolicyId, ClaimId};
pub use error::CoreError;
pub use ports::{
    PortError, DomainPort, AdapterHealth, HealthCheckResult, HealthCheckable,
};
