//! Car domain errors

use thiserror::Error;

use core_kernel::{CarId, PolicyId, PortError};

/// Errors raised by `CarInsuranceService`
#[derive(Debug, Error)]
pub enum CarError {
    /// The car addressed by the request path does not exist
    #[error("Car not found")]
    CarNotFound(CarId),

    /// A policy body references a car that does not exist
    #[error("Car not found")]
    PolicyCarNotFound(CarId),

    #[error("Policy not found")]
    PolicyNotFound(PolicyId),

    #[error(transparent)]
    Port(#[from] PortError),
}

impl CarError {
    /// Returns true for the errors that mean a path resource is missing
    pub fn is_not_found(&self) -> bool {
        match self {
            CarError::CarNotFound(_) | CarError::PolicyNotFound(_) => true,
            CarError::PolicyCarNotFound(_) => false,
            CarError::Port(e) => e.is_not_found(),
        }
    }
}
