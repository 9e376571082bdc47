//! Claims domain errors

use thiserror::Error;

/// Errors that can occur in the claims domain
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClaimError {
    /// Claimed amounts must be strictly greater than zero
    #[error("Amount must be positive")]
    NonPositiveAmount,
}
