//! Insurance claim model

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{CarId, ClaimId};
use crate::error::ClaimError;

/// A claim registered against a car
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsuranceClaim {
    pub id: ClaimId,
    pub car_id: CarId,
    pub claim_date: NaiveDate,
    pub description: String,
    pub amount: Decimal,
}

/// Data for registering a claim
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewClaim {
    pub car_id: CarId,
    pub claim_date: NaiveDate,
    pub description: String,
    pub amount: Decimal,
}

impl NewClaim {
    /// Creates claim data
    ///
    /// # Errors
    ///
    /// Returns `ClaimError::NonPositiveAmount` unless `amount > 0`
    pub fn new(
        car_id: CarId,
        claim_date: NaiveDate,
        description: impl Into<String>,
        amount: Decimal,
    ) -> Result<Self, ClaimError> {
        if amount <= Decimal::ZERO {
            return Err(ClaimError::NonPositiveAmount);
        }
        Ok(Self {
            car_id,
            claim_date,
            description: description.into(),
            amount,
        })
    }

    /// Attaches the store-assigned identifier
    pub fn into_claim(self, id: ClaimId) -> InsuranceClaim {
        InsuranceClaim {
            id,
            car_id: self.car_id,
            claim_date: self.claim_date,
            description: self.description,
            amount: self.amount,
        }
    }
}
