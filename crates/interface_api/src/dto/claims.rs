//! Claims DTOs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use core_kernel::{CarId, ClaimId};
use domain_claims::{InsuranceClaim, NewClaim};

use crate::error::ApiError;
use crate::extract::FieldOrder;

/// Body of `POST /api/cars/{carId}/claims`
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateClaimRequest {
    #[validate(required(message = "Claim date is required"))]
    #[serde(default, deserialize_with = "super::optional_iso_date")]
    pub claim_date: Option<NaiveDate>,
    #[validate(required(message = "Description is required"))]
    pub description: Option<String>,
    #[validate(required(message = "Amount is required"))]
    #[serde(default, with = "rust_decimal::serde::arbitrary_precision_option")]
    pub amount: Option<Decimal>,
}

impl FieldOrder for CreateClaimRequest {
    const FIELDS: &'static [&'static str] = &["claim_date", "description", "amount"];
}

impl CreateClaimRequest {
    /// Converts a validated request into claim data for `car_id`
    ///
    /// # Errors
    ///
    /// `ApiError::Validation` if the amount is not positive
    pub fn into_new_claim(self, car_id: CarId) -> Result<NewClaim, ApiError> {
        let (Some(claim_date), Some(description), Some(amount)) =
            (self.claim_date, self.description, self.amount)
        else {
            return Err(ApiError::Internal("claim request was not validated".to_string()));
        };

        Ok(NewClaim::new(car_id, claim_date, description, amount)?)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimResponse {
    pub id: ClaimId,
    pub car_id: CarId,
    pub claim_date: NaiveDate,
    pub description: String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub amount: Decimal,
}

impl From<InsuranceClaim> for ClaimResponse {
    fn from(claim: InsuranceClaim) -> Self {
        Self {
            id: claim.id,
            car_id: claim.car_id,
            claim_date: claim.claim_date,
            description: claim.description,
            amount: claim.amount,
        }
    }
}
