//! Policy DTOs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use core_kernel::{CarId, PolicyId};
use domain_policy::{InsurancePolicy, NewPolicy};

use crate::error::ApiError;
use crate::extract::FieldOrder;

/// Body of `POST /api/policies` and `PUT /api/policies/{id}`
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PolicyRequest {
    #[validate(required(message = "Car ID is required"))]
    pub car_id: Option<i64>,
    #[validate(required(message = "Provider is required"))]
    pub provider: Option<String>,
    #[validate(required(message = "Start date is required"))]
    #[serde(default, deserialize_with = "super::optional_iso_date")]
    pub start_date: Option<NaiveDate>,
    #[validate(required(message = "End date is required"))]
    #[serde(default, deserialize_with = "super::optional_iso_date")]
    pub end_date: Option<NaiveDate>,
}

impl FieldOrder for PolicyRequest {
    const FIELDS: &'static [&'static str] = &["car_id", "provider", "start_date", "end_date"];
}

impl PolicyRequest {
    /// Converts a validated request into policy data
    ///
    /// # Errors
    ///
    /// `ApiError::Internal` if called on a request that failed validation
    pub fn into_new_policy(self) -> Result<NewPolicy, ApiError> {
        let (Some(car_id), Some(provider), Some(start_date), Some(end_date)) =
            (self.car_id, self.provider, self.start_date, self.end_date)
        else {
            return Err(ApiError::Internal("policy request was not validated".to_string()));
        };

        Ok(NewPolicy::new(CarId::new(car_id), provider, start_date, end_date))
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyResponse {
    pub id: PolicyId,
    pub car_id: CarId,
    pub provider: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl From<InsurancePolicy> for PolicyResponse {
    fn from(policy: InsurancePolicy) -> Self {
        Self {
            id: policy.id,
            car_id: policy.car_id,
            provider: policy.provider,
            start_date: policy.start_date,
            end_date: policy.end_date,
        }
    }
}
