//! Car DTOs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use core_kernel::{CarId, OwnerId};
use domain_car::{Car, InsuranceValidity};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CarResponse {
    pub id: CarId,
    pub vin: String,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub owner_id: Option<OwnerId>,
    pub owner_name: Option<String>,
    pub owner_email: Option<String>,
}

impl From<Car> for CarResponse {
    fn from(car: Car) -> Self {
        let (owner_id, owner_name, owner_email) = match car.owner {
            Some(owner) => (Some(owner.id), Some(owner.name), Some(owner.email)),
            None => (None, None, None),
        };

        Self {
            id: car.id,
            vin: car.vin,
            make: car.make,
            model: car.model,
            year: car.year_of_manufacture,
            owner_id,
            owner_name,
            owner_email,
        }
    }
}

/// Query string of the validity endpoint
///
/// `date` is kept as text so parse failures produce the API's own message.
#[derive(Debug, Deserialize)]
pub struct ValidityQuery {
    pub date: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsuranceValidityResponse {
    pub car_id: CarId,
    pub date: NaiveDate,
    pub valid: bool,
}

impl From<InsuranceValidity> for InsuranceValidityResponse {
    fn from(validity: InsuranceValidity) -> Self {
        Self {
            car_id: validity.car_id,
            date: validity.date,
            valid: validity.valid,
        }
    }
}
