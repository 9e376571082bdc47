//! Car history DTOs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use domain_car::CarEvent;

/// One entry of `GET /api/cars/{carId}/history`
///
/// Serialized with a `type` tag of `POLICY` or `CLAIM`.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CarEventResponse {
    #[serde(rename_all = "camelCase")]
    Policy {
        start_date: NaiveDate,
        end_date: NaiveDate,
        provider: String,
    },
    #[serde(rename_all = "camelCase")]
    Claim {
        date: NaiveDate,
        description: String,
        #[serde(with = "rust_decimal::serde::arbitrary_precision")]
        amount: Decimal,
    },
}

impl From<CarEvent> for CarEventResponse {
    fn from(event: CarEvent) -> Self {
        match event {
            CarEvent::Policy { start_date, end_date, provider } => {
                CarEventResponse::Policy { start_date, end_date, provider }
            }
            CarEvent::Claim { date, description, amount } => {
                CarEventResponse::Claim { date, description, amount }
            }
        }
    }
}
