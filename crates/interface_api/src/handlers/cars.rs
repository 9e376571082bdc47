//! Car handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};

use core_kernel::temporal::parse_supported_date;
use core_kernel::CarId;

use crate::dto::cars::{CarResponse, InsuranceValidityResponse, ValidityQuery};
use crate::dto::history::CarEventResponse;
use crate::{error::ApiError, AppState};

/// Lists every car with its owner
pub async fn list_cars(State(state): State<AppState>) -> Result<Json<Vec<CarResponse>>, ApiError> {
    let cars = state.service.list_cars().await?;
    Ok(Json(cars.into_iter().map(CarResponse::from).collect()))
}

/// Checks whether a car is insured on the `date` query parameter
///
/// The date is parsed and range-checked before the car is looked up.
pub async fn insurance_validity(
    State(state): State<AppState>,
    Path(car_id): Path<i64>,
    Query(query): Query<ValidityQuery>,
) -> Result<Json<InsuranceValidityResponse>, ApiError> {
    let date = parse_supported_date(query.date.as_deref().unwrap_or_default())?;
    let validity = state.service.insurance_validity(CarId::new(car_id), date).await?;
    Ok(Json(validity.into()))
}

/// Returns the car's policies and claims, oldest first
pub async fn car_history(
    State(state): State<AppState>,
    Path(car_id): Path<i64>,
) -> Result<Json<Vec<CarEventResponse>>, ApiError> {
    let events = state.service.history(CarId::new(car_id)).await?;
    Ok(Json(events.into_iter().map(CarEventResponse::from).collect()))
}
