//! Claims handlers

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    Json,
};

use core_kernel::CarId;

use crate::dto::claims::{ClaimResponse, CreateClaimRequest};
use crate::extract::ValidatedJson;
use crate::{error::ApiError, AppState};

/// Registers a claim for a car
///
/// Responds `201 Created` with a `Location` header pointing at the claim.
pub async fn register_claim(
    State(state): State<AppState>,
    Path(car_id): Path<i64>,
    ValidatedJson(request): ValidatedJson<CreateClaimRequest>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<ClaimResponse>), ApiError> {
    let car_id = CarId::new(car_id);
    let claim = state.service.register_claim(request.into_new_claim(car_id)?).await?;

    let location = format!("/api/cars/{}/claims/{}", car_id, claim.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(claim.into())))
}
