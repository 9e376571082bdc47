//! Policy handlers

use axum::{
    extract::{Path, State},
    Json,
};

use core_kernel::PolicyId;

use crate::dto::policies::{PolicyRequest, PolicyResponse};
use crate::extract::ValidatedJson;
use crate::{error::ApiError, AppState};

/// Creates a policy
pub async fn create_policy(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<PolicyRequest>,
) -> Result<Json<PolicyResponse>, ApiError> {
    let policy = state.service.create_policy(request.into_new_policy()?).await?;
    Ok(Json(policy.into()))
}

/// Replaces every field of a policy
pub async fn update_policy(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(request): ValidatedJson<PolicyRequest>,
) -> Result<Json<PolicyResponse>, ApiError> {
    let policy = state
        .service
        .update_policy(PolicyId::new(id), request.into_new_policy()?)
        .await?;
    Ok(Json(policy.into()))
}
