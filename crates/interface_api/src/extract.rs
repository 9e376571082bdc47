//! Request extractors

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use crate::error::ApiError;

/// Declares the order in which a request body's fields are validated
///
/// When several fields fail, the message of the first one in this list is
/// reported.
pub trait FieldOrder {
    const FIELDS: &'static [&'static str];
}

/// JSON body that has been deserialized and validated
///
/// Malformed JSON and validation failures are both rejected with a 400.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + FieldOrder,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        value
            .validate()
            .map_err(|errors| ApiError::Validation(first_message::<T>(&errors)))?;
        Ok(ValidatedJson(value))
    }
}

/// Picks the message of the first failing field in declaration order
fn first_message<T: FieldOrder>(errors: &ValidationErrors) -> String {
    let field_errors = errors.field_errors();

    T::FIELDS
        .iter()
        .filter_map(|field| field_errors.get(*field))
        .flat_map(|errs| errs.iter())
        .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| "Validation error".to_string())
}
