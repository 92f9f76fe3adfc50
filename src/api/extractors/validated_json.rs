//! JSON extractor that runs validator rules before a handler sees the payload.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::errors::AppError;

/// JSON body that has already passed its `Validate` rules.
///
/// Handlers take `ValidatedJson<T>` instead of `Json<T>` and never see a
/// payload that failed validation; both malformed JSON and rule failures
/// surface as [`AppError::Validation`] responses.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::validation(rejection.body_text()))?;

        payload
            .validate()
            .map_err(|errors| AppError::validation(flatten_errors(&errors)))?;

        Ok(ValidatedJson(payload))
    }
}

/// Collapse validator's per-field error map into one readable line.
fn flatten_errors(errors: &validator::ValidationErrors) -> String {
    let mut messages: Vec<String> = Vec::new();
    for (field, field_errors) in errors.field_errors() {
        for error in field_errors {
            match &error.message {
                Some(message) => messages.push(message.to_string()),
                None => messages.push(format!("invalid value for {}", field)),
            }
        }
    }
    messages.join(", ")
}
