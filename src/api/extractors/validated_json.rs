//! Validated JSON extractor - Combines deserialization with validation.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::errors::AppError;
use crate::utils::{format_validation_error, ValidationIssues};

/// Validated JSON extractor that automatically validates requests.
///
/// Validation failures are rendered through [`format_validation_error`]
/// and rejected as [`AppError::Validation`].
///
/// # Example
///
/// ```rust,ignore
/// use serde::Deserialize;
/// use validator::Validate;
/// use accusations::api::extractors::ValidatedJson;
///
/// #[derive(Deserialize, Validate)]
/// struct SignUpRequest {
///     #[validate(email)]
///     email: String,
/// }
///
/// async fn sign_up(ValidatedJson(payload): ValidatedJson<SignUpRequest>) {
///     // payload is already validated
/// }
/// ```
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
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::validation(e.body_text()))?;

        value.validate().map_err(|e| {
            let issues = serde_json::to_value(ValidationIssues::from(&e)).unwrap_or_default();
            AppError::validation(format_validation_error(&issues))
        })?;

        Ok(ValidatedJson(value))
    }
}
