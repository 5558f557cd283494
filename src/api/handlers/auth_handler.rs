//! Authentication handlers.

use std::borrow::Cow;

use axum::{extract::State, http::StatusCode, response::Json, routing::post, Router};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::config::{is_valid_role, ROLE_USER};
use crate::domain::{NewUser, PublicUser, UserRole};
use crate::errors::{AppError, AppResult};

/// User registration request
///
/// `name` and `email` are trimmed while deserializing, so length and format
/// rules apply to the stored values.
#[derive(Deserialize, Validate, ToSchema)]
pub struct SignUpRequest {
    /// User display name
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 2, max = 255, message = "Name must be between 2 and 255 characters"))]
    #[schema(example = "Jane Doe", min_length = 2, max_length = 255)]
    pub name: String,
    /// User email address
    #[serde(deserialize_with = "trimmed")]
    #[validate(
        email(message = "Invalid email format"),
        length(max = 255, message = "Email must be at most 255 characters")
    )]
    #[schema(example = "jane@example.com")]
    pub email: String,
    /// User password
    #[validate(length(min = 6, max = 128, message = "Password must be between 6 and 128 characters"))]
    #[schema(example = "s3cret-pass", min_length = 6, max_length = 128)]
    pub password: String,
    /// Requested role, `user` when omitted
    #[serde(default = "default_role")]
    #[validate(custom(function = "validate_role"))]
    #[schema(example = "user")]
    pub role: String,
}

fn trimmed<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    Ok(value.trim().to_string())
}

fn default_role() -> String {
    ROLE_USER.to_string()
}

fn validate_role(role: &str) -> Result<(), ValidationError> {
    if is_valid_role(role) {
        return Ok(());
    }

    let mut err = ValidationError::new("role");
    err.message = Some(Cow::Borrowed("Role must be either user or admin"));
    Err(err)
}

impl From<SignUpRequest> for NewUser {
    fn from(req: SignUpRequest) -> Self {
        NewUser::new(req.name, req.email.to_lowercase(), req.password)
            .with_role(UserRole::from(req.role.as_str()))
    }
}

/// Successful registration response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SignUpResponse {
    #[schema(example = "User registered")]
    pub message: String,
    pub user: PublicUser,
}

/// Create authentication routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/sign-up", post(sign_up))
        .route("/sign-in", post(sign_in))
        .route("/sign-out", post(sign_out))
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/sign-up",
    tag = "Authentication",
    request_body = SignUpRequest,
    responses(
        (status = 201, description = "User registered successfully", body = SignUpResponse),
        (status = 400, description = "Validation error"),
        (status = 409, description = "User already exists"),
        (status = 500, description = "User could not be created")
    )
)]
pub async fn sign_up(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<SignUpRequest>,
) -> AppResult<(StatusCode, Json<SignUpResponse>)> {
    let user = state.auth_service.create_user(payload.into()).await?;

    Ok((
        StatusCode::CREATED,
        Json(SignUpResponse {
            message: "User registered".to_string(),
            user,
        }),
    ))
}

/// Sign in (not implemented)
#[utoipa::path(
    post,
    path = "/sign-in",
    tag = "Authentication",
    responses((status = 501, description = "Sign-in is not implemented yet"))
)]
pub async fn sign_in() -> AppResult<StatusCode> {
    Err(AppError::NotImplemented("Sign-in"))
}

/// Sign out (not implemented)
#[utoipa::path(
    post,
    path = "/sign-out",
    tag = "Authentication",
    responses((status = 501, description = "Sign-out is not implemented yet"))
)]
pub async fn sign_out() -> AppResult<StatusCode> {
    Err(AppError::NotImplemented("Sign-out"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(role: &str) -> SignUpRequest {
        SignUpRequest {
            name: "Jane Doe".to_string(),
            email: "Jane@Example.COM".to_string(),
            password: "s3cret-pass".to_string(),
            role: role.to_string(),
        }
    }

    #[test]
    fn test_request_normalized_into_new_user() {
        let input = NewUser::from(request("admin"));

        assert_eq!(input.name, "Jane Doe");
        assert_eq!(input.email, "jane@example.com");
        assert_eq!(input.password, "s3cret-pass");
        assert_eq!(input.role, UserRole::Admin);
    }

    #[test]
    fn test_name_and_email_trimmed_before_validation() {
        let req: SignUpRequest = serde_json::from_str(
            r#"{"name":"  Jane Doe ","email":" Jane@Example.COM ","password":"s3cret-pass"}"#,
        )
        .unwrap();

        assert_eq!(req.name, "Jane Doe");
        assert_eq!(req.email, "Jane@Example.COM");
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_blank_name_rejected() {
        let req: SignUpRequest = serde_json::from_str(
            r#"{"name":"  a ","email":"jane@example.com","password":"s3cret-pass"}"#,
        )
        .unwrap();

        let err = req.validate().unwrap_err();
        assert!(err.field_errors().contains_key("name"));
    }

    #[test]
    fn test_unknown_role_rejected() {
        let err = request("root").validate().unwrap_err();
        assert!(err.field_errors().contains_key("role"));
    }

    #[test]
    fn test_role_defaults_to_user() {
        let req: SignUpRequest = serde_json::from_str(
            r#"{"name":"Jane","email":"jane@example.com","password":"s3cret-pass"}"#,
        )
        .unwrap();

        assert_eq!(req.role, "user");
        assert!(req.validate().is_ok());
    }
}
