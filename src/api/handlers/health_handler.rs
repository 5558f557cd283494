//! Root endpoint.

use axum::{http::StatusCode, response::Json, routing::get, Router};
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::AppState;
use crate::config::ROOT_GREETING;

/// Fixed greeting payload
#[derive(Debug, Serialize, ToSchema)]
pub struct GreetingResponse {
    #[schema(example = "Hello from Accusations!")]
    pub message: String,
}

/// Create root routes.
pub fn root_routes() -> Router<AppState> {
    Router::new().route("/", get(root))
}

/// Root endpoint doubling as a liveness probe
#[utoipa::path(
    get,
    path = "/",
    tag = "Health",
    responses(
        (status = 200, description = "Service is up", body = GreetingResponse)
    )
)]
pub async fn root() -> (StatusCode, Json<GreetingResponse>) {
    (
        StatusCode::OK,
        Json(GreetingResponse {
            message: ROOT_GREETING.to_string(),
        }),
    )
}
