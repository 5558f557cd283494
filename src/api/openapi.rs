//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::{auth_handler, health_handler};
use crate::domain::{PublicUser, UserRole};

/// OpenAPI documentation for the registration backend
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Accusations",
        version = "0.1.0",
        description = "User registration backend with Axum and SeaORM",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        health_handler::root,
        auth_handler::sign_up,
        auth_handler::sign_in,
        auth_handler::sign_out,
    ),
    components(
        schemas(
            UserRole,
            PublicUser,
            health_handler::GreetingResponse,
            auth_handler::SignUpRequest,
            auth_handler::SignUpResponse,
        )
    ),
    tags(
        (name = "Health", description = "Liveness"),
        (name = "Authentication", description = "User registration")
    )
)]
pub struct ApiDoc;
