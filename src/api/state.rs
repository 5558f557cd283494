//! Application state - Dependency injection container.

use std::sync::Arc;

use crate::infra::Database;
use crate::services::{AuthService, Authenticator};

/// Application state shared by all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Registration service
    pub auth_service: Arc<dyn AuthService>,
}

impl AppState {
    /// Create application state over a connected database.
    pub fn from_database(database: &Database) -> Self {
        Self::new(Arc::new(Authenticator::from_connection(
            database.get_connection(),
        )))
    }

    /// Create application state with a manually injected service.
    pub fn new(auth_service: Arc<dyn AuthService>) -> Self {
        Self { auth_service }
    }
}
