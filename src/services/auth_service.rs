//! Authentication service - user registration.
//!
//! Registration checks email uniqueness, hashes the password on the
//! blocking pool and inserts the user. The check and the insert are two
//! separate statements; the unique index on `users.email` is what stops
//! two concurrent sign-ups for the same address.

use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::domain::{Argon2Hasher, CredentialHasher, NewUser, Password, PublicUser};
use crate::errors::{AppError, AppResult, CreationCause, HashingError};
use crate::infra::{NewUserRecord, UserRepository, UserStore};

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Register a new user and return its public projection.
    ///
    /// Fails with [`AppError::Conflict`] when the email is taken and with
    /// [`AppError::Creation`] when hashing or the store fails.
    async fn create_user(&self, input: NewUser) -> AppResult<PublicUser>;
}

/// Concrete implementation of AuthService.
pub struct Authenticator {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn CredentialHasher>,
}

impl Authenticator {
    /// Create new auth service with injected store and hasher
    pub fn new(users: Arc<dyn UserRepository>, hasher: Arc<dyn CredentialHasher>) -> Self {
        Self { users, hasher }
    }

    /// Wire the production store and Argon2 hasher over a connection
    pub fn from_connection(db: DatabaseConnection) -> Self {
        Self::new(Arc::new(UserStore::new(db)), Arc::new(Argon2Hasher::new()))
    }

    /// Argon2 is CPU bound, so it runs off the async workers.
    async fn hash_password(&self, plain_text: String) -> Result<Password, HashingError> {
        let hasher = Arc::clone(&self.hasher);

        tokio::task::spawn_blocking(move || hasher.hash(&plain_text))
            .await
            .map_err(|e| HashingError(format!("hashing task failed: {}", e)))?
    }

    async fn register(&self, input: NewUser) -> AppResult<PublicUser> {
        let existing = self
            .users
            .find_by_email(&input.email)
            .await
            .map_err(persistence_failure)?;

        if existing.is_some() {
            return Err(AppError::conflict("User"));
        }

        let NewUser {
            name,
            email,
            password,
            role,
        } = input;

        let password = self.hash_password(password).await?;

        let user = self
            .users
            .create(NewUserRecord {
                name,
                email,
                password,
                role,
            })
            .await
            .map_err(persistence_failure)?;

        tracing::info!(user_id = %user.id, email = %user.email, "User created successfully");

        Ok(user)
    }
}

#[async_trait]
impl AuthService for Authenticator {
    async fn create_user(&self, input: NewUser) -> AppResult<PublicUser> {
        let email = input.email.clone();

        self.register(input).await.inspect_err(|e| match e {
            AppError::Conflict(_) => {
                tracing::warn!(email = %email, "User already exists");
            }
            // Debug output keeps the creation root cause
            other => {
                tracing::error!(email = %email, error = ?other, "Error creating user");
            }
        })
    }
}

/// Store errors surface as a creation failure with the root cause kept.
fn persistence_failure(err: AppError) -> AppError {
    match err {
        AppError::Database(e) => CreationCause::Persistence(e).into(),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    use crate::domain::{MockCredentialHasher, User, UserRole};
    use crate::infra::MockUserRepository;

    fn stored_user(email: &str) -> User {
        User {
            id: Uuid::new_v4(),
            name: "Existing".to_string(),
            email: email.to_string(),
            password_hash: "$argon2id$existing".to_string(),
            role: UserRole::User,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn service(repo: MockUserRepository, hasher: MockCredentialHasher) -> Authenticator {
        Authenticator::new(Arc::new(repo), Arc::new(hasher))
    }

    #[tokio::test]
    async fn test_create_user_success() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .times(1)
            .returning(|email| {
                assert_eq!(email, "new@example.com");
                Ok(None)
            });
        repo.expect_create()
            .withf(|record| {
                record.email == "new@example.com"
                    && record.password.as_str() == "$argon2id$digest"
                    && record.role == UserRole::Admin
            })
            .times(1)
            .returning(|record| {
                Ok(PublicUser {
                    id: Uuid::new_v4(),
                    name: record.name,
                    email: record.email,
                    role: record.role,
                    created_at: Utc::now(),
                })
            });

        let mut hasher = MockCredentialHasher::new();
        hasher
            .expect_hash()
            .times(1)
            .returning(|plain| {
                assert_eq!(plain, "s3cret-pass");
                Ok(Password::from_hash("$argon2id$digest".to_string()))
            });

        let input = NewUser::new("New", "new@example.com", "s3cret-pass").with_role(UserRole::Admin);
        let user = service(repo, hasher).create_user(input).await.unwrap();

        assert_eq!(user.email, "new@example.com");
        assert_eq!(user.role, UserRole::Admin);
    }

    #[tokio::test]
    async fn test_create_user_duplicate_email_skips_insert() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .returning(|email| Ok(Some(stored_user(email))));
        repo.expect_create().never();

        let mut hasher = MockCredentialHasher::new();
        hasher.expect_hash().never();

        let result = service(repo, hasher)
            .create_user(NewUser::new("Dup", "taken@example.com", "password1"))
            .await;

        let err = result.unwrap_err();
        assert!(err.is_conflict());
        assert_eq!(err.to_string(), "User already exists");
    }

    #[tokio::test]
    async fn test_create_user_hashing_failure_skips_insert() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email().returning(|_| Ok(None));
        repo.expect_create().never();

        let mut hasher = MockCredentialHasher::new();
        hasher
            .expect_hash()
            .returning(|_| Err(HashingError("memory allocation failed".to_string())));

        let result = service(repo, hasher)
            .create_user(NewUser::new("Jane", "jane@example.com", "password1"))
            .await;

        assert!(matches!(
            result,
            Err(AppError::Creation(CreationCause::Hashing(_)))
        ));
    }

    #[tokio::test]
    async fn test_create_user_lookup_failure_is_persistence_failure() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .returning(|_| Err(sea_orm::DbErr::Custom("connection refused".to_string()).into()));
        repo.expect_create().never();

        let mut hasher = MockCredentialHasher::new();
        hasher.expect_hash().never();

        let result = service(repo, hasher)
            .create_user(NewUser::new("Jane", "jane@example.com", "password1"))
            .await;

        assert!(matches!(
            result,
            Err(AppError::Creation(CreationCause::Persistence(_)))
        ));
    }

    #[tokio::test]
    async fn test_create_user_insert_failure_is_persistence_failure() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email().returning(|_| Ok(None));
        repo.expect_create()
            .times(1)
            .returning(|_| Err(sea_orm::DbErr::Custom("duplicate key value".to_string()).into()));

        let mut hasher = MockCredentialHasher::new();
        hasher
            .expect_hash()
            .returning(|_| Ok(Password::from_hash("$argon2id$digest".to_string())));

        let err = service(repo, hasher)
            .create_user(NewUser::new("Jane", "jane@example.com", "password1"))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Failed to create user");
        assert!(matches!(
            err,
            AppError::Creation(CreationCause::Persistence(_))
        ));
    }
}
