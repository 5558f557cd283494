//! Shared test doubles.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use accusations::domain::{Argon2Hasher, CredentialHasher, Password, PublicUser, User};
use accusations::errors::{AppResult, HashingError};
use accusations::infra::{NewUserRecord, UserRepository};
use accusations::services::Authenticator;

/// In-memory user table standing in for the database.
#[derive(Default)]
pub struct InMemoryUserStore {
    rows: Mutex<Vec<User>>,
    inserts: AtomicUsize,
}

impl InMemoryUserStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn count_by_email(&self, email: &str) -> usize {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .filter(|u| u.email == email)
            .count()
    }

    pub fn stored(&self, email: &str) -> Option<User> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned()
    }

    pub fn insert_count(&self) -> usize {
        self.inserts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UserRepository for InMemoryUserStore {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self.stored(email))
    }

    async fn create(&self, record: NewUserRecord) -> AppResult<PublicUser> {
        self.inserts.fetch_add(1, Ordering::SeqCst);

        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            name: record.name,
            email: record.email,
            password_hash: record.password.into_string(),
            role: record.role,
            created_at: now,
            updated_at: now,
        };

        self.rows.lock().unwrap().push(user.clone());
        Ok(PublicUser::from(user))
    }
}

/// Hasher that always fails.
pub struct FailingHasher;

impl CredentialHasher for FailingHasher {
    fn hash(&self, _plain_text: &str) -> Result<Password, HashingError> {
        Err(HashingError("resource exhausted".to_string()))
    }
}

pub fn authenticator(store: Arc<InMemoryUserStore>) -> Authenticator {
    Authenticator::new(store, Arc::new(Argon2Hasher::new()))
}
