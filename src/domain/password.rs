//! Password value object and the hashing function behind it.
//!
//! Hashing uses Argon2id with a fixed work factor taken from
//! `config::constants`; callers cannot tune it per call.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Algorithm, Argon2, Params, Version,
};

use crate::config::{ARGON2_ITERATIONS, ARGON2_MEMORY_KIB, ARGON2_PARALLELISM};
use crate::errors::HashingError;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Hashed password value object.
///
/// Only ever holds the digest, never the plain text.
#[derive(Clone, PartialEq, Eq)]
pub struct Password {
    hash: String,
}

// Don't expose hash in debug output
impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Password")
            .field("hash", &"[REDACTED]")
            .finish()
    }
}

impl Password {
    /// Create a Password from an existing hash (from database).
    pub fn from_hash(hash: String) -> Self {
        Self { hash }
    }

    /// Get the hash string for storage.
    pub fn as_str(&self) -> &str {
        &self.hash
    }

    /// Consume and return the hash string.
    pub fn into_string(self) -> String {
        self.hash
    }
}

/// One-way, salted password hashing.
///
/// Performs no length or charset checks; request validation owns those.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait CredentialHasher: Send + Sync {
    /// Hash `plain_text` with a fresh random salt.
    fn hash(&self, plain_text: &str) -> Result<Password, HashingError>;
}

/// Argon2id hasher with the crate-wide fixed cost parameters.
#[derive(Debug, Default, Clone, Copy)]
pub struct Argon2Hasher;

impl Argon2Hasher {
    pub fn new() -> Self {
        Self
    }

    fn argon2() -> Result<Argon2<'static>, HashingError> {
        let params = Params::new(
            ARGON2_MEMORY_KIB,
            ARGON2_ITERATIONS,
            ARGON2_PARALLELISM,
            None,
        )
        .map_err(|e| HashingError(e.to_string()))?;

        Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
    }
}

impl CredentialHasher for Argon2Hasher {
    fn hash(&self, plain_text: &str) -> Result<Password, HashingError> {
        let salt = SaltString::generate(&mut OsRng);
        let digest = Self::argon2()
            .and_then(|argon2| {
                argon2
                    .hash_password(plain_text.as_bytes(), &salt)
                    .map(|hash| hash.to_string())
                    .map_err(|e| HashingError(e.to_string()))
            })
            .inspect_err(|e| tracing::error!(error = %e, "Error hashing password"))?;

        Ok(Password::from_hash(digest))
    }
}
