//! Domain layer - Core business entities and logic
//!
//! The user entity, its public projection and the password value object
//! with the hashing function that produces it.

pub mod password;
pub mod user;

pub use password::{Argon2Hasher, CredentialHasher, Password};
pub use user::{NewUser, PublicUser, User, UserRole};

#[cfg(any(test, feature = "test-utils"))]
pub use password::MockCredentialHasher;
