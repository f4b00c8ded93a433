//! User entity.
//!
//! Users are seeded at startup and never change while the application runs.
//! Only a SHA-256 digest of the password is kept in memory; verification
//! compares digests in constant time.

use std::fmt;

use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

use crate::domain::value_objects::Username;

/// SHA-256 digest of a password.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordDigest([u8; 32]);

impl PasswordDigest {
    /// Computes the digest of a plaintext password.
    #[must_use]
    pub fn of(password: &str) -> Self {
        let digest = Sha256::digest(password.as_bytes());
        let mut bytes = [0u8; 32];
        bytes.copy_from_slice(&digest);
        Self(bytes)
    }

    /// Returns `true` if `candidate` hashes to this digest.
    #[must_use]
    pub fn matches(&self, candidate: &str) -> bool {
        let other = Self::of(candidate);
        self.0.ct_eq(&other.0).into()
    }
}

impl fmt::Debug for PasswordDigest {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("PasswordDigest(<redacted>)")
    }
}

/// A bank customer who can log in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Unique login name.
    pub username: Username,
    /// Display name shown after login ("Alice Doe").
    pub name: String,
    password: PasswordDigest,
}

impl User {
    /// Creates a user, hashing the given plaintext password.
    #[must_use]
    pub fn new(username: Username, name: impl Into<String>, password: &str) -> Self {
        Self {
            username,
            name: name.into(),
            password: PasswordDigest::of(password),
        }
    }

    /// Returns `true` if `password` is this user's password.
    #[must_use]
    pub fn verify_password(&self, password: &str) -> bool {
        self.password.matches(password)
    }
}
