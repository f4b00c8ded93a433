//! Session token value object.
//!
//! A session token is the opaque handle a client presents (as a cookie or a
//! bearer token) to prove a previous successful login.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An opaque, randomly generated session handle (UUID v4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionToken(Uuid);

impl SessionToken {
    /// Generates a fresh random token.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parses a token presented by a client.
    ///
    /// Returns `None` for anything that is not a UUID; such a token can never
    /// match a live session.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Uuid::from_str(value.trim()).ok().map(Self)
    }
}

impl fmt::Display for SessionToken {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}
