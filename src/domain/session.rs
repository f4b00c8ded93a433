//! Session entity.

use crate::domain::value_objects::{SessionToken, Timestamp, Username};

/// A live login.
///
/// A session is created by a successful login and ends on logout or when
/// `expires_at` passes. An expired session is indistinguishable from one that
/// never existed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Handle presented by the client.
    pub token: SessionToken,
    /// The authenticated user.
    pub username: Username,
    /// First instant at which the session is no longer valid.
    pub expires_at: Timestamp,
}

impl Session {
    /// Creates a session for `username` that lives until `expires_at`.
    #[must_use]
    pub fn open(username: Username, expires_at: Timestamp) -> Self {
        Self {
            token: SessionToken::generate(),
            username,
            expires_at,
        }
    }

    /// Returns `true` once `now` has reached the expiry instant.
    #[must_use]
    pub fn is_expired(&self, now: &Timestamp) -> bool {
        now >= &self.expires_at
    }
}
