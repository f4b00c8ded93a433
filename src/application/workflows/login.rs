//! Login workflow.
//!
//! # Workflow Steps
//!
//! 1. Look up the user by username (done by the caller)
//! 2. Verify the password against the stored digest
//! 3. Open a session that expires `ttl` after `now`
//!
//! An unknown username and a wrong password produce the same error so that
//! the response does not reveal which usernames exist.

use chrono::Duration;

use crate::domain::errors::{BankError, BankResult};
use crate::domain::session::Session;
use crate::domain::user::User;
use crate::domain::value_objects::Timestamp;

/// Checks a password against an optional user record.
///
/// # Errors
///
/// Returns `BankError::InvalidCredentials` if `user` is `None` or the
/// password does not match.
pub fn authenticate<'a>(user: Option<&'a User>, password: &str) -> BankResult<&'a User> {
    match user {
        Some(user) if user.verify_password(password) => Ok(user),
        _ => Err(BankError::InvalidCredentials),
    }
}

/// Opens a session for an authenticated user.
#[must_use]
pub fn open_session(user: &User, now: Timestamp, ttl: Duration) -> Session {
    Session::open(user.username.clone(), now.plus(ttl))
}
