//! User directory.
//!
//! Users are seeded once at startup and then only read, so the directory is
//! a read-mostly map behind an `RwLock`.

use std::collections::HashMap;

use parking_lot::RwLock;

use crate::domain::user::User;
use crate::domain::value_objects::Username;

/// Lookup of users by username.
pub trait UserDirectory: Send + Sync {
    /// Adds or replaces a user.
    fn insert(&self, user: User);

    /// Returns the user with this exact username, if any.
    fn find(&self, username: &str) -> Option<User>;
}

/// `UserDirectory` backed by a `HashMap`.
#[derive(Debug, Default)]
pub struct InMemoryUserDirectory {
    users: RwLock<HashMap<Username, User>>,
}

impl InMemoryUserDirectory {
    /// Creates an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserDirectory for InMemoryUserDirectory {
    fn insert(&self, user: User) {
        self.users.write().insert(user.username.clone(), user);
    }

    fn find(&self, username: &str) -> Option<User> {
        self.users.read().get(username).cloned()
    }
}
