//! Session store.
//!
//! Holds live sessions keyed by token. Expired sessions are dropped lazily
//! whenever a lookup runs into one, and in bulk by [`SessionStore::purge_expired`].

use std::collections::HashMap;

use parking_lot::RwLock;

use crate::domain::session::Session;
use crate::domain::value_objects::{SessionToken, Timestamp};

/// Storage for login sessions.
pub trait SessionStore: Send + Sync {
    /// Stores a new session.
    fn insert(&self, session: Session);

    /// Returns the session for `token` if it exists and has not expired at `now`.
    fn find(&self, token: &SessionToken, now: &Timestamp) -> Option<Session>;

    /// Removes a session. Returns `true` if it existed.
    fn remove(&self, token: &SessionToken) -> bool;

    /// Drops every session expired at `now`. Returns how many were removed.
    fn purge_expired(&self, now: &Timestamp) -> usize;
}

/// `SessionStore` backed by a `HashMap`.
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<SessionToken, Session>>,
}

impl InMemorySessionStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored sessions, expired ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.read().len()
    }

    /// Returns `true` if no session is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.read().is_empty()
    }
}

impl SessionStore for InMemorySessionStore {
    fn insert(&self, session: Session) {
        self.sessions.write().insert(session.token, session);
    }

    fn find(&self, token: &SessionToken, now: &Timestamp) -> Option<Session> {
        let session = self.sessions.read().get(token).cloned()?;
        if session.is_expired(now) {
            self.sessions.write().remove(token);
            return None;
        }
        Some(session)
    }

    fn remove(&self, token: &SessionToken) -> bool {
        self.sessions.write().remove(token).is_some()
    }

    fn purge_expired(&self, now: &Timestamp) -> usize {
        let mut sessions = self.sessions.write();
        let before = sessions.len();
        sessions.retain(|_, session| !session.is_expired(now));
        before - sessions.len()
    }
}
