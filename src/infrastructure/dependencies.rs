//! Dependency injection container for minibank.
//!
//! `AppDependencies` holds the configuration and every store behind a trait
//! object. Handlers receive it as axum state; tests build one with
//! [`AppDependencies::in_memory`].
//!
//! # Example
//!
//! ```rust
//! use minibank::infrastructure::{AppConfig, AppDependencies, seed_demo_data};
//!
//! let dependencies = AppDependencies::in_memory(AppConfig::default());
//! seed_demo_data(&dependencies);
//!
//! assert!(dependencies.users().find("alice").is_some());
//! ```

use std::sync::Arc;

use chrono::Duration;

use super::config::AppConfig;
use super::ledger::{InMemoryLedger, Ledger};
use super::sessions::{InMemorySessionStore, SessionStore};
use super::users::{InMemoryUserDirectory, UserDirectory};

/// Application dependency container.
///
/// # Thread Safety
///
/// All stores are wrapped in `Arc` and implement `Send + Sync`, so cloning
/// the container is cheap and every clone shares the same state.
#[derive(Clone)]
pub struct AppDependencies {
    config: AppConfig,
    users: Arc<dyn UserDirectory>,
    sessions: Arc<dyn SessionStore>,
    ledger: Arc<dyn Ledger>,
}

impl AppDependencies {
    /// Creates a new `AppDependencies` container.
    #[must_use]
    pub fn new(
        config: AppConfig,
        users: Arc<dyn UserDirectory>,
        sessions: Arc<dyn SessionStore>,
        ledger: Arc<dyn Ledger>,
    ) -> Self {
        Self {
            config,
            users,
            sessions,
            ledger,
        }
    }

    /// Creates a container backed by empty in-memory stores.
    #[must_use]
    pub fn in_memory(config: AppConfig) -> Self {
        Self::new(
            config,
            Arc::new(InMemoryUserDirectory::new()),
            Arc::new(InMemorySessionStore::new()),
            Arc::new(InMemoryLedger::new()),
        )
    }

    /// Shorthand for `in_memory(AppConfig::default())`.
    #[must_use]
    pub fn in_memory_default() -> Self {
        Self::in_memory(AppConfig::default())
    }

    /// Returns a reference to the application configuration.
    #[must_use]
    pub const fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Returns the user directory.
    #[must_use]
    pub fn users(&self) -> &Arc<dyn UserDirectory> {
        &self.users
    }

    /// Returns the session store.
    #[must_use]
    pub fn sessions(&self) -> &Arc<dyn SessionStore> {
        &self.sessions
    }

    /// Returns the ledger.
    #[must_use]
    pub fn ledger(&self) -> &Arc<dyn Ledger> {
        &self.ledger
    }

    /// Returns the configured session lifetime.
    #[must_use]
    pub fn session_ttl(&self) -> Duration {
        self.config.session_ttl()
    }
}

impl std::fmt::Debug for AppDependencies {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("AppDependencies")
            .field("config", &self.config)
            .field("users", &"<dyn UserDirectory>")
            .field("sessions", &"<dyn SessionStore>")
            .field("ledger", &"<dyn Ledger>")
            .finish()
    }
}
