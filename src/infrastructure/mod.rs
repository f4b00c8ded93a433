//! Infrastructure layer for minibank.
//!
//! This module contains:
//!
//! - **Configuration**: Application settings loaded from environment variables
//! - **Stores**: In-memory user directory, session store and ledger, each
//!   behind a trait
//! - **Seed data**: The demo users and accounts
//! - **Dependencies**: Dependency injection container
//!
//! # Module Organization
//!
//! - `config` - Application configuration
//! - `users` - User lookup
//! - `sessions` - Login sessions
//! - `ledger` - Accounts and the transfer log
//! - `seed` - Startup data
//! - `dependencies` - Dependency injection container

mod config;
mod dependencies;
mod ledger;
mod seed;
mod sessions;
mod users;

pub use config::{
    AppConfig, ConfigError, DEFAULT_APP_HOST, DEFAULT_APP_PORT, DEFAULT_SESSION_TTL_MINUTES,
};
pub use dependencies::AppDependencies;
pub use ledger::{InMemoryLedger, Ledger};
pub use seed::{DEMO_USERS, SeedUser, seed, seed_demo_data};
pub use sessions::{InMemorySessionStore, SessionStore};
pub use users::{InMemoryUserDirectory, UserDirectory};
