//! HTTP handlers for the JSON API.
//!
//! Handlers follow the same pipeline:
//!
//! ```text
//! Request → Extract (session, body) → BankService → DTO → Response
//! ```
//!
//! Authentication is an extractor ([`crate::api::session::Authenticated`]);
//! a handler that names it is never entered without a live session.

pub mod accounts;
pub mod auth;
pub mod transfers;

pub use accounts::list_accounts;
pub use auth::{login, logout, me};
pub use transfers::{list_transfers, transfer};
