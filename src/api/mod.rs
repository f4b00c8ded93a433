//! API layer for minibank.
//!
//! This module exposes the bank over HTTP using Axum 0.8, twice: as a JSON
//! API under `/api` and as server-rendered HTML pages.
//!
//! # Architecture
//!
//! ```text
//! HTTP Request
//!     │
//!     ▼
//! ┌───────────────┐
//! │   Handlers    │ ── JSON handlers and HTML pages; extract session and body
//! └───────────────┘
//!     │
//!     ▼
//! ┌───────────────┐
//! │  BankService  │ ── Store I/O around the workflows, logging
//! └───────────────┘
//!     │
//!     ▼
//! ┌───────────────┐
//! │   Workflows   │ ── Business rules (Application layer)
//! └───────────────┘
//!     │
//!     ▼
//! HTTP Response
//! ```
//!
//! # Modules
//!
//! - [`dto`]: Data Transfer Objects for requests and responses
//! - [`handlers`]: JSON endpoints
//! - [`ui`]: HTML pages
//! - [`session`]: Session cookie and bearer token handling
//! - [`service`]: Operations shared by both surfaces
//! - [`middleware`]: Error handling
//! - [`routes`]: Route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod service;
pub mod session;
pub mod ui;

pub use routes::create_router;
