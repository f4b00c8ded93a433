//! minibank
//!
//! A small banking web application: users log in, list their accounts and
//! move money between them. The same operations are offered as a JSON API
//! under `/api` and as server-rendered HTML pages.
//!
//! # Architecture
//!
//! The application follows the Onion Architecture:
//!
//! - **Domain Layer**: Value objects, entities and the domain error type
//! - **Application Layer**: Validation, workflows and queries (pure functions)
//! - **Infrastructure Layer**: Configuration, in-memory stores, seed data
//! - **API Layer**: HTTP handlers, HTML pages, DTOs, session handling
//!
//! # Guarantees
//!
//! - A transfer is validated and applied under one lock: it moves exactly
//!   its amount from one account to the other or changes nothing
//! - Balances never go negative
//! - Transfer history is returned newest first

pub mod api;
pub mod application;
pub mod domain;
pub mod infrastructure;
