//! Common test utilities for minibank integration tests.

pub mod assertions;
pub mod client;
pub mod fixtures;
pub mod server;

pub use assertions::*;
pub use client::*;
pub use fixtures::*;
pub use html::*;
pub use server::*;
