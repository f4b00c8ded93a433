//! Application layer for minibank.
//!
//! This module contains the pure application logic:
//!
//! - **Validation**: Parsing and checking raw user input
//! - **Workflows**: Login and transfer decisions
//! - **Queries**: Read-side shaping of accounts and history
//!
//! Nothing here touches a store or a clock directly; callers pass in the
//! snapshots and instants the functions need.

pub mod queries;
pub mod validation;
pub mod workflows;

pub use queries::*;
pub use validation::*;
pub use workflows::*;
