//! Middleware components for the API layer.
//!
//! - Error handling and transformation
//! - Session extraction (see [`crate::api::session`])

pub mod error_handler;

pub use error_handler::{ApiError, ApiErrorResponse, bank_error_to_api_error};
