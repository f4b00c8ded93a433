//! Error handling middleware for the API layer.
//!
//! Every JSON error body has the same shape:
//!
//! ```json
//! {
//!     "error": "Insufficient funds: requested $2000.00, available $1000.00",
//!     "code": "INSUFFICIENT_FUNDS"
//! }
//! ```
//!
//! `error` is the human-readable message (the domain error's `Display`
//! text) and `code` is the stable machine-readable code.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::domain::errors::{BankError, ErrorKind};

/// API error body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    /// A human-readable error message.
    pub error: String,
    /// A machine-readable error code.
    pub code: String,
}

impl ApiError {
    /// Creates a new `ApiError`.
    #[must_use]
    pub fn new(code: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: code.into(),
        }
    }
}

impl From<&BankError> for ApiError {
    fn from(error: &BankError) -> Self {
        Self::new(error.code(), error.to_string())
    }
}

/// Response wrapper that includes HTTP status code with `ApiError`.
#[derive(Debug, Clone)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Creates a new `ApiErrorResponse`.
    #[must_use]
    pub const fn new(status: StatusCode, error: ApiError) -> Self {
        Self { status, error }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<BankError> for ApiErrorResponse {
    fn from(error: BankError) -> Self {
        let (status, api_error) = bank_error_to_api_error(&error);
        Self::new(status, api_error)
    }
}

// =============================================================================
// Error Conversion Functions
// =============================================================================

/// Maps a domain error to its HTTP status and body.
///
/// | Kind | HTTP Status |
/// |------|-------------|
/// | Authentication | 401 |
/// | Validation | 400 |
#[must_use]
pub fn bank_error_to_api_error(error: &BankError) -> (StatusCode, ApiError) {
    (status_for(error), ApiError::from(error))
}

/// Returns the HTTP status for a domain error.
#[must_use]
pub const fn status_for(error: &BankError) -> StatusCode {
    match error.kind() {
        ErrorKind::Authentication => StatusCode::UNAUTHORIZED,
        ErrorKind::Validation => StatusCode::BAD_REQUEST,
    }
}
