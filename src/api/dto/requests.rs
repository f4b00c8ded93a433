//! Request DTOs.
//!
//! JSON requests carry typed values and are rejected by the framework when
//! malformed. Form requests keep every field as text so a bad value can be
//! reported on the page instead of failing extraction.

use serde::Deserialize;

use crate::domain::value_objects::{AccountId, Money};

/// `POST /api/login` body.
///
/// # Example JSON
///
/// ```json
/// { "username": "alice", "password": "password123" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequest {
    /// Login name.
    pub username: String,
    /// Plaintext password.
    pub password: String,
}

/// `POST /api/transfer` body.
///
/// # Example JSON
///
/// ```json
/// { "fromAccountId": 1, "toAccountId": 2, "amount": 10 }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRequest {
    /// Account to debit.
    pub from_account_id: AccountId,
    /// Account to credit.
    pub to_account_id: AccountId,
    /// Amount to move.
    pub amount: Money,
}

/// `POST /login` form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LoginForm {
    /// `username` input.
    #[serde(default)]
    pub username: String,
    /// `password` input.
    #[serde(default)]
    pub password: String,
}

/// `POST /transfer` form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TransferForm {
    /// `from-account` select.
    #[serde(default, rename = "fromAccountId")]
    pub from_account_id: String,
    /// `to-account` select.
    #[serde(default, rename = "toAccountId")]
    pub to_account_id: String,
    /// `amount` input.
    #[serde(default)]
    pub amount: String,
}
