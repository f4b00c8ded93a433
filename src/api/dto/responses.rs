//! Response DTOs.

use serde::Serialize;

use crate::domain::account::{Account, AccountType};
use crate::domain::session::Session;
use crate::domain::transfer::{TransferRecord, TransferStatus};
use crate::domain::user::User;
use crate::domain::value_objects::{AccountId, Money, Timestamp};

/// `POST /api/login` success body.
///
/// # Example JSON
///
/// ```json
/// {
///     "username": "alice",
///     "name": "Alice Doe",
///     "token": "1b4e28ba-2fa1-11d2-883f-0016d3cca427",
///     "expiresAt": "2024-01-01T01:00:00Z"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    /// Login name.
    pub username: String,
    /// Display name.
    pub name: String,
    /// Session token, also set as the `session` cookie.
    pub token: String,
    /// Session expiry.
    pub expires_at: Timestamp,
}

impl LoginResponse {
    /// Builds the body for a fresh session.
    #[must_use]
    pub fn new(user: &User, session: &Session) -> Self {
        Self {
            username: user.username.to_string(),
            name: user.name.clone(),
            token: session.token.to_string(),
            expires_at: session.expires_at,
        }
    }
}

/// `GET /api/me` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MeResponse {
    /// Login name.
    pub username: String,
    /// Display name.
    pub name: String,
}

impl From<&User> for MeResponse {
    fn from(user: &User) -> Self {
        Self {
            username: user.username.to_string(),
            name: user.name.clone(),
        }
    }
}

/// One entry of `GET /api/accounts`.
///
/// # Example JSON
///
/// ```json
/// { "id": 1, "type": "checking", "balance": 1000.0 }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountResponse {
    /// Account id.
    pub id: AccountId,
    /// Account category.
    #[serde(rename = "type")]
    pub account_type: AccountType,
    /// Current balance as a JSON number.
    pub balance: Money,
}

impl From<&Account> for AccountResponse {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id,
            account_type: account.account_type,
            balance: account.balance,
        }
    }
}

/// A transfer as returned by the API.
pub type TransferResponse = TransferRecord;

/// `POST /api/transfer` success body.
///
/// # Example JSON
///
/// ```json
/// {
///     "status": "SUCCESS",
///     "transfer": {
///         "id": 1,
///         "fromAccountId": 1,
///         "toAccountId": 2,
///         "amount": 10.0,
///         "status": "SUCCESS",
///         "createdAt": "2024-01-01T00:00:00Z"
///     }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransferResultResponse {
    /// Always `SUCCESS`.
    pub status: TransferStatus,
    /// The committed transfer.
    pub transfer: TransferResponse,
}

impl From<TransferRecord> for TransferResultResponse {
    fn from(transfer: TransferRecord) -> Self {
        Self {
            status: transfer.status,
            transfer,
        }
    }
}
