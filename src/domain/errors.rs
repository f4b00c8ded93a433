//! Domain errors.
//!
//! Every failure a caller can observe is one variant of [`BankError`]. The
//! variants fall into exactly two kinds (see [`ErrorKind`]): authentication
//! failures and validation failures. Neither kind is retried or recovered
//! internally, and a validation failure never leaves partial state behind.

use thiserror::Error;

use crate::domain::value_objects::{AccountId, Money};

/// Classification of a [`BankError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad or missing credentials (HTTP 401).
    Authentication,
    /// The request was understood but is not allowed (HTTP 400).
    Validation,
}

/// Errors produced by login, session lookup and the transfer engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BankError {
    /// Username unknown or password wrong. The two cases are
    /// indistinguishable to the caller.
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// No session, or an expired/unknown session token.
    #[error("Authentication required")]
    Unauthenticated,

    /// The source account cannot cover the requested amount.
    #[error("Insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds {
        /// The amount the caller asked to move.
        requested: Money,
        /// The source balance at validation time.
        available: Money,
    },

    /// The amount is zero, negative, too precise or not a number.
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Source and destination are the same account.
    #[error("Cannot transfer to the same account")]
    SameAccount,

    /// The account does not exist or does not belong to the caller.
    #[error("Account not found: {0}")]
    AccountNotFound(AccountId),

    /// An account id could not be parsed.
    #[error("Invalid account id: {0}")]
    InvalidAccountId(String),
}

impl BankError {
    /// Returns the error's kind.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidCredentials | Self::Unauthenticated => ErrorKind::Authentication,
            Self::InsufficientFunds { .. }
            | Self::InvalidAmount(_)
            | Self::SameAccount
            | Self::AccountNotFound(_)
            | Self::InvalidAccountId(_) => ErrorKind::Validation,
        }
    }

    /// Returns a stable, machine-readable error code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::Unauthenticated => "UNAUTHENTICATED",
            Self::InsufficientFunds { .. } => "INSUFFICIENT_FUNDS",
            Self::InvalidAmount(_) => "INVALID_AMOUNT",
            Self::SameAccount => "SAME_ACCOUNT_TRANSFER",
            Self::AccountNotFound(_) => "ACCOUNT_NOT_FOUND",
            Self::InvalidAccountId(_) => "INVALID_ACCOUNT_ID",
        }
    }
}

/// Result alias used throughout the domain and application layers.
pub type BankResult<T> = Result<T, BankError>;
