//! Input validation.
//!
//! These functions turn untrusted text and numbers from the API and the HTML
//! forms into domain values. They are pure and do not look at any account.
//!
//! # Examples
//!
//! ```rust
//! use minibank::application::validation::{parse_account_id, parse_amount};
//!
//! assert!(parse_amount("10.50").is_ok());
//! assert!(parse_amount("0").is_err());
//! assert!(parse_account_id("1").is_ok());
//! ```

use crate::domain::errors::{BankError, BankResult};
use crate::domain::value_objects::{AccountId, MONEY_SCALE, Money};

/// Validates a transfer amount.
///
/// # Validation Rules
///
/// - Must be greater than zero
/// - Must have at most two decimal places
///
/// # Errors
///
/// Returns `BankError::InvalidAmount` describing the first rule violated.
pub fn validate_amount(amount: &Money) -> BankResult<Money> {
    if amount.is_negative() {
        return Err(BankError::InvalidAmount(
            "amount cannot be negative".to_string(),
        ));
    }
    if !amount.is_positive() {
        return Err(BankError::InvalidAmount(
            "amount must be greater than zero".to_string(),
        ));
    }
    if amount.has_sub_cent_precision() {
        return Err(BankError::InvalidAmount(format!(
            "amount cannot have more than {MONEY_SCALE} decimal places"
        )));
    }
    Ok(*amount)
}

/// Parses and validates an amount typed into a form field.
///
/// # Errors
///
/// Returns `BankError::InvalidAmount` if the text is empty, not a number, or
/// fails [`validate_amount`].
pub fn parse_amount(raw: &str) -> BankResult<Money> {
    if raw.trim().is_empty() {
        return Err(BankError::InvalidAmount("amount is required".to_string()));
    }
    let amount = raw
        .parse::<Money>()
        .map_err(|error| BankError::InvalidAmount(error.to_string()))?;
    validate_amount(&amount)
}

/// Parses an account id coming from a form field.
///
/// # Errors
///
/// Returns `BankError::InvalidAccountId` unless the text is a positive integer.
pub fn parse_account_id(raw: &str) -> BankResult<AccountId> {
    raw.parse::<AccountId>()
        .map_err(|_| BankError::InvalidAccountId(raw.trim().to_string()))
}
