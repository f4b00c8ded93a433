//! Transfer workflow.
//!
//! This module provides the pure decision function for a transfer between
//! two accounts of the same user.
//!
//! # Workflow Steps
//!
//! 1. Check that the requesting user owns both accounts
//! 2. Reject transfers from an account to itself
//! 3. Validate the amount (positive, at most two decimals)
//! 4. Check that the source balance covers the amount
//! 5. Calculate new balances for both accounts
//!
//! The ledger calls [`validate_transfer`] while it holds its lock and applies
//! the returned balances verbatim.

use crate::application::validation::validate_amount;
use crate::domain::account::Account;
use crate::domain::errors::{BankError, BankResult};
use crate::domain::transfer::{TransferCommand, ValidatedTransfer};

/// Validates a transfer command against snapshots of both accounts.
///
/// # Errors
///
/// - `BankError::AccountNotFound` if the user does not own either account
/// - `BankError::SameAccount` if source and destination are equal
/// - `BankError::InvalidAmount` if the amount is not a positive cent amount
/// - `BankError::InsufficientFunds` if the source balance is too low
pub fn validate_transfer(
    command: &TransferCommand,
    from_account: &Account,
    to_account: &Account,
) -> BankResult<ValidatedTransfer> {
    // Foreign accounts are reported exactly like missing ones, so ownership
    // is settled before any other rule can answer.
    if !from_account.is_owned_by(&command.requested_by) {
        return Err(BankError::AccountNotFound(from_account.id));
    }
    if !to_account.is_owned_by(&command.requested_by) {
        return Err(BankError::AccountNotFound(to_account.id));
    }
    if command.from_account_id == command.to_account_id {
        return Err(BankError::SameAccount);
    }

    let amount = validate_amount(&command.amount)?;
    from_account.can_withdraw(&amount)?;

    let from_balance_after = from_account
        .balance
        .checked_sub(&amount)
        .ok_or_else(|| BankError::InvalidAmount("amount is out of range".to_string()))?;
    let to_balance_after = to_account
        .balance
        .checked_add(&amount)
        .ok_or_else(|| BankError::InvalidAmount("amount is out of range".to_string()))?;

    Ok(ValidatedTransfer {
        from_account_id: from_account.id,
        to_account_id: to_account.id,
        amount,
        from_balance_after,
        to_balance_after,
    })
}
