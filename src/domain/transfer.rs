//! Transfer types.
//!
//! A transfer moves money between two accounts owned by the same user. The
//! flow is:
//!
//! ```text
//! TransferCommand → validate (pure) → ValidatedTransfer → commit → TransferRecord
//! ```
//!
//! Validation is a pure function of the command and both account snapshots;
//! the ledger runs it and the commit inside one critical section, so the
//! snapshots cannot go stale between the two steps.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::account::Account;
use crate::domain::errors::BankResult;
use crate::domain::value_objects::{AccountId, Money, Timestamp, TransferId, Username};

/// Final status of a recorded transfer.
///
/// Only committed transfers are ever recorded, so there is a single variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransferStatus {
    /// The balances were moved.
    Success,
}

impl fmt::Display for TransferStatus {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => formatter.write_str("SUCCESS"),
        }
    }
}

/// A request to move `amount` from one account to another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferCommand {
    /// The user asking for the transfer. Both accounts must belong to them.
    pub requested_by: Username,
    /// Account to debit.
    pub from_account_id: AccountId,
    /// Account to credit.
    pub to_account_id: AccountId,
    /// Amount to move.
    pub amount: Money,
}

impl TransferCommand {
    /// Creates a new `TransferCommand`.
    #[must_use]
    pub const fn new(
        requested_by: Username,
        from_account_id: AccountId,
        to_account_id: AccountId,
        amount: Money,
    ) -> Self {
        Self {
            requested_by,
            from_account_id,
            to_account_id,
            amount,
        }
    }
}

/// The outcome of a successful validation: the amount and both balances as
/// they will be after the commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedTransfer {
    /// Account to debit.
    pub from_account_id: AccountId,
    /// Account to credit.
    pub to_account_id: AccountId,
    /// Amount moved.
    pub amount: Money,
    /// Source balance after the commit.
    pub from_balance_after: Money,
    /// Destination balance after the commit.
    pub to_balance_after: Money,
}

/// Signature of the pure validation step the ledger runs under its lock.
pub type TransferValidator<'a> =
    &'a dyn Fn(&TransferCommand, &Account, &Account) -> BankResult<ValidatedTransfer>;

/// An immutable entry in the transfer history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRecord {
    /// Monotonic identifier.
    pub id: TransferId,
    /// Debited account.
    pub from_account_id: AccountId,
    /// Credited account.
    pub to_account_id: AccountId,
    /// Amount moved.
    pub amount: Money,
    /// Always `SUCCESS`.
    pub status: TransferStatus,
    /// Commit time.
    pub created_at: Timestamp,
}

impl TransferRecord {
    /// Builds the history entry for a transfer that has just been applied.
    #[must_use]
    pub const fn committed(
        id: TransferId,
        validated: &ValidatedTransfer,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            from_account_id: validated.from_account_id,
            to_account_id: validated.to_account_id,
            amount: validated.amount,
            status: TransferStatus::Success,
            created_at,
        }
    }

    /// Returns `true` if the transfer touched `account_id` on either side.
    #[must_use]
    pub fn involves(&self, account_id: AccountId) -> bool {
        self.from_account_id == account_id || self.to_account_id == account_id
    }

    /// One-line summary used by the history list: `$10.00: 1 -> 2`.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "{}: {} -> {}",
            self.amount, self.from_account_id, self.to_account_id
        )
    }
}
