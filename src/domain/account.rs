//! Account entity.
//!
//! An account belongs to exactly one user and is only ever mutated by the
//! transfer engine. Its balance never goes negative.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::errors::{BankError, BankResult};
use crate::domain::value_objects::{AccountId, Money, Username};

/// The category of an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    /// Everyday account.
    Checking,
    /// Savings account.
    Savings,
}

impl AccountType {
    /// Returns the lowercase label used on the wire and in the UI.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Checking => "checking",
            Self::Savings => "savings",
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// A bank account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    /// Stable identifier.
    pub id: AccountId,
    /// The owning user.
    pub owner: Username,
    /// Account category.
    pub account_type: AccountType,
    /// Current balance.
    pub balance: Money,
}

impl Account {
    /// Creates an account.
    #[must_use]
    pub const fn new(
        id: AccountId,
        owner: Username,
        account_type: AccountType,
        balance: Money,
    ) -> Self {
        Self {
            id,
            owner,
            account_type,
            balance,
        }
    }

    /// Returns `true` if `username` owns this account.
    #[must_use]
    pub fn is_owned_by(&self, username: &Username) -> bool {
        &self.owner == username
    }

    /// Checks that `amount` can be debited without overdrawing.
    ///
    /// # Errors
    ///
    /// Returns `BankError::InsufficientFunds` if `amount` exceeds the balance.
    pub fn can_withdraw(&self, amount: &Money) -> BankResult<()> {
        if amount > &self.balance {
            return Err(BankError::InsufficientFunds {
                requested: *amount,
                available: self.balance,
            });
        }
        Ok(())
    }

    /// Returns a copy of this account with a different balance.
    #[must_use]
    pub fn with_balance(&self, balance: Money) -> Self {
        Self {
            balance,
            ..self.clone()
        }
    }
}
