//! Identifier value objects.
//!
//! Accounts and transfers are identified by small, stable positive integers.
//! They appear verbatim in URLs, form values and the transfer history text,
//! so they are kept numeric rather than opaque.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Validation errors for identifiers parsed from text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdError {
    /// The provided string is not a positive integer.
    InvalidFormat(String),
}

impl fmt::Display for IdError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat(value) => {
                write!(formatter, "'{value}' is not a valid identifier")
            }
        }
    }
}

impl std::error::Error for IdError {}

/// A unique identifier for a bank account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(u64);

impl AccountId {
    /// Creates an `AccountId` from its numeric value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

impl FromStr for AccountId {
    type Err = IdError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        parse_positive(value).map(Self)
    }
}

/// A unique identifier for a committed transfer.
///
/// Transfer ids are assigned in commit order, so a larger id always means a
/// more recent transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransferId(u64);

impl TransferId {
    /// Creates a `TransferId` from its numeric value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for TransferId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

fn parse_positive(value: &str) -> Result<u64, IdError> {
    let trimmed = value.trim();
    match trimmed.parse::<u64>() {
        Ok(parsed) if parsed > 0 => Ok(parsed),
        _ => Err(IdError::InvalidFormat(trimmed.to_string())),
    }
}
