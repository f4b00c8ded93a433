//! Domain layer for minibank.
//!
//! The domain layer holds the bank's vocabulary and rules and knows nothing
//! about HTTP, storage or configuration.
//!
//! # Structure
//!
//! - [`value_objects`] - Immutable values that describe domain concepts
//! - [`user`] - Seeded users and credential checks
//! - [`account`] - Accounts and the overdraft rule
//! - [`transfer`] - Transfer commands and history records
//! - [`session`] - Login sessions
//! - [`errors`] - The single domain error type

pub mod account;
pub mod errors;
pub mod session;
pub mod transfer;
pub mod user;
pub mod value_objects;

pub use account::{Account, AccountType};
pub use errors::{BankError, BankResult, ErrorKind};
pub use session::Session;
pub use transfer::{
    TransferCommand, TransferRecord, TransferStatus, TransferValidator, ValidatedTransfer,
};
pub use user::{PasswordDigest, User};
pub use value_objects::*;
