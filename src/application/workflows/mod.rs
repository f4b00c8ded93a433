//! Workflow modules for minibank.
//!
//! Workflows are pure functions that decide what should happen; the API
//! layer performs the resulting I/O against the stores.
//!
//! - [`login`]: `User + password → Session`
//! - [`transfer`]: `Command + 2 Accounts → ValidatedTransfer`

pub mod login;
pub mod transfer;

pub use login::{authenticate, open_session};
pub use transfer::validate_transfer;
