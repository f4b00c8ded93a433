//! Query module for read-side operations.
//!
//! Pure functions that shape store snapshots into what the API and the UI
//! display.
//!
//! - [`list_accounts()`] - A user's accounts ordered by id
//! - [`transfer_history()`] - Transfers visible to a user, newest first

mod accounts;
mod history;

pub use accounts::list_accounts;
pub use history::transfer_history;
