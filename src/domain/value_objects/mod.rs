//! Value objects for the bank domain.
//!
//! Value objects are immutable and defined only by their values.
//!
//! # Available Value Objects
//!
//! - [`AccountId`] / [`TransferId`] - numeric identifiers
//! - [`Money`] - exact decimal amount rendered as `$X.YY`
//! - [`Username`] - unique login name
//! - [`SessionToken`] - opaque session handle
//! - [`Timestamp`] - UTC instant

mod ids;
mod money;
mod session_token;
mod timestamp;
mod username;

pub use ids::{AccountId, IdError, TransferId};
pub use money::{MONEY_SCALE, Money, MoneyError};
pub use session_token::SessionToken;
pub use timestamp::Timestamp;
pub use username::Username;
