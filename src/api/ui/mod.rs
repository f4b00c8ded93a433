//! Server-rendered HTML interface.
//!
//! - [`templates`]: HTML fragments and escaping
//! - [`pages`]: Axum handlers for `/`, `/login`, `/logout`, `/accounts`,
//!   `/transfer` and `/transfers`

pub mod pages;
pub mod templates;

pub use pages::{
    accounts_page, index, login_submit, logout_submit, transfer_page, transfer_submit,
    transfers_page,
};
