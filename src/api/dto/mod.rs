//! Data Transfer Objects for the API layer.
//!
//! JSON bodies use camelCase field names. Form bodies mirror the HTML field
//! names and stay as raw strings until the handler validates them.

pub mod requests;
pub mod responses;

pub use requests::{LoginForm, LoginRequest, TransferForm, TransferRequest};
pub use responses::{
    AccountResponse, LoginResponse, MeResponse, TransferResponse, TransferResultResponse,
};
