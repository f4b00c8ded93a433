//! API integration tests for minibank.

pub mod accounts_tests;
pub mod login_tests;
pub mod session_tests;
