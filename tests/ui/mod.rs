//! Browser-style tests against the server-rendered pages.

pub mod login_page_tests;
