//! Seeded users and request factories for integration tests.

use rstest::fixture;

use super::client::TransferRequest;

#[derive(Debug, Clone, Copy)]
pub struct TestUser {
    pub username: &'static str,
    pub password: &'static str,
    pub name: &'static str,
}

#[fixture]
pub fn user_alice() -> TestUser {
    TestUser {
        username: "alice",
        password: "password123",
        name: "Alice Doe",
    }
}

#[fixture]
pub fn user_bob() -> TestUser {
    TestUser {
        username: "bob",
        password: "password456",
        name: "Bob Smith",
    }
}

pub struct TransferFactory;

impl TransferFactory {
    pub const fn between(from_account_id: u64, to_account_id: u64, amount: f64) -> TransferRequest {
        TransferRequest {
            from_account_id,
            to_account_id,
            amount,
        }
    }
}
