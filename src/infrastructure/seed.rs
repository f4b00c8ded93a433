//! Demo data loaded at startup.

use tracing::info;

use crate::domain::account::AccountType;
use crate::domain::user::User;
use crate::domain::value_objects::{Money, Username};

use super::dependencies::AppDependencies;

/// A user to create at startup, with their accounts.
#[derive(Debug, Clone)]
pub struct SeedUser {
    /// Login name.
    pub username: &'static str,
    /// Plaintext password, hashed on insert.
    pub password: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Accounts to open, in id order, with opening balances in cents.
    pub accounts: &'static [(AccountType, i64)],
}

/// Users and accounts every fresh instance starts with.
pub const DEMO_USERS: &[SeedUser] = &[
    SeedUser {
        username: "alice",
        password: "password123",
        name: "Alice Doe",
        accounts: &[(AccountType::Checking, 100_000), (AccountType::Savings, 50_000)],
    },
    SeedUser {
        username: "bob",
        password: "password456",
        name: "Bob Smith",
        accounts: &[(AccountType::Checking, 25_000)],
    },
];

/// Inserts `users` and opens their accounts.
pub fn seed(dependencies: &AppDependencies, users: &[SeedUser]) {
    for seed_user in users {
        let username = Username::new(seed_user.username);
        dependencies
            .users()
            .insert(User::new(username.clone(), seed_user.name, seed_user.password));

        for (account_type, cents) in seed_user.accounts {
            let account = dependencies.ledger().open_account(
                username.clone(),
                *account_type,
                Money::from_cents(*cents),
            );
            info!(
                account_id = %account.id,
                owner = %username,
                balance = %account.balance,
                "Opened seeded account"
            );
        }
    }
}

/// Inserts [`DEMO_USERS`].
pub fn seed_demo_data(dependencies: &AppDependencies) {
    seed(dependencies, DEMO_USERS);
}
