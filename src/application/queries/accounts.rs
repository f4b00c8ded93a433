//! Account listing query.

use crate::domain::account::Account;
use crate::domain::value_objects::Username;

/// Returns the accounts owned by `owner`, ordered by id ascending.
#[must_use]
pub fn list_accounts(accounts: &[Account], owner: &Username) -> Vec<Account> {
    let mut owned: Vec<Account> = accounts
        .iter()
        .filter(|account| account.is_owned_by(owner))
        .cloned()
        .collect();
    owned.sort_by_key(|account| account.id);
    owned
}
