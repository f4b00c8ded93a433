//! Account ledger.
//!
//! The ledger owns every account balance and the transfer log. All of it
//! sits behind a single mutex: a transfer looks up both accounts, runs the
//! validator, writes both balances and appends the record without releasing
//! the lock, so concurrent transfers on the same accounts serialize.
//!
//! # Example
//!
//! ```rust
//! use minibank::application::validate_transfer;
//! use minibank::domain::{AccountType, Money, Timestamp, TransferCommand, Username};
//! use minibank::infrastructure::{InMemoryLedger, Ledger};
//!
//! let ledger = InMemoryLedger::new();
//! let alice = Username::new("alice");
//! let checking = ledger.open_account(alice.clone(), AccountType::Checking, Money::from_dollars(100));
//! let savings = ledger.open_account(alice.clone(), AccountType::Savings, Money::zero());
//!
//! let command = TransferCommand::new(alice, checking.id, savings.id, Money::from_dollars(40));
//! let record = ledger
//!     .apply_transfer(&command, &validate_transfer, Timestamp::now())
//!     .unwrap();
//!
//! assert_eq!(record.amount, Money::from_dollars(40));
//! assert_eq!(ledger.find_account(checking.id).unwrap().balance, Money::from_dollars(60));
//! ```

use std::collections::BTreeMap;

use parking_lot::Mutex;

use crate::domain::account::{Account, AccountType};
use crate::domain::errors::{BankError, BankResult};
use crate::domain::transfer::{TransferCommand, TransferRecord, TransferValidator};
use crate::domain::value_objects::{AccountId, Money, Timestamp, TransferId, Username};

/// Storage for accounts and committed transfers.
pub trait Ledger: Send + Sync {
    /// Opens an account with the next free id and returns it.
    fn open_account(&self, owner: Username, account_type: AccountType, balance: Money) -> Account;

    /// Returns a snapshot of every account.
    fn accounts(&self) -> Vec<Account>;

    /// Returns a snapshot of one account.
    fn find_account(&self, account_id: AccountId) -> Option<Account>;

    /// Validates and commits a transfer atomically.
    ///
    /// `validate` sees both accounts as they are while the lock is held. If
    /// it fails, nothing changes.
    ///
    /// # Errors
    ///
    /// Returns `BankError::AccountNotFound` if either account does not exist,
    /// or whatever `validate` returns.
    fn apply_transfer(
        &self,
        command: &TransferCommand,
        validate: TransferValidator<'_>,
        now: Timestamp,
    ) -> BankResult<TransferRecord>;

    /// Returns a snapshot of the transfer log in commit order.
    fn transfers(&self) -> Vec<TransferRecord>;
}

#[derive(Debug, Default)]
struct LedgerState {
    accounts: BTreeMap<AccountId, Account>,
    transfers: Vec<TransferRecord>,
    last_account_id: u64,
    last_transfer_id: u64,
}

/// `Ledger` kept entirely in memory.
#[derive(Debug, Default)]
pub struct InMemoryLedger {
    state: Mutex<LedgerState>,
}

impl InMemoryLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Ledger for InMemoryLedger {
    fn open_account(&self, owner: Username, account_type: AccountType, balance: Money) -> Account {
        let mut state = self.state.lock();
        state.last_account_id += 1;
        let account = Account::new(
            AccountId::new(state.last_account_id),
            owner,
            account_type,
            balance,
        );
        state.accounts.insert(account.id, account.clone());
        account
    }

    fn accounts(&self) -> Vec<Account> {
        self.state.lock().accounts.values().cloned().collect()
    }

    fn find_account(&self, account_id: AccountId) -> Option<Account> {
        self.state.lock().accounts.get(&account_id).cloned()
    }

    fn apply_transfer(
        &self,
        command: &TransferCommand,
        validate: TransferValidator<'_>,
        now: Timestamp,
    ) -> BankResult<TransferRecord> {
        let mut state = self.state.lock();

        let from_account = state
            .accounts
            .get(&command.from_account_id)
            .ok_or(BankError::AccountNotFound(command.from_account_id))?;
        let to_account = state
            .accounts
            .get(&command.to_account_id)
            .ok_or(BankError::AccountNotFound(command.to_account_id))?;

        let validated = validate(command, from_account, to_account)?;

        let debited = from_account.with_balance(validated.from_balance_after);
        let credited = to_account.with_balance(validated.to_balance_after);
        state.accounts.insert(debited.id, debited);
        state.accounts.insert(credited.id, credited);

        state.last_transfer_id += 1;
        let record =
            TransferRecord::committed(TransferId::new(state.last_transfer_id), &validated, now);
        state.transfers.push(record.clone());

        Ok(record)
    }

    fn transfers(&self) -> Vec<TransferRecord> {
        self.state.lock().transfers.clone()
    }
}
