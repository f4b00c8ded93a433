//! Store-facing operations shared by the JSON API and the HTML UI.
//!
//! Both surfaces offer the same operations, so the I/O around the pure
//! workflows lives here once: read the stores, run the workflow, write the
//! result and log the outcome.

use tracing::{debug, info, warn};

use crate::application::{
    authenticate, list_accounts, open_session, transfer_history, validate_transfer,
};
use crate::domain::account::Account;
use crate::domain::errors::BankResult;
use crate::domain::session::Session;
use crate::domain::transfer::{TransferCommand, TransferRecord};
use crate::domain::user::User;
use crate::domain::value_objects::{AccountId, Money, SessionToken, Timestamp, Username};
use crate::infrastructure::AppDependencies;

/// Borrowed view over the dependencies that performs bank operations.
#[derive(Debug, Clone, Copy)]
pub struct BankService<'a> {
    dependencies: &'a AppDependencies,
}

impl<'a> BankService<'a> {
    /// Wraps the dependency container.
    #[must_use]
    pub const fn new(dependencies: &'a AppDependencies) -> Self {
        Self { dependencies }
    }

    /// Checks credentials and opens a session.
    ///
    /// Surrounding whitespace in `username` is ignored on every surface.
    ///
    /// # Errors
    ///
    /// Returns `BankError::InvalidCredentials` on an unknown user or a wrong
    /// password. No session is created in that case.
    pub fn login(&self, username: &str, password: &str) -> BankResult<(User, Session)> {
        let username = username.trim();
        let candidate = self.dependencies.users().find(username);
        let user = match authenticate(candidate.as_ref(), password) {
            Ok(user) => user.clone(),
            Err(error) => {
                warn!(username, "Login rejected");
                return Err(error);
            }
        };

        let now = Timestamp::now();
        let session = open_session(&user, now, self.dependencies.session_ttl());
        self.dependencies.sessions().insert(session.clone());
        let purged = self.dependencies.sessions().purge_expired(&now);
        if purged > 0 {
            debug!(purged, "Purged expired sessions");
        }

        info!(username = %user.username, expires_at = %session.expires_at, "Login succeeded");
        Ok((user, session))
    }

    /// Ends a session. Unknown tokens are ignored.
    pub fn logout(&self, token: &SessionToken) {
        if self.dependencies.sessions().remove(token) {
            info!("Session closed");
        }
    }

    /// Returns the user behind a live session token.
    #[must_use]
    pub fn resolve(&self, token: &SessionToken) -> Option<(Session, User)> {
        let session = self
            .dependencies
            .sessions()
            .find(token, &Timestamp::now())?;
        let user = self.dependencies.users().find(session.username.as_str())?;
        Some((session, user))
    }

    /// Returns the user's accounts ordered by id.
    #[must_use]
    pub fn accounts(&self, owner: &Username) -> Vec<Account> {
        list_accounts(&self.dependencies.ledger().accounts(), owner)
    }

    /// Returns the transfers touching the user's accounts, newest first.
    #[must_use]
    pub fn history(&self, owner: &Username) -> Vec<TransferRecord> {
        let visible: Vec<AccountId> = self
            .accounts(owner)
            .iter()
            .map(|account| account.id)
            .collect();
        transfer_history(&self.dependencies.ledger().transfers(), &visible)
    }

    /// Validates and commits a transfer.
    ///
    /// # Errors
    ///
    /// Returns the validation error; balances and history are unchanged.
    pub fn transfer(
        &self,
        requested_by: &Username,
        from_account_id: AccountId,
        to_account_id: AccountId,
        amount: Money,
    ) -> BankResult<TransferRecord> {
        let command = TransferCommand::new(
            requested_by.clone(),
            from_account_id,
            to_account_id,
            amount,
        );

        match self
            .dependencies
            .ledger()
            .apply_transfer(&command, &validate_transfer, Timestamp::now())
        {
            Ok(record) => {
                info!(
                    transfer_id = %record.id,
                    from = %record.from_account_id,
                    to = %record.to_account_id,
                    amount = %record.amount,
                    "Transfer committed"
                );
                Ok(record)
            }
            Err(error) => {
                warn!(
                    username = %requested_by,
                    from = %from_account_id,
                    to = %to_account_id,
                    code = error.code(),
                    "Transfer rejected: {error}"
                );
                Err(error)
            }
        }
    }
}
