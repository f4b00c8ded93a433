//! Transfer history query.

use crate::domain::transfer::TransferRecord;
use crate::domain::value_objects::AccountId;

/// Returns the transfers that touch any of `visible_accounts`, newest first.
///
/// Transfer ids grow with commit order, so sorting by id descending puts the
/// latest transfer at index 0.
#[must_use]
pub fn transfer_history(
    records: &[TransferRecord],
    visible_accounts: &[AccountId],
) -> Vec<TransferRecord> {
    let mut history: Vec<TransferRecord> = records
        .iter()
        .filter(|record| {
            visible_accounts
                .iter()
                .any(|account_id| record.involves(*account_id))
        })
        .cloned()
        .collect();
    history.sort_by(|left, right| right.id.cmp(&left.id));
    history
}
