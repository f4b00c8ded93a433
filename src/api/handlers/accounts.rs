//! Account listing handler.

use axum::Json;
use axum::extract::State;

use crate::api::dto::AccountResponse;
use crate::api::service::BankService;
use crate::api::session::Authenticated;
use crate::infrastructure::AppDependencies;

/// GET /api/accounts - The caller's accounts, ordered by id.
///
/// # Example Response
///
/// ```json
/// [
///     { "id": 1, "type": "checking", "balance": 1000.0 },
///     { "id": 2, "type": "savings", "balance": 500.0 }
/// ]
/// ```
#[allow(clippy::unused_async)]
pub async fn list_accounts(
    State(dependencies): State<AppDependencies>,
    caller: Authenticated,
) -> Json<Vec<AccountResponse>> {
    let accounts = BankService::new(&dependencies).accounts(&caller.user.username);
    Json(accounts.iter().map(AccountResponse::from).collect())
}
