//! Transfer handlers.

use axum::Json;
use axum::extract::State;

use crate::api::dto::{TransferRequest, TransferResponse, TransferResultResponse};
use crate::api::middleware::ApiErrorResponse;
use crate::api::service::BankService;
use crate::api::session::Authenticated;
use crate::infrastructure::AppDependencies;

/// POST /api/transfer - Move money between two of the caller's accounts.
///
/// # Response
///
/// - `200 OK` - `{ "status": "SUCCESS", "transfer": { ... } }`
/// - `400 Bad Request` - `INSUFFICIENT_FUNDS`, `INVALID_AMOUNT`,
///   `SAME_ACCOUNT_TRANSFER` or `ACCOUNT_NOT_FOUND`
/// - `401 Unauthorized` - no session
///
/// # Errors
///
/// Returns `ApiErrorResponse` when the transfer is rejected; nothing is
/// changed in that case.
#[allow(clippy::unused_async)]
pub async fn transfer(
    State(dependencies): State<AppDependencies>,
    caller: Authenticated,
    Json(request): Json<TransferRequest>,
) -> Result<Json<TransferResultResponse>, ApiErrorResponse> {
    let record = BankService::new(&dependencies).transfer(
        &caller.user.username,
        request.from_account_id,
        request.to_account_id,
        request.amount,
    )?;
    Ok(Json(TransferResultResponse::from(record)))
}

/// GET /api/transfers - Transfers touching the caller's accounts, newest first.
#[allow(clippy::unused_async)]
pub async fn list_transfers(
    State(dependencies): State<AppDependencies>,
    caller: Authenticated,
) -> Json<Vec<TransferResponse>> {
    Json(BankService::new(&dependencies).history(&caller.user.username))
}
