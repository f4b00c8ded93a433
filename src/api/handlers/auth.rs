//! Login, logout and identity handlers.

use axum::Json;
use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;

use crate::api::dto::{LoginRequest, LoginResponse, MeResponse};
use crate::api::middleware::ApiErrorResponse;
use crate::api::service::BankService;
use crate::api::session::{
    Authenticated, clear_session_cookie, session_cookie, token_from_headers,
};
use crate::infrastructure::AppDependencies;

/// POST /api/login - Authenticate and open a session.
///
/// # Response
///
/// - `200 OK` - `LoginResponse`, plus a `Set-Cookie` for the session
/// - `401 Unauthorized` - `INVALID_CREDENTIALS`
///
/// # Errors
///
/// Returns `ApiErrorResponse` for a wrong username or password.
#[allow(clippy::unused_async)]
pub async fn login(
    State(dependencies): State<AppDependencies>,
    Json(request): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    let (user, session) =
        BankService::new(&dependencies).login(&request.username, &request.password)?;
    let max_age = dependencies.session_ttl().num_seconds();

    Ok((
        StatusCode::OK,
        [(SET_COOKIE, session_cookie(&session, max_age))],
        Json(LoginResponse::new(&user, &session)),
    ))
}

/// POST /api/logout - End the current session.
///
/// Always answers `204 No Content` and clears the cookie, whether or not a
/// session was present.
#[allow(clippy::unused_async)]
pub async fn logout(
    State(dependencies): State<AppDependencies>,
    headers: HeaderMap,
) -> impl IntoResponse {
    if let Some(token) = token_from_headers(&headers) {
        BankService::new(&dependencies).logout(&token);
    }
    (StatusCode::NO_CONTENT, [(SET_COOKIE, clear_session_cookie())])
}

/// GET /api/me - The authenticated user.
#[allow(clippy::unused_async)]
pub async fn me(caller: Authenticated) -> Json<MeResponse> {
    Json(MeResponse::from(&caller.user))
}
