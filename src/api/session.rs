//! Session transport.
//!
//! A session token travels either in the `session` cookie (set by both
//! login endpoints) or in an `Authorization: Bearer <token>` header. The
//! cookie is `HttpOnly` and `SameSite=Lax` so the HTML forms keep working
//! while scripts cannot read it.

use axum::extract::FromRequestParts;
use axum::http::HeaderMap;
use axum::http::header::{AUTHORIZATION, COOKIE};
use axum::http::request::Parts;

use crate::api::middleware::ApiErrorResponse;
use crate::api::service::BankService;
use crate::domain::errors::BankError;
use crate::domain::session::Session;
use crate::domain::user::User;
use crate::domain::value_objects::SessionToken;
use crate::infrastructure::AppDependencies;

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "session";

/// Builds the `Set-Cookie` value that establishes a session.
#[must_use]
pub fn session_cookie(session: &Session, max_age_seconds: i64) -> String {
    format!(
        "{SESSION_COOKIE}={}; HttpOnly; SameSite=Lax; Path=/; Max-Age={max_age_seconds}",
        session.token
    )
}

/// Builds the `Set-Cookie` value that removes the session cookie.
#[must_use]
pub fn clear_session_cookie() -> String {
    format!("{SESSION_COOKIE}=; HttpOnly; SameSite=Lax; Path=/; Max-Age=0")
}

/// Extracts a session token from the request headers.
///
/// The bearer header wins over the cookie when both are present. Malformed
/// values are treated as absent.
#[must_use]
pub fn token_from_headers(headers: &HeaderMap) -> Option<SessionToken> {
    bearer_token(headers).or_else(|| cookie_token(headers))
}

fn bearer_token(headers: &HeaderMap) -> Option<SessionToken> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ")?;
    SessionToken::parse(token)
}

fn cookie_token(headers: &HeaderMap) -> Option<SessionToken> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .and_then(|(_, value)| SessionToken::parse(value))
}

/// The caller's live session and user.
#[derive(Debug, Clone)]
pub struct Authenticated {
    /// The session the request presented.
    pub session: Session,
    /// The user who owns it.
    pub user: User,
}

/// Resolves the caller from request headers, if they hold a live session.
#[must_use]
pub fn current_user(dependencies: &AppDependencies, headers: &HeaderMap) -> Option<Authenticated> {
    let token = token_from_headers(headers)?;
    let (session, user) = BankService::new(dependencies).resolve(&token)?;
    Some(Authenticated { session, user })
}

impl FromRequestParts<AppDependencies> for Authenticated {
    type Rejection = ApiErrorResponse;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppDependencies,
    ) -> Result<Self, Self::Rejection> {
        current_user(state, &parts.headers).ok_or_else(|| BankError::Unauthenticated.into())
    }
}
