//! Route configuration for minibank.
//!
//! # Routes
//!
//! ## JSON API
//!
//! | Method | Path | Handler | Description |
//! |--------|------|---------|-------------|
//! | POST | /api/login | `login` | Open a session |
//! | POST | /api/logout | `logout` | Close the session |
//! | GET | /api/me | `me` | Current user |
//! | GET | /api/accounts | `list_accounts` | Caller's accounts |
//! | POST | /api/transfer | `transfer` | Move money |
//! | GET | /api/transfers | `list_transfers` | Transfer history |
//! | GET | /health | `health_check` | Health check endpoint |
//!
//! ## HTML
//!
//! | Method | Path | Handler |
//! |--------|------|---------|
//! | GET | / | `index` |
//! | POST | /login | `login_submit` |
//! | POST | /logout | `logout_submit` |
//! | GET | /accounts | `accounts_page` |
//! | GET, POST | /transfer | `transfer_page`, `transfer_submit` |
//! | GET | /transfers | `transfers_page` |

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;

use crate::api::handlers::{list_accounts, list_transfers, login, logout, me, transfer};
use crate::api::ui::{
    accounts_page, index, login_submit, logout_submit, transfer_page, transfer_submit,
    transfers_page,
};
use crate::infrastructure::AppDependencies;

/// Health check response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Service status ("healthy").
    pub status: String,
    /// Service version.
    pub version: String,
}

/// GET /health - Health check endpoint.
///
/// # Example Response
///
/// ```json
/// {
///     "status": "healthy",
///     "version": "0.1.0"
/// }
/// ```
#[allow(clippy::unused_async)]
pub async fn health_check(
    State(_dependencies): State<AppDependencies>,
) -> (StatusCode, Json<HealthResponse>) {
    let response = HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };
    (StatusCode::OK, Json(response))
}

/// Creates the Axum router with every API and page route.
///
/// # Example
///
/// ```rust,ignore
/// use minibank::api::routes::create_router;
/// use minibank::infrastructure::AppDependencies;
///
/// let router = create_router(AppDependencies::in_memory_default());
/// let listener = tokio::net::TcpListener::bind("127.0.0.1:3000").await?;
/// axum::serve(listener, router).await?;
/// ```
pub fn create_router(dependencies: AppDependencies) -> Router {
    Router::new()
        // JSON API
        .route("/api/login", post(login))
        .route("/api/logout", post(logout))
        .route("/api/me", get(me))
        .route("/api/accounts", get(list_accounts))
        .route("/api/transfer", post(transfer))
        .route("/api/transfers", get(list_transfers))
        // HTML pages
        .route("/", get(index))
        .route("/login", post(login_submit))
        .route("/logout", post(logout_submit))
        .route("/accounts", get(accounts_page))
        .route("/transfer", get(transfer_page).post(transfer_submit))
        .route("/transfers", get(transfers_page))
        // Health check
        .route("/health", get(health_check))
        .with_state(dependencies)
}
