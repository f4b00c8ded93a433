//! Handlers for the server-rendered pages.
//!
//! Unauthenticated requests to any app page are redirected to `/`. Form
//! posts answer with a full page rather than a redirect so that the outcome
//! message and the refreshed balances arrive in the same response.

use axum::Form;
use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{Html, IntoResponse, Redirect, Response};

use crate::api::dto::{LoginForm, TransferForm};
use crate::api::service::BankService;
use crate::api::session::{
    Authenticated, clear_session_cookie, current_user, session_cookie, token_from_headers,
};
use crate::api::ui::templates::{
    Flash, accounts_section, app_page, history_section, login_page, transfer_section,
};
use crate::application::{parse_account_id, parse_amount};
use crate::domain::errors::BankResult;
use crate::domain::transfer::TransferRecord;
use crate::infrastructure::AppDependencies;

/// Which sections an app page shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum View {
    Dashboard,
    Accounts,
    Transfer,
    Transfers,
}

impl View {
    const fn title(self) -> &'static str {
        match self {
            Self::Dashboard => "MiniBank",
            Self::Accounts => "MiniBank - Accounts",
            Self::Transfer => "MiniBank - Transfer",
            Self::Transfers => "MiniBank - Transfers",
        }
    }
}

fn render(
    dependencies: &AppDependencies,
    caller: &Authenticated,
    view: View,
    flash: Option<&Flash>,
) -> Html<String> {
    let service = BankService::new(dependencies);
    let username = &caller.user.username;
    let accounts = service.accounts(username);

    let sections = match view {
        View::Dashboard => vec![
            accounts_section(&accounts),
            transfer_section(&accounts, flash),
            history_section(&service.history(username)),
        ],
        View::Accounts => vec![accounts_section(&accounts)],
        View::Transfer => vec![
            transfer_section(&accounts, flash),
            accounts_section(&accounts),
        ],
        View::Transfers => vec![history_section(&service.history(username))],
    };

    Html(app_page(view.title(), &caller.user, &sections))
}

fn show(dependencies: &AppDependencies, headers: &HeaderMap, view: View) -> Response {
    current_user(dependencies, headers).map_or_else(
        || Redirect::to("/").into_response(),
        |caller| render(dependencies, &caller, view, None).into_response(),
    )
}

/// GET / - Login form, or the dashboard when a session is present.
#[allow(clippy::unused_async)]
pub async fn index(State(dependencies): State<AppDependencies>, headers: HeaderMap) -> Response {
    current_user(&dependencies, &headers).map_or_else(
        || Html(login_page(None, "")).into_response(),
        |caller| render(&dependencies, &caller, View::Dashboard, None).into_response(),
    )
}

/// POST /login - Form login.
///
/// Success sets the session cookie and redirects to `/`. Failure re-renders
/// the form with `401 Unauthorized` and `#login-error`.
#[allow(clippy::unused_async)]
pub async fn login_submit(
    State(dependencies): State<AppDependencies>,
    Form(form): Form<LoginForm>,
) -> Response {
    match BankService::new(&dependencies).login(&form.username, &form.password) {
        Ok((_, session)) => {
            let max_age = dependencies.session_ttl().num_seconds();
            (
                [(SET_COOKIE, session_cookie(&session, max_age))],
                Redirect::to("/"),
            )
                .into_response()
        }
        Err(error) => (
            StatusCode::UNAUTHORIZED,
            Html(login_page(Some(&error.to_string()), &form.username)),
        )
            .into_response(),
    }
}

/// POST /logout - Ends the session and returns to the login form.
#[allow(clippy::unused_async)]
pub async fn logout_submit(
    State(dependencies): State<AppDependencies>,
    headers: HeaderMap,
) -> Response {
    if let Some(token) = token_from_headers(&headers) {
        BankService::new(&dependencies).logout(&token);
    }
    ([(SET_COOKIE, clear_session_cookie())], Redirect::to("/")).into_response()
}

/// GET /accounts - Accounts table.
#[allow(clippy::unused_async)]
pub async fn accounts_page(
    State(dependencies): State<AppDependencies>,
    headers: HeaderMap,
) -> Response {
    show(&dependencies, &headers, View::Accounts)
}

/// GET /transfer - Transfer form.
#[allow(clippy::unused_async)]
pub async fn transfer_page(
    State(dependencies): State<AppDependencies>,
    headers: HeaderMap,
) -> Response {
    show(&dependencies, &headers, View::Transfer)
}

/// GET /transfers - Transfer history.
#[allow(clippy::unused_async)]
pub async fn transfers_page(
    State(dependencies): State<AppDependencies>,
    headers: HeaderMap,
) -> Response {
    show(&dependencies, &headers, View::Transfers)
}

fn submit_transfer(
    dependencies: &AppDependencies,
    caller: &Authenticated,
    form: &TransferForm,
) -> BankResult<TransferRecord> {
    let from_account_id = parse_account_id(&form.from_account_id)?;
    let to_account_id = parse_account_id(&form.to_account_id)?;
    let amount = parse_amount(&form.amount)?;
    BankService::new(dependencies).transfer(
        &caller.user.username,
        from_account_id,
        to_account_id,
        amount,
    )
}

/// POST /transfer - Form transfer.
///
/// Answers with the dashboard: `200` with `#transfer-success` on commit,
/// `400` with `#transfer-error` on rejection.
#[allow(clippy::unused_async)]
pub async fn transfer_submit(
    State(dependencies): State<AppDependencies>,
    headers: HeaderMap,
    Form(form): Form<TransferForm>,
) -> Response {
    let Some(caller) = current_user(&dependencies, &headers) else {
        return Redirect::to("/").into_response();
    };

    let (status, flash) = match submit_transfer(&dependencies, &caller, &form) {
        Ok(record) => (
            StatusCode::OK,
            Flash::Success(format!("Transfer completed: {}", record.summary())),
        ),
        Err(error) => (StatusCode::BAD_REQUEST, Flash::Error(error.to_string())),
    };

    (
        status,
        render(&dependencies, &caller, View::Dashboard, Some(&flash)),
    )
        .into_response()
}
