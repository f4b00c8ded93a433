//! HTTP client wrapper for integration tests.
//!
//! The client keeps a cookie jar, so a successful login makes every later
//! request on the same client authenticated, exactly like a browser.

use reqwest::header::AUTHORIZATION;
use reqwest::{Client, Response, StatusCode, redirect};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use std::time::Duration;

#[derive(Clone)]
pub struct BankApiClient {
    client: Client,
    base_url: String,
}

impl BankApiClient {
    pub fn new(base_url: &str) -> Self {
        Self::build(base_url, redirect::Policy::limited(5))
    }

    /// A client that reports redirects instead of following them.
    pub fn without_redirects(base_url: &str) -> Self {
        Self::build(base_url, redirect::Policy::none())
    }

    fn build(base_url: &str, policy: redirect::Policy) -> Self {
        let client = Client::builder()
            .cookie_store(true)
            .redirect(policy)
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: base_url.to_string(),
        }
    }

    // Health check
    pub async fn health(&self) -> ApiResult<HealthResponse> {
        self.get("/health").await
    }

    // Authentication
    pub async fn login(&self, username: &str, password: &str) -> ApiResult<LoginResponse> {
        self.post(
            "/api/login",
            &LoginRequest {
                username: username.to_string(),
                password: password.to_string(),
            },
        )
        .await
    }

    pub async fn logout(&self) -> ApiResult<StatusCode> {
        let response = self
            .client
            .post(self.url("/api/logout"))
            .send()
            .await?;
        Ok(response.status())
    }

    pub async fn me(&self) -> ApiResult<MeResponse> {
        self.get("/api/me").await
    }

    // Accounts and transfers
    pub async fn accounts(&self) -> ApiResult<Vec<AccountDto>> {
        self.get("/api/accounts").await
    }

    pub async fn transfer(&self, request: &TransferRequest) -> ApiResult<TransferResult> {
        self.post("/api/transfer", request).await
    }

    pub async fn transfers(&self) -> ApiResult<Vec<TransferDto>> {
        self.get("/api/transfers").await
    }

    pub async fn accounts_with_bearer(&self, token: &str) -> ApiResult<Vec<AccountDto>> {
        let response = self
            .client
            .get(self.url("/api/accounts"))
            .header(AUTHORIZATION, format!("Bearer {token}"))
            .send()
            .await?;
        parse_response(response).await
    }

    /// Sends raw text as a JSON body and returns only the status.
    pub async fn post_raw_json(&self, path: &str, body: &str) -> ApiResult<StatusCode> {
        let response = self
            .client
            .post(self.url(path))
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body.to_string())
            .send()
            .await?;
        Ok(response.status())
    }

    // HTML pages
    pub async fn get_page(&self, path: &str) -> ApiResult<Page> {
        let response = self.client.get(self.url(path)).send().await?;
        Page::read(response).await
    }

    pub async fn post_form(&self, path: &str, fields: &[(&str, &str)]) -> ApiResult<Page> {
        let response = self.client.post(self.url(path)).form(fields).send().await?;
        Page::read(response).await
    }

    // Internal helpers
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let response = self.client.get(self.url(path)).send().await?;
        parse_response(response).await
    }

    #[allow(clippy::future_not_send)]
    async fn post<T: DeserializeOwned, R: Serialize>(&self, path: &str, body: &R) -> ApiResult<T> {
        let response = self.client.post(self.url(path)).json(body).send().await?;
        parse_response(response).await
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug)]
pub enum ApiError {
    Http(reqwest::Error),
    Api {
        status: StatusCode,
        code: String,
        error: String,
    },
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        Self::Http(err)
    }
}

async fn parse_response<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    let status = response.status();

    if status.is_success() {
        response.json().await.map_err(ApiError::Http)
    } else {
        let error_body: ApiErrorBody = response.json().await.map_err(ApiError::Http)?;
        Err(ApiError::Api {
            status,
            code: error_body.code,
            error: error_body.error,
        })
    }
}

/// A rendered HTML response.
#[derive(Debug)]
pub struct Page {
    pub status: StatusCode,
    pub location: Option<String>,
    pub body: String,
}

impl Page {
    async fn read(response: Response) -> ApiResult<Self> {
        let status = response.status();
        let location = response
            .headers()
            .get(reqwest::header::LOCATION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let body = response.text().await?;
        Ok(Self {
            status,
            location,
            body,
        })
    }
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: String,
    code: String,
}

// DTO types for tests

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRequest {
    pub from_account_id: u64,
    pub to_account_id: u64,
    pub amount: f64,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub username: String,
    pub name: String,
    pub token: String,
    pub expires_at: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct MeResponse {
    pub username: String,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AccountDto {
    pub id: u64,
    #[serde(rename = "type")]
    pub account_type: String,
    pub balance: f64,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TransferDto {
    pub id: u64,
    pub from_account_id: u64,
    pub to_account_id: u64,
    pub amount: f64,
    pub status: String,
    pub created_at: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct TransferResult {
    pub status: String,
    pub transfer: TransferDto,
}
