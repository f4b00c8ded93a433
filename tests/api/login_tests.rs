//! Integration tests for POST /api/login.

use crate::common::*;
use reqwest::StatusCode;
use rstest::rstest;

#[rstest]
#[tokio::test]
async fn login_with_valid_credentials(user_alice: TestUser) {
    let app = spawn_app().await;

    let result = app
        .client()
        .login(user_alice.username, user_alice.password)
        .await;

    assert_success(&result);
    let response = result.unwrap();
    assert_eq!(response.username, user_alice.username);
    assert_eq!(response.name, user_alice.name);
    assert!(!response.token.is_empty());
    assert!(!response.expires_at.is_empty());
}

#[rstest]
#[tokio::test]
async fn login_ignores_surrounding_whitespace_in_username(user_alice: TestUser) {
    let app = spawn_app().await;

    let result = app
        .client()
        .login(&format!("{} ", user_alice.username), user_alice.password)
        .await;

    assert_success(&result);
    assert_eq!(result.unwrap().username, user_alice.username);
}

#[rstest]
#[case("wrong", "nope")]
#[case("alice", "wrong-password")]
#[case("", "")]
#[tokio::test]
async fn login_with_invalid_credentials_fails(#[case] username: &str, #[case] password: &str) {
    let app = spawn_app().await;

    let result = app.client().login(username, password).await;

    assert_api_error(&result, "INVALID_CREDENTIALS", StatusCode::UNAUTHORIZED);
    assert!(!api_error_message(&result).is_empty());
}

#[rstest]
#[tokio::test]
async fn failed_login_does_not_authenticate() {
    let app = spawn_app().await;
    let client = app.client();

    let _ = client.login("alice", "wrong-password").await;
    let result = client.accounts().await;

    assert_api_error(&result, "UNAUTHENTICATED", StatusCode::UNAUTHORIZED);
}

#[rstest]
#[tokio::test]
async fn me_returns_the_logged_in_user(user_bob: TestUser) {
    let app = spawn_app().await;
    let client = app.client();
    client
        .login(user_bob.username, user_bob.password)
        .await
        .unwrap();

    let me = client.me().await.unwrap();

    assert_eq!(me.username, "bob");
    assert_eq!(me.name, "Bob Smith");
}

#[rstest]
#[tokio::test]
async fn malformed_login_body_is_rejected() {
    let app = spawn_app().await;

    let status = app
        .client()
        .post_raw_json("/api/login", "{\"username\": ")
        .await
        .unwrap();

    assert!(status.is_client_error());
}
