//! Integration tests for session handling: logout, bearer tokens and expiry.

use crate::common::*;
use chrono::Duration;
use minibank::domain::{Session, Timestamp, Username};
use reqwest::StatusCode;
use rstest::rstest;

#[rstest]
#[tokio::test]
async fn logout_ends_the_session(user_alice: TestUser) {
    let app = spawn_app().await;
    let client = app.client();
    client
        .login(user_alice.username, user_alice.password)
        .await
        .unwrap();

    let status = client.logout().await.unwrap();

    assert_eq!(status, StatusCode::NO_CONTENT);
    let result = client.accounts().await;
    assert_api_error(&result, "UNAUTHENTICATED", StatusCode::UNAUTHORIZED);
}

#[rstest]
#[tokio::test]
async fn logout_without_session_is_harmless() {
    let app = spawn_app().await;

    let status = app.client().logout().await.unwrap();

    assert_eq!(status, StatusCode::NO_CONTENT);
}

#[rstest]
#[tokio::test]
async fn logged_out_token_no_longer_works(user_alice: TestUser) {
    let app = spawn_app().await;
    let client = app.client();
    let token = client
        .login(user_alice.username, user_alice.password)
        .await
        .unwrap()
        .token;
    client.logout().await.unwrap();

    let result = app.client().accounts_with_bearer(&token).await;

    assert_api_error(&result, "UNAUTHENTICATED", StatusCode::UNAUTHORIZED);
}

#[rstest]
#[tokio::test]
async fn bearer_token_authenticates_without_cookie(user_alice: TestUser) {
    let app = spawn_app().await;
    let token = app
        .client()
        .login(user_alice.username, user_alice.password)
        .await
        .unwrap()
        .token;

    let result = app.client().accounts_with_bearer(&token).await;

    assert_success(&result);
    assert_eq!(result.unwrap().len(), 2);
}

#[rstest]
#[case("not-a-token")]
#[case("00000000-0000-4000-8000-000000000000")]
#[tokio::test]
async fn unknown_bearer_token_is_unauthorized(#[case] token: &str) {
    let app = spawn_app().await;

    let result = app.client().accounts_with_bearer(token).await;

    assert_api_error(&result, "UNAUTHENTICATED", StatusCode::UNAUTHORIZED);
}

#[rstest]
#[tokio::test]
async fn expired_session_is_unauthorized() {
    let app = spawn_app().await;
    let session = Session::open(
        Username::new("alice"),
        Timestamp::now().plus(Duration::minutes(-1)),
    );
    let token = session.token.to_string();
    app.dependencies.sessions().insert(session);

    let result = app.client().accounts_with_bearer(&token).await;

    assert_api_error(&result, "UNAUTHENTICATED", StatusCode::UNAUTHORIZED);
}

#[rstest]
#[tokio::test]
async fn two_clients_hold_independent_sessions(user_alice: TestUser, user_bob: TestUser) {
    let app = spawn_app().await;
    let alice = app.client();
    let bob = app.client();
    alice
        .login(user_alice.username, user_alice.password)
        .await
        .unwrap();
    bob.login(user_bob.username, user_bob.password)
        .await
        .unwrap();

    alice.logout().await.unwrap();

    assert!(alice.me().await.is_err());
    assert_eq!(bob.me().await.unwrap().username, "bob");
}
