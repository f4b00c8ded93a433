//! Integration tests for GET /api/accounts.

use crate::common::*;
use reqwest::StatusCode;
use rstest::rstest;

#[rstest]
#[tokio::test]
async fn list_accounts_after_login(user_alice: TestUser) {
    let app = spawn_app().await;
    let client = app.client();
    client
        .login(user_alice.username, user_alice.password)
        .await
        .unwrap();

    let result = client.accounts().await;

    assert_success(&result);
    let accounts = result.unwrap();
    assert_eq!(accounts.len(), 2);
    assert_eq!(accounts[0].id, 1);
    assert_eq!(accounts[0].account_type, "checking");
    assert_amount_eq(accounts[0].balance, 1000.0);
    assert_eq!(accounts[1].id, 2);
    assert_eq!(accounts[1].account_type, "savings");
    assert_amount_eq(accounts[1].balance, 500.0);
}

#[rstest]
#[tokio::test]
async fn users_only_see_their_own_accounts(user_bob: TestUser) {
    let app = spawn_app().await;
    let client = app.client();
    client
        .login(user_bob.username, user_bob.password)
        .await
        .unwrap();

    let accounts = client.accounts().await.unwrap();

    let ids: Vec<u64> = accounts.iter().map(|account| account.id).collect();
    assert_eq!(ids, vec![3]);
}

#[rstest]
#[tokio::test]
async fn list_accounts_without_session_is_unauthorized() {
    let app = spawn_app().await;

    let result = app.client().accounts().await;

    assert_api_error(&result, "UNAUTHENTICATED", StatusCode::UNAUTHORIZED);
}
