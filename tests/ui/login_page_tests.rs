//! Login page, dashboard and navigation.

use crate::common::*;
use reqwest::StatusCode;
use rstest::rstest;

async fn form_login(client: &BankApiClient, user: &TestUser) -> Page {
    client
        .post_form(
            "/login",
            &[("username", user.username), ("password", user.password)],
        )
        .await
        .unwrap()
}

#[rstest]
#[tokio::test]
async fn login_page_labels_point_at_fields() {
    let app = spawn_app().await;

    let page = app.client().get_page("/").await.unwrap();

    assert_eq!(page.status, StatusCode::OK);
    assert_eq!(label_target(&page.body, "Username:").as_deref(), Some("username"));
    assert_eq!(label_target(&page.body, "Password:").as_deref(), Some("password"));
    assert!(has_element(&page.body, "login-button"));
    assert!(!has_element(&page.body, "login-error"));
}

#[rstest]
#[tokio::test]
async fn login_shows_the_dashboard(user_alice: TestUser) {
    let app = spawn_app().await;

    let page = form_login(&app.client(), &user_alice).await;

    assert_eq!(page.status, StatusCode::OK);
    assert_eq!(
        element_text(&page.body, "user-info").as_deref(),
        Some("Logged in as:")
    );
    assert_eq!(
        element_text(&page.body, "user-name").as_deref(),
        Some(user_alice.name)
    );
    let rows = account_rows(&page.body);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0], vec!["1", "checking", "1000.00"]);
    assert_eq!(rows[1], vec!["2", "savings", "500.00"]);
    assert!(history_texts(&page.body).is_empty());
}

#[rstest]
#[tokio::test]
async fn login_redirects_with_a_session_cookie(user_alice: TestUser) {
    let app = spawn_app().await;
    let client = BankApiClient::without_redirects(&app.base_url);

    let page = form_login(&client, &user_alice).await;

    assert_eq!(page.status, StatusCode::SEE_OTHER);
    assert_eq!(page.location.as_deref(), Some("/"));
    let accounts = client.accounts().await.unwrap();
    assert_eq!(accounts.len(), 2);
}

#[rstest]
#[tokio::test]
async fn wrong_password_shows_login_error(user_alice: TestUser) {
    let app = spawn_app().await;
    let client = app.client();

    let page = client
        .post_form(
            "/login",
            &[("username", user_alice.username), ("password", "wrong")],
        )
        .await
        .unwrap();

    assert_eq!(page.status, StatusCode::UNAUTHORIZED);
    assert!(has_element(&page.body, "login-error"));
    assert_eq!(
        element_text(&page.body, "login-error").as_deref(),
        Some("Invalid username or password")
    );
    assert!(!has_element(&page.body, "user-info"));
}

#[rstest]
#[case("/accounts")]
#[case("/transfer")]
#[case("/transfers")]
#[tokio::test]
async fn app_pages_redirect_without_session(#[case] path: &str) {
    let app = spawn_app().await;
    let client = BankApiClient::without_redirects(&app.base_url);

    let page = client.get_page(path).await.unwrap();

    assert_eq!(page.status, StatusCode::SEE_OTHER);
    assert_eq!(page.location.as_deref(), Some("/"));
}

#[rstest]
#[case("/accounts", "accounts-table-body", "transfer-form")]
#[case("/transfer", "transfer-form", "transfer-history")]
#[case("/transfers", "transfer-history", "accounts-table-body")]
#[tokio::test]
async fn navigation_pages_show_their_section(
    user_alice: TestUser,
    #[case] path: &str,
    #[case] present: &str,
    #[case] absent: &str,
) {
    let app = spawn_app().await;
    let client = app.client();
    form_login(&client, &user_alice).await;

    let page = client.get_page(path).await.unwrap();

    assert_eq!(page.status, StatusCode::OK);
    assert!(has_element(&page.body, "user-info"));
    assert!(has_element(&page.body, present));
    assert!(!has_element(&page.body, absent));
}

#[rstest]
#[tokio::test]
async fn logout_returns_to_the_login_form(user_alice: TestUser) {
    let app = spawn_app().await;
    let client = app.client();
    form_login(&client, &user_alice).await;

    let page = client.post_form("/logout", &[]).await.unwrap();

    assert_eq!(page.status, StatusCode::OK);
    assert!(has_element(&page.body, "login-form"));
    assert!(!has_element(&page.body, "user-info"));
    let result = client.accounts().await;
    assert_api_error(&result, "UNAUTHENTICATED", StatusCode::UNAUTHORIZED);
}
