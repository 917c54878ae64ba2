//! Sign-in flow: persistence on success, rollback on every failure.

use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, ResponseTemplate};

use swapmart_client::error::{ApiError, SignInError};
use swapmart_core::AccountType;
use swapmart_integration_tests::{TestContext, user_body};

fn token_response(access: &str, refresh: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(serde_json::json!({
        "access": access,
        "refresh": refresh,
    }))
}

#[tokio::test]
async fn success_persists_tokens_and_flags() {
    let ctx = TestContext::new().await;

    Mock::given(method("POST"))
        .and(path("/token/"))
        .and(body_json(serde_json::json!({
            "email": "ada@example.com",
            "password": "Hunter2x",
        })))
        .respond_with(token_response("a1", "r1"))
        .expect(1)
        .mount(&ctx.server)
        .await;

    Mock::given(method("GET"))
        .and(path("/core/current_user/"))
        .and(header("Authorization", "Bearer a1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_body(0)))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let user = ctx
        .client
        .sign_in("ada@example.com", "Hunter2x", AccountType::Customer, true)
        .await
        .expect("sign-in should succeed");

    assert_eq!(user.account_type, AccountType::Customer);
    assert_eq!(ctx.session.access_token().as_deref(), Some("a1"));
    assert_eq!(ctx.session.refresh_token().as_deref(), Some("r1"));
    assert!(ctx.session.is_signed_in());
    assert_eq!(ctx.session.account_type(), AccountType::Customer);
}

#[tokio::test]
async fn wrong_account_type_rolls_back_tokens() {
    let ctx = TestContext::new().await;

    Mock::given(method("POST"))
        .and(path("/token/"))
        .respond_with(token_response("a1", "r1"))
        .mount(&ctx.server)
        .await;

    // The authenticated account is a seller.
    Mock::given(method("GET"))
        .and(path("/core/current_user/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_body(1)))
        .mount(&ctx.server)
        .await;

    let err = ctx
        .client
        .sign_in("bo@example.com", "Hunter2x", AccountType::Customer, true)
        .await
        .expect_err("account type mismatch");

    assert!(matches!(
        &err,
        SignInError::WrongAccountType(AccountType::Customer)
    ));
    assert_eq!(
        err.email_error().as_deref(),
        Some("This is not a valid customer account")
    );

    // No session trace survives.
    assert!(ctx.session.access_token().is_none());
    assert!(ctx.session.refresh_token().is_none());
    assert!(!ctx.session.is_signed_in());
}

#[tokio::test]
async fn missing_tokens_means_invalid_credentials() {
    let ctx = TestContext::new().await;

    Mock::given(method("POST"))
        .and(path("/token/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&ctx.server)
        .await;

    let err = ctx
        .client
        .sign_in("ada@example.com", "wrong", AccountType::Customer, true)
        .await
        .expect_err("no tokens issued");

    assert!(matches!(&err, SignInError::InvalidCredentials));
    assert_eq!(
        err.password_error(),
        Some("Incorrect email address or password")
    );
    assert!(ctx.session.access_token().is_none());
}

#[tokio::test]
async fn rejected_token_request_discards_tokens() {
    let ctx = TestContext::new().await;

    Mock::given(method("POST"))
        .and(path("/token/"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&ctx.server)
        .await;

    let err = ctx
        .client
        .sign_in("ada@example.com", "wrong", AccountType::Customer, true)
        .await
        .expect_err("token request rejected");

    assert!(matches!(
        err,
        SignInError::Api(ApiError::Status(status)) if status.as_u16() == 401
    ));
    assert!(ctx.session.access_token().is_none());
    assert!(!ctx.session.is_signed_in());
}

#[tokio::test]
async fn failed_user_fetch_rolls_back_tokens() {
    let ctx = TestContext::new().await;

    Mock::given(method("POST"))
        .and(path("/token/"))
        .respond_with(token_response("a1", "r1"))
        .mount(&ctx.server)
        .await;

    Mock::given(method("GET"))
        .and(path("/core/current_user/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&ctx.server)
        .await;

    let err = ctx
        .client
        .sign_in("ada@example.com", "Hunter2x", AccountType::Customer, true)
        .await
        .expect_err("user fetch failed");

    assert!(matches!(&err, SignInError::UserFetch));
    assert!(err.notice().is_some());
    assert!(ctx.session.access_token().is_none());
    assert!(ctx.session.refresh_token().is_none());
}
