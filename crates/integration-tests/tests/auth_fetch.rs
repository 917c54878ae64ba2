//! The 401 refresh-and-retry protocol, end to end against a mock backend.

use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, ResponseTemplate};

use swapmart_client::error::{ApiError, AuthCallError};
use swapmart_core::TokenPair;
use swapmart_integration_tests::{TestContext, user_body};

#[tokio::test]
async fn success_passes_through_without_refresh() {
    let ctx = TestContext::new().await;
    ctx.seed_session("a1", "r1");

    Mock::given(method("GET"))
        .and(path("/core/current_user/"))
        .and(header("Authorization", "Bearer a1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_body(0)))
        .expect(1)
        .mount(&ctx.server)
        .await;

    Mock::given(method("POST"))
        .and(path("/token/refresh/"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&ctx.server)
        .await;

    let user = ctx.client.current_user().await.expect("call should succeed");
    assert_eq!(user.email, "ada@example.com");
    assert_eq!(ctx.expiry_notifications(), 0);
}

#[tokio::test]
async fn unauthorized_refreshes_once_and_retries() {
    let ctx = TestContext::new().await;
    ctx.seed_session("stale", "r1");

    // The stale token is rejected; the refreshed one is accepted.
    Mock::given(method("GET"))
        .and(path("/core/current_user/"))
        .and(header("Authorization", "Bearer stale"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&ctx.server)
        .await;

    Mock::given(method("POST"))
        .and(path("/token/refresh/"))
        .and(body_json(serde_json::json!({ "refresh": "r1" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access": "fresh",
            "refresh": "r2",
        })))
        .expect(1)
        .mount(&ctx.server)
        .await;

    Mock::given(method("GET"))
        .and(path("/core/current_user/"))
        .and(header("Authorization", "Bearer fresh"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_body(0)))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let user = ctx.client.current_user().await.expect("retry should succeed");
    assert_eq!(user.id, 7);

    // The rotated pair is persisted.
    assert_eq!(ctx.session.access_token().as_deref(), Some("fresh"));
    assert_eq!(ctx.session.refresh_token().as_deref(), Some("r2"));
    assert_eq!(ctx.expiry_notifications(), 0);
}

#[tokio::test]
async fn retried_request_is_never_refreshed_again() {
    let ctx = TestContext::new().await;
    ctx.seed_session("stale", "r1");

    // Every attempt is rejected, even with the fresh token.
    Mock::given(method("GET"))
        .and(path("/core/current_user/"))
        .respond_with(ResponseTemplate::new(401))
        .expect(2)
        .mount(&ctx.server)
        .await;

    // Unrotated refresh: no `refresh` field in the response.
    Mock::given(method("POST"))
        .and(path("/token/refresh/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "access": "fresh" })),
        )
        .expect(1)
        .mount(&ctx.server)
        .await;

    let err = ctx.client.current_user().await.expect_err("second 401 is final");
    assert!(matches!(
        err,
        AuthCallError::Api(ApiError::Status(status)) if status.as_u16() == 401
    ));

    // The session survives; a plain 401 on retry is not expiry.
    assert_eq!(ctx.session.refresh_token().as_deref(), Some("r1"));
    assert_eq!(ctx.expiry_notifications(), 0);
}

#[tokio::test]
async fn failed_refresh_expires_the_session() {
    let ctx = TestContext::new().await;
    ctx.seed_session("stale", "dead");

    Mock::given(method("GET"))
        .and(path("/core/current_user/"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&ctx.server)
        .await;

    Mock::given(method("POST"))
        .and(path("/token/refresh/"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let err = ctx.client.current_user().await.expect_err("session expired");
    assert!(matches!(err, AuthCallError::SessionExpired));

    assert_eq!(ctx.expiry_notifications(), 1);
    assert!(ctx.session.access_token().is_none());
    assert!(ctx.session.refresh_token().is_none());
    assert!(!ctx.session.is_signed_in());
}

#[tokio::test]
async fn missing_refresh_token_expires_without_a_refresh_call() {
    let ctx = TestContext::new().await;
    ctx.session.store_tokens(&TokenPair {
        access: "a1".to_owned(),
        refresh: None,
    });
    ctx.session.mark_signed_in(true);

    Mock::given(method("GET"))
        .and(path("/core/current_user/"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&ctx.server)
        .await;

    Mock::given(method("POST"))
        .and(path("/token/refresh/"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&ctx.server)
        .await;

    let err = ctx.client.current_user().await.expect_err("session expired");
    assert!(matches!(err, AuthCallError::SessionExpired));
    assert_eq!(ctx.expiry_notifications(), 1);
}
