//! Listing endpoints and checkout.

use wiremock::matchers::{body_json, body_partial_json, header, method, path};
use wiremock::{Mock, ResponseTemplate};

use swapmart_client::api::OrderRequest;
use swapmart_client::error::AuthCallError;
use swapmart_core::Listing;
use swapmart_integration_tests::TestContext;

fn listing_body(id: i64, name: &str, price: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "name": name,
        "price": price,
        "imageUrl": format!("https://img.example.com/{id}.png"),
        "seller": "Bo",
    })
}

#[tokio::test]
async fn all_listings_deserializes_the_wire_shape() {
    let ctx = TestContext::new().await;
    ctx.seed_session("a1", "r1");

    Mock::given(method("GET"))
        .and(path("/core/get_all_listings/"))
        .and(header("Authorization", "Bearer a1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            listing_body(1, "Lamp", "$10.00"),
            listing_body(2, "Chair", "$25.00"),
        ])))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let listings = ctx.client.all_listings().await.expect("fetch should succeed");
    assert_eq!(listings.len(), 2);
    assert_eq!(listings[0].image_url, "https://img.example.com/1.png");
    // Quantity is local cart state, absent on the wire.
    assert_eq!(listings[0].quantity, 0);
}

#[tokio::test]
async fn my_listings_uses_the_seller_endpoint() {
    let ctx = TestContext::new().await;
    ctx.seed_session("a1", "r1");

    Mock::given(method("GET"))
        .and(path("/core/get_my_listings/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let listings = ctx.client.my_listings().await.expect("fetch should succeed");
    assert!(listings.is_empty());
}

#[tokio::test]
async fn create_listing_posts_the_wire_field_names() {
    let ctx = TestContext::new().await;
    ctx.seed_session("a1", "r1");

    Mock::given(method("POST"))
        .and(path("/core/create_listing/"))
        .and(body_json(serde_json::json!({
            "name": "Desk Lamp",
            "price": 24.99,
            "imageUrl": "https://img.example.com/lamp.png",
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(listing_body(9, "Desk Lamp", "$24.99")))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let created = ctx
        .client
        .create_listing(
            "Desk Lamp",
            "24.99".parse().expect("literal decimal"),
            "https://img.example.com/lamp.png",
        )
        .await
        .expect("create should succeed");
    assert_eq!(created.id, 9);
    assert_eq!(created.price, "$24.99");
}

#[tokio::test]
async fn delete_listing_sends_the_id() {
    let ctx = TestContext::new().await;
    ctx.seed_session("a1", "r1");

    Mock::given(method("DELETE"))
        .and(path("/core/delete_listing/"))
        .and(body_json(serde_json::json!({ "id": 3 })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&ctx.server)
        .await;

    ctx.client.delete_listing(3).await.expect("delete should succeed");
}

#[tokio::test]
async fn place_order_posts_cart_and_checkout_fields() {
    let ctx = TestContext::new().await;
    ctx.seed_session("a1", "r1");

    Mock::given(method("POST"))
        .and(path("/core/place_order/"))
        .and(body_partial_json(serde_json::json!({
            "address": "1 Main St",
            "zip": "K1A 0B1",
            "phone": 5_551_234_567_u64,
            "card": "4111111111111111",
            "exp": "12/30",
            "csc": "123",
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let mut item: Listing =
        serde_json::from_value(listing_body(1, "Lamp", "$10.00")).expect("fixture listing");
    item.quantity = 2;

    let order = OrderRequest {
        items: vec![item],
        address: "1 Main St".to_owned(),
        zip: "K1A 0B1".to_owned(),
        phone: 5_551_234_567,
        card: "4111111111111111".to_owned(),
        exp: "12/30".to_owned(),
        csc: "123".to_owned(),
    };
    ctx.client.place_order(&order).await.expect("order should succeed");
}

#[tokio::test]
async fn listing_calls_surface_session_expiry() {
    let ctx = TestContext::new().await;
    ctx.seed_session("stale", "dead");

    Mock::given(method("GET"))
        .and(path("/core/get_all_listings/"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&ctx.server)
        .await;

    Mock::given(method("POST"))
        .and(path("/token/refresh/"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&ctx.server)
        .await;

    let err = ctx.client.all_listings().await.expect_err("session expired");
    assert!(matches!(err, AuthCallError::SessionExpired));
    assert_eq!(ctx.expiry_notifications(), 1);
}
