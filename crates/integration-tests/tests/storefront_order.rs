//! Integration tests for the order submission flow.
//!
//! Run with: `cargo test -p streamline-essentials-integration-tests`

use axum::http::StatusCode;
use streamline_essentials_integration_tests::{TestContext, body_string};
use streamline_essentials_storefront::store::CartStore;

async fn seed_backer_board(ctx: &TestContext) {
    let response = ctx
        .post_form(
            "/cart/add",
            &[
                ("product_id", "1"),
                ("quantity", "2"),
                ("size", "1/2 inch | 3'x5'"),
            ],
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_successful_order_sends_email_and_clears_cart() {
    let ctx = TestContext::new();
    seed_backer_board(&ctx).await;

    let response = ctx
        .post_form(
            "/cart/order",
            &[
                ("name", "Jane"),
                ("phone", "5035551234"),
                ("fulfillment", "pickup"),
            ],
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("Order sent successfully"));

    // The email matches the order exactly.
    let sent = ctx.mailer.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].customer_name, "Jane");
    assert_eq!(sent[0].phone_number, "5035551234");
    assert_eq!(sent[0].order_type, "Pick up");
    assert_eq!(sent[0].address, "N/A");
    assert_eq!(
        sent[0].order_summary,
        "- Essenti Board 1/2 in. x 3 ft. x 5 ft. Backer Board x2 (Est. $55.98)"
    );
    assert_eq!(sent[0].total_price, "Est. $55.98");

    // The cart was cleared, in memory and in the store.
    assert!(ctx.store.load().is_empty());
    assert!(ctx.get_ok("/cart/count").await.contains(">0</span>"));
}

#[tokio::test]
async fn test_delivery_order_carries_address() {
    let ctx = TestContext::new();
    seed_backer_board(&ctx).await;

    ctx.post_form(
        "/cart/order",
        &[
            ("name", "Sam"),
            ("phone", "5035550000"),
            ("fulfillment", "delivery"),
            ("address", "1 Main St, Oregon City, OR"),
        ],
    )
    .await;

    let sent = ctx.mailer.sent();
    assert_eq!(sent[0].order_type, "Delivery");
    assert_eq!(sent[0].address, "1 Main St, Oregon City, OR");
}

#[tokio::test]
async fn test_blank_delivery_address_defaults_to_na() {
    let ctx = TestContext::new();
    seed_backer_board(&ctx).await;

    ctx.post_form(
        "/cart/order",
        &[
            ("name", "Sam"),
            ("phone", "5035550000"),
            ("fulfillment", "delivery"),
            ("address", "   "),
        ],
    )
    .await;

    assert_eq!(ctx.mailer.sent()[0].address, "N/A");
}

#[tokio::test]
async fn test_missing_contact_fields_block_submission() {
    let ctx = TestContext::new();
    seed_backer_board(&ctx).await;

    let response = ctx
        .post_form(
            "/cart/order",
            &[("name", "  "), ("phone", "5035551234"), ("fulfillment", "pickup")],
        )
        .await;
    assert!(body_string(response).await.contains("Please enter your name"));

    let response = ctx
        .post_form(
            "/cart/order",
            &[("name", "Jane"), ("phone", ""), ("fulfillment", "pickup")],
        )
        .await;
    assert!(
        body_string(response)
            .await
            .contains("Please enter your phone number")
    );

    // Nothing was sent and the cart is intact.
    assert!(ctx.mailer.sent().is_empty());
    assert_eq!(ctx.store.load().len(), 1);
}

#[tokio::test]
async fn test_failed_send_preserves_cart_for_retry() {
    let ctx = TestContext::new();
    seed_backer_board(&ctx).await;
    ctx.mailer.set_fail(true);

    let response = ctx
        .post_form(
            "/cart/order",
            &[("name", "Jane"), ("phone", "5035551234"), ("fulfillment", "pickup")],
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("There was an error sending your order"));

    // Cart intact, so a retry can succeed without re-entering items.
    assert_eq!(ctx.store.load().len(), 1);

    ctx.mailer.set_fail(false);
    let response = ctx
        .post_form(
            "/cart/order",
            &[("name", "Jane"), ("phone", "5035551234"), ("fulfillment", "pickup")],
        )
        .await;
    assert!(body_string(response).await.contains("Order sent successfully"));
    assert!(ctx.store.load().is_empty());
}

#[tokio::test]
async fn test_empty_cart_order_is_rejected() {
    let ctx = TestContext::new();

    let response = ctx
        .post_form(
            "/cart/order",
            &[("name", "Jane"), ("phone", "5035551234"), ("fulfillment", "pickup")],
        )
        .await;
    assert!(body_string(response).await.contains("Your cart is empty."));
    assert!(ctx.mailer.sent().is_empty());
}

#[tokio::test]
async fn test_order_submission_is_rate_limited() {
    let ctx = TestContext::new();

    // Burst of 3 allowed, the fourth rapid submission is rejected.
    for _ in 0..3 {
        let response = ctx
            .post_form(
                "/cart/order",
                &[("name", "Jane"), ("phone", "5035551234"), ("fulfillment", "pickup")],
            )
            .await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = ctx
        .post_form(
            "/cart/order",
            &[("name", "Jane"), ("phone", "5035551234"), ("fulfillment", "pickup")],
        )
        .await;
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
}
