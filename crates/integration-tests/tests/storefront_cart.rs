//! Integration tests for browsing, filtering, and cart operations.
//!
//! Run with: `cargo test -p streamline-essentials-integration-tests`

use axum::http::StatusCode;
use streamline_essentials_integration_tests::{TestContext, body_string};
use streamline_essentials_storefront::store::CartStore;

const BACKER_BOARD: &str = "Essenti Board 1/2 in. x 3 ft. x 5 ft. Backer Board";

// ============================================================================
// Browsing & Filtering
// ============================================================================

#[tokio::test]
async fn test_health() {
    let ctx = TestContext::new();
    assert_eq!(ctx.get_ok("/health").await, "ok");
}

#[tokio::test]
async fn test_home_page_renders() {
    let ctx = TestContext::new();
    let body = ctx.get_ok("/").await;
    assert!(body.contains("Latest Products"));
    assert!(body.contains("Shop by Category"));
    assert!(body.contains("Client Testimonials"));
}

#[tokio::test]
async fn test_shop_lists_full_catalog() {
    let ctx = TestContext::new();
    let body = ctx.get_ok("/shop").await;
    assert!(body.contains("Showing 9 products."));
    assert!(body.contains(BACKER_BOARD));
    assert!(body.contains("Tile Leveling Wedge"));
}

#[tokio::test]
async fn test_shop_filters_by_category() {
    let ctx = TestContext::new();
    let body = ctx.get_ok("/shop?category=Shower%20Kit").await;
    assert!(body.contains("Showing 3 products."));
    assert!(body.contains("Shower Niche"));
    assert!(body.contains("Shower Pans"));
    assert!(body.contains("Shower Curb"));
    assert!(!body.contains("Decoupling Mat"));
}

#[tokio::test]
async fn test_shop_filters_accumulate() {
    let ctx = TestContext::new();
    let body = ctx
        .get_ok("/shop?category=Shower%20Kit&category=Essenti%20Board")
        .await;
    assert!(body.contains("Showing 4 products."));
    assert!(body.contains(BACKER_BOARD));
}

#[tokio::test]
async fn test_shop_ignores_unknown_categories() {
    let ctx = TestContext::new();
    let body = ctx.get_ok("/shop?category=Plumbing").await;
    assert!(body.contains("Showing 9 products."));
}

#[tokio::test]
async fn test_product_detail_renders() {
    let ctx = TestContext::new();
    let body = ctx.get_ok("/shop/1").await;
    assert!(body.contains(BACKER_BOARD));
    assert!(body.contains("SKU 00002"));
    assert!(body.contains("1/2 inch | 3&#x27;x5&#x27;") || body.contains("1/2 inch | 3'x5'"));
    assert!(body.contains("You may also like"));
}

#[tokio::test]
async fn test_unknown_product_renders_not_found() {
    let ctx = TestContext::new();

    let response = ctx.get("/shop/999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_string(response).await.contains("Product not found"));

    let response = ctx.get("/shop/not-a-number").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ============================================================================
// Cart Operations
// ============================================================================

#[tokio::test]
async fn test_add_to_cart_updates_count_badge() {
    let ctx = TestContext::new();

    let response = ctx
        .post_form("/cart/add", &[("product_id", "1"), ("quantity", "2")])
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get("HX-Trigger")
            .and_then(|v| v.to_str().ok()),
        Some("cart-updated")
    );
    let body = body_string(response).await;
    assert!(body.contains(">2</span>"));
    assert!(body.contains("has been added to your cart"));
}

#[tokio::test]
async fn test_add_unknown_product_is_noop() {
    let ctx = TestContext::new();

    let response = ctx.post_form("/cart/add", &[("product_id", "999")]).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().get("HX-Trigger").is_none());
    assert!(body_string(response).await.contains(">0</span>"));
    assert!(ctx.store.load().is_empty());
}

#[tokio::test]
async fn test_repeated_adds_merge_into_one_line() {
    let ctx = TestContext::new();
    ctx.post_form("/cart/add", &[("product_id", "6"), ("quantity", "1")])
        .await;
    ctx.post_form("/cart/add", &[("product_id", "6"), ("quantity", "2")])
        .await;

    let body = ctx.get_ok("/cart").await;
    assert!(body.contains("Performance Sealant"));
    // 3 x $18.99
    assert!(body.contains("$56.97"));

    let lines = ctx.store.load();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].quantity, 3);
}

#[tokio::test]
async fn test_sizes_are_distinct_cart_lines() {
    let ctx = TestContext::new();
    ctx.post_form(
        "/cart/add",
        &[("product_id", "7"), ("size", "3 in x 3 in x 3 ft")],
    )
    .await;
    ctx.post_form(
        "/cart/add",
        &[("product_id", "7"), ("size", "3 in x 3 in x 4 ft")],
    )
    .await;

    let body = ctx.get_ok("/cart").await;
    assert!(body.contains("Size: 3 in x 3 in x 3 ft"));
    assert!(body.contains("Size: 3 in x 3 in x 4 ft"));
    assert_eq!(ctx.store.load().len(), 2);
}

#[tokio::test]
async fn test_sized_product_requires_size_from_detail_form() {
    let ctx = TestContext::new();

    // The detail form posts a size field; blank means nothing chosen.
    let response = ctx
        .post_form("/cart/add", &[("product_id", "1"), ("size", "")])
        .await;
    let body = body_string(response).await;
    assert!(body.contains("Please choose a size"));
    assert!(ctx.store.load().is_empty());

    // The grid quick-add posts no size field at all and is allowed.
    ctx.post_form("/cart/add", &[("product_id", "1")]).await;
    assert_eq!(ctx.store.load().len(), 1);
}

#[tokio::test]
async fn test_update_quantity_rerenders_items() {
    let ctx = TestContext::new();
    ctx.post_form("/cart/add", &[("product_id", "6")]).await;

    let response = ctx
        .post_form(
            "/cart/update",
            &[("product_id", "6"), ("quantity", "5")],
        )
        .await;
    let body = body_string(response).await;
    assert!(body.contains(">5</span>"));
    assert_eq!(ctx.store.load()[0].quantity, 5);
}

#[tokio::test]
async fn test_update_quantity_to_zero_removes_line() {
    let ctx = TestContext::new();
    ctx.post_form("/cart/add", &[("product_id", "6")]).await;

    let response = ctx
        .post_form(
            "/cart/update",
            &[("product_id", "6"), ("quantity", "0")],
        )
        .await;
    assert!(body_string(response).await.contains("Your cart is empty."));
    assert!(ctx.store.load().is_empty());
}

#[tokio::test]
async fn test_remove_only_touches_matching_size() {
    let ctx = TestContext::new();
    ctx.post_form(
        "/cart/add",
        &[("product_id", "3"), ("size", "3'x4'")],
    )
    .await;
    ctx.post_form(
        "/cart/add",
        &[("product_id", "3"), ("size", "3'x5'")],
    )
    .await;

    ctx.post_form(
        "/cart/remove",
        &[("product_id", "3"), ("size", "3'x4'")],
    )
    .await;

    let lines = ctx.store.load();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].size.as_deref(), Some("3'x5'"));
}

#[tokio::test]
async fn test_cart_page_shows_subtotal() {
    let ctx = TestContext::new();
    ctx.post_form("/cart/add", &[("product_id", "1"), ("quantity", "2")])
        .await;

    let body = ctx.get_ok("/cart").await;
    assert!(body.contains("Subtotal (est.)"));
    assert!(body.contains("$55.98"));
}

#[tokio::test]
async fn test_count_badge_reads_current_state() {
    let ctx = TestContext::new();
    assert!(ctx.get_ok("/cart/count").await.contains(">0</span>"));

    ctx.post_form("/cart/add", &[("product_id", "9"), ("quantity", "4")])
        .await;
    assert!(ctx.get_ok("/cart/count").await.contains(">4</span>"));
}
