//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page
//! GET  /health                 - Health check
//! GET  /carousel               - Latest-products window fragment (HTMX)
//!
//! # Shop
//! GET  /shop                   - Product listing with category filters
//! GET  /shop/:id               - Product detail
//!
//! # Cart (HTMX fragments)
//! GET  /cart                   - Cart page
//! POST /cart/add               - Add to cart (returns count badge, triggers cart-updated)
//! POST /cart/update            - Update quantity (returns cart_items fragment)
//! POST /cart/remove            - Remove item (returns cart_items fragment)
//! GET  /cart/count             - Cart count badge (fragment)
//! POST /cart/order             - Submit order request (rate limited)
//!
//! # Newsletter
//! POST /newsletter             - Subscribe (returns success/error fragment)
//!
//! # Content pages
//! GET  /about                  - About page
//! GET  /projects               - Completed projects gallery
//! GET  /contact                - Contact page
//! ```

pub mod cart;
pub mod home;
pub mod newsletter;
pub mod pages;
pub mod shop;

use axum::{
    Router,
    routing::{get, post},
};

use crate::middleware;
use crate::state::AppState;

/// Create the shop routes router.
pub fn shop_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(shop::index))
        .route("/{id}", get(shop::show))
}

/// Create the cart routes router.
///
/// Order submission sends a real email, so it carries its own rate
/// limiter on top of whatever the outer stack applies.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/count", get(cart::count))
        .route(
            "/order",
            post(cart::submit_order).layer(middleware::order_rate_limiter()),
        )
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Home page
        .route("/", get(home::home))
        // Latest-products carousel fragment
        .route("/carousel", get(home::carousel))
        // Shop routes
        .nest("/shop", shop_routes())
        // Cart routes
        .nest("/cart", cart_routes())
        // Newsletter signup
        .route("/newsletter", post(newsletter::subscribe))
        // Content pages
        .route("/about", get(pages::about))
        .route("/projects", get(pages::projects))
        .route("/contact", get(pages::contact))
}
