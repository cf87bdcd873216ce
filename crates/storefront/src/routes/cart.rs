//! Cart route handlers.
//!
//! Cart operations use HTMX for dynamic updates without full page reloads.
//! The cart itself is the process-wide [`SharedCart`]; every mutation
//! persists before the fragment is rendered. Order submission lives here
//! too, since the order form is part of the cart page.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{AppendHeaders, IntoResponse, Response},
};
use serde::Deserialize;
use tracing::instrument;

use streamline_essentials_core::order::{Fulfillment, OrderRequest};
use streamline_essentials_core::types::ProductId;

use crate::filters;
use crate::services::order::OrderError;
use crate::state::AppState;
use crate::store::{CartSnapshot, SharedCart};

/// Cart item display data for templates.
#[derive(Clone)]
pub struct CartItemView {
    pub product_id: i32,
    pub name: String,
    pub quantity: u32,
    pub size: Option<String>,
    pub image: String,
    pub price: String,
    pub line_price: String,
}

/// Cart display data for templates.
#[derive(Clone)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub subtotal: String,
    pub item_count: u32,
}

impl CartView {
    /// Create an empty cart.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            subtotal: "$0.00".to_string(),
            item_count: 0,
        }
    }
}

impl From<&CartSnapshot> for CartView {
    fn from(snapshot: &CartSnapshot) -> Self {
        Self {
            items: snapshot
                .lines
                .iter()
                .map(|line| CartItemView {
                    product_id: line.product_id.as_i32(),
                    name: line.name.clone(),
                    quantity: line.quantity,
                    size: line.size.clone(),
                    image: line.image.clone(),
                    price: line.price.to_string(),
                    line_price: line.line_total().to_string(),
                })
                .collect(),
            subtotal: snapshot.subtotal.to_string(),
            item_count: snapshot.total_count,
        }
    }
}

// =============================================================================
// Forms
// =============================================================================

/// Normalize a form size field: surrounding whitespace is stripped and
/// an empty value means "no size chosen".
fn normalize_size(size: Option<String>) -> Option<String> {
    size.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: i32,
    pub quantity: Option<u32>,
    pub size: Option<String>,
}

/// Update cart form data.
#[derive(Debug, Deserialize)]
pub struct UpdateCartForm {
    pub product_id: i32,
    pub quantity: u32,
    pub size: Option<String>,
}

/// Remove from cart form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    pub product_id: i32,
    pub size: Option<String>,
}

/// Order submission form data.
#[derive(Debug, Deserialize)]
pub struct OrderForm {
    pub name: String,
    pub phone: String,
    pub fulfillment: String,
    pub address: Option<String>,
}

// =============================================================================
// Templates
// =============================================================================

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub cart: CartView,
}

/// Cart items fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_items.html")]
pub struct CartItemsTemplate {
    pub cart: CartView,
}

/// Cart count badge fragment template (for HTMX).
///
/// When `message` is set, the fragment also carries an out-of-band toast
/// so the user sees transient feedback ("Added to cart").
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: u32,
    pub message: Option<String>,
}

/// Order submission success fragment (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/order_success.html")]
pub struct OrderSuccessTemplate {}

/// Order submission error fragment (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/order_error.html")]
pub struct OrderErrorTemplate {
    pub message: String,
}

// =============================================================================
// Handlers
// =============================================================================

fn items_fragment(cart: &SharedCart) -> Response {
    let view = CartView::from(&cart.snapshot());
    (
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartItemsTemplate { cart: view },
    )
        .into_response()
}

/// Display cart page.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> impl IntoResponse {
    CartShowTemplate {
        cart: CartView::from(&state.cart().snapshot()),
    }
}

/// Add item to cart (HTMX).
///
/// Looks the product up in the catalog; an unknown id leaves the cart
/// untouched. Returns the count badge with an HTMX trigger so other
/// fragments refresh.
#[instrument(skip(state))]
pub async fn add(State(state): State<AppState>, Form(form): Form<AddToCartForm>) -> Response {
    let product_id = ProductId::new(form.product_id);
    let Some(product) = state.catalog().get(product_id) else {
        tracing::warn!(%product_id, "Add to cart for unknown product");
        return CartCountTemplate {
            count: state.cart().snapshot().total_count,
            message: None,
        }
        .into_response();
    };

    // The detail page posts a size field (possibly blank); the grid's
    // quick-add button posts none and may add size-less.
    let size_field_present = form.size.is_some();
    let size = normalize_size(form.size);
    if product.has_sizes() && size_field_present && size.is_none() {
        return CartCountTemplate {
            count: state.cart().snapshot().total_count,
            message: Some("Please choose a size before adding to cart.".to_string()),
        }
        .into_response();
    }

    let quantity = form.quantity.unwrap_or(1);
    let snapshot = state.cart().add_item(product, quantity, size);

    (
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartCountTemplate {
            count: snapshot.total_count,
            message: Some(format!("\"{}\" has been added to your cart.", product.name)),
        },
    )
        .into_response()
}

/// Update cart item quantity (HTMX). A quantity below 1 removes the line.
#[instrument(skip(state))]
pub async fn update(State(state): State<AppState>, Form(form): Form<UpdateCartForm>) -> Response {
    let size = normalize_size(form.size);
    state
        .cart()
        .update_quantity(ProductId::new(form.product_id), form.quantity, size.as_deref());
    items_fragment(state.cart())
}

/// Remove item from cart (HTMX).
#[instrument(skip(state))]
pub async fn remove(State(state): State<AppState>, Form(form): Form<RemoveFromCartForm>) -> Response {
    let size = normalize_size(form.size);
    state
        .cart()
        .remove_item(ProductId::new(form.product_id), size.as_deref());
    items_fragment(state.cart())
}

/// Get cart count badge (HTMX).
#[instrument(skip(state))]
pub async fn count(State(state): State<AppState>) -> impl IntoResponse {
    CartCountTemplate {
        count: state.cart().snapshot().total_count,
        message: None,
    }
}

/// Submit the order request (HTMX).
///
/// Validates the contact form, sends the order email, and clears the
/// cart on success. Failures render an in-place, retryable error
/// fragment; the cart is preserved.
#[instrument(skip(state, form), fields(fulfillment = %form.fulfillment))]
pub async fn submit_order(
    State(state): State<AppState>,
    Form(form): Form<OrderForm>,
) -> Response {
    let fulfillment = Fulfillment::from_form_value(&form.fulfillment);
    let order = match OrderRequest::validate(
        &form.name,
        &form.phone,
        fulfillment,
        form.address.as_deref(),
    ) {
        Ok(order) => order,
        Err(e) => {
            return OrderErrorTemplate {
                message: capitalize(&e.to_string()),
            }
            .into_response();
        }
    };

    match state.orders().submit(state.cart(), &order).await {
        Ok(()) => (
            AppendHeaders([("HX-Trigger", "cart-updated")]),
            OrderSuccessTemplate {},
        )
            .into_response(),
        Err(e) => OrderErrorTemplate {
            message: order_error_message(&e),
        }
        .into_response(),
    }
}

/// User-facing message for a failed submission.
fn order_error_message(error: &OrderError) -> String {
    match error {
        OrderError::Validation(e) => capitalize(&e.to_string()),
        OrderError::EmptyCart => "Your cart is empty.".to_string(),
        OrderError::AlreadyInFlight => "Your order is already being sent.".to_string(),
        OrderError::Send(e) => {
            tracing::error!(error = %e, "Failed to send order");
            "There was an error sending your order. Please try again or call us directly."
                .to_string()
        }
    }
}

fn capitalize(message: &str) -> String {
    let mut chars = message.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().collect::<String>() + chars.as_str()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_size() {
        assert_eq!(normalize_size(None), None);
        assert_eq!(normalize_size(Some("  ".to_string())), None);
        assert_eq!(
            normalize_size(Some(" 3'x5' ".to_string())),
            Some("3'x5'".to_string())
        );
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("please enter your name"), "Please enter your name");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_cart_view_empty() {
        let view = CartView::empty();
        assert_eq!(view.item_count, 0);
        assert_eq!(view.subtotal, "$0.00");
        assert!(view.items.is_empty());
    }
}
