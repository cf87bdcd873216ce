//! EmailJS API client for order delivery.
//!
//! "Sending an order" is one templated transactional-email send. The
//! service id, template id, and public key are configuration, not
//! secrets; delivery is best-effort with no retry.

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

use streamline_essentials_core::cart::CartLine;
use streamline_essentials_core::order::{self, OrderRequest};
use streamline_essentials_core::types::Price;

use crate::config::EmailJsConfig;

/// EmailJS send endpoint.
const API_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Errors that can occur when sending through EmailJS.
#[derive(Debug, Error)]
pub enum EmailError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error response.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },
}

/// Template parameters for the order email.
///
/// Field names match the EmailJS template placeholders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderEmail {
    pub customer_name: String,
    pub phone_number: String,
    /// "Delivery" or "Pick up".
    pub order_type: String,
    /// Delivery address, or "N/A" for pickup orders.
    pub address: String,
    /// Multi-line itemized summary, one line per cart line.
    pub order_summary: String,
    /// Formatted total, e.g. "Est. $55.98".
    pub total_price: String,
}

impl OrderEmail {
    /// Assemble the template parameters from a validated order request
    /// and a cart snapshot.
    #[must_use]
    pub fn compose(order: &OrderRequest, lines: &[CartLine], subtotal: Price) -> Self {
        Self {
            customer_name: order.name.clone(),
            phone_number: order.phone.clone(),
            order_type: order.fulfillment.label().to_string(),
            address: order.address_or_na().to_string(),
            order_summary: order::order_summary(lines),
            total_price: order::order_total(subtotal),
        }
    }
}

/// Delivery seam for order emails.
///
/// Production uses [`EmailJsClient`]; tests substitute a mock so the
/// submission flow can be exercised without a network.
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Send the order email.
    ///
    /// # Errors
    ///
    /// Returns [`EmailError`] when the request fails or the API rejects it.
    async fn send_order(&self, email: &OrderEmail) -> Result<(), EmailError>;
}

/// EmailJS REST API client.
#[derive(Clone)]
pub struct EmailJsClient {
    client: reqwest::Client,
    config: EmailJsConfig,
}

impl EmailJsClient {
    /// Create a new EmailJS client.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client fails to build.
    pub fn new(config: &EmailJsConfig) -> Result<Self, EmailError> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    fn request_body(&self, email: &OrderEmail) -> serde_json::Value {
        serde_json::json!({
            "service_id": self.config.service_id,
            "template_id": self.config.template_id,
            "user_id": self.config.public_key,
            "template_params": email,
        })
    }
}

#[async_trait]
impl Mailer for EmailJsClient {
    async fn send_order(&self, email: &OrderEmail) -> Result<(), EmailError> {
        let response = self
            .client
            .post(API_URL)
            .json(&self.request_body(email))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(EmailError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use streamline_essentials_core::order::Fulfillment;
    use streamline_essentials_core::types::ProductId;

    fn line(name: &str, cents: i64, quantity: u32, size: Option<&str>) -> CartLine {
        CartLine {
            product_id: ProductId::new(1),
            quantity,
            name: name.to_string(),
            price: Price::from_cents(cents),
            image: String::new(),
            size: size.map(ToString::to_string),
        }
    }

    #[test]
    fn test_compose_pickup_order() {
        let order = OrderRequest::validate("Jane", "5035551234", Fulfillment::Pickup, None)
            .expect("valid");
        let lines = vec![line(
            "Essenti Board 1/2 in. x 3 ft. x 5 ft. Backer Board",
            2799,
            2,
            Some("1/2 inch | 3'x5'"),
        )];
        let email = OrderEmail::compose(&order, &lines, Price::from_cents(5598));

        assert_eq!(email.customer_name, "Jane");
        assert_eq!(email.phone_number, "5035551234");
        assert_eq!(email.order_type, "Pick up");
        assert_eq!(email.address, "N/A");
        assert_eq!(
            email.order_summary,
            "- Essenti Board 1/2 in. x 3 ft. x 5 ft. Backer Board x2 (Est. $55.98)"
        );
        assert_eq!(email.total_price, "Est. $55.98");
    }

    #[test]
    fn test_compose_delivery_order_carries_address() {
        let order = OrderRequest::validate(
            "Sam",
            "5035550000",
            Fulfillment::Delivery,
            Some("1 Main St, Oregon City, OR"),
        )
        .expect("valid");
        let email = OrderEmail::compose(&order, &[], Price::ZERO);

        assert_eq!(email.order_type, "Delivery");
        assert_eq!(email.address, "1 Main St, Oregon City, OR");
        assert_eq!(email.order_summary, "");
        assert_eq!(email.total_price, "Est. $0.00");
    }

    #[test]
    fn test_request_body_shape() {
        let client = EmailJsClient::new(&EmailJsConfig {
            service_id: "service_abc".to_string(),
            template_id: "template_order".to_string(),
            public_key: "pk_123".to_string(),
        })
        .expect("client");
        let order = OrderRequest::validate("Jane", "5035551234", Fulfillment::Pickup, None)
            .expect("valid");
        let email = OrderEmail::compose(&order, &[], Price::ZERO);

        let body = client.request_body(&email);
        assert_eq!(body["service_id"], "service_abc");
        assert_eq!(body["template_id"], "template_order");
        assert_eq!(body["user_id"], "pk_123");
        assert_eq!(body["template_params"]["customer_name"], "Jane");
        assert_eq!(body["template_params"]["order_type"], "Pick up");
    }
}
