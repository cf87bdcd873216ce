//! Order-request validation and summary formatting.
//!
//! An order request is ephemeral: it exists only for the duration of the
//! submission call and is never stored. Prices in the summary are
//! estimates; the final amount is confirmed by phone.

use thiserror::Error;

use crate::cart::CartLine;
use crate::types::Price;

/// How the customer wants to receive the order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Fulfillment {
    #[default]
    Pickup,
    Delivery,
}

impl Fulfillment {
    /// The label used in the order email ("Pick up" / "Delivery").
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Pickup => "Pick up",
            Self::Delivery => "Delivery",
        }
    }

    /// Parse a form value. Unknown values fall back to pickup.
    #[must_use]
    pub fn from_form_value(value: &str) -> Self {
        if value.eq_ignore_ascii_case("delivery") {
            Self::Delivery
        } else {
            Self::Pickup
        }
    }
}

/// Validation failures that block submission. All are recoverable by
/// correcting the form input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OrderValidationError {
    #[error("please enter your name")]
    MissingName,
    #[error("please enter your phone number")]
    MissingPhone,
}

/// A validated order request: customer contact plus fulfillment choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRequest {
    pub name: String,
    pub phone: String,
    pub fulfillment: Fulfillment,
    pub address: Option<String>,
}

impl OrderRequest {
    /// Validate raw form input into an order request.
    ///
    /// Name and phone are required after trimming. The delivery address
    /// is optional even for delivery orders - a blank address becomes
    /// "N/A" in the email rather than a validation failure.
    ///
    /// # Errors
    ///
    /// Returns [`OrderValidationError`] when name or phone is blank.
    pub fn validate(
        name: &str,
        phone: &str,
        fulfillment: Fulfillment,
        address: Option<&str>,
    ) -> Result<Self, OrderValidationError> {
        let name = name.trim();
        let phone = phone.trim();
        if name.is_empty() {
            return Err(OrderValidationError::MissingName);
        }
        if phone.is_empty() {
            return Err(OrderValidationError::MissingPhone);
        }
        let address = address
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .map(ToString::to_string);
        Ok(Self {
            name: name.to_string(),
            phone: phone.to_string(),
            fulfillment,
            address,
        })
    }

    /// The address field for the order email: the trimmed address for
    /// delivery orders, otherwise "N/A".
    #[must_use]
    pub fn address_or_na(&self) -> &str {
        match (self.fulfillment, self.address.as_deref()) {
            (Fulfillment::Delivery, Some(address)) => address,
            _ => "N/A",
        }
    }
}

/// The itemized, human-readable order summary: one line per cart line.
///
/// ```text
/// - Essenti Board 1/2 in. x 3 ft. x 5 ft. Backer Board x2 (Est. $55.98)
/// ```
#[must_use]
pub fn order_summary(lines: &[CartLine]) -> String {
    lines
        .iter()
        .map(|line| format!("- {} x{} (Est. {})", line.name, line.quantity, line.line_total()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// The formatted order total, e.g. `Est. $55.98`.
#[must_use]
pub fn order_total(subtotal: Price) -> String {
    format!("Est. {subtotal}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ProductId;

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
    fn test_validate_requires_name_and_phone() {
        assert_eq!(
            OrderRequest::validate("  ", "5035551234", Fulfillment::Pickup, None),
            Err(OrderValidationError::MissingName)
        );
        assert_eq!(
            OrderRequest::validate("Jane", "\t", Fulfillment::Pickup, None),
            Err(OrderValidationError::MissingPhone)
        );
    }

    #[test]
    fn test_validate_trims_fields() {
        let order = OrderRequest::validate(
            " Jane ",
            " 5035551234 ",
            Fulfillment::Delivery,
            Some(" 1 Main St "),
        )
        .expect("valid");
        assert_eq!(order.name, "Jane");
        assert_eq!(order.phone, "5035551234");
        assert_eq!(order.address_or_na(), "1 Main St");
    }

    #[test]
    fn test_blank_delivery_address_becomes_na() {
        let order =
            OrderRequest::validate("Jane", "5035551234", Fulfillment::Delivery, Some("  "))
                .expect("valid");
        assert_eq!(order.address_or_na(), "N/A");
    }

    #[test]
    fn test_pickup_address_is_na() {
        let order = OrderRequest::validate(
            "Jane",
            "5035551234",
            Fulfillment::Pickup,
            Some("1 Main St"),
        )
        .expect("valid");
        assert_eq!(order.address_or_na(), "N/A");
    }

    #[test]
    fn test_fulfillment_labels() {
        assert_eq!(Fulfillment::Pickup.label(), "Pick up");
        assert_eq!(Fulfillment::Delivery.label(), "Delivery");
        assert_eq!(Fulfillment::from_form_value("delivery"), Fulfillment::Delivery);
        assert_eq!(Fulfillment::from_form_value("pickup"), Fulfillment::Pickup);
        assert_eq!(Fulfillment::from_form_value("???"), Fulfillment::Pickup);
    }

    #[test]
    fn test_order_summary_lines() {
        let lines = vec![
            line(
                "Essenti Board 1/2 in. x 3 ft. x 5 ft. Backer Board",
                2799,
                2,
                Some("1/2 inch | 3'x5'"),
            ),
            line("Performance Sealant", 1899, 1, None),
        ];
        assert_eq!(
            order_summary(&lines),
            "- Essenti Board 1/2 in. x 3 ft. x 5 ft. Backer Board x2 (Est. $55.98)\n\
             - Performance Sealant x1 (Est. $18.99)"
        );
    }

    #[test]
    fn test_order_total_format() {
        assert_eq!(order_total(Price::from_cents(5598)), "Est. $55.98");
    }
}
