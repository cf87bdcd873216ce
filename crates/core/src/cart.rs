//! The cart state container.
//!
//! A cart is an ordered list of line items. Line identity is the pair
//! `(product id, size)` where "no size" is its own stable identity:
//! adding the same product+size again increments the existing line,
//! while the same product in a different size gets its own line.
//!
//! All transitions here are pure; persistence is an adapter concern in
//! the storefront crate.

use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::types::{Price, ProductId};

/// One entry in the cart.
///
/// Name, price, and image are denormalized snapshots taken at add time,
/// so the cart renders without a catalog lookup. The serde layout is the
/// persisted wire format:
/// `{"productId": 1, "quantity": 2, "name": "...", "price": 27.99,
/// "image": "...", "size": "..."}` with `size` omitted when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub product_id: ProductId,
    pub quantity: u32,
    pub name: String,
    pub price: Price,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
}

impl CartLine {
    /// The extended (price x quantity) estimate for this line.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.price.times(self.quantity)
    }

    fn matches(&self, product_id: ProductId, size: Option<&str>) -> bool {
        self.product_id == product_id && self.size.as_deref() == size
    }
}

/// The cart state container.
///
/// Lines keep insertion order. Quantities are always >= 1: an update
/// below 1 removes the line instead of retaining it at zero.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Rebuild a cart from previously persisted lines.
    ///
    /// Callers are expected to have validated the lines (the storage
    /// adapter drops malformed entries before handing them over).
    #[must_use]
    pub fn from_lines(lines: Vec<CartLine>) -> Self {
        Self { lines }
    }

    /// The lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of all line quantities.
    #[must_use]
    pub fn total_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Sum of price x quantity across all lines.
    #[must_use]
    pub fn subtotal(&self) -> Price {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Add `quantity` units of `product` (in `size`, if any) to the cart.
    ///
    /// Merges into an existing line when the `(product id, size)` identity
    /// matches; otherwise appends a new line with a snapshot of the
    /// product's current name, price, and primary image. Adding zero
    /// units is a no-op.
    pub fn add_item(&mut self, product: &Product, quantity: u32, size: Option<String>) {
        if quantity == 0 {
            return;
        }
        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|l| l.matches(product.id, size.as_deref()))
        {
            line.quantity += quantity;
            return;
        }
        self.lines.push(CartLine {
            product_id: product.id,
            quantity,
            name: product.name.clone(),
            price: product.price,
            image: product.primary_image().to_string(),
            size,
        });
    }

    /// Remove the line matching `(product_id, size)`, if present.
    pub fn remove_item(&mut self, product_id: ProductId, size: Option<&str>) {
        self.lines.retain(|l| !l.matches(product_id, size));
    }

    /// Set the quantity of the matching line. A quantity below 1 removes
    /// the line. No upper bound is enforced.
    pub fn update_quantity(&mut self, product_id: ProductId, quantity: u32, size: Option<&str>) {
        if quantity < 1 {
            self.remove_item(product_id, size);
            return;
        }
        if let Some(line) = self.lines.iter_mut().find(|l| l.matches(product_id, size)) {
            line.quantity = quantity;
        }
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;

    fn product(id: i32, cents: i64) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            price: Price::from_cents(cents),
            label: None,
            image: format!("/product-{id}.png"),
            images: vec![format!("/gallery-{id}.png")],
            description: None,
            category: Some(Category::EssentiBoard),
            sku: None,
            brand: None,
            features: Vec::new(),
            specifications: Vec::new(),
            sizes: Vec::new(),
        }
    }

    #[test]
    fn test_repeated_adds_merge_into_one_line() {
        let mut cart = Cart::default();
        let p = product(1, 2799);
        cart.add_item(&p, 1, None);
        cart.add_item(&p, 2, None);
        cart.add_item(&p, 1, None);

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 4);
    }

    #[test]
    fn test_sizes_are_distinct_identities() {
        let mut cart = Cart::default();
        let p = product(1, 2799);
        cart.add_item(&p, 1, Some("A".to_string()));
        cart.add_item(&p, 1, Some("B".to_string()));
        cart.add_item(&p, 1, None);

        assert_eq!(cart.lines().len(), 3);

        cart.add_item(&p, 2, Some("A".to_string()));
        assert_eq!(cart.lines().len(), 3);
        assert_eq!(cart.lines()[0].quantity, 3);
    }

    #[test]
    fn test_snapshot_taken_at_add_time() {
        let mut cart = Cart::default();
        let p = product(2, 6999);
        cart.add_item(&p, 1, None);

        let line = &cart.lines()[0];
        assert_eq!(line.name, "Product 2");
        assert_eq!(line.price, Price::from_cents(6999));
        assert_eq!(line.image, "/gallery-2.png");
    }

    #[test]
    fn test_add_zero_is_noop() {
        let mut cart = Cart::default();
        cart.add_item(&product(1, 100), 0, None);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_quantity_sets_value() {
        let mut cart = Cart::default();
        let p = product(1, 2799);
        cart.add_item(&p, 1, None);
        cart.update_quantity(p.id, 7, None);
        assert_eq!(cart.lines()[0].quantity, 7);
    }

    #[test]
    fn test_update_quantity_below_one_removes() {
        let mut cart = Cart::default();
        let p = product(1, 2799);
        cart.add_item(&p, 3, None);
        cart.update_quantity(p.id, 0, None);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_quantity_only_touches_matching_size() {
        let mut cart = Cart::default();
        let p = product(1, 2799);
        cart.add_item(&p, 1, Some("A".to_string()));
        cart.add_item(&p, 1, None);
        cart.update_quantity(p.id, 5, Some("A"));

        assert_eq!(cart.lines()[0].quantity, 5);
        assert_eq!(cart.lines()[1].quantity, 1);
    }

    #[test]
    fn test_remove_item_by_identity() {
        let mut cart = Cart::default();
        let p = product(1, 2799);
        cart.add_item(&p, 1, Some("A".to_string()));
        cart.add_item(&p, 1, None);

        cart.remove_item(p.id, None);
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].size.as_deref(), Some("A"));
    }

    #[test]
    fn test_totals() {
        let mut cart = Cart::default();
        cart.add_item(&product(1, 2799), 2, None);
        cart.add_item(&product(2, 1899), 3, None);

        assert_eq!(cart.total_count(), 5);
        assert_eq!(cart.subtotal(), Price::from_cents(2 * 2799 + 3 * 1899));
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::default();
        cart.add_item(&product(1, 2799), 2, None);
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total_count(), 0);
        assert_eq!(cart.subtotal(), Price::ZERO);
    }

    #[test]
    fn test_line_serde_wire_format() {
        let line = CartLine {
            product_id: ProductId::new(1),
            quantity: 2,
            name: "Backer Board".to_string(),
            price: Price::from_cents(2799),
            image: "/b.png".to_string(),
            size: None,
        };
        let json = serde_json::to_value(&line).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({
                "productId": 1,
                "quantity": 2,
                "name": "Backer Board",
                "price": 27.99,
                "image": "/b.png",
            })
        );

        let sized = CartLine {
            size: Some("3'x5'".to_string()),
            ..line
        };
        let json = serde_json::to_value(&sized).expect("serialize");
        assert_eq!(json.get("size"), Some(&serde_json::json!("3'x5'")));
    }
}
