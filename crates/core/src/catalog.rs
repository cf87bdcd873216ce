//! The read-only product catalog.
//!
//! Products are defined statically at startup and never change for the
//! life of the process. Lookup failures surface as `None` so pages can
//! render a not-found state instead of crashing.

use crate::types::{Price, ProductId};

/// Fixed product categories, in the order they appear in filter UIs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    EssentiBoard,
    Underlayment,
    ToolsMisc,
    ShowerKit,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Self; 4] = [
        Self::EssentiBoard,
        Self::Underlayment,
        Self::ToolsMisc,
        Self::ShowerKit,
    ];

    /// The human-readable category name used in filters and breadcrumbs.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::EssentiBoard => "Essenti Board",
            Self::Underlayment => "Underlayment",
            Self::ToolsMisc => "Tools/Miscellaneous",
            Self::ShowerKit => "Shower Kit",
        }
    }

    /// Look up a category by its display label. Unknown labels return `None`.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A single catalog entry.
///
/// `image` is the legacy single-image field; `images` is the gallery.
/// Specifications are ordered key/value pairs so the detail page renders
/// them in authoring order.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    /// Merchandising badge ("Best Seller", "New Arrival").
    pub label: Option<String>,
    pub image: String,
    pub images: Vec<String>,
    pub description: Option<String>,
    pub category: Option<Category>,
    pub sku: Option<String>,
    pub brand: Option<String>,
    pub features: Vec<String>,
    pub specifications: Vec<(String, String)>,
    /// Selectable size options (e.g. for the Shower Curb). When non-empty,
    /// the detail page shows a size selector.
    pub sizes: Vec<String>,
}

impl Product {
    /// The primary image: first of the gallery, falling back to the
    /// legacy single-image field.
    #[must_use]
    pub fn primary_image(&self) -> &str {
        self.images.first().map_or(self.image.as_str(), String::as_str)
    }

    /// The SKU, or a derived `SE-XXX` code when none was authored.
    #[must_use]
    pub fn sku_or_derived(&self) -> String {
        self.sku
            .clone()
            .unwrap_or_else(|| format!("SE-{:03}", self.id.as_i32()))
    }

    /// Whether this product requires a size choice before it can be
    /// added from the detail page.
    #[must_use]
    pub fn has_sizes(&self) -> bool {
        !self.sizes.is_empty()
    }
}

/// An ordered, immutable collection of products.
///
/// Invariant: product ids are unique across the catalog.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Create a catalog from an ordered product list.
    #[must_use]
    pub fn new(products: Vec<Product>) -> Self {
        debug_assert!(
            {
                let mut seen = std::collections::HashSet::new();
                products.iter().all(|p| seen.insert(p.id))
            },
            "catalog product ids must be unique"
        );
        Self { products }
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// All products in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i32) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            price: Price::from_cents(1999),
            label: None,
            image: format!("/product-{id}.png"),
            images: Vec::new(),
            description: None,
            category: Some(Category::ShowerKit),
            sku: None,
            brand: None,
            features: Vec::new(),
            specifications: Vec::new(),
            sizes: Vec::new(),
        }
    }

    #[test]
    fn test_get_by_id() {
        let catalog = Catalog::new(vec![product(1), product(2)]);
        assert_eq!(catalog.get(ProductId::new(2)).map(|p| p.id.as_i32()), Some(2));
        assert!(catalog.get(ProductId::new(99)).is_none());
    }

    #[test]
    fn test_primary_image_prefers_gallery() {
        let mut p = product(1);
        p.images = vec!["/a.png".to_string(), "/b.png".to_string()];
        assert_eq!(p.primary_image(), "/a.png");
    }

    #[test]
    fn test_primary_image_falls_back_to_legacy_field() {
        let p = product(3);
        assert_eq!(p.primary_image(), "/product-3.png");
    }

    #[test]
    fn test_sku_or_derived() {
        let mut p = product(7);
        assert_eq!(p.sku_or_derived(), "SE-007");
        p.sku = Some("00212".to_string());
        assert_eq!(p.sku_or_derived(), "00212");
    }

    #[test]
    fn test_category_labels_roundtrip() {
        for category in Category::ALL {
            assert_eq!(Category::from_label(category.label()), Some(category));
        }
        assert_eq!(Category::from_label("Plumbing"), None);
    }
}
