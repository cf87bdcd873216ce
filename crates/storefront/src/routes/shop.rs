//! Shop route handlers: the filterable catalog grid and product detail.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use streamline_essentials_core::catalog::{Category, Product};
use streamline_essentials_core::filter::CategorySelection;
use streamline_essentials_core::types::ProductId;

use crate::filters;
use crate::state::AppState;

/// Product display data for the shop grid.
#[derive(Clone)]
pub struct ProductCardView {
    pub id: i32,
    pub url: String,
    pub name: String,
    pub price: String,
    pub label: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub image: String,
}

impl From<&Product> for ProductCardView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.as_i32(),
            url: format!("/shop/{}", product.id),
            name: product.name.clone(),
            price: product.price.to_string(),
            label: product.label.clone(),
            category: product.category.map(|c| c.label().to_string()),
            description: product.description.clone(),
            image: product.primary_image().to_string(),
        }
    }
}

/// One entry in the category filter sidebar.
#[derive(Clone)]
pub struct CategoryFilterView {
    pub label: String,
    /// Link that toggles this category in the current selection.
    pub href: String,
    pub selected: bool,
}

/// Product detail display data.
#[derive(Clone)]
pub struct ProductDetailView {
    pub id: i32,
    pub name: String,
    pub price: String,
    pub label: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub images: Vec<String>,
    pub sku: String,
    pub brand: String,
    pub features: Vec<String>,
    pub specifications: Vec<(String, String)>,
    pub sizes: Vec<String>,
    pub has_sizes: bool,
}

impl From<&Product> for ProductDetailView {
    fn from(product: &Product) -> Self {
        let images = if product.images.is_empty() {
            vec![product.image.clone()]
        } else {
            product.images.clone()
        };
        Self {
            id: product.id.as_i32(),
            name: product.name.clone(),
            price: product.price.to_string(),
            label: product.label.clone(),
            category: product.category.map(|c| c.label().to_string()),
            description: product.description.clone(),
            images,
            sku: product.sku_or_derived(),
            brand: product
                .brand
                .clone()
                .unwrap_or_else(|| "Streamline Essentials".to_string()),
            features: product.features.clone(),
            specifications: product.specifications.clone(),
            sizes: product.sizes.clone(),
            has_sizes: product.has_sizes(),
        }
    }
}

/// Shop listing page template.
#[derive(Template, WebTemplate)]
#[template(path = "shop/index.html")]
pub struct ShopIndexTemplate {
    pub products: Vec<ProductCardView>,
    pub category_filters: Vec<CategoryFilterView>,
    pub selected_count: usize,
    pub showing: String,
}

/// Product detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "shop/show.html")]
pub struct ShopShowTemplate {
    pub product: ProductDetailView,
    pub related: Vec<ProductCardView>,
}

/// Product not-found page template.
#[derive(Template, WebTemplate)]
#[template(path = "shop/not_found.html")]
pub struct ProductNotFoundTemplate {}

/// Build the filter link for toggling `category` in `selection`.
fn toggle_href(selection: &CategorySelection, category: Category) -> String {
    let mut toggled = selection.clone();
    toggled.toggle(category);
    if toggled.is_empty() {
        return "/shop".to_string();
    }
    let params: Vec<String> = toggled
        .selected()
        .iter()
        .map(|c| format!("category={}", urlencoding::encode(c.label())))
        .collect();
    format!("/shop?{}", params.join("&"))
}

/// Display the shop listing, filtered by the `category` query params.
///
/// The selection is rebuilt from the query string on every request;
/// unknown category names are ignored.
#[tracing::instrument(skip(state, params))]
pub async fn index(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> impl IntoResponse {
    let labels = params
        .iter()
        .filter(|(key, _)| key == "category")
        .map(|(_, value)| value.as_str());
    let selection = CategorySelection::from_labels(labels);

    let filtered = selection.filter(state.catalog().products());
    let showing = match filtered.len() {
        0 => "No products in selected categories.".to_string(),
        1 => "Showing 1 product.".to_string(),
        n => format!("Showing {n} products."),
    };

    let category_filters = Category::ALL
        .into_iter()
        .map(|category| CategoryFilterView {
            label: category.label().to_string(),
            href: toggle_href(&selection, category),
            selected: selection.is_selected(category),
        })
        .collect();

    ShopIndexTemplate {
        products: filtered.into_iter().map(ProductCardView::from).collect(),
        category_filters,
        selected_count: selection.len(),
        showing,
    }
}

/// Display a product detail page, or a not-found state for unknown ids.
#[tracing::instrument(skip(state))]
pub async fn show(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let product = id
        .parse::<i32>()
        .ok()
        .and_then(|id| state.catalog().get(ProductId::new(id)));

    let Some(product) = product else {
        return (StatusCode::NOT_FOUND, ProductNotFoundTemplate {}).into_response();
    };

    let related = state
        .catalog()
        .products()
        .iter()
        .filter(|p| p.id != product.id)
        .map(ProductCardView::from)
        .collect();

    ShopShowTemplate {
        product: ProductDetailView::from(product),
        related,
    }
    .into_response()
}
