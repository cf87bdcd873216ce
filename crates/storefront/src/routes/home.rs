//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    response::IntoResponse,
};
use serde::Deserialize;
use tracing::instrument;

use streamline_essentials_core::carousel::CarouselWindow;
use streamline_essentials_core::catalog::{Catalog, Category, Product};

use crate::filters;
use crate::state::AppState;

// =============================================================================
// Hero Configuration (Static content)
// =============================================================================

/// Hero banner content.
#[derive(Clone)]
pub struct HeroView {
    pub eyebrow: String,
    pub title: String,
    pub subtitle: String,
    pub button_text: String,
    pub button_url: String,
}

impl Default for HeroView {
    fn default() -> Self {
        Self {
            eyebrow: "Professional-grade building materials".to_string(),
            title: "Everything You Need for a Flawless Tile Installation".to_string(),
            subtitle: "Backer boards, waterproofing, and shower systems trusted by \
                       contractors and DIYers across Oregon. Order online, we call \
                       to confirm and arrange pickup or delivery."
                .to_string(),
            button_text: "Shop All Products".to_string(),
            button_url: "/shop".to_string(),
        }
    }
}

// =============================================================================
// Category Grid
// =============================================================================

/// One card in the shop-by-category grid.
#[derive(Clone)]
pub struct CategoryCardView {
    pub label: String,
    pub href: String,
}

fn category_cards() -> Vec<CategoryCardView> {
    Category::ALL
        .into_iter()
        .map(|category| CategoryCardView {
            label: category.label().to_string(),
            href: format!("/shop?category={}", urlencoding::encode(category.label())),
        })
        .collect()
}

// =============================================================================
// Testimonials
// =============================================================================

/// A customer testimonial for the homepage.
#[derive(Clone)]
pub struct TestimonialView {
    pub quote: String,
    pub author: String,
}

/// Static testimonials for the homepage.
fn get_testimonials() -> Vec<TestimonialView> {
    vec![
        TestimonialView {
            quote: "Streamline Essentials transformed my kitchen into a culinary haven! \
                    From drab to fab, their team blended style and functionality seamlessly."
                .to_string(),
            author: "Sophie L.".to_string(),
        },
        TestimonialView {
            quote: "Streamline Essentials worked magic on my bathroom! They waved goodbye \
                    to outdated tiles and welcomed in a spa-like oasis."
                .to_string(),
            author: "Kevin S.".to_string(),
        },
    ]
}

// =============================================================================
// Latest Products Carousel
// =============================================================================

/// Product display data for carousel cards.
#[derive(Clone)]
pub struct ProductCardView {
    pub id: i32,
    pub url: String,
    pub name: String,
    pub price: String,
    pub label: Option<String>,
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
            image: product.primary_image().to_string(),
        }
    }
}

/// The carousel window plus the prev/next start indices its controls
/// fetch.
#[derive(Clone)]
pub struct CarouselView {
    pub cards: Vec<ProductCardView>,
    pub prev_start: usize,
    pub next_start: usize,
}

/// Build the carousel view for a given window start.
fn build_carousel(catalog: &Catalog, start: usize) -> CarouselView {
    let window = CarouselWindow::new(start);
    let products = catalog.products();
    CarouselView {
        cards: window
            .window(products)
            .into_iter()
            .map(ProductCardView::from)
            .collect(),
        prev_start: window.prev(products.len()),
        next_start: window.next(products.len()),
    }
}

// =============================================================================
// Templates & Handlers
// =============================================================================

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub hero: HeroView,
    pub categories: Vec<CategoryCardView>,
    pub carousel: CarouselView,
    pub testimonials: Vec<TestimonialView>,
}

/// Carousel fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/carousel.html")]
pub struct CarouselTemplate {
    pub carousel: CarouselView,
}

/// Carousel window query parameters.
#[derive(Debug, Deserialize)]
pub struct CarouselQuery {
    pub start: Option<usize>,
}

/// Display the home page.
#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>) -> impl IntoResponse {
    HomeTemplate {
        hero: HeroView::default(),
        categories: category_cards(),
        carousel: build_carousel(state.catalog(), 0),
        testimonials: get_testimonials(),
    }
}

/// Display a carousel window (HTMX).
#[instrument(skip(state))]
pub async fn carousel(
    State(state): State<AppState>,
    Query(query): Query<CarouselQuery>,
) -> impl IntoResponse {
    CarouselTemplate {
        carousel: build_carousel(state.catalog(), query.start.unwrap_or(0)),
    }
}
