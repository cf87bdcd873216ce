//! Application state shared across handlers.

use std::sync::Arc;

use streamline_essentials_core::catalog::Catalog;

use crate::config::StorefrontConfig;
use crate::content::ContentStore;
use crate::services::emailjs::Mailer;
use crate::services::order::OrderService;
use crate::store::{CartStore, SharedCart};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// shared resources: configuration, the catalog, loaded content, the
/// process-wide cart, and the order submission service.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: Catalog,
    content: ContentStore,
    cart: SharedCart,
    orders: OrderService,
}

impl AppState {
    /// Create a new application state.
    ///
    /// The cart is rehydrated from `store` immediately; corrupt or
    /// missing persisted state yields an empty cart.
    #[must_use]
    pub fn new(
        config: StorefrontConfig,
        catalog: Catalog,
        content: ContentStore,
        store: Box<dyn CartStore>,
        mailer: Arc<dyn Mailer>,
    ) -> Self {
        let cart = SharedCart::load(store);
        let orders = OrderService::new(mailer);

        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                content,
                cart,
                orders,
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the product catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// Get a reference to the loaded content pages.
    #[must_use]
    pub fn content(&self) -> &ContentStore {
        &self.inner.content
    }

    /// Get a reference to the shared cart.
    #[must_use]
    pub fn cart(&self) -> &SharedCart {
        &self.inner.cart
    }

    /// Get a reference to the order submission service.
    #[must_use]
    pub fn orders(&self) -> &OrderService {
        &self.inner.orders
    }
}
