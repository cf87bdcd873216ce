//! Integration tests for the Streamline Essentials storefront.
//!
//! The suite drives the full router in-process (`tower::ServiceExt::oneshot`)
//! with an in-memory cart store and a mock mailer, so it runs with no
//! services: no network, no filesystem state, no email account.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p streamline-essentials-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `storefront_cart` - Browsing, filtering, and cart operations
//! - `storefront_order` - Order submission flow
//! - `storefront_pages` - Content pages, carousel, and newsletter

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, StatusCode, header};
use axum::routing::get;
use tower::ServiceExt;

use streamline_essentials_storefront::config::{EmailJsConfig, StorefrontConfig};
use streamline_essentials_storefront::content::ContentStore;
use streamline_essentials_storefront::services::emailjs::{EmailError, Mailer, OrderEmail};
use streamline_essentials_storefront::state::AppState;
use streamline_essentials_storefront::store::MemoryCartStore;
use streamline_essentials_storefront::{data, routes};

/// Mailer that records every send and can be told to fail.
#[derive(Default)]
pub struct MockMailer {
    sent: Mutex<Vec<OrderEmail>>,
    fail: AtomicBool,
}

impl MockMailer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent sends fail with an API error.
    pub fn set_fail(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    /// The emails sent so far.
    #[must_use]
    pub fn sent(&self) -> Vec<OrderEmail> {
        self.sent
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl Mailer for MockMailer {
    async fn send_order(&self, email: &OrderEmail) -> Result<(), EmailError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(EmailError::Api {
                status: 503,
                message: "service unavailable".to_string(),
            });
        }
        self.sent
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push(email.clone());
        Ok(())
    }
}

/// A storefront instance wired for in-process testing.
pub struct TestContext {
    pub app: Router,
    pub store: Arc<MemoryCartStore>,
    pub mailer: Arc<MockMailer>,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    /// Build a storefront with an empty in-memory cart and a mock mailer.
    #[must_use]
    pub fn new() -> Self {
        let config = test_config();
        let catalog = data::catalog();
        let content_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("../storefront/content");
        let content = ContentStore::load(&content_dir).expect("content loads");

        let store = Arc::new(MemoryCartStore::new());
        let mailer = Arc::new(MockMailer::new());

        let state = AppState::new(
            config,
            catalog,
            content,
            Box::new(Arc::clone(&store)),
            Arc::clone(&mailer) as Arc<dyn Mailer>,
        );

        let app = Router::new()
            .route("/health", get(|| async { "ok" }))
            .merge(routes::routes())
            .with_state(state);

        Self { app, store, mailer }
    }

    /// Issue a GET request and return the response.
    pub async fn get(&self, uri: &str) -> Response<Body> {
        let request = Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("request builds");
        self.app.clone().oneshot(request).await.expect("route responds")
    }

    /// POST an urlencoded form and return the response.
    ///
    /// Every request carries an `x-forwarded-for` header so rate-limited
    /// routes can extract a client key.
    pub async fn post_form(&self, uri: &str, fields: &[(&str, &str)]) -> Response<Body> {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(
                header::CONTENT_TYPE,
                "application/x-www-form-urlencoded",
            )
            .header("x-forwarded-for", "203.0.113.7")
            .body(Body::from(encode_form(fields)))
            .expect("request builds");
        self.app.clone().oneshot(request).await.expect("route responds")
    }

    /// GET a page, asserting 200, and return its body.
    pub async fn get_ok(&self, uri: &str) -> String {
        let response = self.get(uri).await;
        assert_eq!(response.status(), StatusCode::OK, "GET {uri}");
        body_string(response).await
    }
}

/// Read a response body to a string.
pub async fn body_string(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body reads");
    String::from_utf8(bytes.to_vec()).expect("body is utf-8")
}

/// Urlencode form fields.
#[must_use]
pub fn encode_form(fields: &[(&str, &str)]) -> String {
    fields
        .iter()
        .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

fn test_config() -> StorefrontConfig {
    StorefrontConfig {
        host: "127.0.0.1".parse().expect("valid ip"),
        port: 0,
        base_url: "http://localhost:3000".to_string(),
        cart_path: "unused-in-tests.json".into(),
        content_dir: "unused-in-tests".into(),
        emailjs: EmailJsConfig {
            service_id: "service_test".to_string(),
            template_id: "template_test".to_string(),
            public_key: "pk_test".to_string(),
        },
        sentry_dsn: None,
        sentry_environment: None,
    }
}
