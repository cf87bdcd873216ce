//! HTTP middleware stack for storefront.
//!
//! # Middleware Order (bottom to top in Router)
//!
//! 1. Sentry layer (capture errors)
//! 2. Request ID (add unique ID to each request)
//! 3. Security headers (CSP, frame options, etc.)
//! 4. Rate limiting (governor, order submission only)

pub mod rate_limit;
pub mod request_id;
pub mod security_headers;

pub use rate_limit::order_rate_limiter;
pub use request_id::request_id_middleware;
pub use security_headers::security_headers_middleware;
