//! Business logic services for storefront.
//!
//! # Services
//!
//! - `emailjs` - Delivery of order requests through the EmailJS REST API
//! - `order` - Order submission flow (validation gate, in-flight guard,
//!   cart clearing on confirmed send)

pub mod emailjs;
pub mod order;

pub use emailjs::{EmailError, EmailJsClient, Mailer, OrderEmail};
pub use order::{OrderError, OrderService, SubmissionState};
