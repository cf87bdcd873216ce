//! Streamline Essentials Core - domain types and state logic.
//!
//! This crate holds everything the storefront needs that does not touch
//! the outside world:
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and prices
//! - [`catalog`] - The read-only product catalog and category enumeration
//! - [`cart`] - The cart state container (line items, merge-by-identity,
//!   derived totals)
//! - [`filter`] - Multi-select category filtering for the shop view
//! - [`carousel`] - Windowed slicing for the latest-products carousel
//! - [`order`] - Order-request validation and summary formatting
//!
//! # Architecture
//!
//! The crate contains only types and pure state transitions - no I/O, no
//! HTTP, no filesystem access. Persistence and email delivery live behind
//! adapters in the storefront crate, which keeps everything here testable
//! without mocks.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod carousel;
pub mod cart;
pub mod catalog;
pub mod filter;
pub mod order;
pub mod types;

pub use carousel::CarouselWindow;
pub use cart::{Cart, CartLine};
pub use catalog::{Catalog, Category, Product};
pub use filter::CategorySelection;
pub use order::{Fulfillment, OrderRequest, OrderValidationError};
pub use types::*;
