//! Cart persistence.
//!
//! The cart survives restarts as a single JSON document: an array of line
//! objects under a fixed path. Loading is deliberately forgiving - a
//! missing file, unparsable JSON, a non-array document, or entries that
//! fail shape validation all rehydrate to an empty cart rather than an
//! error. Every mutation writes the full line list back synchronously.
//!
//! [`CartStore`] is the adapter seam: [`JsonFileCartStore`] is the
//! production implementation, [`MemoryCartStore`] backs tests.

use std::path::PathBuf;
use std::sync::Mutex;

use thiserror::Error;

use streamline_essentials_core::cart::{Cart, CartLine};
use streamline_essentials_core::catalog::Product;
use streamline_essentials_core::types::{Price, ProductId};

/// Errors writing the cart document. Load never fails.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Persistence adapter for the cart line list.
pub trait CartStore: Send + Sync {
    /// Load the persisted lines. Corrupt or malformed content yields an
    /// empty list, never an error.
    fn load(&self) -> Vec<CartLine>;

    /// Persist the full line list.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the document cannot be written.
    fn save(&self, lines: &[CartLine]) -> Result<(), StoreError>;
}

/// Decode a persisted cart document, dropping anything malformed.
///
/// Entries must deserialize to a line shape with a positive quantity;
/// everything else (including the whole document when it is not a JSON
/// array) is discarded.
fn decode_lines(raw: &str) -> Vec<CartLine> {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(raw) else {
        return Vec::new();
    };
    let Some(entries) = value.as_array() else {
        return Vec::new();
    };
    entries
        .iter()
        .filter_map(|entry| serde_json::from_value::<CartLine>(entry.clone()).ok())
        .filter(|line| line.quantity >= 1)
        .collect()
}

impl<T: CartStore + ?Sized> CartStore for std::sync::Arc<T> {
    fn load(&self) -> Vec<CartLine> {
        (**self).load()
    }

    fn save(&self, lines: &[CartLine]) -> Result<(), StoreError> {
        (**self).save(lines)
    }
}

/// File-backed cart store writing one JSON array document.
#[derive(Debug, Clone)]
pub struct JsonFileCartStore {
    path: PathBuf,
}

impl JsonFileCartStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CartStore for JsonFileCartStore {
    fn load(&self) -> Vec<CartLine> {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) => decode_lines(&raw),
            Err(e) => {
                if e.kind() != std::io::ErrorKind::NotFound {
                    tracing::warn!(path = %self.path.display(), error = %e, "Failed to read cart document");
                }
                Vec::new()
            }
        }
    }

    fn save(&self, lines: &[CartLine]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let document = serde_json::to_string(lines)?;
        std::fs::write(&self.path, document)?;
        Ok(())
    }
}

/// In-memory cart store for tests.
#[derive(Debug, Default)]
pub struct MemoryCartStore {
    lines: Mutex<Vec<CartLine>>,
}

impl MemoryCartStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with pre-existing lines.
    #[must_use]
    pub fn with_lines(lines: Vec<CartLine>) -> Self {
        Self {
            lines: Mutex::new(lines),
        }
    }
}

impl CartStore for MemoryCartStore {
    fn load(&self) -> Vec<CartLine> {
        self.lines
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }

    fn save(&self, lines: &[CartLine]) -> Result<(), StoreError> {
        *self
            .lines
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner) = lines.to_vec();
        Ok(())
    }
}

/// A point-in-time view of the cart for rendering.
#[derive(Debug, Clone)]
pub struct CartSnapshot {
    pub lines: Vec<CartLine>,
    pub total_count: u32,
    pub subtotal: Price,
}

impl CartSnapshot {
    fn of(cart: &Cart) -> Self {
        Self {
            lines: cart.lines().to_vec(),
            total_count: cart.total_count(),
            subtotal: cart.subtotal(),
        }
    }
}

/// The single process-wide cart, guarded by a mutex so each operation is
/// atomic, with write-through persistence on every mutation.
///
/// Persistence failures are logged and otherwise ignored - losing a write
/// degrades to a stale cart after restart, never to a failed request.
pub struct SharedCart {
    cart: Mutex<Cart>,
    store: Box<dyn CartStore>,
}

impl SharedCart {
    /// Rehydrate the cart from the given store.
    #[must_use]
    pub fn load(store: Box<dyn CartStore>) -> Self {
        let cart = Cart::from_lines(store.load());
        Self {
            cart: Mutex::new(cart),
            store,
        }
    }

    /// Current lines, count, and subtotal.
    #[must_use]
    pub fn snapshot(&self) -> CartSnapshot {
        CartSnapshot::of(&self.lock())
    }

    /// Add `quantity` units of `product` and persist.
    pub fn add_item(
        &self,
        product: &Product,
        quantity: u32,
        size: Option<String>,
    ) -> CartSnapshot {
        self.mutate(|cart| cart.add_item(product, quantity, size))
    }

    /// Remove the matching line and persist.
    pub fn remove_item(&self, product_id: ProductId, size: Option<&str>) -> CartSnapshot {
        self.mutate(|cart| cart.remove_item(product_id, size))
    }

    /// Update the matching line's quantity (below 1 removes) and persist.
    pub fn update_quantity(
        &self,
        product_id: ProductId,
        quantity: u32,
        size: Option<&str>,
    ) -> CartSnapshot {
        self.mutate(|cart| cart.update_quantity(product_id, quantity, size))
    }

    /// Empty the cart and persist.
    pub fn clear(&self) -> CartSnapshot {
        self.mutate(Cart::clear)
    }

    fn mutate(&self, op: impl FnOnce(&mut Cart)) -> CartSnapshot {
        let mut cart = self.lock();
        op(&mut cart);
        if let Err(e) = self.store.save(cart.lines()) {
            tracing::warn!(error = %e, "Failed to persist cart");
        }
        CartSnapshot::of(&cart)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Cart> {
        self.cart
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}
