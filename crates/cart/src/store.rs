//! The cart store: authoritative in-memory state plus persistence.

use std::sync::{Arc, PoisonError, RwLock};

use marketstall_core::{Cart, CartLineInput, ProductId};
use tokio::sync::Mutex;
use tracing::{debug, instrument};

use crate::backend::KeyValueBackend;
use crate::config::CartConfig;
use crate::error::{CartError, Result};

/// In-memory cart store backed by durable key-value persistence.
///
/// The store owns the authoritative [`Cart`] and mediates all reads
/// and mutations. Every mutation computes the next cart state from the
/// current one, commits it in memory, then writes the full serialized
/// cart to the backend under the configured key. Mutations are
/// serialized through an internal lock, so two overlapping calls can
/// never compute from the same stale snapshot and lose an update.
///
/// Snapshot reads take a separate short-lived lock on the committed
/// state and never wait on backend I/O; a read issued while a persist
/// is in flight sees the already-committed state.
///
/// If a persist fails, the in-memory commit stands: memory and the
/// durable copy diverge until the next successful mutation writes the
/// current state again. Callers may retry the failed operation (or
/// issue any other mutation) to force that write.
pub struct CartStore {
    backend: Arc<dyn KeyValueBackend>,
    storage_key: String,
    /// Committed snapshot. Replaced wholesale on commit, never mutated
    /// in place.
    products: RwLock<Cart>,
    /// Serializes each mutation's read-compute-commit-persist
    /// sequence. Held across the backend write.
    write_lock: Mutex<()>,
}

impl CartStore {
    /// Open the store, hydrating the cart from the backend.
    ///
    /// Hydration happens exactly once, here: if the backend holds a
    /// payload under the configured key it becomes the initial cart,
    /// otherwise the cart starts empty. Because hydration completes
    /// before the store exists, no accessor can observe an
    /// uninitialized store.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Backend`] if the hydration read fails and
    /// [`CartError::Decode`] if a stored payload cannot be parsed.
    /// A malformed payload signals corrupted data and is never masked
    /// as an empty cart.
    #[instrument(skip(backend, config), fields(storage_key = %config.storage_key))]
    pub async fn open(backend: Arc<dyn KeyValueBackend>, config: CartConfig) -> Result<Self> {
        let cart = match backend.get(&config.storage_key).await? {
            Some(payload) => {
                let cart: Cart = serde_json::from_str(&payload).map_err(CartError::Decode)?;
                debug!(items = cart.len(), "hydrated cart from backend");
                cart
            }
            None => {
                debug!("no persisted cart, starting empty");
                Cart::new()
            }
        };

        Ok(Self {
            backend,
            storage_key: config.storage_key,
            products: RwLock::new(cart),
            write_lock: Mutex::new(()),
        })
    }

    /// Snapshot of the current cart.
    ///
    /// Infallible and side-effect free. Reflects the latest committed
    /// in-memory state, which may briefly lead an in-flight
    /// persistence write.
    #[must_use]
    pub fn products(&self) -> Cart {
        self.products
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Add a product to the cart.
    ///
    /// If the product is already present this delegates to
    /// [`increment`](Self::increment) and the candidate's display
    /// fields are discarded in favor of the stored entry's. Otherwise
    /// the product enters the cart with quantity 1.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Backend`] (or, in principle,
    /// [`CartError::Encode`]) if the persistence write fails. The
    /// in-memory commit has already happened.
    #[instrument(skip(self, candidate), fields(id = %candidate.id))]
    pub async fn add_to_cart(&self, candidate: CartLineInput) -> Result<()> {
        self.mutate(move |cart| cart.with_added(candidate)).await
    }

    /// Raise a product's quantity by one.
    ///
    /// An absent product is a no-op - no entry is fabricated - but the
    /// unchanged cart is still committed and persisted (an idempotent
    /// no-op write).
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Backend`] if the persistence write fails.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn increment(&self, id: &ProductId) -> Result<()> {
        self.mutate(|cart| cart.with_incremented(id)).await
    }

    /// Lower a product's quantity by one.
    ///
    /// A quantity that would reach zero removes the line item
    /// entirely; quantity 0 is never stored. An absent product is a
    /// no-op write, as with [`increment`](Self::increment).
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Backend`] if the persistence write fails.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn decrement(&self, id: &ProductId) -> Result<()> {
        self.mutate(|cart| cart.with_decremented(id)).await
    }

    /// Run one mutation: read current, compute next, commit, persist.
    ///
    /// The write lock is held for the whole sequence so mutations
    /// serialize; once the commit happens the persist is always
    /// attempted.
    async fn mutate(&self, next: impl FnOnce(&Cart) -> Cart) -> Result<()> {
        let _guard = self.write_lock.lock().await;

        let next_cart = {
            let current = self.products.read().unwrap_or_else(PoisonError::into_inner);
            next(&current)
        };

        {
            let mut committed = self
                .products
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            *committed = next_cart.clone();
        }
        debug!(items = next_cart.len(), "committed cart state");

        self.persist(&next_cart).await
    }

    /// Write one full serialized cart under the storage key.
    async fn persist(&self, cart: &Cart) -> Result<()> {
        let payload = serde_json::to_string(cart).map_err(CartError::Encode)?;
        self.backend.set(&self.storage_key, payload).await?;
        debug!(items = cart.len(), "persisted cart");
        Ok(())
    }
}

impl std::fmt::Debug for CartStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartStore")
            .field("storage_key", &self.storage_key)
            .field("items", &self.products().len())
            .finish_non_exhaustive()
    }
}
