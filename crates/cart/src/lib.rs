//! Marketstall Cart - in-memory cart store with durable persistence.
//!
//! The [`CartStore`] owns the authoritative in-memory [`Cart`] and
//! mediates all reads and mutations, mirroring every committed state
//! to a [`KeyValueBackend`] so the cart survives process restarts.
//!
//! # Usage
//!
//! ```
//! use std::sync::Arc;
//!
//! use marketstall_cart::{CartConfig, CartStore, MemoryBackend};
//! use marketstall_core::CartLineInput;
//! use rust_decimal::Decimal;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> marketstall_cart::Result<()> {
//! let backend = Arc::new(MemoryBackend::new());
//! let store = CartStore::open(backend, CartConfig::default()).await?;
//!
//! let shirt = CartLineInput::new("p1", "Shirt", "https://img/shirt", Decimal::new(1000, 2));
//! store.add_to_cart(shirt).await?;
//! store.increment(&"p1".into()).await?;
//!
//! assert_eq!(store.products().total_quantity(), 2);
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`backend`] - the consumed key-value capability and the bundled
//!   in-memory implementation
//! - [`config`] - store configuration (storage namespace)
//! - [`error`] - the error taxonomy
//! - [`store`] - the cart store itself

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod backend;
pub mod config;
pub mod error;
pub mod store;

pub use backend::{BackendError, KeyValueBackend, MemoryBackend};
pub use config::CartConfig;
pub use error::{CartError, Result};
pub use store::CartStore;

#[doc(no_inline)]
pub use marketstall_core::{Cart, CartLineInput, LineItem, ProductId};
