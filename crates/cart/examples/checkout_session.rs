//! Walk a cart through a short session and print what gets persisted.
//!
//! Run with `RUST_LOG=debug cargo run --example checkout_session` to
//! see the store's commit/persist narration.

use std::sync::Arc;

use marketstall_cart::{CartConfig, CartStore, MemoryBackend, Result};
use marketstall_core::CartLineInput;
use rust_decimal::Decimal;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let backend = Arc::new(MemoryBackend::new());
    let store = CartStore::open(backend, CartConfig::default()).await?;

    store
        .add_to_cart(CartLineInput::new(
            "shirt-01",
            "Linen Shirt",
            "https://cdn.marketstall.dev/shirt-01.jpg",
            Decimal::new(3450, 2),
        ))
        .await?;
    store
        .add_to_cart(CartLineInput::new(
            "mug-07",
            "Stoneware Mug",
            "https://cdn.marketstall.dev/mug-07.jpg",
            Decimal::new(1200, 2),
        ))
        .await?;
    store.increment(&"shirt-01".into()).await?;
    store.decrement(&"mug-07".into()).await?;

    for item in &store.products() {
        info!(
            id = %item.id,
            title = %item.title,
            quantity = item.quantity,
            price = %item.price,
            "line item"
        );
    }
    info!(total = store.products().total_quantity(), "session done");

    Ok(())
}
