//! Cart store configuration.

/// Storage key used when none is configured.
///
/// Namespaced so the cart payload cannot collide with anything else
/// the application keeps in the same backend.
pub const DEFAULT_STORAGE_KEY: &str = "@marketstall:cart";

/// Configuration for a [`CartStore`](crate::CartStore).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartConfig {
    /// Key the serialized cart is stored under. Two stores pointed at
    /// the same backend must use distinct keys.
    pub storage_key: String,
}

impl CartConfig {
    /// Configuration with a custom storage key.
    #[must_use]
    pub fn new(storage_key: impl Into<String>) -> Self {
        Self {
            storage_key: storage_key.into(),
        }
    }
}

impl Default for CartConfig {
    fn default() -> Self {
        Self::new(DEFAULT_STORAGE_KEY)
    }
}
