//! The durable key-value capability the cart store persists through.
//!
//! The concrete storage medium (device storage, a file, a browser
//! store behind FFI, ...) is an external collaborator; the store only
//! sees this trait. Implementations hold string payloads under string
//! keys and replace whole values - the store never performs partial
//! writes.

use std::collections::HashMap;

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::Mutex;

/// Error produced by a backend's get/set.
///
/// Opaque to the store: whatever the medium reports (device failure,
/// quota exhaustion, ...) is wrapped and propagated, never interpreted
/// or retried.
#[derive(Debug, Error)]
#[error("backend i/o: {0}")]
pub struct BackendError(#[from] Box<dyn std::error::Error + Send + Sync>);

impl BackendError {
    /// Wrap an error from the storage medium.
    pub fn new(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self(source.into())
    }
}

/// Abstraction over durable key-value storage.
///
/// Both operations are asynchronous and may suspend the caller while
/// awaiting I/O. There are no timeouts here; a hung backend call hangs
/// the store operation that issued it.
#[async_trait]
pub trait KeyValueBackend: Send + Sync {
    /// Fetch the payload previously stored under `key`, or `None` if
    /// nothing was ever stored there.
    async fn get(&self, key: &str) -> Result<Option<String>, BackendError>;

    /// Durably store `value` under `key`, replacing any prior value.
    async fn set(&self, key: &str, value: String) -> Result<(), BackendError>;
}

/// Non-durable in-memory backend.
///
/// Backs tests and ephemeral carts; contents are lost when the value
/// is dropped.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryBackend {
    /// Create an empty in-memory backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a backend pre-seeded with stored payloads.
    pub fn with_entries(entries: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            entries: Mutex::new(entries.into_iter().collect()),
        }
    }
}

#[async_trait]
impl KeyValueBackend for MemoryBackend {
    async fn get(&self, key: &str) -> Result<Option<String>, BackendError> {
        Ok(self.entries.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> Result<(), BackendError> {
        self.entries.lock().await.insert(key.to_owned(), value);
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_missing_key_is_none() {
        let backend = MemoryBackend::new();
        assert!(backend.get("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_set_replaces_prior_value() {
        let backend = MemoryBackend::new();
        backend.set("k", "one".to_owned()).await.unwrap();
        backend.set("k", "two".to_owned()).await.unwrap();
        assert_eq!(backend.get("k").await.unwrap().as_deref(), Some("two"));
    }

    #[tokio::test]
    async fn test_with_entries_preseeds() {
        let backend = MemoryBackend::with_entries([("k".to_owned(), "v".to_owned())]);
        assert_eq!(backend.get("k").await.unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn test_backend_error_display() {
        let err = BackendError::new("disk full");
        assert_eq!(err.to_string(), "backend i/o: disk full");
    }
}
