//! Unified error handling for the cart store.
//!
//! All fallible store operations return [`Result`]. Nothing here is
//! retried automatically - retry, if desired, is the caller's
//! responsibility by re-invoking the same operation.

use thiserror::Error;

use crate::backend::BackendError;

/// Errors surfaced by the cart store.
#[derive(Debug, Error)]
pub enum CartError {
    /// A persisted payload exists but could not be parsed into line
    /// items. Fatal to store construction: it signals data corruption
    /// and must not be masked as an empty cart.
    #[error("corrupt cart payload: {0}")]
    Decode(#[source] serde_json::Error),

    /// The cart could not be serialized before a write.
    #[error("failed to encode cart: {0}")]
    Encode(#[source] serde_json::Error),

    /// The backend's get or set failed. Fatal during hydration; on a
    /// post-mutation write, the in-memory commit stands and memory
    /// diverges from the durable copy until the next successful write.
    #[error("backend error: {0}")]
    Backend(#[from] BackendError),
}

/// Result type alias for `CartError`.
pub type Result<T> = std::result::Result<T, CartError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_error_display() {
        let json_err = serde_json::from_str::<Vec<i32>>("not json").unwrap_err();
        let err = CartError::Decode(json_err);
        assert!(err.to_string().starts_with("corrupt cart payload:"));
    }

    #[test]
    fn test_backend_error_converts() {
        let err = CartError::from(BackendError::new("quota exceeded"));
        assert!(matches!(err, CartError::Backend(_)));
        assert_eq!(err.to_string(), "backend error: backend i/o: quota exceeded");
    }
}
