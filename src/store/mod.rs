//! Fixed-bucket key/value storage module.
//!
//! This module provides a hash table that resolves collisions by separate
//! chaining. The number of buckets is chosen once at construction and never
//! changes, so every key keeps a stable bucket index for the lifetime of the
//! store.

use thiserror::Error;

/// Errors specific to the store layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Bucket count was zero or negative
    #[error("Invalid bucket count {0}: must be greater than 0")]
    InvalidBucketCount(i64),
}

pub mod config;
pub mod index;
pub mod inspect;
pub mod table;

// Re-export main types for public API
pub use config::StoreConfig;
pub use index::hash_key;
pub use inspect::BucketReport;
pub use table::{Entry, KeyedBucketStore};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_display() {
        assert_eq!(
            StoreError::InvalidBucketCount(-2).to_string(),
            "Invalid bucket count -2: must be greater than 0"
        );
    }
}
