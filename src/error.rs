//! Crate-scoped error handling for keyed-buckets.
//!
//! This module provides a unified error type for public APIs while keeping
//! the precise error information of each module available for matching.

use thiserror::Error;

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type exposed to users of the crate.
///
/// Key-not-found is deliberately absent: lookups report it through
/// `Option` and `bool` return values.
#[derive(Debug, Error)]
pub enum Error {
    /// Errors from the store layer (bucket configuration)
    #[error("Store error: {0}")]
    Store(#[from] crate::store::StoreError),

    /// Errors from the algorithm helpers (input generation)
    #[error("Algorithm error: {0}")]
    Algorithm(#[from] crate::algorithms::AlgorithmError),

    /// Invalid input parameters
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::AlgorithmError;
    use crate::store::StoreError;

    #[test]
    fn test_display_wraps_module_errors() {
        let err: Error = StoreError::InvalidBucketCount(0).into();
        assert_eq!(
            err.to_string(),
            "Store error: Invalid bucket count 0: must be greater than 0"
        );

        let err: Error = AlgorithmError::InvalidValueRange { min: 5, max: 1 }.into();
        assert!(err.to_string().starts_with("Algorithm error:"));

        let err = Error::InvalidInput("no users".to_string());
        assert_eq!(err.to_string(), "Invalid input: no users");
    }

    #[test]
    fn test_source_is_module_error() {
        use std::error::Error as _;

        let err: Error = StoreError::InvalidBucketCount(-1).into();
        assert!(err.source().is_some());
    }
}
