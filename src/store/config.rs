//! Configuration for keyed bucket stores.
//!
//! Contains the validated sizing parameters for a [`KeyedBucketStore`].
//!
//! [`KeyedBucketStore`]: crate::store::KeyedBucketStore

use crate::store::StoreError;

/// Bucket count used when the caller does not pick one.
pub const DEFAULT_BUCKET_COUNT: usize = 10;

/// Configuration for a keyed bucket store.
///
/// The bucket count is fixed for the lifetime of the store. A small count
/// makes collisions (and therefore longer chains) more likely; there is no
/// resizing to compensate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreConfig {
    /// Number of buckets to allocate
    ///
    /// Must be greater than zero.
    pub bucket_count: usize,
}

impl StoreConfig {
    /// Creates a new store configuration.
    ///
    /// # Arguments
    /// * `bucket_count` - Number of buckets (must be > 0)
    ///
    /// # Returns
    /// Validated configuration or error
    pub fn new(bucket_count: usize) -> crate::error::Result<Self> {
        if bucket_count == 0 {
            return Err(StoreError::InvalidBucketCount(0).into());
        }

        Ok(Self { bucket_count })
    }

    /// Creates a configuration from a signed count, as read from user input.
    ///
    /// Zero and negative values are rejected before anything is allocated.
    pub fn from_signed(bucket_count: i64) -> crate::error::Result<Self> {
        if bucket_count <= 0 {
            return Err(StoreError::InvalidBucketCount(bucket_count).into());
        }

        let bucket_count = usize::try_from(bucket_count).map_err(|_| {
            crate::Error::InvalidInput(format!("bucket count {} does not fit in usize", bucket_count))
        })?;

        Self::new(bucket_count)
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            bucket_count: DEFAULT_BUCKET_COUNT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_config() {
        let config = StoreConfig::new(8);
        assert!(config.is_ok());
        assert_eq!(config.unwrap().bucket_count, 8);
    }

    #[test]
    fn test_invalid_bucket_count() {
        let config = StoreConfig::new(0);
        assert!(config.is_err());
    }

    #[test]
    fn test_from_signed_rejects_non_positive() {
        assert!(StoreConfig::from_signed(0).is_err());

        let err = StoreConfig::from_signed(-3).unwrap_err();
        assert!(matches!(
            err,
            crate::Error::Store(StoreError::InvalidBucketCount(-3))
        ));

        assert_eq!(StoreConfig::from_signed(20).unwrap().bucket_count, 20);
    }

    #[test]
    fn test_rejection_message_is_readable() {
        let err = StoreConfig::from_signed(0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Store error: Invalid bucket count 0: must be greater than 0"
        );
    }

    #[test]
    fn test_default_config() {
        let config = StoreConfig::default();
        assert_eq!(config.bucket_count, 10);
    }
}
