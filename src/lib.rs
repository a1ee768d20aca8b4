pub mod algorithms;
pub mod error;
pub mod logger;
pub mod recommend;
pub mod store;
pub mod timing;

// Re-export common types for convenience
pub use error::{Error, Result};
pub use store::{BucketReport, Entry, KeyedBucketStore, StoreConfig, StoreError};
