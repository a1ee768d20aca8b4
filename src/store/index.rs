//! Bucket selection logic for keyed stores.
//!
//! Provides deterministic bucket selection using fast hashing so that the
//! same key always lands in the same bucket, within one store and across
//! runs of the program.

use std::hash::{Hash, Hasher};
use xxhash_rust::xxh3::Xxh3;

/// Hashes a key with xxh3 (seed 0) over its `Hash` byte stream.
pub fn hash_key<K: Hash + ?Sized>(key: &K) -> u64 {
    let mut hasher = Xxh3::new();
    key.hash(&mut hasher);
    hasher.finish()
}

/// Selects a bucket for a given key.
///
/// `bucket_count` must be non-zero; stores validate it at construction.
///
/// # Returns
/// Bucket index in range [0, bucket_count)
pub(crate) fn select_bucket<K: Hash + ?Sized>(key: &K, bucket_count: usize) -> usize {
    debug_assert!(bucket_count > 0);
    (hash_key(key) % bucket_count as u64) as usize
}
