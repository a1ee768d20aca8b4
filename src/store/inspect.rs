//! Read-only bucket diagnostics.

use crate::store::Entry;

/// Snapshot of the bucket a key hashes to.
///
/// Borrowed from the store, so it cannot outlive a later mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketReport<'a, K, V> {
    /// Bucket the inspected key hashes to
    pub index: usize,

    /// Every entry chained in that bucket, in chain order
    pub entries: &'a [Entry<K, V>],

    /// True when the bucket holds more than one entry
    pub collision: bool,
}

impl<'a, K, V> BucketReport<'a, K, V> {
    pub(crate) fn new(index: usize, entries: &'a [Entry<K, V>]) -> Self {
        Self {
            index,
            entries,
            collision: entries.len() > 1,
        }
    }

    /// Number of entries in the bucket.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys in chain order.
    pub fn keys(&self) -> impl Iterator<Item = &'a K> + 'a {
        self.entries.iter().map(|entry| &entry.key)
    }
}
