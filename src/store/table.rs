//! Chained hash table with a fixed bucket count.
//!
//! Each bucket is a `Vec` of entries scanned linearly. Lookups cost O(1) on
//! average when keys spread evenly and O(k) in the worst case, where k is the
//! number of entries sharing one bucket. The bucket count is never changed
//! after construction.

use crate::store::config::StoreConfig;
use crate::store::index::select_bucket;
use crate::store::inspect::BucketReport;
use crate::store::StoreError;
use log::{debug, trace};
use std::borrow::Borrow;
use std::hash::Hash;

/// A stored `(key, value)` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<K, V> {
    pub key: K,
    pub value: V,
}

impl<K, V> Entry<K, V> {
    pub fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    /// Get reference to the key.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Get reference to the value.
    pub fn value(&self) -> &V {
        &self.value
    }
}

/// Fixed-size hash table using separate chaining.
///
/// Keys are placed with [`bucket_index`](Self::bucket_index); inserting an
/// existing key replaces its value in place, so no two entries ever share a
/// key. Absence is reported through `Option`/`bool`, never as an error.
///
/// The store carries no synchronization. Callers sharing it across threads
/// must wrap it in their own lock.
#[derive(Debug, Clone)]
pub struct KeyedBucketStore<K, V> {
    buckets: Vec<Vec<Entry<K, V>>>,
    len: usize,
}

impl<K: Hash + Eq, V> KeyedBucketStore<K, V> {
    /// Create a store with `bucket_count` empty buckets.
    ///
    /// # Arguments
    /// * `bucket_count` - Number of buckets (must be > 0)
    ///
    /// # Returns
    /// Empty store or error if bucket_count is zero
    pub fn new(bucket_count: usize) -> Result<Self, StoreError> {
        if bucket_count == 0 {
            return Err(StoreError::InvalidBucketCount(0));
        }

        debug!("created keyed bucket store with {} buckets", bucket_count);
        Ok(Self::with_buckets(bucket_count))
    }

    fn with_buckets(bucket_count: usize) -> Self {
        let mut buckets = Vec::with_capacity(bucket_count);
        buckets.resize_with(bucket_count, Vec::new);
        Self { buckets, len: 0 }
    }

    /// Create a store from a validated configuration.
    pub fn from_config(config: StoreConfig) -> Result<Self, StoreError> {
        Self::new(config.bucket_count)
    }

    /// Bucket a key hashes to, always in `[0, bucket_count)`.
    pub fn bucket_index<Q>(&self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        select_bucket(key, self.buckets.len())
    }

    /// Insert a value, replacing the value of an existing equal key.
    ///
    /// An updated entry keeps its position in the chain; a new entry is
    /// appended to the end of its bucket.
    ///
    /// # Returns
    /// The previous value if the key was already present
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let index = self.bucket_index(&key);
        let bucket = &mut self.buckets[index];

        if let Some(entry) = bucket.iter_mut().find(|entry| entry.key == key) {
            trace!("updated entry in bucket {}", index);
            return Some(std::mem::replace(&mut entry.value, value));
        }

        bucket.push(Entry::new(key, value));
        self.len += 1;
        trace!("appended entry to bucket {} (chain length {})", index, bucket.len());
        None
    }

    /// Look up the value stored for a key.
    ///
    /// # Returns
    /// `None` when the key is not present
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.bucket_index(key);
        self.buckets[index]
            .iter()
            .find(|entry| entry.key.borrow() == key)
            .map(|entry| &entry.value)
    }

    /// Mutable access to the value stored for a key.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.bucket_index(key);
        self.buckets[index]
            .iter_mut()
            .find(|entry| entry.key.borrow() == key)
            .map(|entry| &mut entry.value)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Remove the entry for a key.
    ///
    /// Remaining entries in the bucket keep their relative order; other
    /// buckets are untouched.
    ///
    /// # Returns
    /// `true` if an entry was removed, `false` if the key was absent
    pub fn delete<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.remove(key).is_some()
    }

    /// Remove the entry for a key and hand back its value.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.bucket_index(key);
        let bucket = &mut self.buckets[index];
        let position = bucket.iter().position(|entry| entry.key.borrow() == key)?;

        let entry = bucket.remove(position);
        self.len -= 1;
        trace!("removed entry from bucket {}", index);
        Some(entry.value)
    }

    /// Describe the bucket a key hashes to without modifying anything.
    ///
    /// The key need not be present; the report then shows whatever else
    /// shares its bucket.
    pub fn inspect_bucket<Q>(&self, key: &Q) -> BucketReport<'_, K, V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.bucket_index(key);
        BucketReport::new(index, &self.buckets[index])
    }
}

impl<K, V> KeyedBucketStore<K, V> {
    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of buckets fixed at construction.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Entries per bucket. Reported only; nothing resizes on it.
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.buckets.len() as f64
    }

    /// Chain length of every bucket, in bucket order.
    pub fn bucket_lengths(&self) -> Vec<usize> {
        self.buckets.iter().map(Vec::len).collect()
    }

    /// All entries, bucket by bucket, each bucket in chain order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.buckets
            .iter()
            .flatten()
            .map(|entry| (&entry.key, &entry.value))
    }
}

impl<K: Hash + Eq, V> Default for KeyedBucketStore<K, V> {
    fn default() -> Self {
        Self::with_buckets(StoreConfig::default().bucket_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prefs(tags: &[&str]) -> Vec<String> {
        tags.iter().map(|tag| tag.to_string()).collect()
    }

    #[test]
    fn test_store_creation() {
        let store: KeyedBucketStore<String, u32> = KeyedBucketStore::new(10).unwrap();
        assert_eq!(store.bucket_count(), 10);
        assert!(store.is_empty());
        assert_eq!(store.bucket_lengths(), vec![0; 10]);

        let store = KeyedBucketStore::<String, u32>::new(0);
        assert_eq!(store.unwrap_err(), StoreError::InvalidBucketCount(0));
    }

    #[test]
    fn test_from_config_and_default() {
        let config = StoreConfig::new(4).unwrap();
        let store: KeyedBucketStore<u64, u64> = KeyedBucketStore::from_config(config).unwrap();
        assert_eq!(store.bucket_count(), 4);

        let store: KeyedBucketStore<u64, u64> = KeyedBucketStore::default();
        assert_eq!(store.bucket_count(), 10);
        assert_eq!(store.bucket_lengths(), vec![0; 10]);
        assert!(store.is_empty());
    }

    #[test]
    fn test_bucket_index_stable_and_in_range() {
        let store: KeyedBucketStore<String, ()> = KeyedBucketStore::new(7).unwrap();

        for i in 0..100 {
            let key = format!("user_{}", i);
            let index = store.bucket_index(key.as_str());
            assert!(index < 7);
            assert_eq!(index, store.bucket_index(key.as_str()));
            // Owned and borrowed forms must agree
            assert_eq!(index, store.bucket_index(&key));
            assert_eq!(index, select_bucket(key.as_str(), 7));
        }
    }

    #[test]
    fn test_insert_then_get() {
        let mut store = KeyedBucketStore::new(10).unwrap();
        assert_eq!(store.insert("user_100".to_string(), prefs(&["sports_videos"])), None);

        assert_eq!(store.get("user_100"), Some(&prefs(&["sports_videos"])));
        assert_eq!(store.get("user_999"), None);
        assert!(store.contains_key("user_100"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_insert_existing_key_is_last_write_wins() {
        let mut store = KeyedBucketStore::new(10).unwrap();
        store.insert("k", 1);
        let previous = store.insert("k", 2);

        assert_eq!(previous, Some(1));
        assert_eq!(store.get("k"), Some(&2));
        assert_eq!(store.len(), 1);
        assert_eq!(store.inspect_bucket("k").len(), 1);
    }

    #[test]
    fn test_update_keeps_chain_position() {
        let mut store = KeyedBucketStore::new(1).unwrap();
        store.insert("a", 1);
        store.insert("b", 2);
        store.insert("c", 3);
        store.insert("a", 10);

        let report = store.inspect_bucket("a");
        let entries: Vec<(&str, i32)> = report.entries.iter().map(|e| (e.key, e.value)).collect();
        assert_eq!(entries, vec![("a", 10), ("b", 2), ("c", 3)]);
    }

    #[test]
    fn test_delete_missing_key() {
        let mut store = KeyedBucketStore::new(4).unwrap();
        store.insert("present", 1);
        let before = store.bucket_lengths();

        assert!(!store.delete("absent"));
        assert_eq!(store.bucket_lengths(), before);
        assert_eq!(store.get("present"), Some(&1));
    }

    #[test]
    fn test_delete_present_key() {
        let mut store = KeyedBucketStore::new(10).unwrap();
        store.insert("user_100".to_string(), prefs(&["sports_videos"]));

        assert_eq!(store.get("user_100"), Some(&prefs(&["sports_videos"])));
        assert!(store.delete("user_100"));
        assert_eq!(store.get("user_100"), None);
        assert!(!store.delete("user_100"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_delete_preserves_order_of_remaining_entries() {
        let mut store = KeyedBucketStore::new(1).unwrap();
        for (i, key) in ["a", "b", "c", "d"].into_iter().enumerate() {
            store.insert(key, i);
        }

        assert!(store.delete("b"));
        let keys: Vec<&str> = store.inspect_bucket("a").keys().copied().collect();
        assert_eq!(keys, vec!["a", "c", "d"]);
    }

    #[test]
    fn test_single_bucket_collisions() {
        let mut store = KeyedBucketStore::new(1).unwrap();
        store.insert("a", 1);
        store.insert("b", 2);
        store.insert("c", 3);

        let report = store.inspect_bucket("a");
        assert_eq!(report.index, 0);
        assert_eq!(report.len(), 3);
        assert!(report.collision);
        assert_eq!(report.keys().copied().collect::<Vec<_>>(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_collision_iff_two_keys_share_bucket() {
        let mut store = KeyedBucketStore::new(8).unwrap();
        for i in 0..20u32 {
            store.insert(i, i * 10);
        }

        for i in 0..20u32 {
            let index = store.bucket_index(&i);
            let sharing = (0..20u32).filter(|k| store.bucket_index(k) == index).count();
            assert_eq!(store.inspect_bucket(&i).collision, sharing >= 2);
        }
    }

    #[test]
    fn test_inspect_missing_key_does_not_mutate() {
        let store: KeyedBucketStore<&str, i32> = KeyedBucketStore::new(3).unwrap();
        let report = store.inspect_bucket("ghost");

        assert!(report.index < 3);
        assert!(report.is_empty());
        assert!(!report.collision);
        assert!(store.is_empty());
    }

    #[test]
    fn test_get_mut_and_remove() {
        let mut store = KeyedBucketStore::new(5).unwrap();
        store.insert("k".to_string(), vec![1]);

        store.get_mut("k").unwrap().push(2);
        assert_eq!(store.get("k"), Some(&vec![1, 2]));

        assert_eq!(store.remove("k"), Some(vec![1, 2]));
        assert_eq!(store.remove("k"), None);
    }

    #[test]
    fn test_iter_and_load_factor() {
        let mut store = KeyedBucketStore::new(4).unwrap();
        for i in 0..8u64 {
            store.insert(i, i);
        }

        let mut keys: Vec<u64> = store.iter().map(|(k, _)| *k).collect();
        keys.sort();
        assert_eq!(keys, (0..8).collect::<Vec<_>>());
        assert_eq!(store.bucket_lengths().iter().sum::<usize>(), 8);
        assert!((store.load_factor() - 2.0).abs() < f64::EPSILON);
    }
}
