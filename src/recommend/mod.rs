//! Content recommendation demo built on [`KeyedBucketStore`].
//!
//! Synthetic users are keyed `user_100`, `user_101`, ... and each holds a
//! short list of preference tags. Lookups of unknown users are a normal
//! outcome and produce a "no preferences" message rather than an error.

use crate::store::{BucketReport, KeyedBucketStore};
use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt::Debug;

/// Store type used by the demo: user id to preference tags.
pub type PreferenceStore = KeyedBucketStore<String, Vec<String>>;

/// Tags a synthetic user can be interested in.
pub const PREFERENCE_CATALOG: [&str; 10] = [
    "sports_videos",
    "comedy_shows",
    "tech_news",
    "gaming_streams",
    "cooking_tutorials",
    "travel_vlogs",
    "music_clips",
    "movie_trailers",
    "fitness_tips",
    "fashion_advice",
];

/// Number assigned to the first generated user.
pub const FIRST_USER_NUMBER: usize = 100;

/// Id of the `n`th generated user, counting from zero.
pub fn user_id(n: usize) -> String {
    format!("user_{}", FIRST_USER_NUMBER + n)
}

/// Pick between one and three distinct tags from the catalog.
pub fn generate_user_preferences<R: Rng + ?Sized>(rng: &mut R) -> Vec<String> {
    let count = rng.gen_range(1..=3);
    PREFERENCE_CATALOG
        .choose_multiple(rng, count)
        .map(|tag| tag.to_string())
        .collect()
}

/// Insert `num_users` synthetic users into `store`.
pub fn populate_store<R: Rng + ?Sized>(store: &mut PreferenceStore, num_users: usize, rng: &mut R) {
    for n in 0..num_users {
        store.insert(user_id(n), generate_user_preferences(rng));
    }
    debug!(
        "populated {} users into {} buckets (load factor {:.2})",
        num_users,
        store.bucket_count(),
        store.load_factor()
    );
}

/// Render the recommendation line for a user.
pub fn generate_recommendations(user_id: &str, store: &PreferenceStore) -> String {
    match store.get(user_id) {
        Some(preferences) if !preferences.is_empty() => {
            format!("Recommendations for {}: {:?}", user_id, preferences)
        }
        _ => format!("No preferences found for {}.", user_id),
    }
}

/// Render a bucket report as the multi-line text shown to users.
pub fn describe_bucket<K: Debug, V: Debug>(key: &str, report: &BucketReport<'_, K, V>) -> String {
    let mut lines = vec![format!(
        "The key '{}' hashes to bucket index {}.",
        key, report.index
    )];

    if report.is_empty() {
        lines.push("This bucket is empty (no entry for that key).".to_string());
        return lines.join("\n");
    }

    let contents: Vec<String> = report
        .entries
        .iter()
        .map(|entry| format!("({:?}, {:?})", entry.key, entry.value))
        .collect();
    lines.push(format!("Bucket contents: [{}]", contents.join(", ")));

    if report.collision {
        lines.push("-> Collision detected! More than one entry in this bucket.".to_string());
    } else {
        lines.push("-> No collision: only one entry in this bucket.".to_string());
    }

    lines.join("\n")
}
