//! Example usage of the keyed bucket store.
//!
//! This example demonstrates insert, update, lookup, delete and bucket
//! inspection on a deliberately small store so collisions are visible.

use keyed_buckets::recommend::describe_bucket;
use keyed_buckets::KeyedBucketStore;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Three buckets for five keys guarantees at least one chain
    let mut store = KeyedBucketStore::new(3)?;

    println!("Inserting patients into a store with 3 buckets...");
    store.insert("patient_1".to_string(), "Alice");
    store.insert("patient_2".to_string(), "Bob");
    store.insert("patient_3".to_string(), "Charlie");
    store.insert("patient_4".to_string(), "David");
    store.insert("patient_5".to_string(), "Eva");
    println!("Chain lengths: {:?}", store.bucket_lengths());

    // Update in place
    let previous = store.insert("patient_2".to_string(), "Robert");
    println!("Renamed patient_2 (was {:?})", previous);
    println!("patient_2 -> {:?}", store.get("patient_2"));

    // Absent keys are not errors
    println!("patient_9 -> {:?}", store.get("patient_9"));

    for key in ["patient_1", "patient_4"] {
        println!("\n{}", describe_bucket(key, &store.inspect_bucket(key)));
    }

    println!("\nDelete patient_3: {}", store.delete("patient_3"));
    println!("Delete patient_3 again: {}", store.delete("patient_3"));
    println!("Entries left: {}", store.len());

    Ok(())
}
