//! Minimal example for the content recommendation demo.

use keyed_buckets::recommend::{
    describe_bucket, generate_recommendations, populate_store, user_id, PreferenceStore,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut store = PreferenceStore::new(5)?;
    populate_store(&mut store, 8, &mut StdRng::seed_from_u64(100));

    for n in 0..8 {
        println!("{}", generate_recommendations(&user_id(n), &store));
    }
    println!("{}", generate_recommendations("user_404", &store));

    let id = user_id(3);
    println!("\n{}", describe_bucket(&id, &store.inspect_bucket(id.as_str())));
    Ok(())
}
