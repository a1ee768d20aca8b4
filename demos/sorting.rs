//! Sorts one random list with every algorithm and prints the timings.

use keyed_buckets::algorithms::{random_list, SortAlgorithm};
use keyed_buckets::timing::time_call;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let data = random_list(2_000, 1, 10_000, &mut StdRng::seed_from_u64(7))?;

    for algorithm in SortAlgorithm::ALL {
        let elapsed = time_call(|values: &mut [i64]| algorithm.sort(values), &data);
        println!("{:<15} {:.6} seconds", algorithm.name(), elapsed.as_secs_f64());
    }

    Ok(())
}
