use clap::{Parser, Subcommand};
use keyed_buckets::algorithms::records::time_record_sorts;
use keyed_buckets::algorithms::{
    generate_patient_records, linear_sum, nested_sum, random_list, search_scenarios,
    SearchScenario, SortAlgorithm, SCENARIO_TARGET,
};
use keyed_buckets::logger::initialize_logger;
use keyed_buckets::recommend::{
    describe_bucket, generate_recommendations, populate_store, user_id, PreferenceStore,
};
use keyed_buckets::timing::{time_call, time_fn};
use keyed_buckets::StoreConfig;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::error::Error;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Populate a preference store and look users up in it
    Recommend {
        /// Number of buckets in the store
        #[arg(short, long, default_value_t = 10, allow_negative_numbers = true)]
        buckets: i64,

        /// Number of synthetic users to insert
        #[arg(short = 'n', long, default_value_t = 5, value_parser = clap::value_parser!(u64).range(1..))]
        users: u64,

        /// Seed for the preference generator
        #[arg(short, long)]
        seed: Option<u64>,

        /// User ids to print recommendations for
        #[arg(short, long = "user")]
        user: Vec<String>,

        /// User ids whose bucket should be shown
        #[arg(short, long = "inspect")]
        inspect: Vec<String>,
    },

    /// Time every sorting algorithm on the same random list
    Sort {
        /// Number of elements in the list
        #[arg(long, default_value_t = 1000)]
        size: usize,

        /// Minimum value for list elements
        #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
        min_val: i64,

        /// Maximum value for list elements
        #[arg(long, default_value_t = 10000, allow_negative_numbers = true)]
        max_val: i64,

        /// Timed runs per algorithm
        #[arg(short, long, default_value_t = 20)]
        runs: usize,

        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Time linear search over the fixed scenarios
    Search {
        /// Value to look for
        #[arg(short, long, default_value_t = SCENARIO_TARGET, allow_negative_numbers = true)]
        target: i64,
    },

    /// Time bubble sort against merge sort on fresh patient records each run
    Patients {
        /// Records generated per run
        #[arg(short = 'n', long, default_value_t = 1000, value_parser = clap::value_parser!(u32).range(1..))]
        records: u32,

        /// Number of runs
        #[arg(short, long, default_value_t = 5, value_parser = clap::value_parser!(u64).range(1..))]
        runs: u64,

        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Compare linear and nested summation for each n
    Complexity {
        #[arg(required = true)]
        values: Vec<u64>,
    },
}

fn rng_from(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

fn run_recommend(
    buckets: i64,
    users: u64,
    seed: Option<u64>,
    lookups: &[String],
    inspections: &[String],
) -> Result<(), Box<dyn Error>> {
    let config = StoreConfig::from_signed(buckets)?;
    let users = usize::try_from(users)?;
    let mut store = PreferenceStore::from_config(config)?;
    populate_store(&mut store, users, &mut rng_from(seed));

    println!(
        "Hash table created with size={} and {} simulated user entries.",
        config.bucket_count, users
    );

    // With nothing requested, show the first user like the demo menu would.
    let defaults = [user_id(0)];
    let lookups = if lookups.is_empty() && inspections.is_empty() {
        &defaults[..]
    } else {
        lookups
    };

    for id in lookups {
        println!("{}", generate_recommendations(id, &store));
    }
    for id in inspections {
        println!("\n{}", describe_bucket(id, &store.inspect_bucket(id.as_str())));
    }

    Ok(())
}

fn run_sort(
    size: usize,
    min_val: i64,
    max_val: i64,
    runs: usize,
    seed: Option<u64>,
) -> Result<(), Box<dyn Error>> {
    let data = random_list(size, min_val, max_val, &mut rng_from(seed))?;
    info!("sorting {} values in [{}, {}], {} runs each", size, min_val, max_val, runs);

    println!("{:<20} {:>6} {:>15}", "Algorithm", "Run", "Time (sec)");
    println!("{}", "-".repeat(43));
    for algorithm in SortAlgorithm::ALL {
        for run in 1..=runs {
            let elapsed = time_call(|values: &mut [i64]| algorithm.sort(values), &data);
            println!(
                "{:<20} {:>6} {:>15.6}",
                algorithm.name(),
                run,
                elapsed.as_secs_f64()
            );
        }
    }

    Ok(())
}

fn run_search(target: i64) {
    for scenario in search_scenarios() {
        println!(
            "{}:\n  Target: {}\n  List has {} elements",
            scenario.label,
            target,
            scenario.values.len()
        );

        let (found, elapsed) = time_fn(|scenario: &SearchScenario| scenario.find(target), &scenario);
        match found {
            Some(index) => println!("  Target {} found at position {}", target, index + 1),
            None => println!("  Target {} not found in list.", target),
        }
        println!("  Time taken: {:.6} seconds\n", elapsed.as_secs_f64());
    }
}

fn run_patients(records: u32, runs: u64, seed: Option<u64>) {
    let mut rng = rng_from(seed);
    info!("timing patient record sorts: {} records, {} runs", records, runs);

    for run in 1..=runs {
        // Fresh records every run
        let batch = generate_patient_records(records, &mut rng);
        let timings = time_record_sorts(&batch);

        println!("\nRun {}:", run);
        println!("  Bubble Sort Time: {:.6} seconds", timings.bubble.as_secs_f64());
        println!("  Merge Sort Time: {:.6} seconds", timings.merge.as_secs_f64());
    }
}

fn run_complexity(values: &[u64]) {
    let timings: Vec<_> = values
        .iter()
        .map(|&n| {
            let (_, linear) = time_fn(linear_sum, n);
            let (_, nested) = time_fn(nested_sum, n);
            (n, linear, nested)
        })
        .collect();

    println!("\nLinear Sum (O(n)) Times:");
    for (n, linear, _) in &timings {
        println!("  n = {:<8} => {:.8} seconds", n, linear.as_secs_f64());
    }

    println!("\nNested Sum (O(n²)) Times:");
    for (n, _, nested) in &timings {
        println!("  n = {:<8} => {:.8} seconds", n, nested.as_secs_f64());
    }
}

fn run(command: Command) -> Result<(), Box<dyn Error>> {
    match command {
        Command::Recommend {
            buckets,
            users,
            seed,
            user,
            inspect,
        } => run_recommend(buckets, users, seed, &user, &inspect)?,
        Command::Sort {
            size,
            min_val,
            max_val,
            runs,
            seed,
        } => run_sort(size, min_val, max_val, runs, seed)?,
        Command::Search { target } => run_search(target),
        Command::Patients {
            records,
            runs,
            seed,
        } => run_patients(records, runs, seed),
        Command::Complexity { values } => run_complexity(&values),
    }

    Ok(())
}

fn main() -> ExitCode {
    initialize_logger();
    let args = Args::parse();

    match run(args.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
