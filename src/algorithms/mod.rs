//! Textbook search, sort and summation algorithms.
//!
//! This module groups the small algorithms used to compare growth rates:
//! linear versus quadratic summation, linear search, and five classic
//! sorting algorithms. It also provides the input generators the command
//! line harness feeds them.

use rand::Rng;
use thiserror::Error;

pub mod complexity;
pub mod records;
pub mod search;
pub mod sort;

// Re-export main types for public API
pub use complexity::{linear_sum, nested_sum};
pub use records::{generate_patient_records, PatientRecord};
pub use search::linear_search;
pub use sort::SortAlgorithm;

/// Errors specific to the algorithm helpers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlgorithmError {
    /// Lower bound of a value range exceeded the upper bound
    #[error("Invalid value range: min {min} must be <= max {max}")]
    InvalidValueRange { min: i64, max: i64 },
}

/// Generate `size` integers drawn uniformly from `[min, max]`.
pub fn random_list<R: Rng + ?Sized>(
    size: usize,
    min: i64,
    max: i64,
    rng: &mut R,
) -> Result<Vec<i64>, AlgorithmError> {
    if min > max {
        return Err(AlgorithmError::InvalidValueRange { min, max });
    }

    Ok((0..size).map(|_| rng.gen_range(min..=max)).collect())
}

/// A fixed linear-search input with a label describing where the target sits.
#[derive(Debug, Clone)]
pub struct SearchScenario {
    pub label: &'static str,
    pub values: Vec<i64>,
}

impl SearchScenario {
    /// Position of the first occurrence of `target`, if any.
    pub fn find(&self, target: i64) -> Option<usize> {
        linear_search(&self.values, &target)
    }
}

/// Default target the search scenarios are built around.
pub const SCENARIO_TARGET: i64 = 7;

fn repeat(pattern: &[i64], times: usize) -> Vec<i64> {
    pattern
        .iter()
        .copied()
        .cycle()
        .take(pattern.len() * times)
        .collect()
}

/// The four linear-search inputs: target last, target first, target
/// missing, and target repeated near the end. Each holds well over a
/// thousand values so the scan cost is visible.
pub fn search_scenarios() -> Vec<SearchScenario> {
    let filler = [31, 3, 54, 50, 203, 59, 201];

    let mut at_end = repeat(&filler, 21 * 1000);
    at_end.extend([42, 99, SCENARIO_TARGET]);

    let mut at_front = vec![SCENARIO_TARGET];
    at_front.extend(repeat(&filler, 21 * 1000));
    at_front.extend([42, 99]);

    let mut missing = repeat(&[31, 3, 54, 50, 203, 59, 201, 42, 99], 21 * 1000);
    missing.extend([123, 456, 789, 111, 222, 333]);

    let mut repeated = repeat(&[12, 5, 63, 87, 4, 88, 9, 3, 22, 3], 1000);
    repeated.extend(repeat(&[7, 31, 3, 7, 54, 50, 7, 203, 59, 201], 15));

    vec![
        SearchScenario {
            label: "target at the end",
            values: at_end,
        },
        SearchScenario {
            label: "target at the front",
            values: at_front,
        },
        SearchScenario {
            label: "target missing",
            values: missing,
        },
        SearchScenario {
            label: "target repeated",
            values: repeated,
        },
    ]
}
