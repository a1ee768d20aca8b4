//! Synthetic patient records for comparing key-based sorts.
//!
//! Every batch carries the ids `1..=n` in shuffled order, so a correct sort
//! by id always yields `1, 2, ..., n`.

use crate::algorithms::sort::{bubble_sort_by_key, merge_sort_by_key};
use crate::timing::time_call;
use chrono::{Duration, NaiveDate};
use rand::seq::SliceRandom;
use rand::Rng;

/// Names a generated patient can carry.
pub const PATIENT_NAMES: [&str; 10] = [
    "Alice", "Bob", "Charlie", "David", "Eva", "Frank", "Grace", "Hannah", "Ian", "Julia",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatientRecord {
    pub id: u32,
    pub name: &'static str,
    pub dob: NaiveDate,
}

impl PatientRecord {
    /// Date of birth as `YYYY-MM-DD`.
    pub fn dob_string(&self) -> String {
        self.dob.format("%Y-%m-%d").to_string()
    }
}

/// First and last calendar day a generated birth date may fall on.
pub fn dob_range() -> (NaiveDate, NaiveDate) {
    let earliest = NaiveDate::from_ymd_opt(1950, 1, 1).expect("1950-01-01 is a valid date");
    let latest = NaiveDate::from_ymd_opt(2000, 12, 31).expect("2000-12-31 is a valid date");
    (earliest, latest)
}

/// Generate `count` records with unique shuffled ids `1..=count`, a random
/// name and a birth date inside [`dob_range`].
pub fn generate_patient_records<R: Rng + ?Sized>(count: u32, rng: &mut R) -> Vec<PatientRecord> {
    let (earliest, latest) = dob_range();
    let span_days = (latest - earliest).num_days();

    let mut ids: Vec<u32> = (1..=count).collect();
    ids.shuffle(rng);

    ids.into_iter()
        .map(|id| PatientRecord {
            id,
            name: PATIENT_NAMES[rng.gen_range(0..PATIENT_NAMES.len())],
            dob: earliest + Duration::days(rng.gen_range(0..=span_days)),
        })
        .collect()
}

/// Raw timings of one bubble-versus-merge run over the same records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordSortTimings {
    pub bubble: std::time::Duration,
    pub merge: std::time::Duration,
}

/// Time bubble sort and merge sort by id, each on its own copy of `records`.
pub fn time_record_sorts(records: &[PatientRecord]) -> RecordSortTimings {
    RecordSortTimings {
        bubble: time_call(
            |batch: &mut [PatientRecord]| bubble_sort_by_key(batch, |p: &PatientRecord| p.id),
            records,
        ),
        merge: time_call(
            |batch: &mut [PatientRecord]| merge_sort_by_key(batch, |p: &PatientRecord| p.id),
            records,
        ),
    }
}
