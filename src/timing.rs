//! Wall-clock timing of single calls.
//!
//! Samples are returned raw. Averaging them is left to the caller.

use std::time::{Duration, Instant};

/// Time `f` on a private copy of `input` so repeated runs start from the
/// same data.
pub fn time_call<T, F>(f: F, input: &[T]) -> Duration
where
    T: Clone,
    F: FnOnce(&mut [T]),
{
    let mut copy = input.to_vec();
    let start = Instant::now();
    f(&mut copy);
    start.elapsed()
}

/// Time a call that takes its argument by value, returning its output too.
pub fn time_fn<A, R, F>(f: F, arg: A) -> (R, Duration)
where
    F: FnOnce(A) -> R,
{
    let start = Instant::now();
    let output = f(arg);
    (output, start.elapsed())
}
