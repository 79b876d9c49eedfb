//! Benchmarking harness.
//!
//! Times two sequential workloads over a freshly generated array: building
//! and filling it with random values, then sorting it in place.

use super::validator::ArraySize;
use rand::Rng;
use serde::{Serialize, Serializer};
use std::time::{Duration, Instant};
use tracing::debug;

/// Largest value placed in a generated array (inclusive).
pub const MAX_ELEMENT_VALUE: u32 = 10_000;

/// Run `f` and return its output with the elapsed monotonic time.
pub fn measure<F, R>(f: F) -> (R, Duration)
where
    F: FnOnce() -> R,
{
    let start = Instant::now();
    let result = f();
    let elapsed = start.elapsed();
    (result, elapsed)
}

fn as_millis_f64(duration: Duration) -> f64 {
    duration.as_nanos() as f64 / 1_000_000.0
}

fn serialize_millis<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(as_millis_f64(*duration))
}

/// Timings from one benchmark run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BenchmarkResult {
    /// Time to allocate and populate the array.
    #[serde(rename = "build_time_ms", serialize_with = "serialize_millis")]
    build_time: Duration,
    /// Time to sort the array.
    #[serde(rename = "sort_time_ms", serialize_with = "serialize_millis")]
    sort_time: Duration,
}

impl BenchmarkResult {
    /// Create a result from two measured durations.
    #[must_use]
    pub fn new(build_time: Duration, sort_time: Duration) -> Self {
        Self {
            build_time,
            sort_time,
        }
    }

    /// Build phase duration.
    #[must_use]
    pub fn build_time(&self) -> Duration {
        self.build_time
    }

    /// Sort phase duration.
    #[must_use]
    pub fn sort_time(&self) -> Duration {
        self.sort_time
    }

    /// Build phase duration in fractional milliseconds.
    #[must_use]
    pub fn build_time_ms(&self) -> f64 {
        as_millis_f64(self.build_time)
    }

    /// Sort phase duration in fractional milliseconds.
    #[must_use]
    pub fn sort_time_ms(&self) -> f64 {
        as_millis_f64(self.sort_time)
    }
}

/// A result together with the sorted array that produced it.
#[derive(Debug, Clone)]
pub struct BenchmarkRun {
    /// Measured timings.
    pub result: BenchmarkResult,
    /// The array after sorting.
    pub array: Vec<u32>,
}

/// Times array construction and sorting with an injected random source.
#[derive(Debug)]
pub struct BenchmarkHarness<R> {
    rng: R,
}

impl<R: Rng> BenchmarkHarness<R> {
    /// Create a harness drawing values from `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Run both phases and keep only the timings.
    pub fn run(&mut self, size: ArraySize) -> BenchmarkResult {
        self.run_detailed(size).result
    }

    /// Run both phases and return the timings with the sorted array.
    pub fn run_detailed(&mut self, size: ArraySize) -> BenchmarkRun {
        let len = size.get();
        let rng = &mut self.rng;

        let (mut array, build_time) = measure(|| {
            let mut array = vec![0u32; len];
            for slot in array.iter_mut() {
                *slot = rng.random_range(0..=MAX_ELEMENT_VALUE);
            }
            array
        });
        debug!(size = len, elapsed_ms = as_millis_f64(build_time), "array built");

        let ((), sort_time) = measure(|| array.sort_unstable());
        debug!(size = len, elapsed_ms = as_millis_f64(sort_time), "array sorted");

        BenchmarkRun {
            result: BenchmarkResult::new(build_time, sort_time),
            array,
        }
    }

    /// Consume the harness and return its random source.
    pub fn into_inner(self) -> R {
        self.rng
    }
}
