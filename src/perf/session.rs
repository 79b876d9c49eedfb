//! Single request/response entry point: raw text in, outcome or error out.

use super::benchmark::{BenchmarkHarness, BenchmarkResult};
use super::progress::RelativeProgress;
use super::validator::{validate, validate_field, ArraySize, InputResult, InvalidInputError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

/// Everything produced by one accepted request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestOutcome {
    /// The validated size.
    pub size: ArraySize,
    /// Measured timings.
    pub result: BenchmarkResult,
    /// Relative progress derived from `result`.
    pub progress: RelativeProgress,
}

impl TestOutcome {
    /// Pair a result with its derived progress.
    ///
    /// An empty array does no measurable work in either phase, so it always
    /// reports [`RelativeProgress::EQUAL`] regardless of clock jitter.
    #[must_use]
    pub fn new(size: ArraySize, result: BenchmarkResult) -> Self {
        let progress = if size == ArraySize::ZERO {
            RelativeProgress::EQUAL
        } else {
            RelativeProgress::from_result(&result)
        };
        Self {
            size,
            result,
            progress,
        }
    }
}

/// A performance test session.
///
/// Runs are serialized by the `&mut self` receiver of [`PerformanceTest::submit`].
#[derive(Debug)]
pub struct PerformanceTest<R = StdRng> {
    harness: BenchmarkHarness<R>,
    runs: u64,
}

impl PerformanceTest<StdRng> {
    /// Create a session seeded from `seed`, or from the OS when `None`.
    #[must_use]
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::with_rng(rng)
    }
}

impl<R: Rng> PerformanceTest<R> {
    /// Create a session using `rng` for array contents.
    pub fn with_rng(rng: R) -> Self {
        Self {
            harness: BenchmarkHarness::new(rng),
            runs: 0,
        }
    }

    /// Validate `raw` and, if accepted, run the benchmark.
    ///
    /// Rejected input never reaches the harness.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInputError`] when `raw` is not an integer in
    /// `[0, 100000]`.
    pub fn submit(&mut self, raw: &str) -> InputResult<TestOutcome> {
        let size = validate(raw).inspect_err(|e| log_rejected(raw, e))?;
        Ok(self.run(size))
    }

    /// Like [`PerformanceTest::submit`], but also enforces the six-character
    /// input field limit.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInputError`] for over-long or invalid input.
    pub fn submit_field(&mut self, raw: &str) -> InputResult<TestOutcome> {
        let size = validate_field(raw).inspect_err(|e| log_rejected(raw, e))?;
        Ok(self.run(size))
    }

    /// Run the benchmark for an already validated size.
    pub fn run(&mut self, size: ArraySize) -> TestOutcome {
        let result = self.harness.run(size);
        self.runs += 1;

        info!(
            size = size.get(),
            build_time_ms = result.build_time_ms(),
            sort_time_ms = result.sort_time_ms(),
            run = self.runs,
            "benchmark complete"
        );

        TestOutcome::new(size, result)
    }

    /// Number of completed runs.
    #[must_use]
    pub fn runs(&self) -> u64 {
        self.runs
    }

    /// Consume the session, returning its RNG.
    pub fn into_inner(self) -> R {
        self.harness.into_inner()
    }
}

fn log_rejected(raw: &str, err: &InvalidInputError) {
    debug!(input = raw, reason = %err.kind(), "rejected benchmark input");
}
