//! # Array Performance Test
//!
//! Single-shot timing of building and sorting a random integer array.
//!
//! ## Features
//!
//! - **Validation**: Raw text is parsed into an [`ArraySize`] in `[0, 100000]`
//! - **Benchmarking**: Monotonic timing of the build and sort phases with an injected RNG
//! - **Progress**: Relative percentages of the two phases, slower phase at 100
//! - **Reporting**: Labelled timings, text progress bars and a JSON summary
//!
//! ## Example
//!
//! ```rust
//! use array_perf::perf::PerformanceTest;
//!
//! let mut test = PerformanceTest::new(Some(42));
//! let outcome = test.submit("1000").unwrap();
//!
//! assert_eq!(outcome.size.get(), 1000);
//! assert_eq!(outcome.progress.max(), 100);
//! assert!(test.submit("abc").is_err());
//! ```

pub mod benchmark;
pub mod progress;
pub mod report;
pub mod session;
pub mod validator;

pub use benchmark::{measure, BenchmarkHarness, BenchmarkResult, BenchmarkRun, MAX_ELEMENT_VALUE};
pub use progress::RelativeProgress;
pub use report::{build_label, sort_label, JsonSummary, ProgressBar, Report, DIRECTIONS};
pub use session::{PerformanceTest, TestOutcome};
pub use validator::{
    validate, validate_field, ArraySize, InvalidInputError, InvalidInputKind,
    INVALID_INPUT_MESSAGE, INVALID_INPUT_TITLE, MAX_ARRAY_SIZE, MAX_INPUT_LEN, MIN_ARRAY_SIZE,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_exports() {
        let _ = ArraySize::ZERO;
        let _ = RelativeProgress::EQUAL;
        let _ = ProgressBar::new(50, 10);
    }
}
