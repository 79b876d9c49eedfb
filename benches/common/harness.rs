//! Benchmark harness utilities.

use array_perf::perf::ArraySize;

/// Array sizes exercised by the phase benchmarks.
pub struct BenchSizes;

impl BenchSizes {
    /// Empty array.
    pub const EMPTY: usize = 0;
    /// Small array.
    pub const SMALL: usize = 100;
    /// Medium array.
    pub const MEDIUM: usize = 10_000;
    /// The largest accepted size.
    pub const MAX: usize = 100_000;

    /// All tiers, smallest first.
    pub fn all() -> [ArraySize; 4] {
        [Self::EMPTY, Self::SMALL, Self::MEDIUM, Self::MAX]
            .map(|n| ArraySize::new(n).expect("benchmark size within range"))
    }
}
