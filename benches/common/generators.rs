//! Raw input generators for validation benchmarks.

use array_perf::perf::MAX_ARRAY_SIZE;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A mix of accepted and rejected raw inputs, as a user might type them.
pub fn raw_inputs(count: usize, seed: u64) -> Vec<String> {
    let junk = ["", "abc", "12.5", "-1", "100001", " 42 ", "+7", "1e3"];
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|i| {
            if i % 4 == 0 {
                junk[rng.random_range(0..junk.len())].to_string()
            } else {
                rng.random_range(0..=MAX_ARRAY_SIZE).to_string()
            }
        })
        .collect()
}
