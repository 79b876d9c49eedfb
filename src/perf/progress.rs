//! Relative progress between the two benchmark phases.

use super::benchmark::BenchmarkResult;
use serde::Serialize;

/// Percentage given to the slower phase.
pub const FULL: u8 = 100;

/// How each phase's duration compares to the slower one, in percent.
///
/// The slower phase is always [`FULL`]; the faster one is its duration as a
/// rounded share of the slower. Equal durations, including two zeros, give
/// `(100, 100)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RelativeProgress {
    /// Build phase percentage.
    pub build_pct: u8,
    /// Sort phase percentage.
    pub sort_pct: u8,
}

impl RelativeProgress {
    /// Both phases at full.
    pub const EQUAL: RelativeProgress = RelativeProgress {
        build_pct: FULL,
        sort_pct: FULL,
    };

    /// Derive the pair from a result.
    #[must_use]
    pub fn from_result(result: &BenchmarkResult) -> Self {
        let build = result.build_time();
        let sort = result.sort_time();

        if build == sort {
            return Self::EQUAL;
        }

        if build > sort {
            Self {
                build_pct: FULL,
                sort_pct: share(sort.as_secs_f64(), build.as_secs_f64()),
            }
        } else {
            Self {
                build_pct: share(build.as_secs_f64(), sort.as_secs_f64()),
                sort_pct: FULL,
            }
        }
    }

    /// The larger of the two percentages.
    #[must_use]
    pub fn max(&self) -> u8 {
        self.build_pct.max(self.sort_pct)
    }
}

impl From<&BenchmarkResult> for RelativeProgress {
    fn from(result: &BenchmarkResult) -> Self {
        Self::from_result(result)
    }
}

/// Highest percentage the faster of two unequal phases can show.
const BELOW_FULL: u8 = FULL - 1;

// `larger` is strictly positive and `smaller < larger` here, so only the
// slower phase may reach `FULL`.
fn share(smaller: f64, larger: f64) -> u8 {
    let pct = (smaller / larger * f64::from(FULL)).round();
    pct.clamp(0.0, f64::from(BELOW_FULL)) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn progress(build_us: u64, sort_us: u64) -> RelativeProgress {
        RelativeProgress::from_result(&BenchmarkResult::new(
            Duration::from_micros(build_us),
            Duration::from_micros(sort_us),
        ))
    }

    #[test]
    fn test_equal_durations() {
        assert_eq!(progress(0, 0), RelativeProgress { build_pct: 100, sort_pct: 100 });
        assert_eq!(progress(750, 750), RelativeProgress { build_pct: 100, sort_pct: 100 });
    }

    #[test]
    fn test_build_slower() {
        let p = progress(400, 100);
        assert_eq!(p.build_pct, 100);
        assert_eq!(p.sort_pct, 25);
    }

    #[test]
    fn test_sort_slower() {
        let p = progress(100, 300);
        assert_eq!(p.sort_pct, 100);
        assert_eq!(p.build_pct, 33);
    }

    #[test]
    fn test_rounds_to_nearest() {
        // 2/3 = 66.67% rounds up
        assert_eq!(progress(200, 300).build_pct, 67);
        // 0.4% rounds down to zero
        assert_eq!(progress(4, 1_000).build_pct, 0);
        // 99.6% stays below full
        assert_eq!(progress(996, 1_000).build_pct, 99);
        assert_eq!(progress(1_000, 996).sort_pct, 99);
    }

    #[test]
    fn test_nearly_equal_keeps_one_full() {
        let p = RelativeProgress::from_result(&BenchmarkResult::new(
            Duration::from_nanos(99_600),
            Duration::from_nanos(100_000),
        ));
        assert_eq!(p, RelativeProgress { build_pct: 99, sort_pct: 100 });
    }

    #[test]
    fn test_one_side_zero() {
        let p = progress(0, 10);
        assert_eq!(p.build_pct, 0);
        assert_eq!(p.sort_pct, 100);
    }

    #[test]
    fn test_max_is_always_full() {
        let samples = [0u64, 1, 2, 3, 10, 99, 100, 101, 12_345, 1_000_000];
        for &b in &samples {
            for &s in &samples {
                let p = progress(b, s);
                assert_eq!(p.max(), FULL, "build={b} sort={s}");
                assert!(p.build_pct <= FULL && p.sort_pct <= FULL);
                if b != s {
                    assert!(
                        (p.build_pct == FULL) != (p.sort_pct == FULL),
                        "build={b} sort={s}: {p:?}"
                    );
                }
            }
        }
    }
}
