//! Integration tests for the array performance test boundary.

use array_perf::config::{ConfigLoader, DisplayConfig};
use array_perf::perf::{
    validate, ArraySize, BenchmarkHarness, InvalidInputKind, JsonSummary, PerformanceTest,
    RelativeProgress, Report, INVALID_INPUT_MESSAGE, MAX_ELEMENT_VALUE,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Counts draws so tests can tell whether the harness ran.
struct CountingRng {
    inner: StdRng,
    draws: u64,
}

impl rand::RngCore for CountingRng {
    fn next_u32(&mut self) -> u32 {
        self.draws += 1;
        self.inner.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.draws += 1;
        self.inner.next_u64()
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        self.draws += 1;
        self.inner.fill_bytes(dst);
    }
}

#[test]
fn test_zero_size_scenario() {
    let mut test = PerformanceTest::new(Some(11));
    let outcome = test.submit("0").unwrap();

    assert_eq!(outcome.size.get(), 0);
    assert!(outcome.result.build_time_ms() >= 0.0);
    assert!(outcome.result.sort_time_ms() >= 0.0);
    assert_eq!(outcome.progress, RelativeProgress::EQUAL);
}

fn counting_rng() -> CountingRng {
    CountingRng {
        inner: StdRng::seed_from_u64(0),
        draws: 0,
    }
}

#[test]
fn test_rejected_input_never_runs() {
    let mut test = PerformanceTest::with_rng(counting_rng());

    for raw in ["100001", "abc", "", "-5", "12.5"] {
        let err = test.submit(raw).unwrap_err();
        assert_eq!(err.to_string(), INVALID_INPUT_MESSAGE, "{raw}");
    }
    assert!(test.submit_field("0000001").is_err());
    assert_eq!(test.runs(), 0);
    assert_eq!(test.into_inner().draws, 0);
}

#[test]
fn test_draws_only_for_accepted_input() {
    let mut test = PerformanceTest::with_rng(counting_rng());

    test.submit("0").unwrap();
    assert!(test.submit("abc").is_err());
    test.submit("10").unwrap();
    assert_eq!(test.runs(), 2);

    let draws = test.into_inner().draws;
    assert!(draws > 0);
    // "0" draws nothing; each of the ten elements needs at least one draw.
    assert!(draws >= 10, "{draws} draws for ten elements");

    let mut harness = BenchmarkHarness::new(counting_rng());
    harness.run(validate("0").unwrap());
    assert_eq!(harness.into_inner().draws, 0);
}

#[test]
fn test_fifty_thousand_scenario() {
    let size = validate("50000").unwrap();
    let run = BenchmarkHarness::new(StdRng::seed_from_u64(50_000)).run_detailed(size);

    assert_eq!(run.array.len(), 50_000);
    assert!(run.array.windows(2).all(|w| w[0] <= w[1]));
    assert!(run.array.iter().all(|&v| v <= MAX_ELEMENT_VALUE));
    assert!(run.result.build_time_ms() >= 0.0);
    assert!(run.result.sort_time_ms() >= 0.0);
}

#[test]
fn test_sorted_for_sampled_sizes() {
    let mut harness = BenchmarkHarness::new(StdRng::seed_from_u64(123));
    for n in [1, 2, 3, 17, 1_000, 65_536, 100_000] {
        let run = harness.run_detailed(ArraySize::new(n).unwrap());
        assert_eq!(run.array.len(), n);
        assert!(run.array.windows(2).all(|w| w[0] <= w[1]), "size {n}");
    }
}

#[test]
fn test_reproducible_with_seed() {
    let size = ArraySize::new(2_048).unwrap();
    let a = BenchmarkHarness::new(StdRng::seed_from_u64(8)).run_detailed(size);
    let b = BenchmarkHarness::new(StdRng::seed_from_u64(8)).run_detailed(size);
    assert_eq!(a.array, b.array);
}

#[test]
fn test_out_of_range_kind() {
    let err = validate("100001").unwrap_err();
    assert_eq!(err.kind(), &InvalidInputKind::OutOfRange { value: 100_001 });
}

#[test]
fn test_progress_invariant_over_runs() {
    let mut test = PerformanceTest::new(Some(4));
    for raw in ["1", "10", "1000", "20000"] {
        let p = test.submit(raw).unwrap().progress;
        assert_eq!(p.max(), 100);
        assert!(p.build_pct <= 100 && p.sort_pct <= 100);
    }
    assert_eq!(test.runs(), 4);
}

#[test]
fn test_report_and_json_from_config() {
    let config = ConfigLoader::new()
        .load_str("[display]\nbar_width = 16\n")
        .unwrap();
    let mut test = PerformanceTest::new(Some(9));
    let outcome = test.submit("3000").unwrap();

    let report = Report::from_outcome(&outcome, &config.display);
    let lines = report.lines();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("Time to make array: ") && lines[0].ends_with(" ms"));
    assert!(lines[2].starts_with("Time to sort array: ") && lines[2].ends_with(" ms"));
    // "[" + 16 cells + "] " + "nnn%"
    assert_eq!(lines[1].len(), 16 + 2 + 1 + 4);

    let json: serde_json::Value =
        serde_json::from_str(&JsonSummary::from(&outcome).to_json().unwrap()).unwrap();
    assert_eq!(json["size"], 3000);
    assert_eq!(json["build_pct"], u64::from(outcome.progress.build_pct));
    assert_eq!(json["sort_pct"], u64::from(outcome.progress.sort_pct));
}

#[test]
fn test_report_without_bars() {
    let mut test = PerformanceTest::new(Some(2));
    let outcome = test.submit("10").unwrap();
    let display = DisplayConfig {
        bar_width: 10,
        show_bars: false,
    };
    assert_eq!(Report::from_outcome(&outcome, &display).lines().len(), 2);
}
