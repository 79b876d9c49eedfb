//! Text and JSON rendering of a test outcome.

use super::benchmark::BenchmarkResult;
use super::progress::{RelativeProgress, FULL};
use super::session::TestOutcome;
use crate::config::DisplayConfig;
use serde::Serialize;
use std::fmt;

/// Label prefix for the build phase.
pub const BUILD_LABEL: &str = "Time to make array";

/// Label prefix for the sort phase.
pub const SORT_LABEL: &str = "Time to sort array";

/// Instructions shown before asking for input.
pub const DIRECTIONS: [&str; 3] = [
    "Enter a number between 0 and 100,000.",
    "This will be the size of the array that is used",
    "for the performance test.",
];

/// `Time to make array: {ms} ms`
#[must_use]
pub fn build_label(result: &BenchmarkResult) -> String {
    format!("{BUILD_LABEL}: {} ms", result.build_time_ms())
}

/// `Time to sort array: {ms} ms`
#[must_use]
pub fn sort_label(result: &BenchmarkResult) -> String {
    format!("{SORT_LABEL}: {} ms", result.sort_time_ms())
}

/// A fixed-width text progress bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressBar {
    pct: u8,
    width: usize,
}

impl ProgressBar {
    /// Bar filled to `pct` percent (capped at 100) across `width` cells.
    #[must_use]
    pub fn new(pct: u8, width: usize) -> Self {
        Self {
            pct: pct.min(FULL),
            width,
        }
    }

    /// Number of filled cells.
    #[must_use]
    pub fn filled(&self) -> usize {
        let cells = (f64::from(self.pct) * self.width as f64 / f64::from(FULL)).round();
        (cells as usize).min(self.width)
    }

    /// Render as `[####------] 40%`.
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ProgressBar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let filled = self.filled();
        write!(
            f,
            "[{}{}] {:>3}%",
            "#".repeat(filled),
            "-".repeat(self.width - filled),
            self.pct
        )
    }
}

/// Flat JSON view of an outcome.
#[derive(Debug, Clone, Serialize)]
pub struct JsonSummary {
    /// Requested array size.
    pub size: usize,
    /// Timings.
    #[serde(flatten)]
    pub result: BenchmarkResult,
    /// Relative progress pair.
    #[serde(flatten)]
    pub progress: RelativeProgress,
}

impl From<&TestOutcome> for JsonSummary {
    fn from(outcome: &TestOutcome) -> Self {
        Self {
            size: outcome.size.get(),
            result: outcome.result,
            progress: outcome.progress,
        }
    }
}

impl JsonSummary {
    /// Serialize to a single JSON line.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Text report for one outcome.
#[derive(Debug, Clone)]
pub struct Report {
    lines: Vec<String>,
}

impl Report {
    /// Lay out labels and, when enabled, their bars.
    #[must_use]
    pub fn from_outcome(outcome: &TestOutcome, display: &DisplayConfig) -> Self {
        let mut lines = Vec::with_capacity(4);

        lines.push(build_label(&outcome.result));
        if display.show_bars {
            lines.push(ProgressBar::new(outcome.progress.build_pct, display.bar_width).render());
        }

        lines.push(sort_label(&outcome.result));
        if display.show_bars {
            lines.push(ProgressBar::new(outcome.progress.sort_pct, display.bar_width).render());
        }

        Self { lines }
    }

    /// Rendered lines.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
