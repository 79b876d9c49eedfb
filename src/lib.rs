//! # array-perf
//!
//! Times how long it takes to build a random integer array of a requested
//! size and then sort it, and compares the two phases as relative progress.
//!
//! ## Features
//!
//! - Input validation to a size in `[0, 100000]`
//! - Monotonic timing of the build and sort phases
//! - Injected random source for reproducible array contents
//! - Relative progress pair with the slower phase at 100%
//! - TOML configuration with validation
//!
//! ## Modules
//!
//! The measurement core lives in [`perf`]; [`config`] holds the settings the
//! `array-perf` binary reads at startup; [`logging`] installs the tracing
//! subscriber those settings describe.

pub mod config;
pub mod logging;
pub mod perf;
