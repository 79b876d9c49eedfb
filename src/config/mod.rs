//! # Configuration
//!
//! TOML configuration for the `array-perf` front end. Every section and field
//! has a default, so an empty file (or no file) is a valid configuration.
//!
//! ## Example Configuration
//!
//! ```toml
//! [benchmark]
//! seed = 42
//!
//! [display]
//! bar_width = 40
//! show_bars = true
//!
//! [logging]
//! level = "warn"
//! format = "compact"
//! ```

mod error;
mod loader;
mod types;
mod validation;

pub use error::{ConfigError, ConfigResult};
pub use loader::ConfigLoader;
pub use types::{AppConfig, BenchmarkConfig, DisplayConfig, LogFormat, LogLevel, LoggingConfig};
pub use validation::{
    BasicValidator, ValidationError, ValidationResult, ValidationSeverity, Validator,
    MAX_BAR_WIDTH, WIDE_BAR_WIDTH,
};
