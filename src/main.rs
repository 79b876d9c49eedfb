//! array-perf binary entry point.

use array_perf::config::{AppConfig, BasicValidator, ConfigLoader, LogLevel};
use array_perf::logging;
use array_perf::perf::{
    JsonSummary, PerformanceTest, Report, TestOutcome, DIRECTIONS, INVALID_INPUT_TITLE,
};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

/// Exit code for input that failed validation in one-shot mode.
const EXIT_INVALID_INPUT: u8 = 2;

#[derive(Parser, Debug)]
#[command(
    name = "array-perf",
    about = "Time building and sorting a random integer array",
    version
)]
struct Args {
    /// Run once with this size instead of prompting.
    #[arg(long, value_name = "SIZE", allow_hyphen_values = true)]
    size: Option<String>,

    /// Seed for the array contents.
    #[arg(long)]
    seed: Option<u64>,

    /// Print a JSON summary instead of the text report.
    #[arg(long)]
    json: bool,

    /// TOML configuration file.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the configured log level.
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<LogLevel>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let mut config = match ConfigLoader::new()
        .with_validator(BasicValidator::new())
        .load_optional(args.config.as_ref())
    {
        Ok(config) => config,
        Err(e) => {
            eprintln!("array-perf: {e}");
            return ExitCode::FAILURE;
        },
    };

    if let Some(level) = args.log_level {
        config.logging.level = level;
    }
    if args.seed.is_some() {
        config.benchmark.seed = args.seed;
    }

    logging::init(&config.logging);
    debug!(?config, "configuration loaded");

    let mut test = PerformanceTest::new(config.benchmark.seed);

    let result = match args.size {
        Some(raw) => run_once(&mut test, &raw, &config, args.json),
        None => run_interactive(&mut test, &config, args.json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("array-perf: {e}");
            ExitCode::FAILURE
        },
    }
}

fn run_once(
    test: &mut PerformanceTest,
    raw: &str,
    config: &AppConfig,
    json: bool,
) -> io::Result<ExitCode> {
    let mut stdout = io::stdout().lock();
    if submit(test, raw, config, json, &mut stdout)? {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(EXIT_INVALID_INPUT))
    }
}

fn run_interactive(
    test: &mut PerformanceTest,
    config: &AppConfig,
    json: bool,
) -> io::Result<ExitCode> {
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    for line in DIRECTIONS {
        writeln!(stdout, "{line}")?;
    }

    let mut input = String::new();
    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        input.clear();
        if stdin.lock().read_line(&mut input)? == 0 {
            break;
        }

        let raw = input.trim();
        if matches!(raw, "quit" | "exit") {
            break;
        }

        submit(test, raw, config, json, &mut stdout)?;
    }

    Ok(ExitCode::SUCCESS)
}

/// Handle one raw input. Returns whether it was accepted.
fn submit<W: Write>(
    test: &mut PerformanceTest,
    raw: &str,
    config: &AppConfig,
    json: bool,
    out: &mut W,
) -> io::Result<bool> {
    let outcome = match test.submit_field(raw) {
        Ok(outcome) => outcome,
        Err(e) => {
            writeln!(out, "{INVALID_INPUT_TITLE}: {e}")?;
            return Ok(false);
        },
    };

    print_outcome(&outcome, config, json, out)?;
    Ok(true)
}

fn print_outcome<W: Write>(
    outcome: &TestOutcome,
    config: &AppConfig,
    json: bool,
    out: &mut W,
) -> io::Result<()> {
    if json {
        let line = JsonSummary::from(outcome)
            .to_json()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        writeln!(out, "{line}")
    } else {
        write!(out, "{}", Report::from_outcome(outcome, &config.display))
    }
}
