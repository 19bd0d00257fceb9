//! Benchdrive CLI Library
//!
//! Command-line front end for benchmark binaries. It resolves the process
//! arguments into a [`Config`], handles `--help`, `--version` and `--list`,
//! and hands every selected benchmark to a [`Runner`].
//!
//! # Example
//!
//! ```ignore
//! use benchdrive_cli::Runner;
//! use benchdrive_core::Benchmark;
//!
//! fn main() -> std::process::ExitCode {
//!     let benchmarks = vec![
//!         Benchmark::new("fib 10", |n| for _ in 0..n { fib(10); }),
//!         Benchmark::new("fib 35", |n| for _ in 0..n { fib(35); }),
//!     ];
//!     benchdrive_cli::run(&benchmarks, MyRunner::new())
//! }
//! ```

mod dispatch;
mod error;
mod executor;
mod filter;
mod options;

pub use dispatch::{dispatch_exit_intent, usage, Dispatch};
pub use error::{CliError, ConfigError, EXIT_FAILURE, EXIT_USAGE};
pub use executor::{list_benchmarks, run_benchmarks, Runner};
pub use filter::BenchmarkFilter;
pub use options::{command, parse_positive, resolve_args, OptionKind, OptionSpec, OPTIONS};

use benchdrive_core::{Benchmark, Config, ExitIntent, Verbosity};
use std::ffi::OsString;
use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Run a benchmark binary with the default configuration.
pub fn run<R: Runner>(benchmarks: &[Benchmark], runner: R) -> ExitCode {
    run_with_defaults(Config::default(), benchmarks, runner)
}

/// Run a benchmark binary over caller-supplied defaults.
///
/// This is the only place that turns an error into a process exit status:
/// usage errors exit with [`EXIT_USAGE`], runner failures with
/// [`EXIT_FAILURE`].
pub fn run_with_defaults<R: Runner>(
    defaults: Config,
    benchmarks: &[Benchmark],
    mut runner: R,
) -> ExitCode {
    let args: Vec<OsString> = std::env::args_os().collect();
    let program = program_name(&args);

    let result = resolve_args(defaults, args)
        .map_err(CliError::from)
        .and_then(|(config, positional)| {
            init_logging(config.verbosity);
            execute(&config, &program, positional, benchmarks, &mut runner, &mut io::stdout().lock())
        });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // Nothing more useful can be done if stderr is gone.
            let _ = report_error(&program, &err, &mut io::stderr().lock());
            ExitCode::from(err.exit_code())
        }
    }
}

/// Act on a resolved configuration: print help, version or the benchmark
/// list, or run the benchmarks selected by `positional`.
pub fn execute<R: Runner, W: Write>(
    config: &Config,
    program: &str,
    positional: Vec<String>,
    benchmarks: &[Benchmark],
    runner: &mut R,
    out: &mut W,
) -> Result<(), CliError> {
    tracing::debug!(?config, ?positional, "resolved configuration");

    if dispatch_exit_intent(config, program, out)? == Dispatch::Exit {
        return Ok(());
    }

    match config.exit_intent {
        ExitIntent::List => list_benchmarks(benchmarks, out)?,
        _ => {
            let filter = BenchmarkFilter::new(positional);
            run_benchmarks(config, &filter, benchmarks, runner)?;
        }
    }

    Ok(())
}

/// Print `err` the way users see it on stderr
pub fn report_error<W: Write>(program: &str, err: &CliError, out: &mut W) -> io::Result<()> {
    writeln!(out, "Error: {err}")?;
    if err.is_usage_error() {
        writeln!(out, "Run \"{program} --help\" for usage information.")?;
    }
    Ok(())
}

fn program_name(args: &[OsString]) -> String {
    args.first()
        .and_then(|arg0| Path::new(arg0).file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "benchdrive".to_string())
}

/// Initialize logging for the resolved verbosity. `RUST_LOG` takes precedence.
fn init_logging(verbosity: Verbosity) {
    let level = match verbosity {
        Verbosity::Quiet => "warn",
        Verbosity::Normal => "info",
        Verbosity::Verbose => "debug",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("benchdrive={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .ok(); // Ignore error if already initialized
}
