//! Benchdrive Core - Configuration Model
//!
//! Shared types for benchmark binaries:
//! - [`Config`] / [`ConfigDelta`]: the resolved run configuration and the
//!   partial updates produced by command-line options
//! - [`PlotOutput`] and [`ConfidenceInterval`]: validated option values,
//!   parsed through [`std::str::FromStr`]
//! - [`Benchmark`]: a named routine handed to the measurement stage

mod benchmark;
mod config;
mod error;
mod interval;
mod plot;

pub use benchmark::Benchmark;
pub use config::{Config, ConfigDelta, ExitIntent, Last, PlotRequests, Verbosity};
pub use error::ValueError;
pub use interval::ConfidenceInterval;
pub use plot::{PlotFormat, PlotOutput, PlotPurpose};
