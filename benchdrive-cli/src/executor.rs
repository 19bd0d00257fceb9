//! Benchmark Executor
//!
//! Hands the resolved configuration to the measurement stage. The
//! measurement and analysis themselves live behind [`Runner`].

use crate::BenchmarkFilter;
use benchdrive_core::{Benchmark, Config};
use std::io::{self, Write};

/// Measurement and analysis stage for a benchmark binary
pub trait Runner {
    /// Whatever the runner learns about the machine before measuring
    type Environment;

    /// Called once per run, before the first benchmark
    fn measure_environment(&mut self, config: &Config) -> anyhow::Result<Self::Environment>;

    /// Called once for each selected benchmark, in collection order
    fn run_and_analyze(
        &mut self,
        config: &Config,
        environment: &Self::Environment,
        benchmark: &Benchmark,
    ) -> anyhow::Result<()>;
}

/// Print every benchmark name, sorted, one per line
pub fn list_benchmarks<W: Write>(benchmarks: &[Benchmark], out: &mut W) -> io::Result<()> {
    let mut names: Vec<&str> = benchmarks.iter().map(Benchmark::name).collect();
    names.sort_unstable();
    for name in names {
        writeln!(out, "{name}")?;
    }
    Ok(())
}

/// Run every benchmark the filter selects. Returns how many ran.
pub fn run_benchmarks<R: Runner>(
    config: &Config,
    filter: &BenchmarkFilter,
    benchmarks: &[Benchmark],
    runner: &mut R,
) -> anyhow::Result<usize> {
    let environment = runner.measure_environment(config)?;
    tracing::debug!("environment measured");

    let mut ran = 0;
    for benchmark in benchmarks.iter().filter(|b| filter.selects(b.name())) {
        tracing::info!(benchmark = benchmark.name(), "running");
        runner.run_and_analyze(config, &environment, benchmark)?;
        ran += 1;
    }

    if ran == 0 && !filter.is_empty() {
        tracing::warn!("no benchmarks matched the given names");
    }

    Ok(ran)
}
