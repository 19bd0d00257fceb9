//! Option Table and Argument Resolution
//!
//! Every recognised flag is described once in [`OPTIONS`]. The clap command
//! is generated from the table, and each matched occurrence is turned back
//! into a [`ConfigDelta`] in command-line order.

use crate::ConfigError;
use benchdrive_core::{
    ConfidenceInterval, Config, ConfigDelta, ExitIntent, PlotOutput, PlotPurpose, Verbosity,
};
use clap::parser::ValueSource;
use clap::{Arg, ArgAction, ColorChoice, Command};
use std::ffi::OsString;
use std::str::FromStr;

const BENCHMARKS: &str = "benchmarks";

/// How a flag turns into a configuration delta
#[derive(Debug, Clone, Copy)]
pub enum OptionKind {
    /// No argument; always the same delta
    Flag(fn() -> ConfigDelta),
    /// Requires an argument named `value_name` in usage text
    Value {
        value_name: &'static str,
        parse: fn(&str) -> Result<ConfigDelta, ConfigError>,
    },
}

/// One command-line option
#[derive(Debug, Clone, Copy)]
pub struct OptionSpec {
    pub id: &'static str,
    pub shorts: &'static [char],
    pub longs: &'static [&'static str],
    pub help: &'static str,
    pub kind: OptionKind,
}

impl OptionSpec {
    /// Delta for one occurrence; `value` is `None` for flags
    pub fn delta(&self, value: Option<&str>) -> Result<ConfigDelta, ConfigError> {
        match (self.kind, value) {
            (OptionKind::Flag(delta), _) => Ok(delta()),
            (OptionKind::Value { parse, .. }, Some(raw)) => parse(raw),
            (OptionKind::Value { .. }, None) => Err(ConfigError::Options(format!(
                "a value is required for '--{}'",
                self.longs.first().copied().unwrap_or(self.id)
            ))),
        }
    }

    /// Flags as shown in usage text, e.g. `-s, --samples N`
    pub fn synopsis(&self) -> String {
        let flags: Vec<String> = self
            .shorts
            .iter()
            .map(|c| format!("-{c}"))
            .chain(self.longs.iter().map(|l| format!("--{l}")))
            .collect();
        let mut synopsis = flags.join(", ");
        if let OptionKind::Value { value_name, .. } = self.kind {
            synopsis.push(' ');
            synopsis.push_str(value_name);
        }
        synopsis
    }

    fn to_arg(&self) -> Arg {
        let mut arg = Arg::new(self.id).help(self.help);

        if let Some((&short, aliases)) = self.shorts.split_first() {
            arg = arg.short(short).short_aliases(aliases.iter().copied());
        }
        if let Some((&long, aliases)) = self.longs.split_first() {
            arg = arg.long(long).aliases(aliases.iter().copied());
        }

        match self.kind {
            OptionKind::Flag(_) => arg.action(ArgAction::SetTrue),
            OptionKind::Value { value_name, .. } => arg
                .value_name(value_name)
                .num_args(1)
                .allow_negative_numbers(true)
                .action(ArgAction::Append),
        }
    }
}

/// All recognised options, in usage order
pub static OPTIONS: &[OptionSpec] = &[
    OptionSpec {
        id: "help",
        shorts: &['h', '?'],
        longs: &["help"],
        help: "print help, then exit",
        kind: OptionKind::Flag(|| ConfigDelta::exit_intent(ExitIntent::Help)),
    },
    OptionSpec {
        id: "no-gc",
        shorts: &['G'],
        longs: &["no-gc"],
        help: "do not collect garbage between iterations",
        kind: OptionKind::Flag(|| ConfigDelta::perform_gc(false)),
    },
    OptionSpec {
        id: "gc",
        shorts: &['g'],
        longs: &["gc"],
        help: "collect garbage between iterations",
        kind: OptionKind::Flag(|| ConfigDelta::perform_gc(true)),
    },
    OptionSpec {
        id: "ci",
        shorts: &['I'],
        longs: &["ci"],
        help: "bootstrap confidence interval",
        kind: OptionKind::Value {
            value_name: "CI",
            parse: |raw| Ok(ConfigDelta::confidence_interval(raw.parse::<ConfidenceInterval>()?)),
        },
    },
    OptionSpec {
        id: "list",
        shorts: &['l'],
        longs: &["list"],
        help: "print only a list of benchmark names",
        kind: OptionKind::Flag(|| ConfigDelta::exit_intent(ExitIntent::List)),
    },
    OptionSpec {
        id: "plot-kde",
        shorts: &['k'],
        longs: &["plot-kde"],
        help: "plot kernel density estimate of probabilities",
        kind: OptionKind::Value {
            value_name: "TYPE",
            parse: |raw| Ok(ConfigDelta::plot(PlotPurpose::KernelDensity, raw.parse::<PlotOutput>()?)),
        },
    },
    OptionSpec {
        id: "quiet",
        shorts: &['q'],
        longs: &["quiet"],
        help: "print less output",
        kind: OptionKind::Flag(|| ConfigDelta::verbosity(Verbosity::Quiet)),
    },
    OptionSpec {
        id: "resamples",
        shorts: &[],
        longs: &["resamples"],
        help: "number of bootstrap resamples to perform",
        kind: OptionKind::Value {
            value_name: "N",
            parse: |raw| Ok(ConfigDelta::resamples(parse_positive("resample count", raw)?)),
        },
    },
    OptionSpec {
        id: "samples",
        shorts: &['s'],
        longs: &["samples"],
        help: "number of samples to collect",
        kind: OptionKind::Value {
            value_name: "N",
            parse: |raw| Ok(ConfigDelta::samples(parse_positive("sample count", raw)?)),
        },
    },
    OptionSpec {
        id: "plot-timing",
        shorts: &['t'],
        longs: &["plot-timing"],
        help: "plot timings",
        kind: OptionKind::Value {
            value_name: "TYPE",
            parse: |raw| Ok(ConfigDelta::plot(PlotPurpose::Timing, raw.parse::<PlotOutput>()?)),
        },
    },
    OptionSpec {
        id: "version",
        shorts: &['V'],
        longs: &["version"],
        help: "display version, then exit",
        kind: OptionKind::Flag(|| ConfigDelta::exit_intent(ExitIntent::Version)),
    },
    OptionSpec {
        id: "verbose",
        shorts: &['v'],
        longs: &["verbose"],
        help: "print more output",
        kind: OptionKind::Flag(|| ConfigDelta::verbosity(Verbosity::Verbose)),
    },
];

/// Parse a strictly positive number; `field` names it in error messages
pub fn parse_positive<T>(field: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr + PartialOrd + Default,
{
    let value: T = raw.parse().map_err(|_| ConfigError::InvalidNumber {
        field,
        value: raw.to_string(),
    })?;

    if value > T::default() {
        Ok(value)
    } else {
        Err(ConfigError::NotPositive { field })
    }
}

/// The clap command generated from [`OPTIONS`]
pub fn command() -> Command {
    let benchmarks = Arg::new(BENCHMARKS)
        .value_name("BENCHMARKS")
        .num_args(1..)
        .action(ArgAction::Append);

    OPTIONS.iter().fold(
        Command::new("benchdrive")
            .disable_help_flag(true)
            .disable_version_flag(true)
            .args_override_self(true)
            .color(ColorChoice::Never)
            .arg(benchmarks),
        |command, spec| command.arg(spec.to_arg()),
    )
}

/// Parse `args` (program name first) over `defaults`.
///
/// Returns the resolved configuration and the positional arguments in their
/// original order. The first failure in argument order aborts resolution.
pub fn resolve_args<I, T>(defaults: Config, args: I) -> Result<(Config, Vec<String>), ConfigError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = command().try_get_matches_from(args)?;

    let mut occurrences: Vec<(usize, &OptionSpec, Option<&str>)> = Vec::new();
    for spec in OPTIONS {
        if matches.value_source(spec.id) != Some(ValueSource::CommandLine) {
            continue;
        }
        let indices = matches.indices_of(spec.id).into_iter().flatten();

        match spec.kind {
            // Repeats of a flag collapse to the last occurrence, which yields
            // the same fold since every occurrence carries the same delta.
            OptionKind::Flag(_) => occurrences.extend(indices.map(|index| (index, spec, None))),
            OptionKind::Value { .. } => {
                let values = matches.get_many::<String>(spec.id).into_iter().flatten();
                occurrences.extend(
                    indices
                        .zip(values)
                        .map(|(index, value)| (index, spec, Some(value.as_str()))),
                );
            }
        }
    }
    occurrences.sort_by_key(|(index, ..)| *index);

    let delta = occurrences
        .into_iter()
        .map(|(_, spec, value)| spec.delta(value))
        .collect::<Result<ConfigDelta, _>>()?;

    let positional: Vec<String> = matches
        .get_many::<String>(BENCHMARKS)
        .into_iter()
        .flatten()
        .cloned()
        .collect();

    Ok((defaults.apply(delta), positional))
}
