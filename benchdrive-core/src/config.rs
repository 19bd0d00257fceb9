//! Run Configuration
//!
//! [`Config`] is fully resolved: every field holds a concrete value.
//! [`ConfigDelta`] is what a single command-line option produces. Deltas are
//! folded left to right with [`ConfigDelta::merge`] and the result is laid
//! over the defaults with [`Config::apply`].
//!
//! Two merge rules apply:
//! - scalar fields are [`Last`] cells: the right-hand value wins when set
//! - the plot map is a [`PlotRequests`]: sets are unioned per purpose

use crate::{ConfidenceInterval, PlotOutput, PlotPurpose};
use std::collections::{BTreeMap, BTreeSet};

/// How much the run reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
}

/// What the process should do once configuration is resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExitIntent {
    /// Run the selected benchmarks
    #[default]
    Normal,
    /// Print banner and usage, then exit
    Help,
    /// Print banner, then exit
    Version,
    /// Print benchmark names instead of running them
    List,
}

/// Scalar override cell: unset, or set by the most recent writer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Last<T>(Option<T>);

impl<T> Last<T> {
    pub fn unset() -> Self {
        Last(None)
    }

    pub fn set(value: T) -> Self {
        Last(Some(value))
    }

    pub fn is_set(&self) -> bool {
        self.0.is_some()
    }

    pub fn get(&self) -> Option<&T> {
        self.0.as_ref()
    }

    /// Combine with a later cell; `later` wins if it is set
    pub fn merge_right(self, later: Last<T>) -> Last<T> {
        Last(later.0.or(self.0))
    }

    /// Resolve against a default that applies only when never set
    pub fn unwrap_or(self, default: T) -> T {
        self.0.unwrap_or(default)
    }
}

impl<T> Default for Last<T> {
    fn default() -> Self {
        Last(None)
    }
}

/// Requested plot outputs keyed by purpose; merging never drops a request
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PlotRequests(BTreeMap<PlotPurpose, BTreeSet<PlotOutput>>);

impl PlotRequests {
    pub fn new() -> Self {
        Self::default()
    }

    /// A single request
    pub fn single(purpose: PlotPurpose, output: PlotOutput) -> Self {
        let mut requests = Self::new();
        requests.insert(purpose, output);
        requests
    }

    pub fn insert(&mut self, purpose: PlotPurpose, output: PlotOutput) {
        self.0.entry(purpose).or_default().insert(output);
    }

    /// Key-wise set union
    pub fn union(mut self, other: PlotRequests) -> PlotRequests {
        for (purpose, outputs) in other.0 {
            self.0.entry(purpose).or_default().extend(outputs);
        }
        self
    }

    /// Outputs requested for `purpose`
    pub fn get(&self, purpose: PlotPurpose) -> Option<&BTreeSet<PlotOutput>> {
        self.0.get(&purpose)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// Partial configuration produced by one or more command-line options
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConfigDelta {
    pub perform_gc: Last<bool>,
    pub verbosity: Last<Verbosity>,
    pub samples: Last<usize>,
    pub resamples: Last<usize>,
    pub confidence_interval: Last<ConfidenceInterval>,
    pub exit_intent: Last<ExitIntent>,
    pub banner: Last<String>,
    pub plots: PlotRequests,
}

impl ConfigDelta {
    /// Fold `later` on top of `self`
    pub fn merge(self, later: ConfigDelta) -> ConfigDelta {
        ConfigDelta {
            perform_gc: self.perform_gc.merge_right(later.perform_gc),
            verbosity: self.verbosity.merge_right(later.verbosity),
            samples: self.samples.merge_right(later.samples),
            resamples: self.resamples.merge_right(later.resamples),
            confidence_interval: self
                .confidence_interval
                .merge_right(later.confidence_interval),
            exit_intent: self.exit_intent.merge_right(later.exit_intent),
            banner: self.banner.merge_right(later.banner),
            plots: self.plots.union(later.plots),
        }
    }

    pub fn perform_gc(enabled: bool) -> Self {
        Self {
            perform_gc: Last::set(enabled),
            ..Self::default()
        }
    }

    pub fn verbosity(verbosity: Verbosity) -> Self {
        Self {
            verbosity: Last::set(verbosity),
            ..Self::default()
        }
    }

    pub fn samples(samples: usize) -> Self {
        Self {
            samples: Last::set(samples),
            ..Self::default()
        }
    }

    pub fn resamples(resamples: usize) -> Self {
        Self {
            resamples: Last::set(resamples),
            ..Self::default()
        }
    }

    pub fn confidence_interval(ci: ConfidenceInterval) -> Self {
        Self {
            confidence_interval: Last::set(ci),
            ..Self::default()
        }
    }

    pub fn exit_intent(intent: ExitIntent) -> Self {
        Self {
            exit_intent: Last::set(intent),
            ..Self::default()
        }
    }

    pub fn banner(banner: impl Into<String>) -> Self {
        Self {
            banner: Last::set(banner.into()),
            ..Self::default()
        }
    }

    pub fn plot(purpose: PlotPurpose, output: PlotOutput) -> Self {
        Self {
            plots: PlotRequests::single(purpose, output),
            ..Self::default()
        }
    }
}

impl FromIterator<ConfigDelta> for ConfigDelta {
    fn from_iter<I: IntoIterator<Item = ConfigDelta>>(iter: I) -> Self {
        iter.into_iter().fold(ConfigDelta::default(), ConfigDelta::merge)
    }
}

/// Fully resolved run configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Request a collection pass (allocator trim, cache flush) between iterations
    pub perform_gc: bool,
    pub verbosity: Verbosity,
    /// Number of samples collected per benchmark
    pub samples: usize,
    /// Number of bootstrap resamples
    pub resamples: usize,
    pub confidence_interval: ConfidenceInterval,
    pub exit_intent: ExitIntent,
    /// Printed before usage text and as the version string
    pub banner: String,
    pub plots: PlotRequests,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            perform_gc: false,
            verbosity: Verbosity::Normal,
            samples: 100,
            resamples: 100_000,
            confidence_interval: ConfidenceInterval::default(),
            exit_intent: ExitIntent::Normal,
            banner: concat!("benchdrive ", env!("CARGO_PKG_VERSION")).to_string(),
            plots: PlotRequests::new(),
        }
    }
}

impl Config {
    /// Lay `delta` over these values; fields the delta never set keep
    /// their current value, plot requests accumulate
    pub fn apply(self, delta: ConfigDelta) -> Config {
        Config {
            perform_gc: delta.perform_gc.unwrap_or(self.perform_gc),
            verbosity: delta.verbosity.unwrap_or(self.verbosity),
            samples: delta.samples.unwrap_or(self.samples),
            resamples: delta.resamples.unwrap_or(self.resamples),
            confidence_interval: delta.confidence_interval.unwrap_or(self.confidence_interval),
            exit_intent: delta.exit_intent.unwrap_or(self.exit_intent),
            banner: delta.banner.unwrap_or(self.banner),
            plots: self.plots.union(delta.plots),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PlotFormat;

    #[test]
    fn last_prefers_later_value() {
        assert_eq!(Last::set(1).merge_right(Last::set(2)), Last::set(2));
        assert_eq!(Last::set(1).merge_right(Last::unset()), Last::set(1));
        assert_eq!(Last::<i32>::unset().merge_right(Last::unset()), Last::unset());
    }

    #[test]
    fn defaults_apply_only_to_unset_fields() {
        let config = Config::default().apply(ConfigDelta::samples(5));
        assert_eq!(config.samples, 5);
        assert_eq!(config.resamples, 100_000);
        assert_eq!(config.verbosity, Verbosity::Normal);
        assert_eq!(config.exit_intent, ExitIntent::Normal);
    }

    #[test]
    fn later_samples_win() {
        let delta: ConfigDelta = [ConfigDelta::samples(5), ConfigDelta::samples(20)]
            .into_iter()
            .collect();
        let defaults = Config {
            samples: 100,
            ..Config::default()
        };
        assert_eq!(defaults.apply(delta).samples, 20);
    }

    #[test]
    fn plot_requests_accumulate() {
        let window = PlotOutput::new(PlotFormat::Window);
        let csv = PlotOutput::new(PlotFormat::Csv);
        let pdf = PlotOutput::new(PlotFormat::Pdf);

        let delta: ConfigDelta = [
            ConfigDelta::plot(PlotPurpose::Timing, window),
            ConfigDelta::plot(PlotPurpose::KernelDensity, csv),
            ConfigDelta::plot(PlotPurpose::Timing, pdf),
        ]
        .into_iter()
        .collect();

        assert!(Config::default().plots.is_empty());
        let config = Config::default().apply(delta);
        assert!(!config.plots.is_empty());
        assert_eq!(config.plots.len(), 2);
        let timing = config.plots.get(PlotPurpose::Timing).unwrap();
        assert!(timing.contains(&window) && timing.contains(&pdf));
        let kde = config.plots.get(PlotPurpose::KernelDensity).unwrap();
        assert_eq!(kde.iter().copied().collect::<Vec<_>>(), vec![csv]);
    }

    #[test]
    fn default_plots_survive_apply() {
        let window = PlotOutput::new(PlotFormat::Window);
        let png = PlotOutput::new(PlotFormat::Png);
        let defaults = Config {
            plots: PlotRequests::single(PlotPurpose::Timing, window),
            ..Config::default()
        };
        let config = defaults.apply(ConfigDelta::plot(PlotPurpose::Timing, png));
        assert_eq!(config.plots.get(PlotPurpose::Timing).map(|s| s.len()), Some(2));
    }

    #[test]
    fn merge_is_field_wise() {
        let delta = ConfigDelta::verbosity(Verbosity::Quiet)
            .merge(ConfigDelta::perform_gc(true))
            .merge(ConfigDelta::verbosity(Verbosity::Verbose));
        assert_eq!(delta.verbosity, Last::set(Verbosity::Verbose));
        assert_eq!(delta.perform_gc, Last::set(true));
        assert!(!delta.samples.is_set());
    }

    #[test]
    fn banner_override() {
        let config = Config::default().apply(ConfigDelta::banner("custom 1.0"));
        assert_eq!(config.banner, "custom 1.0");
        assert!(Config::default().banner.starts_with("benchdrive "));
    }
}
