//! Error types and exit statuses

use benchdrive_core::ValueError;
use thiserror::Error;

/// Exit status for command-line usage errors (`EX_USAGE`)
pub const EXIT_USAGE: u8 = 64;

/// Exit status when a collaborator fails after configuration succeeded
pub const EXIT_FAILURE: u8 = 1;

/// Failure while turning arguments into a configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Unknown flag, missing value and similar, as reported by the option parser
    #[error("{0}")]
    Options(String),

    #[error("invalid {field} provided: {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("{field} must be positive")]
    NotPositive { field: &'static str },

    #[error(transparent)]
    Value(#[from] ValueError),
}

impl From<clap::Error> for ConfigError {
    fn from(err: clap::Error) -> Self {
        let rendered = err.to_string();
        let first = rendered.lines().next().unwrap_or_default();
        let message = first.strip_prefix("error: ").unwrap_or(first);
        ConfigError::Options(message.to_string())
    }
}

/// Anything that stops a benchmark binary before it finishes normally
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Run(#[from] anyhow::Error),
}

impl CliError {
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Config(_) => EXIT_USAGE,
            CliError::Io(_) | CliError::Run(_) => EXIT_FAILURE,
        }
    }

    /// Whether the user should be pointed at `--help`
    pub fn is_usage_error(&self) -> bool {
        matches!(self, CliError::Config(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_errors_use_usage_exit_code() {
        let err = CliError::from(ConfigError::NotPositive { field: "sample count" });
        assert_eq!(err.exit_code(), 64);
        assert!(err.is_usage_error());
        assert_eq!(err.to_string(), "sample count must be positive");
    }

    #[test]
    fn test_value_errors_pass_through() {
        let err = ConfigError::from(ValueError::UnknownPlotType("bogus".to_string()));
        assert_eq!(err.to_string(), "unknown plot type: bogus");
    }

    #[test]
    fn test_runner_errors_are_not_usage_errors() {
        let err = CliError::from(anyhow::anyhow!("worker crashed"));
        assert_eq!(err.exit_code(), EXIT_FAILURE);
        assert!(!err.is_usage_error());
    }
}
