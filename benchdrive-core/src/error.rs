//! Value parse failures

use thiserror::Error;

/// Failure to turn a raw option value into a domain value
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError {
    #[error("unknown plot type: {0}")]
    UnknownPlotType(String),

    #[error("invalid plot dimensions in {0:?}, expected NAME:WIDTHxHEIGHT")]
    InvalidPlotDimensions(String),

    #[error("invalid confidence interval provided: {0:?}")]
    InvalidConfidenceInterval(String),

    #[error("confidence interval must be greater than 0")]
    ConfidenceIntervalTooLow,

    #[error("confidence interval must be less than 1")]
    ConfidenceIntervalTooHigh,
}
