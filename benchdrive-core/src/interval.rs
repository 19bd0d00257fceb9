//! Confidence Interval
//!
//! Accepts a bare fraction (`0.95`, `.95`) or a percentage (`95%`).

use crate::ValueError;
use std::fmt;
use std::str::FromStr;

/// Confidence level strictly inside the open interval (0, 1)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct ConfidenceInterval(f64);

impl ConfidenceInterval {
    /// Validate a fractional confidence level
    pub fn new(value: f64) -> Result<Self, ValueError> {
        if value.is_nan() {
            Err(ValueError::InvalidConfidenceInterval(value.to_string()))
        } else if value <= 0.0 {
            Err(ValueError::ConfidenceIntervalTooLow)
        } else if value >= 1.0 {
            Err(ValueError::ConfidenceIntervalTooHigh)
        } else {
            Ok(Self(value))
        }
    }

    /// The confidence level as a fraction
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for ConfidenceInterval {
    fn default() -> Self {
        Self(0.95)
    }
}

impl fmt::Display for ConfidenceInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let percent = format!("{:.6}", self.0 * 100.0);
        let percent = percent.trim_end_matches('0').trim_end_matches('.');
        write!(f, "{percent}%")
    }
}

impl FromStr for ConfidenceInterval {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (number, percent) = match s.strip_suffix('%') {
            Some(number) => (number, true),
            None => (s, false),
        };

        let normalized = if number.starts_with('.') {
            format!("0{number}")
        } else {
            number.to_string()
        };

        let invalid = || ValueError::InvalidConfidenceInterval(s.to_string());
        if !is_decimal(&normalized) {
            return Err(invalid());
        }
        let value: f64 = normalized.parse().map_err(|_| invalid())?;

        Self::new(if percent { value / 100.0 } else { value })
    }
}

/// Optional minus sign followed by a digit, which keeps `inf` and `NaN` out.
fn is_decimal(s: &str) -> bool {
    let unsigned = s.strip_prefix('-').unwrap_or(s);
    unsigned.starts_with(|c: char| c.is_ascii_digit())
}
