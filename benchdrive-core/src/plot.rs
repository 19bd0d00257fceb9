//! Plot Output Specifications
//!
//! Grammar: `FORMAT[:WIDTHxHEIGHT]`. Format names are matched against an
//! ordered table, longest literal first, so `window` is never read as `win`
//! followed by garbage.

use crate::ValueError;
use std::fmt;
use std::str::FromStr;

/// What a requested plot shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PlotPurpose {
    /// Per-sample timing measurements
    Timing,
    /// Kernel density estimate of the sample distribution
    KernelDensity,
}

impl fmt::Display for PlotPurpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlotPurpose::Timing => f.write_str("timing"),
            PlotPurpose::KernelDensity => f.write_str("kde"),
        }
    }
}

/// Output device for a plot
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PlotFormat {
    /// On-screen window, pixels
    Window,
    /// PDF document, 72-dpi points
    Pdf,
    /// PNG image, pixels
    Png,
    /// SVG image, 72-dpi points
    Svg,
    /// Raw data export, no dimensions
    Csv,
    /// Context marker attached to kernel density output by the analysis stage
    KdeContext,
}

impl PlotFormat {
    /// Dimensions used when the `:WIDTHxHEIGHT` suffix is omitted
    pub fn default_dimensions(self) -> Option<(u32, u32)> {
        match self {
            PlotFormat::Window | PlotFormat::Png => Some((800, 600)),
            PlotFormat::Pdf | PlotFormat::Svg => Some((432, 324)),
            PlotFormat::Csv | PlotFormat::KdeContext => None,
        }
    }

    fn name(self) -> &'static str {
        match self {
            PlotFormat::Window => "window",
            PlotFormat::Pdf => "pdf",
            PlotFormat::Png => "png",
            PlotFormat::Svg => "svg",
            PlotFormat::Csv => "csv",
            PlotFormat::KdeContext => "kde-context",
        }
    }
}

/// Format names accepted on the command line, tried in order.
/// A literal must precede any other literal that is a prefix of it.
const FORMAT_TOKENS: &[(&str, PlotFormat)] = &[
    ("window", PlotFormat::Window),
    ("win", PlotFormat::Window),
    ("csv", PlotFormat::Csv),
    ("pdf", PlotFormat::Pdf),
    ("png", PlotFormat::Png),
    ("svg", PlotFormat::Svg),
];

/// A single requested plot output
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlotOutput {
    pub format: PlotFormat,
    /// Width and height, `None` for dimensionless formats
    pub dimensions: Option<(u32, u32)>,
}

impl PlotOutput {
    /// Output with the format's default dimensions
    pub fn new(format: PlotFormat) -> Self {
        Self {
            format,
            dimensions: format.default_dimensions(),
        }
    }

    /// Output with explicit dimensions
    pub fn with_dimensions(format: PlotFormat, width: u32, height: u32) -> Self {
        Self {
            format,
            dimensions: Some((width, height)),
        }
    }
}

impl fmt::Display for PlotOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.format.name())?;
        if let Some((width, height)) = self.dimensions {
            write!(f, ":{width}x{height}")?;
        }
        Ok(())
    }
}

impl FromStr for PlotOutput {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        for &(token, format) in FORMAT_TOKENS {
            let Some(rest) = s.strip_prefix(token) else {
                continue;
            };

            if rest.is_empty() {
                return Ok(PlotOutput::new(format));
            }

            // Anything other than a dimension suffix means this literal did
            // not match; fall through to the next alternative.
            let Some(dims) = rest.strip_prefix(':') else {
                continue;
            };

            if format.default_dimensions().is_none() {
                return Err(ValueError::UnknownPlotType(s.to_string()));
            }

            let (width, height) = parse_dimensions(dims)
                .ok_or_else(|| ValueError::InvalidPlotDimensions(s.to_string()))?;
            return Ok(PlotOutput::with_dimensions(format, width, height));
        }

        Err(ValueError::UnknownPlotType(s.to_string()))
    }
}

fn parse_dimensions(s: &str) -> Option<(u32, u32)> {
    let (width, height) = s.split_once('x')?;
    Some((parse_digits(width)?, parse_digits(height)?))
}

fn parse_digits(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> Result<PlotOutput, ValueError> {
        s.parse()
    }

    #[test]
    fn window_uses_default_dimensions() {
        let plot = parse("window").unwrap();
        assert_eq!(plot.format, PlotFormat::Window);
        assert_eq!(plot.dimensions, Some((800, 600)));
    }

    #[test]
    fn window_with_explicit_dimensions() {
        assert_eq!(
            parse("window:640x480"),
            Ok(PlotOutput::with_dimensions(PlotFormat::Window, 640, 480))
        );
    }

    #[test]
    fn win_is_short_for_window() {
        assert_eq!(parse("win"), parse("window"));
        assert_eq!(
            parse("win:320x200"),
            Ok(PlotOutput::with_dimensions(PlotFormat::Window, 320, 200))
        );
    }

    #[test]
    fn longer_literal_is_tried_first() {
        let window = FORMAT_TOKENS.iter().position(|(t, _)| *t == "window");
        let win = FORMAT_TOKENS.iter().position(|(t, _)| *t == "win");
        assert!(window < win);

        // "win" must not swallow "window" and leave "dow" behind
        assert_eq!(parse("window").unwrap().format, PlotFormat::Window);
        assert!(matches!(parse("windowx"), Err(ValueError::UnknownPlotType(_))));
        assert!(matches!(parse("windo"), Err(ValueError::UnknownPlotType(_))));
    }

    #[test]
    fn point_based_formats_default_to_432_by_324() {
        assert_eq!(parse("pdf").unwrap().dimensions, Some((432, 324)));
        assert_eq!(parse("svg").unwrap().dimensions, Some((432, 324)));
        assert_eq!(parse("png").unwrap().dimensions, Some((800, 600)));
    }

    #[test]
    fn csv_has_no_dimensions() {
        assert_eq!(parse("csv"), Ok(PlotOutput::new(PlotFormat::Csv)));
        assert_eq!(parse("csv").unwrap().dimensions, None);
        assert!(matches!(parse("csv:10x10"), Err(ValueError::UnknownPlotType(_))));
    }

    #[test]
    fn malformed_dimensions_are_rejected() {
        for bad in ["png:", "png:640", "png:640x", "png:x480", "png:64ax480", "png:640x480x2", "png:+640x480", "png:-1x2"] {
            assert!(
                matches!(parse(bad), Err(ValueError::InvalidPlotDimensions(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn unknown_formats_are_rejected() {
        for bad in ["bogus", "", "PNG", "jpeg", " png", "w"] {
            assert_eq!(parse(bad), Err(ValueError::UnknownPlotType(bad.to_string())));
        }
    }

    #[test]
    fn display_uses_canonical_names() {
        assert_eq!(parse("win").unwrap().to_string(), "window:800x600");
        assert_eq!(parse("svg:100x50").unwrap().to_string(), "svg:100x50");
        assert_eq!(PlotOutput::new(PlotFormat::Csv).to_string(), "csv");
        assert_eq!(PlotOutput::new(PlotFormat::KdeContext).to_string(), "kde-context");
    }
}
