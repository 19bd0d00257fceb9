//! Exit-Intent Dispatcher
//!
//! Help and Version end the process here, before any benchmark work.
//! List and Normal are left to the executor.

use crate::options::OPTIONS;
use benchdrive_core::{Config, ExitIntent};
use std::io::{self, Write};

/// What the caller should do after dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// Output is complete; end the process successfully
    Exit,
    /// Hand the configuration to the executor
    Continue,
}

const PLOT_TYPES: &str = "\
Plot types:
  window or win   display a window immediately
  csv             save a CSV file
  pdf             save a PDF file
  png             save a PNG file
  svg             save an SVG file

Plot dimensions are given as a suffix NAME:WIDTHxHEIGHT, e.g. \"window:640x480\".
Units are pixels for png and window, and 72-dpi points for pdf and svg.
";

/// Full usage text for `program`
pub fn usage(program: &str) -> String {
    let mut text = format!("Usage: {program} [OPTIONS] [BENCHMARKS]\n\nOptions:\n");

    let synopses: Vec<String> = OPTIONS.iter().map(|o| o.synopsis()).collect();
    let width = synopses.iter().map(String::len).max().unwrap_or(0);
    for (synopsis, option) in synopses.iter().zip(OPTIONS) {
        text.push_str(&format!("  {synopsis:<width$}  {}\n", option.help));
    }

    text.push('\n');
    text.push_str(PLOT_TYPES);
    text
}

/// Act on the configuration's exit intent
pub fn dispatch_exit_intent<W: Write>(
    config: &Config,
    program: &str,
    out: &mut W,
) -> io::Result<Dispatch> {
    match config.exit_intent {
        ExitIntent::Help => {
            writeln!(out, "{}", config.banner)?;
            write!(out, "{}", usage(program))?;
            Ok(Dispatch::Exit)
        }
        ExitIntent::Version => {
            writeln!(out, "{}", config.banner)?;
            Ok(Dispatch::Exit)
        }
        ExitIntent::List | ExitIntent::Normal => Ok(Dispatch::Continue),
    }
}
