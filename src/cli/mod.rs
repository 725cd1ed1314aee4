//! # CLI Module
//!
//! This module contains the command-line interface implementation.
//! It uses clap for argument parsing and accepts the single-dash long flags
//! (`-exclude`, `-license`, ...) that existing CI scripts pass.

mod check;

use std::ffi::OsString;

pub use check::{CheckArgs, run_check, usage_exit};
use clap::Parser;
use clap::builder::styling::{AnsiColor, Color, Style, Styles};

const CUSTOM_STYLES: Styles = Styles::styled()
  .header(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))).bold())
  .usage(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))).bold())
  .literal(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Blue))).bold())
  .placeholder(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Cyan))))
  .error(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Red))).bold())
  .valid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))))
  .invalid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Yellow))));

/// Long flags that may also be spelled with a single dash.
const SINGLE_DASH_LONG_FLAGS: &[&str] = &["exclude", "ext", "license", "licensor", "version", "help"];

/// Top-level CLI arguments
#[derive(Parser, Debug)]
#[command(
  version,
  about = "Walks the specified path recursively and prepends the license header to every file that does not already carry it.",
  styles = CUSTOM_STYLES,
  disable_version_flag = true,
  after_help = "Exit status:
  0  every file carries the header (or was rewritten)
  1  dry run found files missing the header
  2  the path cannot be accessed
  4  walking the tree failed
  5  a file could not be opened
  6  a file could not be rewritten
  7  unknown license
  8  invalid command line

Examples:
  # Report Go files missing the Apache 2.0 header
  licenser -d .

  # Add the header, skipping generated code
  licenser -exclude internal/gen -licensor \"Acme Corp.\" ./src

  # Check Rust sources against the Elastic License 2.0 header
  licenser -d -ext .rs -license Elasticv2 .
",
  help_template = "{before-help}{name} v{version}
{about-section}
{usage-heading} {usage}

{all-args}{after-help}
"
)]
pub struct Cli {
  /// Print the version and build identifier, then exit
  #[arg(long = "version")]
  pub show_version: bool,

  #[command(flatten)]
  pub check_args: CheckArgs,
}

impl Cli {
  /// Parse CLI arguments and return the Cli struct
  ///
  /// Errors are returned rather than printed so the caller picks the exit
  /// status; see [`usage_exit`].
  pub fn parse_args() -> Result<Self, clap::Error> {
    Self::try_parse_from(normalize_single_dash_flags(std::env::args_os()))
  }
}

/// Rewrites `-flag` and `-flag=value` to `--flag` / `--flag=value` for the
/// long flags in [`SINGLE_DASH_LONG_FLAGS`].
///
/// Arguments after a literal `--` are left alone.
fn normalize_single_dash_flags(args: impl IntoIterator<Item = OsString>) -> Vec<OsString> {
  let mut normalized = Vec::new();
  let mut passthrough = false;

  for arg in args {
    if passthrough {
      normalized.push(arg);
      continue;
    }

    let rewritten = arg.to_str().and_then(|s| {
      if s == "--" {
        return None;
      }
      let rest = s.strip_prefix('-').filter(|r| !r.starts_with('-'))?;
      let name = rest.split_once('=').map_or(rest, |(name, _)| name);
      SINGLE_DASH_LONG_FLAGS.contains(&name).then(|| format!("-{s}"))
    });

    if arg == "--" {
      passthrough = true;
    }

    normalized.push(rewritten.map_or(arg, OsString::from));
  }

  normalized
}
