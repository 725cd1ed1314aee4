//! # Check Command
//!
//! This module turns parsed arguments into a [`RunConfig`], runs the engine
//! and maps its outcome to the process exit status.

use std::io::Write as _;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Args;
use licenser::config::{DEFAULT_EXTENSION, DEFAULT_LICENSE, DEFAULT_LICENSOR, DEFAULT_PATH, RunConfig};
use licenser::error::FailureKind;
use licenser::logging::{ColorMode, init_tracing, set_verbose};
use licenser::output::print_error;
use licenser::processor;
use licenser::report::OutcomeKind;
use licenser::templates::LicenseRegistry;
use tracing::{info, warn};

/// Every file carries the header, or was rewritten to.
pub const EXIT_CLEAN: u8 = 0;
/// Dry run found at least one file missing the header.
pub const EXIT_VIOLATIONS: u8 = 1;
/// The scan root cannot be accessed.
pub const EXIT_TREE_ACCESS: u8 = 2;
// 3 is reserved: it was "cannot stat file" and is kept unused so scripts
// matching on the other statuses keep working.
/// Enumerating a directory failed.
pub const EXIT_WALK: u8 = 4;
/// A qualifying file could not be opened.
pub const EXIT_FILE_OPEN: u8 = 5;
/// A file could not be rewritten with the header.
pub const EXIT_REWRITE: u8 = 6;
/// The license identifier is not registered.
pub const EXIT_UNKNOWN_LICENSE: u8 = 7;
/// The command line could not be parsed.
pub const EXIT_USAGE: u8 = 8;

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
  /// Path to scan recursively
  #[arg(value_name = "PATH", default_value = DEFAULT_PATH)]
  pub path: PathBuf,

  /// Path to exclude, relative to PATH (can be specified multiple times)
  #[arg(long, value_name = "PATH")]
  pub exclude: Vec<String>,

  /// Skips rewriting files and exits with status 1 if any file is missing the
  /// header
  #[arg(short = 'd', long = "dry-run")]
  pub dry_run: bool,

  /// File name suffix to scan for
  #[arg(long, value_name = "EXT", default_value = DEFAULT_EXTENSION)]
  pub ext: String,

  #[arg(long, value_name = "ID", default_value = DEFAULT_LICENSE, help = license_help())]
  pub license: String,

  /// Name of the licensor substituted into the header
  #[arg(long, value_name = "NAME", default_value = DEFAULT_LICENSOR)]
  pub licensor: String,

  /// Increase verbosity (-v info, -vv debug, -vvv trace)
  #[arg(short, long, action = clap::ArgAction::Count)]
  pub verbose: u8,

  /// Control when to use colored output (auto, never, always)
  #[arg(
    long,
    value_name = "WHEN",
    num_args = 0..=1,
    default_value_t = ColorMode::Auto,
    default_missing_value = "always",
    value_enum
  )]
  pub colors: ColorMode,
}

impl CheckArgs {
  /// Builds the immutable run configuration from the parsed arguments.
  pub fn into_config(self) -> RunConfig {
    RunConfig {
      root: self.path,
      extension: self.ext,
      license: self.license,
      licensor: self.licensor,
      exclusions: self.exclude,
      dry_run: self.dry_run,
    }
  }
}

fn license_help() -> String {
  let ids: Vec<_> = LicenseRegistry::builtin().identifiers().collect();
  format!("License header to enforce: {}", ids.join(", "))
}

/// The line printed by `-version`.
fn version_line() -> String {
  format!(
    "licenser {} ({})",
    env!("CARGO_PKG_VERSION"),
    option_env!("GIT_HASH").unwrap_or("unknown")
  )
}

/// Maps an outcome kind to its process exit status.
///
/// Every kind has its own status so automation can tell "found violations"
/// apart from each way the tool can fail.
pub const fn exit_status(kind: OutcomeKind) -> u8 {
  match kind {
    OutcomeKind::Clean => EXIT_CLEAN,
    OutcomeKind::Violations => EXIT_VIOLATIONS,
    OutcomeKind::Failed(FailureKind::TreeAccess) => EXIT_TREE_ACCESS,
    OutcomeKind::Failed(FailureKind::Walk) => EXIT_WALK,
    OutcomeKind::Failed(FailureKind::FileOpen) => EXIT_FILE_OPEN,
    OutcomeKind::Failed(FailureKind::Rewrite) => EXIT_REWRITE,
    OutcomeKind::Failed(FailureKind::UnknownLicense) => EXIT_UNKNOWN_LICENSE,
  }
}

/// Prints a parse failure and picks the exit status for it.
///
/// Help output requested with `-help` is not a failure and exits 0.
pub fn usage_exit(err: &clap::Error) -> ExitCode {
  if let Err(e) = err.print() {
    warn!("Failed to print usage: {}", e);
  }

  if err.use_stderr() {
    ExitCode::from(EXIT_USAGE)
  } else {
    ExitCode::SUCCESS
  }
}

/// Run the check command with the given arguments
pub fn run_check(cli: super::Cli) -> ExitCode {
  if cli.show_version {
    println!("{}", version_line());
    return ExitCode::SUCCESS;
  }

  let args = cli.check_args;

  // Initialize tracing subscriber for structured logging
  init_tracing(args.verbose);
  if args.verbose > 0 {
    set_verbose();
  }
  args.colors.apply();

  let config = args.into_config();
  let dry_run = config.dry_run;

  let mut stdout = std::io::stdout().lock();
  let outcome = processor::run(config, &mut stdout);
  if let Err(e) = stdout.flush() {
    warn!("Failed to flush stdout: {}", e);
  }

  if let Some(report) = outcome.report() {
    if dry_run {
      info!(
        "Checked {} files, {} missing the license header",
        report.files_scanned(),
        report.missing().count()
      );
    } else {
      info!(
        "Checked {} files, added the license header to {}",
        report.files_scanned(),
        report.added().count()
      );
    }
  }

  if let Some(err) = outcome.error() {
    print_error(err);
  }

  ExitCode::from(exit_status(outcome.kind()))
}

#[cfg(test)]
mod tests {
  use std::collections::HashSet;

  use super::*;

  const ALL_KINDS: [OutcomeKind; 7] = [
    OutcomeKind::Clean,
    OutcomeKind::Violations,
    OutcomeKind::Failed(FailureKind::UnknownLicense),
    OutcomeKind::Failed(FailureKind::TreeAccess),
    OutcomeKind::Failed(FailureKind::Walk),
    OutcomeKind::Failed(FailureKind::FileOpen),
    OutcomeKind::Failed(FailureKind::Rewrite),
  ];

  #[test]
  fn test_exit_statuses_are_distinct() {
    let statuses: HashSet<u8> = ALL_KINDS.iter().map(|k| exit_status(*k)).collect();
    assert_eq!(statuses.len(), ALL_KINDS.len());
    assert!(!statuses.contains(&EXIT_USAGE));
  }

  #[test]
  fn test_only_clean_exits_zero() {
    for kind in ALL_KINDS {
      assert_eq!(exit_status(kind) == 0, kind == OutcomeKind::Clean, "{kind:?}");
    }
  }

  #[test]
  fn test_historical_status_numbers() {
    assert_eq!(exit_status(OutcomeKind::Violations), 1);
    assert_eq!(exit_status(OutcomeKind::Failed(FailureKind::TreeAccess)), 2);
    assert_eq!(exit_status(OutcomeKind::Failed(FailureKind::Walk)), 4);
    assert_eq!(exit_status(OutcomeKind::Failed(FailureKind::FileOpen)), 5);
    assert_eq!(exit_status(OutcomeKind::Failed(FailureKind::Rewrite)), 6);
    assert_eq!(exit_status(OutcomeKind::Failed(FailureKind::UnknownLicense)), 7);
  }

  #[test]
  fn test_license_help_lists_identifiers() {
    let help = license_help();
    assert!(help.contains("ASL2, ASL2-Short, Cloud, Elastic, Elasticv2"));
  }

  #[test]
  fn test_version_line() {
    assert!(version_line().starts_with(concat!("licenser ", env!("CARGO_PKG_VERSION"), " (")));
  }
}
