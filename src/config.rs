//! # Configuration Module
//!
//! The immutable settings of one run. A [`RunConfig`] is built once from the
//! parsed command line and handed to [`Processor::new`]; nothing in the engine
//! reads process-wide state.
//!
//! [`Processor::new`]: crate::processor::Processor::new

use std::path::PathBuf;

/// Default file extension to scan for.
pub const DEFAULT_EXTENSION: &str = ".go";

/// Default scan root.
pub const DEFAULT_PATH: &str = ".";

/// Default license identifier.
pub const DEFAULT_LICENSE: &str = "ASL2";

/// Default licensor substituted into the header.
pub const DEFAULT_LICENSOR: &str = "Elasticsearch B.V.";

/// Settings for a single run.
///
/// Use struct update syntax to override specific fields:
/// ```
/// use licenser::config::RunConfig;
///
/// let config = RunConfig {
///   dry_run: true,
///   exclusions: vec!["build".to_string()],
///   ..RunConfig::new("src")
/// };
/// assert_eq!(config.extension, ".go");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
  /// Directory (or single file) to scan
  pub root: PathBuf,
  /// Literal file-name suffix selecting qualifying files
  pub extension: String,
  /// Registry identifier of the header to enforce
  pub license: String,
  /// Name substituted into the header template
  pub licensor: String,
  /// Root-relative paths to skip
  pub exclusions: Vec<String>,
  /// Report offenders instead of rewriting them
  pub dry_run: bool,
}

impl RunConfig {
  /// Creates a config for `root` with every other setting at its default.
  pub fn new(root: impl Into<PathBuf>) -> Self {
    Self {
      root: root.into(),
      extension: DEFAULT_EXTENSION.to_string(),
      license: DEFAULT_LICENSE.to_string(),
      licensor: DEFAULT_LICENSOR.to_string(),
      exclusions: Vec::new(),
      dry_run: false,
    }
  }
}

impl Default for RunConfig {
  fn default() -> Self {
    Self::new(DEFAULT_PATH)
  }
}
