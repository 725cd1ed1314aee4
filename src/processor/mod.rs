//! # Processor Module
//!
//! This module drives a run: it resolves the license, validates the scan
//! root, walks the tree and checks every qualifying file, reporting or
//! rewriting the ones that lack the header.
//!
//! The module is organized into several submodules:
//! - [`file_io`] - Opening files for the check and rewriting them atomically
//! - [`file_collector`] - Directory traversal with pruning and extension filtering
//!
//! The [`Processor`] struct is the main entry point; [`run`] is a shorthand
//! for building one from a [`RunConfig`] and running it.

mod file_collector;
mod file_io;

use std::io::Write;
use std::path::Path;

pub use file_collector::FileCollector;
pub use file_io::FileIO;
use tracing::{debug, info, trace};

use crate::config::RunConfig;
use crate::error::LicenserError;
use crate::file_filter::{ExclusionFilter, ExtensionFilter};
use crate::license_detection::{ExactHeaderDetector, LicenseDetector};
use crate::output::print_missing_file;
use crate::report::{FileAction, Outcome, RunReport};
use crate::templates::{LicenseData, LicenseRegistry, MaterializedHeader};
use crate::workspace::resolve_workspace;

/// Processor for checking and adding license headers.
///
/// Construction validates the license identifier, so an unknown license is
/// rejected before the filesystem is touched. The rendered header is fixed
/// for the processor's lifetime.
pub struct Processor {
  config: RunConfig,

  /// Header every qualifying file is checked against and rewritten with
  header: MaterializedHeader,

  exclusion_filter: ExclusionFilter,

  extension_filter: ExtensionFilter,

  /// License detector for checking if files have the header
  license_detector: Box<dyn LicenseDetector>,
}

impl Processor {
  /// Creates a processor with the built-in registry and detector.
  ///
  /// # Errors
  ///
  /// Returns [`LicenserError::UnknownLicense`] if `config.license` is not a
  /// registered identifier.
  pub fn new(config: RunConfig) -> Result<Self, LicenserError> {
    Self::with_detector(config, LicenseRegistry::builtin(), Box::new(ExactHeaderDetector::new()))
  }

  /// Creates a processor with a custom registry and license detector.
  pub fn with_detector(
    config: RunConfig,
    registry: LicenseRegistry,
    license_detector: Box<dyn LicenseDetector>,
  ) -> Result<Self, LicenserError> {
    let template = registry
      .lookup(&config.license)
      .ok_or_else(|| LicenserError::UnknownLicense {
        license: config.license.clone(),
      })?;

    let header = template.materialize(&LicenseData {
      licensor: config.licensor.clone(),
    });
    debug!(
      "Using license {} ({} lines) for licensor {:?}",
      template.id(),
      header.line_count(),
      config.licensor
    );

    Ok(Self {
      exclusion_filter: ExclusionFilter::new(&config.exclusions),
      extension_filter: ExtensionFilter::new(config.extension.clone()),
      header,
      license_detector,
      config,
    })
  }

  pub const fn header(&self) -> &MaterializedHeader {
    &self.header
  }

  pub const fn config(&self) -> &RunConfig {
    &self.config
  }

  /// Runs the walk, writing dry-run violation lines to `out`.
  ///
  /// The walk stops at the first filesystem or rewrite error. In dry-run
  /// mode every violation is reported before the aggregate outcome is
  /// returned.
  pub fn run(&self, out: &mut dyn Write) -> Outcome {
    match self.process(out) {
      Ok(report) if self.config.dry_run && report.has_missing() => Outcome::Violations(report),
      Ok(report) => Outcome::Clean(report),
      Err(err) => Outcome::Failed(err),
    }
  }

  fn process(&self, out: &mut dyn Write) -> Result<RunReport, LicenserError> {
    let workspace = resolve_workspace(&self.config.root)?;
    if !workspace.is_dir() {
      debug!("Scan root is a single file");
    }

    let collector = FileCollector::new(workspace.root(), &self.exclusion_filter, &self.extension_filter);
    let mut report = RunReport::default();

    for entry in collector.walk() {
      let entry = entry?;
      let action = self.process_file(&entry.path, out)?;
      report.record(&entry.path, action);
    }

    debug!(
      "Checked {} files: {} missing, {} added",
      report.files_scanned(),
      report.missing().count(),
      report.added().count()
    );

    Ok(report)
  }

  /// Checks a single qualifying file and reports or rewrites it.
  ///
  /// A file that already carries the header is never opened for writing.
  pub fn process_file(&self, path: &Path, out: &mut dyn Write) -> Result<FileAction, LicenserError> {
    if self.has_license(path)? {
      trace!("Header present: {}", path.display());
      return Ok(FileAction::NoActionNeeded);
    }

    if self.config.dry_run {
      print_missing_file(out, path);
      return Ok(FileAction::Missing);
    }

    FileIO::rewrite_with_header(path, self.header.as_bytes()).map_err(|source| LicenserError::Rewrite {
      path: path.to_path_buf(),
      source,
    })?;
    info!("Added license header to: {}", path.display());

    Ok(FileAction::Added)
  }

  /// Checks whether the file at `path` already carries the header.
  ///
  /// The file handle is released before this returns.
  pub fn has_license(&self, path: &Path) -> Result<bool, LicenserError> {
    let mut reader = FileIO::open_for_check(path).map_err(|source| LicenserError::FileOpen {
      path: path.to_path_buf(),
      source,
    })?;

    Ok(self.license_detector.has_license(&mut reader, &self.header))
  }
}

/// Builds a [`Processor`] from `config` and runs it.
///
/// This is the single entry point used by the command line: configuration
/// errors surface as [`Outcome::Failed`] like any other fatal error.
pub fn run(config: RunConfig, out: &mut dyn Write) -> Outcome {
  match Processor::new(config) {
    Ok(processor) => processor.run(out),
    Err(err) => Outcome::Failed(err),
  }
}

#[cfg(test)]
mod tests {
  use std::fs;

  use super::*;
  use crate::error::FailureKind;
  use crate::report::OutcomeKind;

  #[test]
  fn test_unknown_license_rejected_before_walk() {
    let config = RunConfig {
      license: "GPL3".to_string(),
      ..RunConfig::new("/definitely/not/here")
    };
    let err = Processor::new(config).err().unwrap();
    assert_eq!(err.kind(), FailureKind::UnknownLicense);
  }

  #[test]
  fn test_custom_detector_is_used() {
    struct AlwaysLicensed;
    impl LicenseDetector for AlwaysLicensed {
      fn has_license(&self, _reader: &mut dyn std::io::BufRead, _header: &MaterializedHeader) -> bool {
        true
      }
    }

    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("main.go"), "package main\n").unwrap();

    let config = RunConfig {
      dry_run: true,
      ..RunConfig::new(dir.path())
    };
    let processor = Processor::with_detector(config, LicenseRegistry::builtin(), Box::new(AlwaysLicensed)).unwrap();

    let mut out: Vec<u8> = Vec::new();
    let outcome = processor.run(&mut out);
    assert_eq!(outcome.kind(), OutcomeKind::Clean);
    assert!(out.is_empty());
  }

  #[test]
  fn test_process_file_open_failure() {
    let dir = tempfile::tempdir().unwrap();
    let processor = Processor::new(RunConfig::new(dir.path())).unwrap();

    let err = processor
      .process_file(&dir.path().join("missing.go"), &mut Vec::<u8>::new())
      .unwrap_err();
    assert_eq!(err.kind(), FailureKind::FileOpen);
  }
}
