//! # Report Module
//!
//! Per-file results and the single [`Outcome`] value a run hands back to its
//! caller.

use std::path::{Path, PathBuf};

use crate::error::{FailureKind, LicenserError};

/// What happened to a qualifying file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileAction {
  /// The file already carried the header
  NoActionNeeded,
  /// The header is missing (dry-run: reported, not modified)
  Missing,
  /// The header was prepended to the file
  Added,
}

/// Report for a single qualifying file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
  pub path: PathBuf,
  pub action: FileAction,
}

/// Everything a completed walk observed, in walk order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
  files: Vec<FileReport>,
}

impl RunReport {
  pub fn record(&mut self, path: &Path, action: FileAction) {
    self.files.push(FileReport {
      path: path.to_path_buf(),
      action,
    });
  }

  pub fn files(&self) -> &[FileReport] {
    &self.files
  }

  /// Number of qualifying files that were checked.
  pub fn files_scanned(&self) -> usize {
    self.files.len()
  }

  /// Files reported as missing the header.
  pub fn missing(&self) -> impl Iterator<Item = &Path> {
    self.with_action(FileAction::Missing)
  }

  /// Files that had the header prepended.
  pub fn added(&self) -> impl Iterator<Item = &Path> {
    self.with_action(FileAction::Added)
  }

  pub fn has_missing(&self) -> bool {
    self.missing().next().is_some()
  }

  fn with_action(&self, action: FileAction) -> impl Iterator<Item = &Path> {
    self
      .files
      .iter()
      .filter(move |f| f.action == action)
      .map(|f| f.path.as_path())
  }
}

/// The terminal state of a run.
#[derive(Debug)]
pub enum Outcome {
  /// Every qualifying file carries (or now carries) the header.
  Clean(RunReport),
  /// Dry-run only: at least one file is missing the header.
  Violations(RunReport),
  /// A fatal error stopped the run.
  Failed(LicenserError),
}

/// The tag of an [`Outcome`]. The CLI maps each tag to a distinct exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutcomeKind {
  Clean,
  Violations,
  Failed(FailureKind),
}

impl Outcome {
  pub fn kind(&self) -> OutcomeKind {
    match self {
      Self::Clean(_) => OutcomeKind::Clean,
      Self::Violations(_) => OutcomeKind::Violations,
      Self::Failed(err) => OutcomeKind::Failed(err.kind()),
    }
  }

  /// The walk report, unless the run failed.
  pub const fn report(&self) -> Option<&RunReport> {
    match self {
      Self::Clean(report) | Self::Violations(report) => Some(report),
      Self::Failed(_) => None,
    }
  }

  pub const fn error(&self) -> Option<&LicenserError> {
    match self {
      Self::Failed(err) => Some(err),
      _ => None,
    }
  }
}

impl From<LicenserError> for Outcome {
  fn from(err: LicenserError) -> Self {
    Self::Failed(err)
  }
}
