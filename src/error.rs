//! # Error Module
//!
//! Fatal errors raised by a run. Each variant names the stage that failed and
//! carries the underlying cause as its source.

use std::path::PathBuf;

/// The stage a fatal error came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
  /// The license identifier is not in the registry
  UnknownLicense,
  /// The scan root cannot be accessed
  TreeAccess,
  /// A directory could not be enumerated
  Walk,
  /// A qualifying file could not be opened
  FileOpen,
  /// A file could not be rewritten with the header
  Rewrite,
}

/// Error type for a licenser run.
#[derive(Debug, thiserror::Error)]
pub enum LicenserError {
  /// The requested license is not registered.
  #[error("unknown license: {license}")]
  UnknownLicense { license: String },

  /// The scan root does not exist or cannot be stat'ed.
  #[error("failed to stat tree '{}': {source}", path.display())]
  TreeAccess { path: PathBuf, source: std::io::Error },

  /// Directory traversal failed part-way.
  #[error("failed to walk path: {source}")]
  Walk { source: walkdir::Error },

  /// A qualifying file could not be opened for the header check.
  #[error("failed to open '{}': {source}", path.display())]
  FileOpen { path: PathBuf, source: std::io::Error },

  /// The header could not be written to a file.
  #[error("failed to rewrite '{}': {source:#}", path.display())]
  Rewrite {
    path: PathBuf,
    #[source]
    source: anyhow::Error,
  },
}

impl LicenserError {
  pub const fn kind(&self) -> FailureKind {
    match self {
      Self::UnknownLicense { .. } => FailureKind::UnknownLicense,
      Self::TreeAccess { .. } => FailureKind::TreeAccess,
      Self::Walk { .. } => FailureKind::Walk,
      Self::FileOpen { .. } => FailureKind::FileOpen,
      Self::Rewrite { .. } => FailureKind::Rewrite,
    }
  }
}
