//! # Workspace Module
//!
//! This module validates the scan root a run operates on.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::LicenserError;

/// A scan root that existed when the run started.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Workspace {
  /// Root is a directory, walked recursively.
  Directory { root: PathBuf },
  /// Root is a single file, checked on its own.
  File { root: PathBuf },
}

impl Workspace {
  pub fn root(&self) -> &Path {
    match self {
      Self::Directory { root } | Self::File { root } => root.as_path(),
    }
  }

  pub const fn is_dir(&self) -> bool {
    matches!(self, Self::Directory { .. })
  }
}

/// Stats `root` before any traversal starts.
///
/// # Errors
///
/// Returns [`LicenserError::TreeAccess`] if the root does not exist or cannot
/// be stat'ed.
pub fn resolve_workspace(root: &Path) -> Result<Workspace, LicenserError> {
  let metadata = std::fs::metadata(root).map_err(|source| LicenserError::TreeAccess {
    path: root.to_path_buf(),
    source,
  })?;

  let root = root.to_path_buf();
  debug!("Using scan root: {}", root.display());

  if metadata.is_dir() {
    Ok(Workspace::Directory { root })
  } else {
    Ok(Workspace::File { root })
  }
}
