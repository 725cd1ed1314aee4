//! # File Filter Module
//!
//! This module contains the components that decide which walk entries are
//! looked at: exclusion rules that prune whole subtrees, and the extension
//! filter that selects qualifying files.

use std::path::{Path, PathBuf};

use tracing::trace;

/// Directory names that are always pruned, whatever the user excludes.
pub const BUILTIN_EXCLUDED_DIRS: &[&str] = &[".git", "vendor"];

/// A path produced by the tree walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkEntry {
  /// Path as reached from the scan root (root joined with `relative`)
  pub path: PathBuf,
  /// Path relative to the scan root, `/`-separated, no leading separator.
  /// Empty for the root itself.
  pub relative: String,
  pub is_dir: bool,
}

impl WalkEntry {
  /// Builds an entry, deriving the normalised relative path from `root`.
  pub fn new(root: &Path, path: PathBuf, is_dir: bool) -> Self {
    let relative = path
      .strip_prefix(root)
      .map(|rel| normalize_relative(&rel.to_string_lossy()))
      .unwrap_or_else(|_| normalize_relative(&path.to_string_lossy()));

    Self { path, relative, is_dir }
  }

  /// The final path component, if any.
  pub fn name(&self) -> Option<&str> {
    self.path.file_name().and_then(|n| n.to_str())
  }
}

/// Normalises a path fragment for whole-path comparison.
///
/// Backslashes become `/`, and leading `./` or `/` as well as trailing `/`
/// are stripped.
pub fn normalize_relative(raw: &str) -> String {
  let mut path = raw.replace('\\', "/");

  loop {
    if let Some(rest) = path.strip_prefix("./") {
      path = rest.to_string();
    } else if let Some(rest) = path.strip_prefix('/') {
      path = rest.to_string();
    } else {
      break;
    }
  }

  while path.ends_with('/') {
    path.pop();
  }

  if path == "." { String::new() } else { path }
}

/// Result of a file filtering operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterResult {
  /// Whether the entry should be processed
  pub should_process: bool,
  /// Reason why the entry should not be processed (if any)
  pub reason: Option<String>,
}

impl FilterResult {
  /// Creates a new FilterResult indicating the entry should be processed.
  pub const fn process() -> Self {
    Self {
      should_process: true,
      reason: None,
    }
  }

  /// Creates a new FilterResult indicating the entry should be skipped.
  pub fn skip(reason: impl Into<String>) -> Self {
    Self {
      should_process: false,
      reason: Some(reason.into()),
    }
  }
}

/// Trait for components that filter walk entries.
pub trait FileFilter {
  /// Determines whether an entry should be processed.
  fn should_process(&self, entry: &WalkEntry) -> FilterResult;
}

/// Filter that excludes built-in infrastructure directories and explicit
/// user-supplied paths.
///
/// Explicit exclusions match the root-relative path exactly, never as a
/// substring. Built-in names match any directory's own name at any depth.
/// The scan root itself is never excluded.
#[derive(Debug, Clone, Default)]
pub struct ExclusionFilter {
  explicit: Vec<String>,
}

impl ExclusionFilter {
  pub fn new(explicit: &[String]) -> Self {
    let explicit = explicit
      .iter()
      .map(|e| normalize_relative(e))
      .filter(|e| !e.is_empty())
      .collect();

    Self { explicit }
  }

  /// Whether `entry` must be skipped (and, for a directory, pruned).
  pub fn is_excluded(&self, entry: &WalkEntry) -> bool {
    if entry.relative.is_empty() {
      return false;
    }

    if entry.is_dir
      && let Some(name) = entry.name()
      && BUILTIN_EXCLUDED_DIRS.contains(&name)
    {
      return true;
    }

    self.explicit.iter().any(|e| *e == entry.relative)
  }
}

impl FileFilter for ExclusionFilter {
  fn should_process(&self, entry: &WalkEntry) -> FilterResult {
    if self.is_excluded(entry) {
      trace!("Skipping: {} (excluded)", entry.relative);
      FilterResult::skip("Excluded path")
    } else {
      FilterResult::process()
    }
  }
}

/// Filter selecting files whose name ends with a literal suffix.
///
/// Matching is case-sensitive. Directories never pass.
#[derive(Debug, Clone)]
pub struct ExtensionFilter {
  extension: String,
}

impl ExtensionFilter {
  pub fn new(extension: impl Into<String>) -> Self {
    Self {
      extension: extension.into(),
    }
  }

  pub fn extension(&self) -> &str {
    &self.extension
  }

  pub fn matches(&self, path: &Path) -> bool {
    path
      .file_name()
      .is_some_and(|name| name.as_encoded_bytes().ends_with(self.extension.as_bytes()))
  }
}

impl FileFilter for ExtensionFilter {
  fn should_process(&self, entry: &WalkEntry) -> FilterResult {
    if entry.is_dir {
      return FilterResult::skip("Directory");
    }

    if self.matches(&entry.path) {
      FilterResult::process()
    } else {
      FilterResult::skip(format!("Extension is not {}", self.extension))
    }
  }
}
