//! # File Collector Module
//!
//! This module walks the scan root depth-first and yields the qualifying
//! files, pruning excluded directories along the way.

use std::path::{Path, PathBuf};

use tracing::{debug, trace};
use walkdir::{DirEntry, WalkDir};

use crate::error::LicenserError;
use crate::file_filter::{ExclusionFilter, ExtensionFilter, FileFilter, WalkEntry};

/// Depth-first walker over a scan root.
///
/// The `FileCollector` handles:
/// - Deterministic traversal (entries sorted by name within each directory)
/// - Pruning excluded directories without descending into them
/// - Selecting files by extension
///
/// Symbolic links are never followed.
pub struct FileCollector<'a> {
  /// Root of the walk
  root: PathBuf,
  exclusion_filter: &'a ExclusionFilter,
  extension_filter: &'a ExtensionFilter,
}

impl<'a> FileCollector<'a> {
  pub fn new(root: &Path, exclusion_filter: &'a ExclusionFilter, extension_filter: &'a ExtensionFilter) -> Self {
    Self {
      root: root.to_path_buf(),
      exclusion_filter,
      extension_filter,
    }
  }

  /// Walks the root and yields every qualifying file in walk order.
  ///
  /// A directory that cannot be enumerated yields a
  /// [`LicenserError::Walk`]; callers stop at the first error.
  pub fn walk(&self) -> impl Iterator<Item = Result<WalkEntry, LicenserError>> + '_ {
    debug!(
      "Scanning {} for *{} files",
      self.root.display(),
      self.extension_filter.extension()
    );

    WalkDir::new(&self.root)
      .follow_links(false)
      .sort_by_file_name()
      .into_iter()
      .filter_entry(move |dent| {
        let entry = self.walk_entry(dent);
        let result = self.exclusion_filter.should_process(&entry);
        if !result.should_process && entry.is_dir {
          debug!("Pruning directory: {}", entry.relative);
        }
        result.should_process
      })
      .filter_map(move |dent| match dent {
        Err(source) => Some(Err(LicenserError::Walk { source })),
        Ok(dent) => {
          let entry = self.walk_entry(&dent);
          let result = self.extension_filter.should_process(&entry);
          if result.should_process {
            Some(Ok(entry))
          } else {
            if !entry.is_dir {
              trace!(
                "Skipping: {} ({})",
                entry.relative,
                result.reason.as_deref().unwrap_or("Unknown reason")
              );
            }
            None
          }
        }
      })
  }

  fn walk_entry(&self, dent: &DirEntry) -> WalkEntry {
    WalkEntry::new(&self.root, dent.path().to_path_buf(), dent.file_type().is_dir())
  }
}

#[cfg(test)]
mod tests {
  use std::fs;

  use super::*;

  fn collect(root: &Path, exclusions: &[&str], ext: &str) -> Vec<String> {
    let exclusions: Vec<String> = exclusions.iter().map(|s| s.to_string()).collect();
    let exclusion_filter = ExclusionFilter::new(&exclusions);
    let extension_filter = ExtensionFilter::new(ext);
    FileCollector::new(root, &exclusion_filter, &extension_filter)
      .walk()
      .map(|e| e.unwrap().relative)
      .collect()
  }

  fn touch(root: &Path, rel: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, "package x\n").unwrap();
  }

  #[test]
  fn test_walk_is_depth_first_and_sorted() {
    let dir = tempfile::tempdir().unwrap();
    for rel in ["b.go", "a/z.go", "a/b/c.go", "c.go", "a.go"] {
      touch(dir.path(), rel);
    }

    assert_eq!(
      collect(dir.path(), &[], ".go"),
      vec!["a/b/c.go", "a/z.go", "a.go", "b.go", "c.go"]
    );
  }

  #[test]
  fn test_walk_prunes_builtin_and_explicit_exclusions() {
    let dir = tempfile::tempdir().unwrap();
    for rel in [
      "main.go",
      "vendor/dep/dep.go",
      ".git/hooks/hook.go",
      "build/gen.go",
      "build/deep/deeper/gen.go",
      "pkg/build/kept.go",
      "pkg/vendor/dropped.go",
    ] {
      touch(dir.path(), rel);
    }

    assert_eq!(
      collect(dir.path(), &["build"], ".go"),
      vec!["main.go", "pkg/build/kept.go"]
    );
  }

  #[test]
  fn test_walk_skips_excluded_file_only() {
    let dir = tempfile::tempdir().unwrap();
    for rel in ["cmd/a.go", "cmd/b.go", "cmd/c.go"] {
      touch(dir.path(), rel);
    }

    assert_eq!(collect(dir.path(), &["cmd/b.go"], ".go"), vec!["cmd/a.go", "cmd/c.go"]);
  }

  #[test]
  fn test_walk_filters_by_extension() {
    let dir = tempfile::tempdir().unwrap();
    for rel in ["a.go", "b.rs", "c.GO", "d.go.bak", "dir.go/e.rs"] {
      touch(dir.path(), rel);
    }

    assert_eq!(collect(dir.path(), &[], ".go"), vec!["a.go"]);
    assert_eq!(collect(dir.path(), &[], ".rs"), vec!["b.rs", "dir.go/e.rs"]);
  }

  #[test]
  fn test_walk_single_file_root() {
    let dir = tempfile::tempdir().unwrap();
    touch(dir.path(), "only.go");
    let file = dir.path().join("only.go");

    let exclusion_filter = ExclusionFilter::default();
    let extension_filter = ExtensionFilter::new(".go");
    let entries: Vec<_> = FileCollector::new(&file, &exclusion_filter, &extension_filter)
      .walk()
      .map(|e| e.unwrap())
      .collect();

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].path, file);
  }

  #[test]
  fn test_walk_missing_root_yields_walk_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing");

    let exclusion_filter = ExclusionFilter::default();
    let extension_filter = ExtensionFilter::new(".go");
    let collector = FileCollector::new(&missing, &exclusion_filter, &extension_filter);
    let first = collector.walk().next().unwrap();
    assert!(matches!(first, Err(LicenserError::Walk { .. })));
  }
}
