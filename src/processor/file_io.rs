//! # File I/O Module
//!
//! This module provides the file operations used by the processor: opening a
//! file for the header check and atomically rewriting it with the header.

use std::fs::File;
use std::io::{BufReader, Write as _};
use std::path::Path;

use anyhow::{Context, Result};
use tempfile::NamedTempFile;

/// File I/O operations for the processor.
pub struct FileIO;

impl FileIO {
  /// Opens a file for the header check.
  ///
  /// The returned reader owns the handle; dropping it closes the file.
  pub fn open_for_check(path: &Path) -> std::io::Result<BufReader<File>> {
    File::open(path).map(BufReader::new)
  }

  /// Prepends `header` to the file at `path`.
  ///
  /// The new content (`header` followed by the complete original bytes) is
  /// written to a temporary file in the same directory, which then replaces
  /// the original with a single rename. The original permissions are kept.
  /// A failure at any step leaves the original file untouched.
  ///
  /// # Errors
  ///
  /// Returns an error if the original cannot be read, the replacement cannot
  /// be written, or the replacement cannot be moved into place.
  pub fn rewrite_with_header(path: &Path, header: &[u8]) -> Result<()> {
    let original = std::fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))?;
    let permissions = std::fs::metadata(path)
      .with_context(|| format!("Failed to read metadata: {}", path.display()))?
      .permissions();

    let dir = match path.parent() {
      Some(parent) if !parent.as_os_str().is_empty() => parent,
      _ => Path::new("."),
    };

    let mut replacement = NamedTempFile::new_in(dir)
      .with_context(|| format!("Failed to create replacement file in: {}", dir.display()))?;
    replacement
      .write_all(header)
      .and_then(|()| replacement.write_all(&original))
      .and_then(|()| replacement.as_file().sync_all())
      .with_context(|| format!("Failed to write replacement for: {}", path.display()))?;
    std::fs::set_permissions(replacement.path(), permissions)
      .with_context(|| format!("Failed to set permissions on replacement for: {}", path.display()))?;

    replacement
      .persist(path)
      .map_err(|e| e.error)
      .with_context(|| format!("Failed to replace file: {}", path.display()))?;

    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use std::io::Read as _;

  use super::*;

  #[test]
  fn test_rewrite_prepends_header_and_keeps_content() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("main.go");
    std::fs::write(&path, "package main\n\nfunc main() {}\n").unwrap();

    FileIO::rewrite_with_header(&path, b"// header\n").unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(content, "// header\npackage main\n\nfunc main() {}\n");
  }

  #[test]
  fn test_rewrite_preserves_non_utf8_bytes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("blob.go");
    std::fs::write(&path, [0xFF, 0xFE, 0x00, b'\n']).unwrap();

    FileIO::rewrite_with_header(&path, b"// h\n").unwrap();

    assert_eq!(std::fs::read(&path).unwrap(), b"// h\n\xFF\xFE\x00\n");
  }

  #[test]
  fn test_rewrite_leaves_no_stray_files() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("a.go");
    std::fs::write(&path, "package a\n").unwrap();

    FileIO::rewrite_with_header(&path, b"// h\n").unwrap();

    let names: Vec<_> = std::fs::read_dir(dir.path())
      .unwrap()
      .map(|e| e.unwrap().file_name())
      .collect();
    assert_eq!(names, vec![std::ffi::OsString::from("a.go")]);
  }

  #[cfg(unix)]
  #[test]
  fn test_rewrite_preserves_permissions() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("run.go");
    std::fs::write(&path, "package run\n").unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o754)).unwrap();

    FileIO::rewrite_with_header(&path, b"// h\n").unwrap();

    let mode = std::fs::metadata(&path).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o754);
  }

  #[test]
  fn test_rewrite_missing_file_fails_without_creating_it() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gone.go");

    let err = FileIO::rewrite_with_header(&path, b"// h\n").unwrap_err();
    assert!(err.to_string().contains("Failed to read file"));
    assert!(!path.exists());
  }

  #[test]
  fn test_open_for_check_reads_content() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("a.go");
    std::fs::write(&path, "package a\n").unwrap();

    let mut content = String::new();
    FileIO::open_for_check(&path).unwrap().read_to_string(&mut content).unwrap();
    assert_eq!(content, "package a\n");
    assert!(FileIO::open_for_check(&dir.path().join("missing.go")).is_err());
  }
}
