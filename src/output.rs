//! # Output Module
//!
//! This module centralizes all user-facing output for the licenser tool.
//!
//! - Violation lines go to the writer the caller supplies (stdout for the
//!   CLI) and are never colored, so they stay predictable for automation.
//! - Fatal diagnostics go to stderr, with an optional colored prefix.

use std::borrow::Cow;
use std::io::Write;
use std::path::Path;

use owo_colors::{OwoColorize, Stream};
use tracing::warn;

/// Suffix of the line printed for every file missing its header.
pub const MISSING_HEADER_SUFFIX: &str = ": is missing the license header";

/// Writes `<path>: is missing the license header` to `out`.
///
/// The path is shown relative to the current directory when possible.
pub fn print_missing_file(out: &mut dyn Write, path: &Path) {
  let display_path = make_relative_path(path, std::env::current_dir().ok().as_deref());
  if let Err(e) = writeln!(out, "{}{}", display_path.display(), MISSING_HEADER_SUFFIX) {
    warn!("Failed to write report line for {}: {}", path.display(), e);
  }
}

/// Prints a fatal error to stderr, including its cause chain.
pub fn print_error(err: &dyn std::error::Error) {
  eprintln!(
    "{} {}",
    "error:".if_supports_color(Stream::Stderr, |t| t.red().bold().to_string()),
    err
  );
}

/// Make a path relative to `base` for display.
///
/// Falls back to the path as given when no relative form exists.
pub fn make_relative_path<'a>(path: &'a Path, base: Option<&Path>) -> Cow<'a, Path> {
  let Some(base) = base else {
    return Cow::Borrowed(path);
  };

  let absolute: Cow<'_, Path> = if path.is_absolute() {
    Cow::Borrowed(path)
  } else {
    Cow::Owned(base.join(path))
  };

  match pathdiff::diff_paths(&absolute, base) {
    Some(rel) if !rel.as_os_str().is_empty() => Cow::Owned(rel),
    _ => Cow::Borrowed(path),
  }
}
