//! # License Detection Module
//!
//! This module contains the interfaces and implementations for license header
//! detection. It allows for replacing the detection algorithm without
//! modifying the processor.

use std::io::BufRead;

use tracing::trace;

use crate::templates::MaterializedHeader;

/// Trait for license detectors.
///
/// Implementations decide whether a file's leading content already carries
/// the expected header. Detection never fails: anything unreadable or
/// unexpected counts as "header absent".
pub trait LicenseDetector {
  /// Checks whether the content read from `reader` carries `header`.
  fn has_license(&self, reader: &mut dyn BufRead, header: &MaterializedHeader) -> bool;
}

/// Line-exact header detector.
///
/// Every header line must appear verbatim, in order, either starting at the
/// first line of the file or right after a single leading line (a shebang,
/// build constraint, or similar directive). Only `header lines + 1` lines are
/// ever read.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExactHeaderDetector;

impl ExactHeaderDetector {
  pub const fn new() -> Self {
    Self
  }
}

impl LicenseDetector for ExactHeaderDetector {
  fn has_license(&self, reader: &mut dyn BufRead, header: &MaterializedHeader) -> bool {
    let expected = header.lines();
    let Some(leading) = read_leading_lines(reader, expected.len() + 1) else {
      return false;
    };

    if matches_at(&leading, expected, 0) {
      return true;
    }

    let tolerated = matches_at(&leading, expected, 1);
    if tolerated {
      trace!("Header found after a leading line");
    }
    tolerated
  }
}

/// Reads at most `limit` lines, each stripped of its `\n` and then `\r`.
///
/// Returns `None` if reading fails.
fn read_leading_lines(reader: &mut dyn BufRead, limit: usize) -> Option<Vec<Vec<u8>>> {
  let mut lines = Vec::with_capacity(limit);
  let mut buf = Vec::new();

  while lines.len() < limit {
    buf.clear();
    match reader.read_until(b'\n', &mut buf) {
      Ok(0) => break,
      Ok(_) => {
        if buf.last() == Some(&b'\n') {
          buf.pop();
        }
        if buf.last() == Some(&b'\r') {
          buf.pop();
        }
        lines.push(buf.clone());
      }
      Err(e) => {
        trace!("Treating unreadable content as missing a header: {}", e);
        return None;
      }
    }
  }

  Some(lines)
}

fn matches_at(leading: &[Vec<u8>], expected: &[String], offset: usize) -> bool {
  let Some(candidate) = leading.get(offset..offset + expected.len()) else {
    return false;
  };

  candidate
    .iter()
    .zip(expected)
    .all(|(actual, wanted)| actual.as_slice() == wanted.as_bytes())
}

#[cfg(test)]
mod tests {
  use std::io::Cursor;

  use super::*;
  use crate::templates::{LicenseData, LicenseRegistry};

  fn header(id: &str) -> MaterializedHeader {
    LicenseRegistry::builtin().lookup(id).unwrap().materialize(&LicenseData {
      licensor: "Acme".to_string(),
    })
  }

  fn detect(content: &[u8], header: &MaterializedHeader) -> bool {
    ExactHeaderDetector::new().has_license(&mut Cursor::new(content), header)
  }

  #[test]
  fn test_header_at_first_line() {
    let header = header("ASL2");
    let mut content = header.as_bytes().to_vec();
    content.extend_from_slice(b"\npackage main\n");
    assert!(detect(&content, &header));
  }

  #[test]
  fn test_header_is_entire_file() {
    let header = header("Elastic");
    assert!(detect(header.as_bytes(), &header));
  }

  #[test]
  fn test_header_after_shebang() {
    let header = header("ASL2-Short");
    let mut content = b"#!/usr/bin/env bash\n".to_vec();
    content.extend_from_slice(header.as_bytes());
    assert!(detect(&content, &header));
  }

  #[test]
  fn test_header_after_two_leading_lines_is_absent() {
    let header = header("ASL2-Short");
    let mut content = b"#!/usr/bin/env bash\n\n".to_vec();
    content.extend_from_slice(header.as_bytes());
    assert!(!detect(&content, &header));
  }

  #[test]
  fn test_wrong_licensor_is_absent() {
    let header = header("Elastic");
    let other = LicenseRegistry::builtin().lookup("Elastic").unwrap().materialize(&LicenseData {
      licensor: "Someone Else".to_string(),
    });
    assert!(!detect(other.as_bytes(), &header));
  }

  #[test]
  fn test_truncated_header_is_absent() {
    let header = header("ASL2");
    let truncated: Vec<u8> = header.lines()[..10].join("\n").into_bytes();
    assert!(!detect(&truncated, &header));
  }

  #[test]
  fn test_last_line_without_newline_still_matches() {
    let header = header("Elasticv2");
    let content = header.lines().join("\n");
    assert!(detect(content.as_bytes(), &header));
  }

  #[test]
  fn test_crlf_lines_match() {
    let header = header("Elasticv2");
    let content = header.lines().join("\r\n") + "\r\n";
    assert!(detect(content.as_bytes(), &header));
  }

  #[test]
  fn test_empty_and_binary_content_is_absent() {
    let header = header("ASL2");
    assert!(!detect(b"", &header));
    assert!(!detect(&[0xFF, 0xFE, 0x00, 0x00], &header));
  }

  #[test]
  fn test_different_comment_text_is_absent() {
    let header = header("Elastic");
    let content = "// Copyright (c) 2024 Acme\n\npackage main\n";
    assert!(!detect(content.as_bytes(), &header));
  }
}
