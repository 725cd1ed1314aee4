#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use licenser::config::RunConfig;
use licenser::processor;
use licenser::report::Outcome;
use licenser::templates::{LicenseData, LicenseRegistry, MaterializedHeader};

pub const GO_SOURCE: &str = "package main\n\nfunc main() {}\n";

/// Renders a built-in license header for `licensor`.
pub fn header(license: &str, licensor: &str) -> Result<MaterializedHeader> {
  let template = LicenseRegistry::builtin()
    .lookup(license)
    .ok_or_else(|| anyhow::anyhow!("unknown license {license}"))?;
  Ok(template.materialize(&LicenseData {
    licensor: licensor.to_string(),
  }))
}

/// The default header: ASL2 for Elasticsearch B.V.
pub fn default_header() -> Result<MaterializedHeader> {
  header("ASL2", "Elasticsearch B.V.")
}

/// Writes `content` to `root/rel`, creating parent directories.
pub fn write_file(root: &Path, rel: &str, content: impl AsRef<[u8]>) -> Result<PathBuf> {
  let path = root.join(rel);
  if let Some(parent) = path.parent() {
    fs::create_dir_all(parent)?;
  }
  fs::write(&path, content)?;
  Ok(path)
}

/// `header` followed by `body`.
pub fn with_header(header: &MaterializedHeader, body: &str) -> Vec<u8> {
  let mut content = header.as_bytes().to_vec();
  content.extend_from_slice(body.as_bytes());
  content
}

/// Runs the engine and returns the outcome with everything written to stdout.
pub fn run(config: RunConfig) -> (Outcome, String) {
  let mut out: Vec<u8> = Vec::new();
  let outcome = processor::run(config, &mut out);
  (outcome, String::from_utf8_lossy(&out).into_owned())
}

pub fn dry_run(root: &Path) -> (Outcome, String) {
  run(RunConfig {
    dry_run: true,
    ..RunConfig::new(root)
  })
}

pub fn rewrite(root: &Path) -> (Outcome, String) {
  run(RunConfig::new(root))
}

/// Snapshot of every file under `root`, sorted by path.
pub fn snapshot(root: &Path) -> Result<Vec<(PathBuf, Vec<u8>)>> {
  let mut files = Vec::new();
  for entry in walkdir::WalkDir::new(root).sort_by_file_name() {
    let entry = entry?;
    if entry.file_type().is_file() {
      files.push((entry.path().to_path_buf(), fs::read(entry.path())?));
    }
  }
  Ok(files)
}
