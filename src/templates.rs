//! # Templates Module
//!
//! This module provides the built-in license header registry and the logic
//! that renders a registry template into the exact header a file must carry.
//!
//! The module includes:
//! - [`LicenseRegistry`] for looking up header templates by identifier
//! - [`LicenseTemplate`] for a single header template
//! - [`LicenseData`] for providing data to fill in templates
//! - [`MaterializedHeader`] for the rendered header lines and bytes
//!
//! ## Example
//!
//! ```rust
//! use licenser::templates::{LicenseData, LicenseRegistry};
//!
//! let registry = LicenseRegistry::builtin();
//! let template = registry.lookup("ASL2").expect("ASL2 is built in");
//!
//! let header = template.materialize(&LicenseData {
//!   licensor: "Acme Corp.".to_string(),
//! });
//!
//! assert_eq!(header.lines()[0], "// Licensed to Acme Corp. under one or more contributor");
//! assert!(header.as_bytes().ends_with(b"// under the License.\n"));
//! ```

use crate::verbose_log;

/// Placeholder substituted with the licensor name.
pub const LICENSOR_PLACEHOLDER: &str = "{{licensor}}";

/// Data used to fill out a license template.
#[derive(Debug, Clone)]
pub struct LicenseData {
  /// The name of the licensor substituted into the header
  pub licensor: String,
}

/// A header template: an identifier and the comment lines it expands to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LicenseTemplate {
  id: &'static str,
  lines: &'static [&'static str],
}

impl LicenseTemplate {
  /// The registry key of this template (e.g. `"ASL2"`).
  pub const fn id(&self) -> &'static str {
    self.id
  }

  /// The unrendered template lines, placeholders included.
  pub const fn lines(&self) -> &'static [&'static str] {
    self.lines
  }

  /// Renders the template with the given data.
  ///
  /// Every occurrence of [`LICENSOR_PLACEHOLDER`] is replaced with the
  /// licensor; lines without a placeholder pass through unchanged. Each line
  /// is followed by exactly one `\n`, the last one included.
  ///
  /// Rendering is a pure function of the template and the data, so two calls
  /// with the same inputs produce byte-identical headers.
  pub fn materialize(&self, data: &LicenseData) -> MaterializedHeader {
    verbose_log!("Rendering template {} with licensor: {}", self.id, data.licensor);

    let lines: Vec<String> = self
      .lines
      .iter()
      .map(|line| {
        if line.contains(LICENSOR_PLACEHOLDER) {
          line.replace(LICENSOR_PLACEHOLDER, &data.licensor)
        } else {
          (*line).to_string()
        }
      })
      .collect();

    let mut bytes = Vec::with_capacity(lines.iter().map(|l| l.len() + 1).sum());
    for line in &lines {
      bytes.extend_from_slice(line.as_bytes());
      bytes.push(b'\n');
    }

    MaterializedHeader { lines, bytes }
  }
}

/// A rendered license header.
///
/// Created once per run and shared by reference with every file check, so
/// all files are compared against (and rewritten with) the same bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterializedHeader {
  lines: Vec<String>,
  bytes: Vec<u8>,
}

impl MaterializedHeader {
  /// The rendered lines, without line terminators.
  pub fn lines(&self) -> &[String] {
    &self.lines
  }

  /// The canonical header bytes: every line followed by `\n`.
  pub fn as_bytes(&self) -> &[u8] {
    &self.bytes
  }

  pub fn line_count(&self) -> usize {
    self.lines.len()
  }
}

/// Registry of the license headers the tool knows about.
///
/// The set of identifiers is fixed at compile time; [`identifiers`] is used to
/// build the CLI help text.
///
/// [`identifiers`]: LicenseRegistry::identifiers
#[derive(Debug, Clone, Copy)]
pub struct LicenseRegistry {
  /// Templates sorted by identifier
  templates: &'static [LicenseTemplate],
}

impl Default for LicenseRegistry {
  fn default() -> Self {
    Self::builtin()
  }
}

impl LicenseRegistry {
  /// The registry of built-in license headers.
  pub const fn builtin() -> Self {
    Self { templates: BUILTIN }
  }

  /// Looks up a template by its exact identifier.
  ///
  /// Returns `None` for unknown identifiers; matching is case-sensitive.
  pub fn lookup(&self, id: &str) -> Option<LicenseTemplate> {
    let found = self.templates.iter().find(|t| t.id == id).copied();
    if found.is_none() {
      verbose_log!("No license template registered for: {}", id);
    }
    found
  }

  /// All known identifiers, in sorted order.
  pub fn identifiers(&self) -> impl Iterator<Item = &'static str> + '_ {
    self.templates.iter().map(|t| t.id)
  }
}

static BUILTIN: &[LicenseTemplate] = &[
  LicenseTemplate {
    id: "ASL2",
    lines: &[
      "// Licensed to {{licensor}} under one or more contributor",
      "// license agreements. See the NOTICE file distributed with",
      "// this work for additional information regarding copyright",
      "// ownership. {{licensor}} licenses this file to you under",
      "// the Apache License, Version 2.0 (the \"License\"); you may",
      "// not use this file except in compliance with the License.",
      "// You may obtain a copy of the License at",
      "//",
      "//     http://www.apache.org/licenses/LICENSE-2.0",
      "//",
      "// Unless required by applicable law or agreed to in writing,",
      "// software distributed under the License is distributed on an",
      "// \"AS IS\" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY",
      "// KIND, either express or implied.  See the License for the",
      "// specific language governing permissions and limitations",
      "// under the License.",
    ],
  },
  LicenseTemplate {
    id: "ASL2-Short",
    lines: &[
      "// Licensed to {{licensor}} under one or more agreements.",
      "// {{licensor}} licenses this file to you under the Apache 2.0 License.",
      "// See the LICENSE file in the project root for more information.",
    ],
  },
  LicenseTemplate {
    id: "Cloud",
    lines: &[
      "// CONFIDENTIAL",
      "// __________________",
      "//",
      "//  Copyright {{licensor}} All rights reserved.",
      "//",
      "// NOTICE:  All information contained herein is, and remains",
      "// the property of {{licensor}} and its suppliers, if any.",
      "// The intellectual and technical concepts contained herein",
      "// are proprietary to {{licensor}} and its suppliers and",
      "// may be covered by U.S. and Foreign Patents, patents in",
      "// process, and are protected by trade secret or copyright",
      "// law.  Dissemination of this information or reproduction of",
      "// this material is strictly forbidden unless prior written",
      "// permission is obtained from {{licensor}}.",
    ],
  },
  LicenseTemplate {
    id: "Elastic",
    lines: &[
      "// Copyright {{licensor}} and/or licensed to {{licensor}} under one",
      "// or more contributor license agreements. Licensed under the Elastic License;",
      "// you may not use this file except in compliance with the Elastic License.",
    ],
  },
  LicenseTemplate {
    id: "Elasticv2",
    lines: &[
      "// Copyright {{licensor}} and/or licensed to {{licensor}} under one",
      "// or more contributor license agreements. Licensed under the Elastic License 2.0;",
      "// you may not use this file except in compliance with the Elastic License 2.0.",
    ],
  },
];
