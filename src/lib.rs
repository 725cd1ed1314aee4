//! # licenser
//!
//! Ensures every source file under a directory tree carries an approved
//! license header.
//!
//! `licenser` walks a tree, checks each file with the configured extension
//! for the exact header rendered from a built-in license template, and either
//! reports the files that lack it (dry-run) or prepends the header in place.
//! Files that already carry the header are never modified, so repeated runs
//! are idempotent.
//!
//! ## Features
//!
//! * Built-in registry of license headers with a licensor placeholder
//! * Line-exact header detection, tolerating one leading directive line
//! * Pruning of `.git`, `vendor` and user-excluded paths
//! * Atomic, permission-preserving rewrites
//! * Distinct outcome kinds for violations and each kind of failure
//!
//! ## Usage as a Library
//!
//! ```rust,no_run
//! use licenser::config::RunConfig;
//! use licenser::processor;
//! use licenser::report::Outcome;
//!
//! let config = RunConfig {
//!   dry_run: true,
//!   exclusions: vec!["build".to_string()],
//!   ..RunConfig::new("src")
//! };
//!
//! match processor::run(config, &mut std::io::stdout()) {
//!   Outcome::Clean(_) => println!("all files carry the header"),
//!   Outcome::Violations(report) => println!("{} files need a header", report.missing().count()),
//!   Outcome::Failed(err) => eprintln!("{err}"),
//! }
//! ```
//!
//! ## Modules
//!
//! * [`processor`] - Runs a walk and checks or rewrites files
//! * [`templates`] - License registry and header rendering
//! * [`license_detection`] - Header detection
//! * [`file_filter`] - Exclusion and extension filters
//! * [`report`] - Per-file results and run outcomes
//! * [`logging`] - Logging utilities for verbose output

pub mod config;
pub mod error;
pub mod file_filter;
pub mod license_detection;
pub mod logging;
pub mod output;
pub mod processor;
pub mod report;
pub mod templates;
pub mod workspace;
