//! # Logging Module
//!
//! This module provides logging utilities for the licenser tool, including:
//! - A `tracing` subscriber writing structured diagnostics to stderr
//! - Verbose logging that can be enabled/disabled
//! - Color mode selection for terminal output
//!
//! Nothing here ever writes to stdout; stdout is reserved for the
//! missing-header report.
//!
//! ## Example
//!
//! ```rust
//! use licenser::logging::{ColorMode, set_verbose};
//! use licenser::verbose_log;
//!
//! // Enable verbose logging
//! set_verbose();
//!
//! // Never emit ANSI escapes
//! ColorMode::Never.apply();
//!
//! // Log a verbose message (goes to stderr)
//! verbose_log!("Processing file: {}", "example.go");
//! ```

mod modes;

pub use modes::{ColorMode, init_tracing, is_verbose, set_verbose};

/// Logs a message to stderr if verbose mode is enabled.
///
/// This macro is used for detailed logging that is only shown when verbose mode
/// is enabled via [`set_verbose`]. It uses the same format string syntax as
/// the standard [`eprintln!`] macro.
#[macro_export]
macro_rules! verbose_log {
    ($($arg:tt)*) => {
        if $crate::logging::is_verbose() {
            eprintln!($($arg)*);
        }
    };
}
