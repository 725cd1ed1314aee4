use std::sync::atomic::{AtomicBool, Ordering};

use clap::ValueEnum;
use tracing_subscriber::EnvFilter;

/// Environment variable overriding the tracing filter.
pub const LOG_ENV_VAR: &str = "LICENSER_LOG";

/// Global atomic flag to control verbose logging.
///
/// This is initialized to `false` by default, meaning verbose logging is
/// disabled until explicitly enabled via [`set_verbose`].
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Enum representing the color mode options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
  /// Automatically determine whether to use colors based on TTY detection
  Auto,
  /// Never use colors
  Never,
  /// Always use colors
  Always,
}

impl ColorMode {
  /// Applies this mode to all colored output.
  pub fn apply(self) {
    match self {
      ColorMode::Auto => owo_colors::unset_override(),
      ColorMode::Never => owo_colors::set_override(false),
      ColorMode::Always => owo_colors::set_override(true),
    }
  }
}

/// Sets the global verbose logging flag.
///
/// When verbose logging is enabled, the [`verbose_log!`] macro will output
/// messages to stderr. When disabled, verbose log messages are suppressed.
///
/// [`verbose_log!`]: crate::verbose_log
pub fn set_verbose() {
  VERBOSE.store(true, Ordering::SeqCst);
}

/// Checks if verbose logging is currently enabled.
///
/// This function is used internally by the [`verbose_log!`] macro to determine
/// whether to output verbose log messages.
///
/// [`verbose_log!`]: crate::verbose_log
pub fn is_verbose() -> bool {
  VERBOSE.load(Ordering::SeqCst)
}

/// Maps a `-v` count to a default tracing filter directive.
const fn default_directive(verbosity: u8) -> &'static str {
  match verbosity {
    0 => "warn",
    1 => "info",
    2 => "debug",
    _ => "trace",
  }
}

/// Installs the global `tracing` subscriber.
///
/// Events go to stderr. [`LOG_ENV_VAR`] takes precedence over the
/// `verbosity` level. Calling this more than once is harmless; only the
/// first subscriber is kept.
pub fn init_tracing(verbosity: u8) {
  let filter =
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

  let _ = tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .with_target(false)
    .without_time()
    .try_init();
}
