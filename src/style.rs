//! Terminal styling utilities for consistent CLI output.
//!
//! Respects `NO_COLOR` environment variable and terminal capabilities.

use std::sync::{
   OnceLock,
   atomic::{AtomicBool, Ordering},
};

use owo_colors::OwoColorize;

/// Whether color output is enabled (cached on first call).
static COLOR_ENABLED: OnceLock<bool> = OnceLock::new();

/// Whether degraded external calls are reported on stderr.
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Check if colors should be used.
pub fn colors_enabled() -> bool {
   *COLOR_ENABLED.get_or_init(|| {
      // NO_COLOR takes precedence (https://no-color.org/)
      if std::env::var("NO_COLOR").is_ok() {
         return false;
      }
      supports_color::on(supports_color::Stream::Stdout).is_some_and(|level| level.has_basic)
   })
}

/// Enable or disable verbose diagnostics.
pub fn set_verbose(enabled: bool) {
   VERBOSE.store(enabled, Ordering::Relaxed);
}

pub fn verbose() -> bool {
   VERBOSE.load(Ordering::Relaxed)
}

/// Read a switch-like environment value: empty, `0`, `false`, `no` and `off`
/// are disabled, anything else is enabled.
pub fn env_flag_enabled(value: &str) -> bool {
   !matches!(value.trim().to_lowercase().as_str(), "" | "0" | "false" | "no" | "off")
}

// === Color Palette ===

/// Success: checkmarks, completed actions (green + bold).
pub fn success(s: &str) -> String {
   if colors_enabled() {
      s.green().bold().to_string()
   } else {
      s.to_string()
   }
}

/// Warning: non-fatal issues (yellow).
pub fn warning(s: &str) -> String {
   if colors_enabled() {
      s.yellow().to_string()
   } else {
      s.to_string()
   }
}

/// Error: failures, hard errors (red + bold).
pub fn error(s: &str) -> String {
   if colors_enabled() {
      s.red().bold().to_string()
   } else {
      s.to_string()
   }
}

/// Info: informational messages (cyan).
pub fn info(s: &str) -> String {
   if colors_enabled() {
      s.cyan().to_string()
   } else {
      s.to_string()
   }
}

/// Dim: less important details, dates (dimmed).
pub fn dim(s: &str) -> String {
   if colors_enabled() {
      s.dimmed().to_string()
   } else {
      s.to_string()
   }
}

/// Bold: headers, key values.
pub fn bold(s: &str) -> String {
   if colors_enabled() {
      s.bold().to_string()
   } else {
      s.to_string()
   }
}

/// Section heading styling (blue + bold).
pub fn heading(s: &str) -> String {
   if colors_enabled() {
      s.blue().bold().to_string()
   } else {
      s.to_string()
   }
}

/// Print warning message to stderr.
pub fn warn(msg: &str) {
   eprintln!("{} {}", warning(icons::WARNING), warning(msg));
}

/// Print a diagnostic line, only in verbose mode.
pub fn debug(msg: &str) {
   if verbose() {
      eprintln!("{} {}", dim(icons::INFO), dim(msg));
   }
}

// === Status Icons ===

pub mod icons {
   pub const SUCCESS: &str = "\u{2713}";
   pub const WARNING: &str = "\u{26A0}";
   pub const INFO: &str = "\u{2139}";
   pub const ARROW: &str = "\u{2192}";
   pub const BULLET: &str = "\u{2022}";
   pub const CLIPBOARD: &str = "\u{1F4CB}";
}

#[cfg(test)]
mod tests {
   use super::*;

   #[test]
   fn test_env_flag_disabled_values() {
      for value in ["", "0", "false", "FALSE", "no", "off", " 0 "] {
         assert!(!env_flag_enabled(value), "{value:?} should disable");
      }
   }

   #[test]
   fn test_env_flag_enabled_values() {
      for value in ["1", "true", "yes", "on", "debug"] {
         assert!(env_flag_enabled(value), "{value:?} should enable");
      }
   }
}
