use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::{
   error::{ChangelogError, Result},
   types::{Args, OutputFormat},
};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ChangelogConfig {
   /// Number of commits to analyze
   pub limit:         usize,
   pub format:        OutputFormat,
   /// Markdown document title
   pub title:         String,
   /// Include "why" context annotations
   pub include_why:   bool,
   /// Look up pull requests with the GitHub CLI
   pub pull_requests: bool,
   /// Directory with user template overrides (e.g. `markdown.md`)
   pub templates_dir: Option<PathBuf>,
}

impl Default for ChangelogConfig {
   fn default() -> Self {
      Self {
         limit:         50,
         format:        OutputFormat::Console,
         title:         "Changelog".to_string(),
         include_why:   true,
         pull_requests: false,
         templates_dir: None,
      }
   }
}

impl ChangelogConfig {
   /// Load config from default location (~/.config/ctxlog/config.toml)
   /// Falls back to Default if the file doesn't exist. `CTXLOG_CONFIG`
   /// points at an alternative file. Environment variables override file
   /// values:
   /// - `CTXLOG_FORMAT` overrides `format`
   /// - `CTXLOG_TITLE` overrides `title`
   pub fn load() -> Result<Self> {
      let config_path = if let Ok(custom_path) = std::env::var("CTXLOG_CONFIG") {
         PathBuf::from(custom_path)
      } else {
         Self::default_config_path().unwrap_or_default()
      };

      let mut config = if config_path.is_file() {
         Self::parse_file(&config_path)?
      } else {
         Self::default()
      };

      config.apply_env_overrides();
      Ok(config)
   }

   /// Load config from specific file
   pub fn from_file(path: &Path) -> Result<Self> {
      let mut config = Self::parse_file(path)?;
      config.apply_env_overrides();
      Ok(config)
   }

   fn parse_file(path: &Path) -> Result<Self> {
      let contents = std::fs::read_to_string(path).map_err(|e| {
         ChangelogError::ConfigError(format!("Failed to read {}: {e}", path.display()))
      })?;
      Self::from_toml(&contents).map_err(|e| {
         ChangelogError::ConfigError(format!("Failed to parse {}: {e}", path.display()))
      })
   }

   fn from_toml(contents: &str) -> std::result::Result<Self, toml::de::Error> {
      toml::from_str(contents)
   }

   /// Apply environment variable overrides to config
   fn apply_env_overrides(&mut self) {
      if let Ok(format) = std::env::var("CTXLOG_FORMAT") {
         match OutputFormat::from_name(&format) {
            Some(format) => self.format = format,
            None => crate::style::warn(&format!("Ignoring unknown CTXLOG_FORMAT '{format}'")),
         }
      }

      if let Ok(title) = std::env::var("CTXLOG_TITLE") {
         self.title = title;
      }
   }

   /// Apply CLI overrides (flags win over config and environment)
   pub fn apply_args(&mut self, args: &Args) {
      if let Some(limit) = args.limit {
         self.limit = limit;
      }
      if let Some(format) = args.format {
         self.format = format;
      }
      if let Some(ref title) = args.title {
         self.title.clone_from(title);
      }
      if args.no_why {
         self.include_why = false;
      }
      if args.pull_requests {
         self.pull_requests = true;
      }
   }

   /// Get default config path (platform-safe)
   /// Tries HOME (Unix/Linux/macOS) then USERPROFILE (Windows)
   pub fn default_config_path() -> Result<PathBuf> {
      if let Ok(home) = std::env::var("HOME") {
         return Ok(PathBuf::from(home).join(".config/ctxlog/config.toml"));
      }

      if let Ok(home) = std::env::var("USERPROFILE") {
         return Ok(PathBuf::from(home).join(".config/ctxlog/config.toml"));
      }

      Err(ChangelogError::ConfigError(
         "No home directory found (tried HOME and USERPROFILE)".to_string(),
      ))
   }
}
