use std::{fmt, path::PathBuf};

use clap::{Parser, ValueEnum};
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// Type assigned to a commit before classification runs
pub const UNCLASSIFIED: &str = "unknown";

// === Commit record ===

/// A single history entry, fetched from git and enriched in place
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
   pub hash:    String,
   pub subject: String,
   pub body:    String,
   pub author:  String,
   pub email:   String,
   pub date:    String,

   #[serde(rename = "type")]
   pub commit_type:          String,
   pub scope:                Option<String>,
   pub breaking:             bool,
   pub conventional_subject: Option<String>,

   /// Referenced issue/PR numbers; unique, order not significant
   #[serde(default)]
   pub issue_refs:    IndexSet<String>,
   #[serde(default)]
   pub files_changed: Vec<String>,
   #[serde(default)]
   pub diff_summary:  String,

   #[serde(default, skip_serializing_if = "Option::is_none")]
   pub pull_request: Option<PullRequest>,
}

impl Commit {
   /// Create an unclassified commit from its raw fields
   pub fn new(
      hash: impl Into<String>,
      subject: impl Into<String>,
      body: impl Into<String>,
      author: impl Into<String>,
      email: impl Into<String>,
      date: impl Into<String>,
   ) -> Self {
      Self {
         hash:                 hash.into(),
         subject:              subject.into(),
         body:                 body.into(),
         author:               author.into(),
         email:                email.into(),
         date:                 date.into(),
         commit_type:          UNCLASSIFIED.to_string(),
         scope:                None,
         breaking:             false,
         conventional_subject: None,
         issue_refs:           IndexSet::new(),
         files_changed:        Vec::new(),
         diff_summary:         String::new(),
         pull_request:         None,
      }
   }

   /// Subject line to display: the cleaned description, else the raw subject
   pub fn display_subject(&self) -> &str {
      match self.conventional_subject.as_deref() {
         Some(s) if !s.is_empty() => s,
         _ if !self.subject.is_empty() => &self.subject,
         _ => "No description",
      }
   }

   /// Date portion of the commit timestamp (first 10 characters)
   pub fn short_date(&self) -> &str {
      self
         .date
         .char_indices()
         .nth(10)
         .map_or(self.date.as_str(), |(idx, _)| &self.date[..idx])
   }
}

/// Pull request metadata associated with a commit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequest {
   pub number: u64,
   pub title:  String,
   #[serde(default)]
   pub body:   String,
}

// === Output format ===

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
   /// Markdown document with one section per commit type
   Markdown,
   /// Machine-readable JSON with full commit records
   Json,
   /// Plain text for terminals
   #[default]
   Console,
}

impl OutputFormat {
   pub const fn as_str(&self) -> &'static str {
      match self {
         Self::Markdown => "markdown",
         Self::Json => "json",
         Self::Console => "console",
      }
   }

   /// Parse a format name (case-insensitive)
   pub fn from_name(name: &str) -> Option<Self> {
      match name.trim().to_lowercase().as_str() {
         "markdown" | "md" => Some(Self::Markdown),
         "json" => Some(Self::Json),
         "console" | "text" | "plain" => Some(Self::Console),
         _ => None,
      }
   }
}

impl fmt::Display for OutputFormat {
   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      f.write_str(self.as_str())
   }
}

// CLI Args
#[derive(Parser, Debug)]
#[command(
   author,
   version,
   about = "Generate context-aware changelogs from git history",
   long_about = "Reads the git history, classifies commits by conventional-commit type, groups \
                 related changes and explains why each change was made."
)]
pub struct Args {
   /// Number of commits to analyze (default: 50)
   #[arg(long, short = 'n')]
   pub limit: Option<usize>,

   /// Start date (e.g., '2024-01-01'), passed through to git
   #[arg(long)]
   pub since: Option<String>,

   /// End date (e.g., '2024-12-31'), passed through to git
   #[arg(long)]
   pub until: Option<String>,

   /// Output format (default: console)
   #[arg(long, value_enum)]
   pub format: Option<OutputFormat>,

   /// Don't include 'why' context in the changelog
   #[arg(long)]
   pub no_why: bool,

   /// Output file (default: stdout)
   #[arg(long, short = 'o')]
   pub output: Option<PathBuf>,

   /// Title for markdown output (default: "Changelog")
   #[arg(long)]
   pub title: Option<String>,

   /// Git repository path
   #[arg(long, short = 'r', default_value = ".")]
   pub repo: String,

   /// Look up the pull request of each commit with the GitHub CLI
   #[arg(long)]
   pub pull_requests: bool,

   /// Path to config file (default: ~/.config/ctxlog/config.toml)
   #[arg(long)]
   pub config: Option<PathBuf>,

   /// Report failed git/gh calls on stderr
   #[arg(long, short = 'v')]
   pub verbose: bool,
}

impl Default for Args {
   fn default() -> Self {
      Self {
         limit:         None,
         since:         None,
         until:         None,
         format:        None,
         no_why:        false,
         output:        None,
         title:         None,
         repo:          ".".to_string(),
         pull_requests: false,
         config:        None,
         verbose:       false,
      }
   }
}
