//! Changelog renderers.
//!
//! All three formats order sections by ascending catalog priority; types with
//! equal priority (including every unknown type) keep their grouping order.

mod console;
mod json;
mod markdown;

use std::path::PathBuf;

use chrono::{DateTime, Local};

pub use self::{
   console::render_console,
   json::{ChangelogDocument, GroupDocument, parse_document, render_json},
   markdown::render_markdown,
};
use crate::{
   catalog,
   error::Result,
   group::Groups,
   types::{Commit, OutputFormat},
};

/// Options shared by all renderers
#[derive(Debug, Clone)]
pub struct RenderOptions {
   /// Document title (markdown only)
   pub title:         String,
   /// Include "why" context annotations
   pub include_why:   bool,
   pub generated_at:  DateTime<Local>,
   /// Emit ANSI colors (console only)
   pub color:         bool,
   /// Directories searched for user template overrides, in order; empty
   /// means the embedded template
   pub template_dirs: Vec<PathBuf>,
}

impl Default for RenderOptions {
   fn default() -> Self {
      Self {
         title:         "Changelog".to_string(),
         include_why:   true,
         generated_at:  Local::now(),
         color:         false,
         template_dirs: Vec::new(),
      }
   }
}

/// Render groups in the requested format
pub fn render(groups: &Groups, format: OutputFormat, opts: &RenderOptions) -> Result<String> {
   match format {
      OutputFormat::Markdown => render_markdown(groups, opts),
      OutputFormat::Json => render_json(groups, opts),
      OutputFormat::Console => Ok(render_console(groups, opts)),
   }
}

/// Non-empty groups sorted by catalog priority (stable)
pub fn ordered_groups(groups: &Groups) -> Vec<(&str, &[Commit])> {
   let mut ordered: Vec<(&str, &[Commit])> = groups
      .iter()
      .filter(|(_, commits)| !commits.is_empty())
      .map(|(ty, commits)| (ty.as_str(), commits.as_slice()))
      .collect();
   ordered.sort_by_key(|(ty, _)| catalog::priority(ty));
   ordered
}

#[cfg(test)]
pub(crate) mod tests {
   use chrono::TimeZone;

   use super::*;
   use crate::group::bucket_by_type;

   pub fn make_commit(hash: &str, subject: &str, commit_type: &str) -> Commit {
      let mut commit = Commit::new(
         hash,
         format!("{commit_type}: {subject}"),
         "",
         "Jane Doe",
         "jane@example.com",
         "2024-05-01 12:00:00 +0000",
      );
      commit.commit_type = commit_type.to_string();
      commit.conventional_subject = Some(subject.to_string());
      commit
   }

   /// Groups in deliberately scrambled priority order
   pub fn sample_groups() -> Groups {
      bucket_by_type(vec![
         make_commit("h1", "strange thing", "weirdtype"),
         make_commit("h2", "tidy up", "chore"),
         make_commit("h3", "add login", "feat"),
         make_commit("h4", "fix crash", "fix"),
         make_commit("h5", "add logout", "feat"),
         make_commit("h6", "patch CVE", "security"),
      ])
   }

   pub fn fixed_options() -> RenderOptions {
      RenderOptions {
         generated_at: Local.with_ymd_and_hms(2024, 6, 1, 9, 30, 0).unwrap(),
         ..RenderOptions::default()
      }
   }

   /// Assert that every needle appears in `haystack`, in the given order
   pub fn assert_in_order(haystack: &str, needles: &[&str]) {
      let mut last = 0;
      for needle in needles {
         let pos = haystack[last..]
            .find(needle)
            .unwrap_or_else(|| panic!("'{needle}' not found in order in:\n{haystack}"));
         last += pos + needle.len();
      }
   }

   #[test]
   fn test_ordered_groups_by_priority() {
      let groups = sample_groups();
      let keys: Vec<&str> = ordered_groups(&groups).iter().map(|(ty, _)| *ty).collect();
      assert_eq!(keys, vec!["security", "feat", "fix", "chore", "weirdtype"]);
   }

   #[test]
   fn test_unknown_types_keep_grouping_order() {
      let groups = bucket_by_type(vec![
         make_commit("a", "x", "zeta"),
         make_commit("b", "y", "alpha"),
         make_commit("c", "z", "docs"),
      ]);
      let keys: Vec<&str> = ordered_groups(&groups).iter().map(|(ty, _)| *ty).collect();
      assert_eq!(keys, vec!["docs", "zeta", "alpha"]);
   }

   #[test]
   fn test_unknown_type_last_in_every_format() {
      let groups = sample_groups();
      let opts = fixed_options();

      let md = render(&groups, OutputFormat::Markdown, &opts).unwrap();
      assert_in_order(&md, &["Security", "Features", "Bug Fixes", "Maintenance", "Weirdtype"]);

      let console = render(&groups, OutputFormat::Console, &opts).unwrap();
      assert_in_order(&console, &["SECURITY", "FEATURES", "BUG FIXES", "MAINTENANCE", "WEIRDTYPE"]);

      let json = render(&groups, OutputFormat::Json, &opts).unwrap();
      let doc = parse_document(&json).unwrap();
      let keys: Vec<&str> = doc.groups.keys().map(String::as_str).collect();
      assert_eq!(keys.last(), Some(&"weirdtype"));
   }
}
