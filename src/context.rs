//! "Why" annotations: a one-line explanation of what a commit touches.

use indexmap::IndexSet;

use crate::types::Commit;

pub const BREAKING_MARKER: &str = "⚠️ **BREAKING CHANGE**";

/// Maximum number of file categories listed per commit
const MAX_CATEGORIES: usize = 3;

/// Path substrings per category, checked in order; first hit wins
const FILE_CATEGORIES: &[(&str, &[&str])] = &[
   ("tests", &["test"]),
   ("docs", &["doc", "readme"]),
   ("source", &["src/lib", "src/app"]),
   ("config", &["config"]),
   ("dependencies", &["package", "requirements"]),
];

/// Build the context line for a commit; empty when nothing applies
pub fn analyze_change_context(commit: &Commit) -> String {
   let mut parts = Vec::new();

   if commit.breaking {
      parts.push(BREAKING_MARKER.to_string());
   }

   if !commit.issue_refs.is_empty() {
      let refs: Vec<String> = commit.issue_refs.iter().map(|r| format!("#{r}")).collect();
      parts.push(format!("Addresses: {}", refs.join(", ")));
   }

   let categories = categorize_files(&commit.files_changed);
   if !categories.is_empty() {
      parts.push(format!("Modified: {}", categories.join(", ")));
   }

   parts.join(" | ")
}

/// Distinct categories of the changed files, at most three.
///
/// Which three survive when more are present is unspecified.
pub fn categorize_files(files: &[String]) -> Vec<&'static str> {
   let categories: IndexSet<&'static str> = files
      .iter()
      .filter_map(|file| categorize_file(file))
      .collect();
   categories.into_iter().take(MAX_CATEGORIES).collect()
}

fn categorize_file(path: &str) -> Option<&'static str> {
   let lower = path.to_lowercase();
   FILE_CATEGORIES
      .iter()
      .find(|(_, needles)| needles.iter().any(|n| lower.contains(n)))
      .map(|(category, _)| *category)
}

#[cfg(test)]
mod tests {
   use super::*;

   fn files(paths: &[&str]) -> Vec<String> {
      paths.iter().map(|p| (*p).to_string()).collect()
   }

   #[test]
   fn test_categorize_single_file() {
      assert_eq!(categorize_file("tests/it.rs"), Some("tests"));
      assert_eq!(categorize_file("README.md"), Some("docs"));
      assert_eq!(categorize_file("src/lib/util.py"), Some("source"));
      assert_eq!(categorize_file("src/app/main.ts"), Some("source"));
      assert_eq!(categorize_file("Config/app.yaml"), Some("config"));
      assert_eq!(categorize_file("package.json"), Some("dependencies"));
      assert_eq!(categorize_file("requirements.txt"), Some("dependencies"));
      assert_eq!(categorize_file("src/main.rs"), None);
   }

   #[test]
   fn test_categorize_first_match_wins() {
      // "test" is checked before "doc"
      assert_eq!(categorize_file("docs/testing.md"), Some("tests"));
      // "doc" is checked before "config"
      assert_eq!(categorize_file("config/docs.yaml"), Some("docs"));
   }

   #[test]
   fn test_categories_deduplicated() {
      let cats = categorize_files(&files(&["tests/a.rs", "tests/b.rs", "test_c.py"]));
      assert_eq!(cats, vec!["tests"]);
   }

   #[test]
   fn test_categories_capped_at_three() {
      let cats = categorize_files(&files(&[
         "tests/a.rs",
         "README.md",
         "src/lib/x.py",
         "config.toml",
         "package.json",
      ]));
      assert_eq!(cats.len(), 3);
      let all = ["tests", "docs", "source", "config", "dependencies"];
      assert!(cats.iter().all(|c| all.contains(c)));
   }

   #[test]
   fn test_categories_order_insensitive() {
      let a = categorize_files(&files(&["README.md", "tests/a.rs"]));
      let b = categorize_files(&files(&["tests/a.rs", "README.md"]));
      let a: IndexSet<_> = a.into_iter().collect();
      let b: IndexSet<_> = b.into_iter().collect();
      assert_eq!(a, b);
   }

   #[test]
   fn test_context_empty() {
      let commit = Commit::new("abc", "chore: x", "", "A", "a@x.io", "");
      assert_eq!(analyze_change_context(&commit), "");
   }

   #[test]
   fn test_context_all_parts_in_order() {
      let mut commit = Commit::new("abc", "feat!: x", "", "A", "a@x.io", "");
      commit.breaking = true;
      commit.issue_refs.insert("42".to_string());
      commit.files_changed = files(&["tests/a.rs"]);

      let context = analyze_change_context(&commit);
      assert_eq!(context, "⚠️ **BREAKING CHANGE** | Addresses: #42 | Modified: tests");
   }

   #[test]
   fn test_context_multiple_refs() {
      let mut commit = Commit::new("abc", "fix: x", "", "A", "a@x.io", "");
      commit.issue_refs.insert("1".to_string());
      commit.issue_refs.insert("2".to_string());
      commit.files_changed = files(&["src/main.rs"]);

      let context = analyze_change_context(&commit);
      assert!(context.starts_with("Addresses: "));
      assert!(context.contains("#1"));
      assert!(context.contains("#2"));
      assert!(!context.contains("Modified"));
   }
}
