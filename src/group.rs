//! Grouping of classified commits by type.

use indexmap::IndexMap;

use crate::{
   git::{get_commit_diff, get_related_files},
   types::Commit,
};

/// Commits keyed by type name; each list keeps history order (oldest first)
pub type Groups = IndexMap<String, Vec<Commit>>;

/// Attach changed files and diff stats to every commit, then bucket them by
/// type.
///
/// Each commit costs two git calls; a failed call leaves its field empty.
pub fn group_commits(commits: Vec<Commit>, dir: &str) -> Groups {
   let annotated = commits.into_iter().map(|mut commit| {
      commit.files_changed = get_related_files(&commit.hash, dir);
      commit.diff_summary = get_commit_diff(&commit.hash, dir);
      commit
   });
   bucket_by_type(annotated)
}

/// Bucket commits by type, preserving first-seen type order and commit order
pub fn bucket_by_type(commits: impl IntoIterator<Item = Commit>) -> Groups {
   let mut groups = Groups::new();
   for commit in commits {
      groups
         .entry(commit.commit_type.clone())
         .or_default()
         .push(commit);
   }
   groups
}

/// Total number of commits across all groups
pub fn commit_count(groups: &Groups) -> usize {
   groups.values().map(Vec::len).sum()
}

#[cfg(test)]
mod tests {
   use super::*;

   fn typed(hash: &str, commit_type: &str) -> Commit {
      let mut commit = Commit::new(hash, format!("{commit_type}: {hash}"), "", "A", "a@x.io", "");
      commit.commit_type = commit_type.to_string();
      commit
   }

   #[test]
   fn test_bucket_preserves_order() {
      let groups = bucket_by_type(vec![
         typed("1", "fix"),
         typed("2", "feat"),
         typed("3", "fix"),
         typed("4", "chore"),
         typed("5", "feat"),
      ]);

      let keys: Vec<&str> = groups.keys().map(String::as_str).collect();
      assert_eq!(keys, vec!["fix", "feat", "chore"]);

      let fixes: Vec<&str> = groups["fix"].iter().map(|c| c.hash.as_str()).collect();
      assert_eq!(fixes, vec!["1", "3"]);
      let feats: Vec<&str> = groups["feat"].iter().map(|c| c.hash.as_str()).collect();
      assert_eq!(feats, vec!["2", "5"]);
      assert_eq!(commit_count(&groups), 5);
   }

   #[test]
   fn test_bucket_empty() {
      let groups = bucket_by_type(Vec::new());
      assert!(groups.is_empty());
      assert_eq!(commit_count(&groups), 0);
   }

   #[test]
   fn test_group_commits_outside_repo_leaves_fields_empty() {
      let temp = tempfile::TempDir::new().unwrap();
      let dir = temp.path().to_str().unwrap();
      let groups = group_commits(vec![typed("abc", "feat")], dir);
      let commit = &groups["feat"][0];
      assert!(commit.files_changed.is_empty());
      assert!(commit.diff_summary.is_empty());
   }
}
