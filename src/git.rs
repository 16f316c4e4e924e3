use std::process::Command;

use crate::{
   classify::classify,
   error::{ChangelogError, Result},
   style,
   types::Commit,
};

/// `git show` format: subject, body, author name, author email, author date
const SHOW_FORMAT: &str = "--format=%s%n%b%n%an%n%ae%n%ai";

/// Run a git command in `dir` and return its trimmed stdout
fn run_git(args: &[&str], dir: &str) -> Result<String> {
   let output = Command::new("git")
      .args(args)
      .current_dir(dir)
      .output()
      .map_err(|e| ChangelogError::GitError(format!("Failed to run git {}: {e}", args.join(" "))))?;

   if !output.status.success() {
      let stderr = String::from_utf8_lossy(&output.stderr);
      return Err(ChangelogError::GitError(format!(
         "git {} failed: {}",
         args.join(" "),
         stderr.trim()
      )));
   }

   Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// Run a git command, degrading any failure to empty output
fn git_or_empty(args: &[&str], dir: &str) -> String {
   run_git(args, dir).unwrap_or_else(|e| {
      style::debug(&e.to_string());
      String::new()
   })
}

/// Check whether `dir` is inside a git work tree (or is a git dir)
pub fn is_git_repository(dir: &str) -> bool {
   run_git(&["rev-parse", "--git-dir"], dir).is_ok_and(|out| !out.is_empty())
}

/// List up to `limit` commit hashes reachable from HEAD, oldest first
pub fn get_commit_list(
   limit: usize,
   since: Option<&str>,
   until: Option<&str>,
   dir: &str,
) -> Vec<String> {
   let since_arg = since.map(|s| format!("--since={s}"));
   let until_arg = until.map(|u| format!("--until={u}"));
   let limit_arg = limit.to_string();

   let mut args = vec!["rev-list"];
   args.extend(since_arg.as_deref());
   args.extend(until_arg.as_deref());
   args.extend(["--reverse", "-n", limit_arg.as_str(), "HEAD"]);

   git_or_empty(&args, dir)
      .lines()
      .map(str::trim)
      .filter(|h| !h.is_empty())
      .map(String::from)
      .collect()
}

/// Fetch and classify the commits in range, oldest first.
///
/// Commits whose details cannot be read are skipped.
pub fn get_commit_log(
   limit: usize,
   since: Option<&str>,
   until: Option<&str>,
   dir: &str,
) -> Vec<Commit> {
   get_commit_list(limit, since, until, dir)
      .iter()
      .filter_map(|hash| get_commit_details(hash, dir))
      .map(|mut commit| {
         classify(&mut commit);
         commit
      })
      .collect()
}

/// Read subject, body and author metadata of one commit
pub fn get_commit_details(hash: &str, dir: &str) -> Option<Commit> {
   let output = git_or_empty(&["show", "-s", SHOW_FORMAT, hash], dir);
   if output.is_empty() {
      return None;
   }
   Some(parse_show_output(hash, &output))
}

/// Split `git show` output into commit fields.
///
/// The last three lines are author, email and date; everything between the
/// subject and those lines is the body. A body whose final lines look like
/// metadata cannot be told apart from the real metadata.
pub fn parse_show_output(hash: &str, output: &str) -> Commit {
   let lines: Vec<&str> = output.split('\n').collect();
   let subject = lines.first().copied().unwrap_or_default();

   if lines.len() < 4 {
      let body = lines.get(1..).map(|rest| rest.join("\n")).unwrap_or_default();
      return Commit::new(hash, subject, body.trim_end(), "", "", "");
   }

   let n = lines.len();
   let body = lines[1..n - 3].join("\n");
   Commit::new(hash, subject, body.trim_end(), lines[n - 3], lines[n - 2], lines[n - 1])
}

/// Paths touched by a commit
pub fn get_related_files(hash: &str, dir: &str) -> Vec<String> {
   git_or_empty(&["show", "--name-only", "--format=", hash], dir)
      .lines()
      .map(str::trim)
      .filter(|f| !f.is_empty())
      .map(String::from)
      .collect()
}

/// `git show --stat` summary of a commit
pub fn get_commit_diff(hash: &str, dir: &str) -> String {
   git_or_empty(&["show", "--stat", "--format=", hash], dir)
}
