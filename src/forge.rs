//! Best-effort pull request lookup through the GitHub CLI (`gh`).
//!
//! Every failure (missing binary, auth errors, unexpected output) yields no
//! data.

use std::process::Command;

use crate::{group::Groups, style, types::PullRequest};

/// Find the merged pull request that contains `hash`
pub fn find_pull_request(hash: &str, dir: &str) -> Option<PullRequest> {
   let output = Command::new("gh")
      .args([
         "pr",
         "list",
         "--state",
         "merged",
         "--search",
         hash,
         "--limit",
         "1",
         "--json",
         "number,title,body",
      ])
      .current_dir(dir)
      .output();

   let output = match output {
      Ok(output) => output,
      Err(e) => {
         style::debug(&format!("Failed to run gh for {hash}: {e}"));
         return None;
      },
   };

   if !output.status.success() {
      let stderr = String::from_utf8_lossy(&output.stderr);
      style::debug(&format!("gh pr list failed for {hash}: {}", stderr.trim()));
      return None;
   }

   parse_pr_list(&String::from_utf8_lossy(&output.stdout))
}

/// First entry of `gh pr list --json number,title,body` output
fn parse_pr_list(stdout: &str) -> Option<PullRequest> {
   serde_json::from_str::<Vec<PullRequest>>(stdout.trim())
      .ok()?
      .into_iter()
      .next()
}

/// Attach pull request metadata to every grouped commit
pub fn attach_pull_requests(groups: &mut Groups, dir: &str) {
   for commit in groups.values_mut().flatten() {
      commit.pull_request = find_pull_request(&commit.hash, dir);
   }
}
