//! Commit classification: conventional-commit parsing, keyword inference for
//! free-form subjects and issue reference extraction.

use std::sync::LazyLock;

use indexmap::IndexSet;
use regex::Regex;

use crate::types::Commit;

static CONVENTIONAL_RE: LazyLock<Regex> = LazyLock::new(|| {
   Regex::new(r"^(?P<type>\w+)(?:\((?P<scope>[^)]+)\))?(?P<breaking>!)?:\s*(?P<message>.+)$")
      .expect("invalid regex")
});

static ISSUE_REF_RES: LazyLock<[Regex; 3]> = LazyLock::new(|| {
   [
      Regex::new(r"(?i)(?:closes?|fixes?|resolves?|refs?|see)\s+#(\d+)").expect("invalid regex"),
      Regex::new(r"(?i)GH[-#](\d+)").expect("invalid regex"),
      Regex::new(r"(?i)(?:PR|MR)[:\s#]?(\d+)").expect("invalid regex"),
   ]
});

/// Keyword sets for free-form subjects, checked in order; first hit wins
const TYPE_KEYWORDS: &[(&str, &[&str])] = &[
   ("fix", &["fix", "bug", "patch", "resolve"]),
   ("feat", &["feat", "add", "new", "implement"]),
   ("docs", &["doc", "readme", "comment"]),
   ("refactor", &["refactor", "cleanup", "improve"]),
   ("perf", &["perf", "optimize", "speed"]),
   ("test", &["test", "coverage"]),
   ("security", &["security", "vulnerability", "cve"]),
   ("build", &["build", "deps", "dependency"]),
   ("ci", &["ci", "pipeline", "workflow"]),
];

/// Fill in type, scope, breaking flag and cleaned subject from the subject
/// line
pub fn parse_conventional_commit(commit: &mut Commit) {
   if let Some(caps) = CONVENTIONAL_RE.captures(&commit.subject) {
      commit.commit_type = caps["type"].to_lowercase();
      commit.scope = caps.name("scope").map(|m| m.as_str().to_string());
      commit.breaking = caps.name("breaking").is_some();
      commit.conventional_subject = Some(caps["message"].to_string());
   } else {
      commit.commit_type = infer_commit_type(&commit.subject).to_string();
      commit.conventional_subject = Some(commit.subject.clone());
   }
}

/// Guess a type from keywords in a free-form subject
pub fn infer_commit_type(subject: &str) -> &'static str {
   let lower = subject.to_lowercase();
   TYPE_KEYWORDS
      .iter()
      .find(|(_, words)| words.iter().any(|w| lower.contains(w)))
      .map_or("chore", |(ty, _)| *ty)
}

/// Extract issue/PR numbers (`closes #12`, `GH-34`, `PR#56`, ...)
pub fn extract_issue_references(text: &str) -> IndexSet<String> {
   ISSUE_REF_RES
      .iter()
      .flat_map(|re| re.captures_iter(text).map(|caps| caps[1].to_string()))
      .collect()
}

/// Classify a freshly fetched commit and collect its references
pub fn classify(commit: &mut Commit) {
   parse_conventional_commit(commit);
   commit.issue_refs = extract_issue_references(&format!("{} {}", commit.subject, commit.body));
}
