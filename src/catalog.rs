//! Static commit type catalog: display name, icon and sort priority per
//! conventional-commit type.

use std::borrow::Cow;

/// Catalog entry for a known commit type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeInfo {
   pub key:      &'static str,
   pub name:     &'static str,
   pub icon:     &'static str,
   /// Lower sorts first
   pub priority: u32,
}

/// Icon used for types missing from the catalog
pub const DEFAULT_ICON: &str = "📌";

/// Priority used for types missing from the catalog
pub const DEFAULT_PRIORITY: u32 = 99;

pub const COMMIT_TYPES: &[TypeInfo] = &[
   TypeInfo { key: "feat", name: "Features", icon: "✨", priority: 1 },
   TypeInfo { key: "fix", name: "Bug Fixes", icon: "🐛", priority: 2 },
   TypeInfo { key: "docs", name: "Documentation", icon: "📝", priority: 4 },
   TypeInfo { key: "style", name: "Styles", icon: "💄", priority: 7 },
   TypeInfo { key: "refactor", name: "Code Refactoring", icon: "♻️", priority: 5 },
   TypeInfo { key: "perf", name: "Performance Improvements", icon: "⚡", priority: 3 },
   TypeInfo { key: "test", name: "Tests", icon: "✅", priority: 8 },
   TypeInfo { key: "build", name: "Builds", icon: "📦", priority: 6 },
   TypeInfo { key: "ci", name: "CI/CD", icon: "🔧", priority: 9 },
   TypeInfo { key: "chore", name: "Maintenance", icon: "🔨", priority: 10 },
   TypeInfo { key: "revert", name: "Reverts", icon: "⏪", priority: 11 },
   TypeInfo { key: "security", name: "Security", icon: "🔒", priority: 0 },
];

/// Look up a known type
pub fn lookup(commit_type: &str) -> Option<&'static TypeInfo> {
   COMMIT_TYPES.iter().find(|info| info.key == commit_type)
}

/// Sort priority, 99 for unknown types
pub fn priority(commit_type: &str) -> u32 {
   lookup(commit_type).map_or(DEFAULT_PRIORITY, |info| info.priority)
}

/// Section display name; unknown types are title-cased
pub fn display_name(commit_type: &str) -> Cow<'static, str> {
   lookup(commit_type).map_or_else(|| Cow::Owned(title_case(commit_type)), |info| {
      Cow::Borrowed(info.name)
   })
}

pub fn icon(commit_type: &str) -> &'static str {
   lookup(commit_type).map_or(DEFAULT_ICON, |info| info.icon)
}

/// Uppercase the first letter of every alphabetic run, lowercase the rest
fn title_case(s: &str) -> String {
   let mut out = String::with_capacity(s.len());
   let mut prev_alpha = false;
   for c in s.chars() {
      if c.is_alphabetic() {
         if prev_alpha {
            out.extend(c.to_lowercase());
         } else {
            out.extend(c.to_uppercase());
         }
         prev_alpha = true;
      } else {
         out.push(c);
         prev_alpha = false;
      }
   }
   out
}
