use std::fmt::Write;

use super::{RenderOptions, ordered_groups};
use crate::{catalog, context::analyze_change_context, group::Groups, style, style::icons};

const BANNER_WIDTH: usize = 60;
const DIVIDER_WIDTH: usize = 40;

/// Render a plain-text changelog for terminals
pub fn render_console(groups: &Groups, opts: &RenderOptions) -> String {
   let paint = |s: &str, f: fn(&str) -> String| if opts.color { f(s) } else { s.to_string() };
   let banner = "=".repeat(BANNER_WIDTH);

   let mut out = String::new();
   out.push('\n');
   writeln!(out, "{banner}").unwrap();
   writeln!(out, "{}", paint(&format!("{} CONTEXT-AWARE CHANGELOG", icons::CLIPBOARD), style::bold))
      .unwrap();
   writeln!(out, "{banner}").unwrap();
   writeln!(out, "Generated: {}", opts.generated_at.format("%Y-%m-%d %H:%M")).unwrap();

   for (ty, commits) in ordered_groups(groups) {
      let name = catalog::display_name(ty).to_uppercase();
      out.push('\n');
      writeln!(out, "{}", paint(&format!("{} {name}", catalog::icon(ty)), style::heading)).unwrap();
      writeln!(out, "{}", "-".repeat(DIVIDER_WIDTH)).unwrap();

      for commit in commits {
         writeln!(out, "  {} {}", icons::BULLET, commit.display_subject()).unwrap();

         if opts.include_why {
            let context = analyze_change_context(commit);
            if !context.is_empty() {
               writeln!(out, "    {} {}", icons::ARROW, paint(&context, style::warning)).unwrap();
            }
         }

         writeln!(out, "    {}", paint(&format!("[{}]", commit.short_date()), style::dim)).unwrap();
      }
   }

   out.push('\n');
   out.push_str(&banner);
   out.push('\n');
   out
}

#[cfg(test)]
mod tests {
   use super::*;
   use crate::{
      group::bucket_by_type,
      render::tests::{assert_in_order, fixed_options, make_commit, sample_groups},
   };

   #[test]
   fn test_console_layout() {
      let mut commit = make_commit("h1", "fix crash", "fix");
      commit.issue_refs.insert("3".to_string());
      let out = render_console(&bucket_by_type(vec![commit]), &fixed_options());

      let expected = format!(
         "\n{banner}\n📋 CONTEXT-AWARE CHANGELOG\n{banner}\nGenerated: 2024-06-01 09:30\n\n🐛 BUG \
          FIXES\n{divider}\n  • fix crash\n    → Addresses: #3\n    [2024-05-01]\n\n{banner}\n",
         banner = "=".repeat(60),
         divider = "-".repeat(40),
      );
      assert_eq!(out, expected);
   }

   #[test]
   fn test_console_no_why() {
      let mut commit = make_commit("h1", "fix crash", "fix");
      commit.issue_refs.insert("3".to_string());
      let opts = RenderOptions { include_why: false, ..fixed_options() };
      let out = render_console(&bucket_by_type(vec![commit]), &opts);
      assert!(!out.contains('→'));
      assert!(out.contains("  • fix crash\n    [2024-05-01]\n"));
   }

   #[test]
   fn test_console_sections_in_priority_order() {
      let out = render_console(&sample_groups(), &fixed_options());
      assert_in_order(&out, &[
         "🔒 SECURITY",
         "• patch CVE",
         "✨ FEATURES",
         "• add login",
         "• add logout",
         "🐛 BUG FIXES",
         "🔨 MAINTENANCE",
         "📌 WEIRDTYPE",
      ]);
   }

   #[test]
   fn test_console_no_ansi_without_color() {
      let out = render_console(&sample_groups(), &fixed_options());
      assert!(!out.contains('\x1b'));
   }
}
