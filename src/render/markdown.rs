use serde::Serialize;
use tera::Context;

use super::{RenderOptions, ordered_groups};
use crate::{
   catalog, context::analyze_change_context, error::Result, group::Groups, templates,
   types::Commit,
};

const TEMPLATE: &str = "markdown.md";

#[derive(Debug, Serialize)]
struct Section {
   icon:    &'static str,
   name:    String,
   entries: Vec<Entry>,
}

#[derive(Debug, Serialize)]
struct Entry {
   subject:      String,
   /// Empty when disabled or when nothing applies
   context:      String,
   date:         String,
   author:       String,
   pull_request: Option<u64>,
}

impl Entry {
   fn from_commit(commit: &Commit, include_why: bool) -> Self {
      Self {
         subject:      commit.display_subject().to_string(),
         context:      if include_why {
            analyze_change_context(commit)
         } else {
            String::new()
         },
         date:         commit.short_date().to_string(),
         author:       commit.author.clone(),
         pull_request: commit.pull_request.as_ref().map(|pr| pr.number),
      }
   }
}

/// Render a markdown changelog through the (overridable) `markdown.md`
/// template
pub fn render_markdown(groups: &Groups, opts: &RenderOptions) -> Result<String> {
   let sections: Vec<Section> = ordered_groups(groups)
      .into_iter()
      .map(|(ty, commits)| Section {
         icon:    catalog::icon(ty),
         name:    catalog::display_name(ty).into_owned(),
         entries: commits
            .iter()
            .map(|c| Entry::from_commit(c, opts.include_why))
            .collect(),
      })
      .collect();

   let mut context = Context::new();
   context.insert("title", &opts.title);
   context.insert("generated", &opts.generated_at.format("%Y-%m-%d %H:%M").to_string());
   context.insert("sections", &sections);

   let rendered = templates::render_template(TEMPLATE, &opts.template_dirs, &context)?;
   Ok(format!("{}\n", rendered.trim_end()))
}
