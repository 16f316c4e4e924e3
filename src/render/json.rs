use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::{RenderOptions, ordered_groups};
use crate::{catalog, error::Result, group::Groups, types::Commit};

/// Top-level JSON changelog document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangelogDocument {
   /// RFC 3339 generation timestamp
   pub generated: String,
   /// Groups keyed by type name, in priority order
   pub groups:    IndexMap<String, GroupDocument>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupDocument {
   pub name:    String,
   pub icon:    String,
   pub commits: Vec<Commit>,
}

impl ChangelogDocument {
   pub fn from_groups(groups: &Groups, opts: &RenderOptions) -> Self {
      let groups = ordered_groups(groups)
         .into_iter()
         .map(|(ty, commits)| {
            (ty.to_string(), GroupDocument {
               name:    catalog::display_name(ty).into_owned(),
               icon:    catalog::icon(ty).to_string(),
               commits: commits.to_vec(),
            })
         })
         .collect();

      Self { generated: opts.generated_at.to_rfc3339(), groups }
   }
}

/// Render the full commit records as pretty-printed JSON
pub fn render_json(groups: &Groups, opts: &RenderOptions) -> Result<String> {
   let document = ChangelogDocument::from_groups(groups, opts);
   Ok(serde_json::to_string_pretty(&document)?)
}

/// Parse a document produced by [`render_json`]
pub fn parse_document(json: &str) -> Result<ChangelogDocument> {
   Ok(serde_json::from_str(json)?)
}
