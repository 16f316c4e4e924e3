use std::path::{Path, PathBuf};

use rust_embed::RustEmbed;
use tera::{Context, Tera};

use crate::error::{ChangelogError, Result};

/// Embedded output templates (compiled into binary)
#[derive(RustEmbed)]
#[folder = "templates/"]
struct Templates;

/// Determine user templates directory (~/.config/ctxlog/templates/) if a home
/// dir exists.
fn get_user_templates_dir() -> Option<PathBuf> {
   std::env::var("HOME")
      .or_else(|_| std::env::var("USERPROFILE"))
      .ok()
      .map(|home| PathBuf::from(home).join(".config/ctxlog/templates"))
}

/// Directories searched for template overrides, in order: the configured
/// directory, then ~/.config/ctxlog/templates/
pub fn search_dirs(custom_dir: Option<&Path>) -> Vec<PathBuf> {
   custom_dir
      .map(Path::to_path_buf)
      .into_iter()
      .chain(get_user_templates_dir())
      .collect()
}

/// Load template content, preferring the first user-provided file in `dirs`
/// over the embedded default
pub fn load_template(name: &str, dirs: &[PathBuf]) -> Result<String> {
   for dir in dirs {
      let template_path = dir.join(name);
      if template_path.is_file() {
         return std::fs::read_to_string(&template_path).map_err(|e| {
            ChangelogError::Other(format!(
               "Failed to read template file {}: {}",
               template_path.display(),
               e
            ))
         });
      }
   }

   let embedded = Templates::get(name).ok_or_else(|| {
      ChangelogError::Other(format!("Template '{name}' not found as user override or embedded"))
   })?;
   std::str::from_utf8(embedded.data.as_ref())
      .map(ToString::to_string)
      .map_err(|e| ChangelogError::Other(format!("Embedded template {name} is not valid UTF-8: {e}")))
}

/// Render a template with auto-escaping disabled (output is markdown, not
/// HTML)
pub fn render_template(name: &str, dirs: &[PathBuf], context: &Context) -> Result<String> {
   let content = load_template(name, dirs)?;
   Ok(Tera::one_off(&content, context, false)?)
}
