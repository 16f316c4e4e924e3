//! Context-aware changelog generator library
//!
//! This library reads git history, classifies commits by conventional-commit
//! type, groups them and renders changelogs that explain why each change was
//! made.
pub mod catalog;
pub mod classify;
pub mod config;
pub mod context;
pub mod error;
pub mod forge;
pub mod git;
pub mod group;
pub mod render;
pub mod style;
pub mod templates;
pub mod types;

// Re-export commonly used types
pub use config::ChangelogConfig;
pub use error::{ChangelogError, Result};
pub use group::Groups;
pub use render::RenderOptions;
pub use types::{Args, Commit, OutputFormat};
