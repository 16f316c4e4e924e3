use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChangelogError {
   #[error("Git command failed: {0}")]
   GitError(String),

   #[error("Not a git repository: {path}")]
   NotARepository { path: String },

   #[error("Configuration error: {0}")]
   ConfigError(String),

   #[error("IO error: {0}")]
   IoError(#[from] std::io::Error),

   #[error("JSON error: {0}")]
   JsonError(#[from] serde_json::Error),

   #[error("Template error: {0}")]
   TemplateError(#[from] tera::Error),

   #[error("{0}")]
   Other(String),
}

pub type Result<T> = std::result::Result<T, ChangelogError>;
