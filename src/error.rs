//! Error types for card generation

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while generating a card
#[derive(Debug, Error)]
pub enum GenerateError {
    /// Template not found in registry
    #[error("Template '{name}' not found")]
    TemplateNotFound { name: String },

    /// Random generation needs at least one template to pick from
    #[error("no templates available for random generation")]
    EmptyRegistry,

    /// The rendered card could not be written
    #[error("failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl GenerateError {
    /// Whether this error is the unknown-template case
    pub fn is_template_not_found(&self) -> bool {
        matches!(self, GenerateError::TemplateNotFound { .. })
    }
}
