//! Error types for badge generation

use std::path::PathBuf;
use store::DocxError;
use thiserror::Error;

/// Errors that can occur while generating a badge
///
/// Both kinds abort the current attempt; neither leaves an output file
/// behind.
#[derive(Debug, Error)]
pub enum MailMergeError {
    /// The template is missing, unreadable or not a usable DOCX
    #[error("Cannot open template {}: {source}", .path.display())]
    TemplateLoad {
        path: PathBuf,
        #[source]
        source: DocxError,
    },

    /// The filled-in document could not be written
    #[error("Cannot save {}: {source}", .path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: DocxError,
    },
}

impl MailMergeError {
    /// Path the failing operation was working on
    pub fn path(&self) -> &std::path::Path {
        match self {
            MailMergeError::TemplateLoad { path, .. } | MailMergeError::Save { path, .. } => path,
        }
    }
}

/// Result type for mail merge operations
pub type Result<T> = std::result::Result<T, MailMergeError>;
