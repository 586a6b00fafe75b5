//! Store - DOCX template packages and settings
//!
//! This crate opens DOCX templates, exposes their paragraphs and runs for
//! editing, saves the edited package, and persists application settings.

mod error;
mod settings;
pub mod docx;

pub use error::*;
pub use settings::*;

// Re-export DOCX functionality
pub use docx::{
    open_template, open_template_bytes, save_document, save_document_bytes,
    DocxError, DocxResult, TemplateDocument,
};
