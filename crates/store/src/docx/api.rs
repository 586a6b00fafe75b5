//! Public API for DOCX template files
//!
//! This module provides the main entry points for opening a template from
//! disk and saving the filled-in result.

use crate::docx::document::TemplateDocument;
use crate::docx::error::{DocxError, DocxResult};
use std::fs::File;
use std::io::{BufReader, Cursor};
use std::path::Path;

/// Open a DOCX template from disk
///
/// # Arguments
///
/// * `path` - Path to the DOCX file
///
/// # Returns
///
/// * `Ok(TemplateDocument)` - The opened template
/// * `Err(DocxError)` - If the file is missing or is not a usable DOCX
///
/// # Example
///
/// ```ignore
/// use store::docx::open_template;
/// use std::path::Path;
///
/// let template = open_template(Path::new("template.docx"))?;
/// ```
pub fn open_template(path: &Path) -> DocxResult<TemplateDocument> {
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            DocxError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("File not found: {}", path.display()),
            ))
        } else {
            DocxError::Io(e)
        }
    })?;

    TemplateDocument::read(BufReader::new(file))
}

/// Open a DOCX template from an in-memory byte slice
pub fn open_template_bytes(bytes: &[u8]) -> DocxResult<TemplateDocument> {
    TemplateDocument::read(Cursor::new(bytes))
}

/// Serialize a document to an in-memory byte vector
pub fn save_document_bytes(doc: &TemplateDocument) -> DocxResult<Vec<u8>> {
    let cursor = doc.write(Cursor::new(Vec::new()))?;
    Ok(cursor.into_inner())
}

/// Save a document to disk
///
/// The package is fully serialized in memory before the file is created,
/// so a serialization failure never leaves a partial file behind.
///
/// # Example
///
/// ```ignore
/// use store::docx::{open_template, save_document};
/// use std::path::Path;
///
/// let template = open_template(Path::new("template.docx"))?;
/// save_document(&template, Path::new("copy.docx"))?;
/// ```
pub fn save_document(doc: &TemplateDocument, path: &Path) -> DocxResult<()> {
    let bytes = save_document_bytes(doc)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }

    std::fs::write(path, bytes)?;
    Ok(())
}
