//! DOCX Template Module
//!
//! This module opens Microsoft Word DOCX files, exposes their paragraphs for
//! in-place editing, and saves the result as a new package.
//!
//! ## Structure
//!
//! A DOCX file is a ZIP archive containing XML files:
//! - `[Content_Types].xml` - Content type definitions
//! - `_rels/.rels` - Root relationships
//! - `word/document.xml` - Main document content
//! - `word/styles.xml`, `word/media/`, ... - Everything else
//!
//! Only the main document part is parsed. All other parts are carried
//! through unchanged.

mod api;
mod document;
mod error;
mod paragraph;
mod reader;
mod relationships;
mod run_format;
mod writer;
mod xml_tree;

#[cfg(test)]
pub(crate) mod test_support;

pub use api::{open_template, open_template_bytes, save_document, save_document_bytes};
pub use document::{TemplateDocument, DEFAULT_DOCUMENT_PART};
pub use error::{DocxError, DocxResult};
pub use paragraph::{build_run, Paragraph, ParagraphMut, Run};
pub use reader::{DocxReader, PackagePart, XmlParser};
pub use relationships::{Relationship, Relationships};
pub use run_format::{RunFormat, JHENGHEI};
pub use writer::DocxWriter;
pub use xml_tree::{XmlDocument, XmlElement, XmlNode};

/// Relationship types used in DOCX
pub mod relationship_types {
    pub const DOCUMENT: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";
}
