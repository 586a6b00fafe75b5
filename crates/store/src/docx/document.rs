//! Template documents
//!
//! A [`TemplateDocument`] holds every part of a DOCX package in memory plus
//! an editable tree of the main document part. Saving writes the edited
//! tree back and copies every other part verbatim.

use crate::docx::error::{DocxError, DocxResult};
use crate::docx::paragraph::{Paragraph, ParagraphMut};
use crate::docx::reader::{DocxReader, PackagePart};
use crate::docx::relationships::{part_path, Relationships};
use crate::docx::relationship_types;
use crate::docx::writer::DocxWriter;
use crate::docx::xml_tree::{XmlDocument, XmlElement, XmlNode};
use std::io::{Read, Seek, Write};

/// Fallback location of the main document part
pub const DEFAULT_DOCUMENT_PART: &str = "word/document.xml";

/// An opened DOCX template
#[derive(Debug, Clone)]
pub struct TemplateDocument {
    parts: Vec<PackagePart>,
    document_part: String,
    document: XmlDocument,
}

impl TemplateDocument {
    /// Read a package from any seekable source
    pub fn read<R: Read + Seek>(reader: R) -> DocxResult<Self> {
        let mut docx = DocxReader::new(reader)?;

        if !docx.is_valid_docx() {
            return Err(DocxError::InvalidStructure(
                "Missing required DOCX files".to_string(),
            ));
        }

        let root_rels = Relationships::parse(&docx.read_file_as_string("_rels/.rels")?)?;
        let document_part = root_rels
            .get_by_type(relationship_types::DOCUMENT)
            .map(|rel| part_path(&rel.target))
            .unwrap_or_else(|| DEFAULT_DOCUMENT_PART.to_string());

        let document_xml = docx.read_file_as_string(&document_part)?;
        let document = XmlDocument::parse(&document_xml)?;

        let body_found = document
            .root()
            .and_then(|root| root.first_child("body"))
            .is_some();
        if !body_found {
            return Err(DocxError::InvalidStructure(format!(
                "{} has no body",
                document_part
            )));
        }

        let parts = docx.read_all_parts()?;

        Ok(Self {
            parts,
            document_part,
            document,
        })
    }

    /// Path of the main document part inside the package
    pub fn document_part(&self) -> &str {
        &self.document_part
    }

    /// All package parts as loaded (the main part holds its original bytes)
    pub fn parts(&self) -> &[PackagePart] {
        &self.parts
    }

    /// The editable main document tree
    pub fn xml(&self) -> &XmlDocument {
        &self.document
    }

    fn body(&self) -> Option<&XmlElement> {
        self.document.root()?.first_child("body")
    }

    fn body_mut(&mut self) -> Option<&mut XmlElement> {
        self.document
            .root_mut()?
            .children_named_mut("body")
            .next()
    }

    /// Paragraphs placed directly in the body
    pub fn body_paragraphs(&self) -> Vec<Paragraph<'_>> {
        self.body()
            .map(|body| body.children_named("p").map(Paragraph::new).collect())
            .unwrap_or_default()
    }

    /// Paragraphs inside table cells, including nested tables
    pub fn table_paragraphs(&self) -> Vec<Paragraph<'_>> {
        let mut out = Vec::new();
        if let Some(body) = self.body() {
            for table in body.children_named("tbl") {
                collect_table(table, &mut out);
            }
        }
        out
    }

    /// Every paragraph a template pass visits: body paragraphs and table
    /// cell paragraphs, in document order
    pub fn paragraphs_mut(&mut self) -> Vec<ParagraphMut<'_>> {
        let mut out = Vec::new();
        if let Some(body) = self.body_mut() {
            for child in body.children.iter_mut() {
                if let XmlNode::Element(element) = child {
                    if element.is("p") {
                        out.push(ParagraphMut::new(element));
                    } else if element.is("tbl") {
                        collect_table_mut(element, &mut out);
                    }
                }
            }
        }
        out
    }

    /// Serialize the package with the current document tree
    pub fn write<W: Write + Seek>(&self, writer: W) -> DocxResult<W> {
        let document_bytes = self.document.to_bytes()?;
        let parts: Vec<PackagePart> = self
            .parts
            .iter()
            .map(|part| {
                if part.name == self.document_part {
                    PackagePart::file(part.name.clone(), document_bytes.clone())
                } else {
                    part.clone()
                }
            })
            .collect();

        DocxWriter::new(writer).write(&parts)
    }
}

fn collect_table<'a>(table: &'a XmlElement, out: &mut Vec<Paragraph<'a>>) {
    for row in table.children_named("tr") {
        for cell in row.children_named("tc") {
            for child in cell.child_elements() {
                if child.is("p") {
                    out.push(Paragraph::new(child));
                } else if child.is("tbl") {
                    collect_table(child, out);
                }
            }
        }
    }
}

fn collect_table_mut<'a>(table: &'a mut XmlElement, out: &mut Vec<ParagraphMut<'a>>) {
    for row in table.children_named_mut("tr") {
        for cell in row.children_named_mut("tc") {
            for child in cell.children.iter_mut() {
                if let XmlNode::Element(element) = child {
                    if element.is("p") {
                        out.push(ParagraphMut::new(element));
                    } else if element.is("tbl") {
                        collect_table_mut(element, out);
                    }
                }
            }
        }
    }
}
