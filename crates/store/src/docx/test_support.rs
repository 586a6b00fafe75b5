//! Minimal DOCX fixtures for unit tests

use crate::docx::reader::PackagePart;
use crate::docx::writer::DocxWriter;
use std::io::Cursor;

const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/></Types>"#;

const ROOT_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/></Relationships>"#;

const STYLES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:styles xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"/>"#;

/// Wrap body XML in a main document part
pub fn document_xml(body: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{}</w:body></w:document>"#,
        body
    )
}

/// Build a complete DOCX package around the given body XML
pub fn build_docx(body: &str) -> Vec<u8> {
    let parts = vec![
        PackagePart::file("[Content_Types].xml", CONTENT_TYPES.as_bytes().to_vec()),
        PackagePart::file("_rels/.rels", ROOT_RELS.as_bytes().to_vec()),
        PackagePart::file("word/document.xml", document_xml(body).into_bytes()),
        PackagePart::file("word/styles.xml", STYLES.as_bytes().to_vec()),
    ];

    DocxWriter::new(Cursor::new(Vec::new()))
        .write(&parts)
        .expect("fixture package")
        .into_inner()
}
