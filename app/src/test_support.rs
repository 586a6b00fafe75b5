//! Template fixture for the command tests

use std::io::Cursor;
use std::path::{Path, PathBuf};
use store::docx::{DocxWriter, PackagePart};

const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/></Types>"#;

const ROOT_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/></Relationships>"#;

const DOCUMENT: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body><w:p><w:r><w:t>{{NAME1}}</w:t></w:r></w:p><w:p><w:r><w:t>{{COMPANY1}}</w:t></w:r></w:p><w:p><w:r><w:t>{{NAME2}}</w:t></w:r></w:p><w:p><w:r><w:t>{{COMPANY2}}</w:t></w:r></w:p></w:body></w:document>"#;

/// Write a four-placeholder `template.docx` into `dir`
pub fn write_template(dir: &Path) -> PathBuf {
    let parts = [
        PackagePart::file("[Content_Types].xml", CONTENT_TYPES.as_bytes().to_vec()),
        PackagePart::file("_rels/.rels", ROOT_RELS.as_bytes().to_vec()),
        PackagePart::file("word/document.xml", DOCUMENT.as_bytes().to_vec()),
    ];
    let bytes = DocxWriter::new(Cursor::new(Vec::new()))
        .write(&parts)
        .expect("fixture package")
        .into_inner();

    let path = dir.join(mail_merge::TEMPLATE_FILE_NAME);
    std::fs::write(&path, bytes).expect("write fixture");
    path
}
