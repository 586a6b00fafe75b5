//! DOCX fixtures shared by the unit tests

use std::io::Cursor;
use store::docx::{DocxWriter, PackagePart};

const CONTENT_TYPES: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#,
    r#"<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>"#,
    r#"<Default Extension="xml" ContentType="application/xml"/>"#,
    r#"<Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/>"#,
    r#"</Types>"#
);

const ROOT_RELS: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
    r#"<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/>"#,
    r#"</Relationships>"#
);

/// A badge template package whose body is `body`
pub fn build_docx(body: &str) -> Vec<u8> {
    let document = format!(
        concat!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
            r#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">"#,
            r#"<w:body>{}</w:body></w:document>"#
        ),
        body
    );

    let parts = [
        PackagePart::file("[Content_Types].xml", CONTENT_TYPES.as_bytes().to_vec()),
        PackagePart::file("_rels/.rels", ROOT_RELS.as_bytes().to_vec()),
        PackagePart::file("word/document.xml", document.into_bytes()),
    ];

    DocxWriter::new(Cursor::new(Vec::new()))
        .write(&parts)
        .expect("fixture package")
        .into_inner()
}
