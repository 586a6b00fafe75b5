//! End-to-end badge generation against a Word-shaped template package

use mail_merge::{generate_badge, BadgeRequest, MailMergeError, Person};
use std::io::{Cursor, Read, Write};
use std::path::{Path, PathBuf};
use store::docx::RunFormat;
use store::open_template;
use tempfile::TempDir;
use zip::write::SimpleFileOptions;
use zip::{ZipArchive, ZipWriter};

const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="png" ContentType="image/png"/><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/><Override PartName="/word/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml"/><Override PartName="/word/header1.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.header+xml"/></Types>"#;

const ROOT_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/></Relationships>"#;

const DOCUMENT_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/><Relationship Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/header" Target="header1.xml"/><Relationship Id="rId3" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/image" Target="media/logo.png"/></Relationships>"#;

const STYLES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:styles xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:style w:type="paragraph" w:default="1" w:styleId="Normal"><w:name w:val="Normal"/></w:style></w:styles>"#;

const HEADER: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:hdr xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:p><w:r><w:t>{{NAME1}}</w:t></w:r></w:p></w:hdr>"#;

const LOGO: &[u8] = &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a, 0, 0, 0, 0];

const DOCUMENT: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships"><w:body>"#,
    // Name split across runs by the editor
    r#"<w:p><w:pPr><w:jc w:val="center"/><w:spacing w:after="120"/></w:pPr>"#,
    r#"<w:r><w:rPr><w:rFonts w:ascii="微軟正黑體" w:hAnsi="微軟正黑體"/><w:b/><w:sz w:val="72"/></w:rPr><w:t>{{NA</w:t></w:r>"#,
    r#"<w:r><w:rPr><w:sz w:val="20"/></w:rPr><w:t>ME1}}</w:t></w:r></w:p>"#,
    r#"<w:p><w:pPr><w:jc w:val="center"/></w:pPr><w:r><w:rPr><w:color w:val="1F4E79"/><w:sz w:val="36"/></w:rPr><w:t>{{COMPANY1}}</w:t></w:r></w:p>"#,
    r#"<w:p><w:r><w:t xml:space="preserve">Welcome, </w:t></w:r><w:r><w:t>{{NAME1}}</w:t></w:r></w:p>"#,
    r#"<w:tbl><w:tblPr><w:tblW w:w="0" w:type="auto"/></w:tblPr><w:tr>"#,
    r#"<w:tc><w:p><w:r><w:t>{{NAME1}}</w:t></w:r></w:p><w:p><w:r><w:t>{{COMPANY1}}</w:t></w:r></w:p></w:tc>"#,
    r#"<w:tc><w:p><w:r><w:t>{{NAME2}}</w:t></w:r></w:p><w:p><w:r><w:t>{{COMPANY2}}</w:t></w:r></w:p></w:tc>"#,
    r#"</w:tr></w:tbl>"#,
    r#"<w:p><w:r><w:t>Staff only</w:t></w:r></w:p>"#,
    r#"<w:sectPr><w:headerReference w:type="default" r:id="rId2"/></w:sectPr>"#,
    r#"</w:body></w:document>"#
);

const PARTS: &[(&str, &[u8])] = &[
    ("[Content_Types].xml", CONTENT_TYPES.as_bytes()),
    ("_rels/.rels", ROOT_RELS.as_bytes()),
    ("word/document.xml", DOCUMENT.as_bytes()),
    ("word/_rels/document.xml.rels", DOCUMENT_RELS.as_bytes()),
    ("word/styles.xml", STYLES.as_bytes()),
    ("word/header1.xml", HEADER.as_bytes()),
    ("word/media/logo.png", LOGO),
];

fn write_template(dir: &Path) -> PathBuf {
    write_template_with(dir, DOCUMENT)
}

fn write_template_with(dir: &Path, document: &str) -> PathBuf {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    for (name, data) in PARTS {
        let data = if *name == "word/document.xml" { document.as_bytes() } else { *data };
        zip.start_file(*name, SimpleFileOptions::default()).unwrap();
        zip.write_all(data).unwrap();
    }
    let bytes = zip.finish().unwrap().into_inner();

    let path = dir.join("template.docx");
    std::fs::write(&path, bytes).unwrap();
    path
}

fn read_part(path: &Path, name: &str) -> Vec<u8> {
    let file = std::fs::File::open(path).unwrap();
    let mut archive = ZipArchive::new(file).unwrap();
    let mut entry = archive.by_name(name).unwrap();
    let mut data = Vec::new();
    entry.read_to_end(&mut data).unwrap();
    data
}

fn all_texts(path: &Path) -> (Vec<String>, Vec<String>) {
    let doc = open_template(path).unwrap();
    let body = doc.body_paragraphs().iter().map(|p| p.text().unwrap()).collect();
    let cells = doc.table_paragraphs().iter().map(|p| p.text().unwrap()).collect();
    (body, cells)
}

#[test]
fn test_single_person_badge() {
    let dir = TempDir::new().unwrap();
    let template = write_template(dir.path());

    let request = BadgeRequest::single(Person::new("Amy", "Acme"));
    let result = generate_badge(&template, dir.path(), &request).unwrap();

    assert_eq!(result.output_path, dir.path().join("Amy_badge.docx"));
    assert!(result.output_path.exists());

    let (body, cells) = all_texts(&result.output_path);
    assert_eq!(body, vec!["Amy", "Acme", "Welcome, Amy", "Staff only"]);
    assert_eq!(cells, vec!["Amy", "Acme", "", ""]);
}

#[test]
fn test_two_people_spaced_badge() {
    let dir = TempDir::new().unwrap();
    let template = write_template(dir.path());

    let request = BadgeRequest::pair(Person::new("王小明", "台積電"), Person::new("Bo", "Initech"))
        .with_spaces(true);
    let result = generate_badge(&template, dir.path(), &request).unwrap();

    assert_eq!(result.output_path, dir.path().join("王小明_Bo_badge.docx"));

    let (body, cells) = all_texts(&result.output_path);
    assert_eq!(body[0], "王 小 明");
    assert_eq!(body[1], "台 積 電");
    assert_eq!(cells, vec!["王 小 明", "台 積 電", "B o", "I n i t e c h"]);
}

#[test]
fn test_first_run_formatting_is_kept() {
    let dir = TempDir::new().unwrap();
    let template = write_template(dir.path());

    let result = generate_badge(
        &template,
        dir.path(),
        &BadgeRequest::single(Person::new("Amy", "Acme")),
    )
    .unwrap();

    let doc = open_template(&result.output_path).unwrap();
    let paragraphs = doc.body_paragraphs();

    let name_runs = paragraphs[0].runs();
    assert_eq!(name_runs.len(), 1);
    let format = name_runs[0].format();
    assert_eq!(format.bold, Some(true));
    assert_eq!(format.size_half_points, Some(72));
    assert_eq!(format.font_name.as_deref(), Some("微軟正黑體"));
    assert_eq!(format.effective_east_asia_font(), Some("Microsoft JhengHei"));

    let company = paragraphs[1].runs()[0].format();
    assert_eq!(
        company,
        RunFormat {
            color: Some("1F4E79".to_string()),
            size_half_points: Some(36),
            ..Default::default()
        }
    );
}

#[test]
fn test_paragraph_properties_survive() {
    let dir = TempDir::new().unwrap();
    let template = write_template(dir.path());

    let result = generate_badge(
        &template,
        dir.path(),
        &BadgeRequest::single(Person::new("Amy", "Acme")),
    )
    .unwrap();

    let xml = String::from_utf8(read_part(&result.output_path, "word/document.xml")).unwrap();
    assert!(xml.contains(r#"<w:pPr><w:jc w:val="center"/><w:spacing w:after="120"/></w:pPr>"#));
    assert!(xml.contains(r#"<w:tblW w:w="0" w:type="auto"/>"#));
    assert!(xml.contains(r#"<w:headerReference w:type="default" r:id="rId2"/>"#));
    assert!(!xml.contains("{{"));
}

#[test]
fn test_other_parts_are_copied_verbatim() {
    let dir = TempDir::new().unwrap();
    let template = write_template(dir.path());

    let result = generate_badge(
        &template,
        dir.path(),
        &BadgeRequest::single(Person::new("Amy", "Acme")),
    )
    .unwrap();

    for (name, data) in PARTS {
        if *name == "word/document.xml" {
            continue;
        }
        assert_eq!(read_part(&result.output_path, name), data.to_vec(), "{}", name);
    }

    // Headers are outside the body and keep their tokens
    let header = String::from_utf8(read_part(&result.output_path, "word/header1.xml")).unwrap();
    assert!(header.contains("{{NAME1}}"));
}

#[test]
fn test_missing_template_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let template = dir.path().join("template.docx");

    let err = generate_badge(
        &template,
        dir.path(),
        &BadgeRequest::single(Person::new("Amy", "Acme")),
    )
    .unwrap_err();

    assert!(matches!(err, MailMergeError::TemplateLoad { .. }));
    assert!(err.to_string().contains("template.docx"));
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_regenerating_overwrites() {
    let dir = TempDir::new().unwrap();
    let template = write_template(dir.path());
    let first = BadgeRequest::single(Person::new("Amy", "Acme"));
    let second = BadgeRequest::single(Person::new("Amy", "Globex"));

    generate_badge(&template, dir.path(), &first).unwrap();
    let result = generate_badge(&template, dir.path(), &second).unwrap();

    let (body, _) = all_texts(&result.output_path);
    assert_eq!(body[1], "Globex");
}

#[test]
fn test_default_namespace_template_stays_well_formed() {
    let dir = TempDir::new().unwrap();
    let template = write_template_with(
        dir.path(),
        concat!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
            r#"<document xmlns="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><body>"#,
            r#"<p><r><rPr><b/></rPr><t>{{NA</t></r><r><t>ME1}}</t></r></p>"#,
            r#"</body></document>"#
        ),
    );

    let result = generate_badge(
        &template,
        dir.path(),
        &BadgeRequest::single(Person::new("Amy", "Acme")),
    )
    .unwrap();

    let xml = String::from_utf8(read_part(&result.output_path, "word/document.xml")).unwrap();
    assert!(!xml.contains("<w:"), "{}", xml);
    assert!(xml.contains(r#"<p><r><rPr><b/></rPr><t xml:space="preserve">Amy</t></r></p>"#));

    let (body, _) = all_texts(&result.output_path);
    assert_eq!(body, vec!["Amy"]);
}
