//! ZIP archive reading and XML attribute helpers

use crate::docx::error::{DocxError, DocxResult};
use quick_xml::events::BytesStart;
use quick_xml::Reader;
use std::io::{Read, Seek};
use zip::ZipArchive;

/// A single entry of a DOCX package, held in memory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackagePart {
    /// Path of the entry inside the archive (e.g. `word/document.xml`)
    pub name: String,
    /// Raw, uncompressed content
    pub data: Vec<u8>,
    /// Whether the entry is a directory marker
    pub is_dir: bool,
}

impl PackagePart {
    /// Create a file entry
    pub fn file(name: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            data,
            is_dir: false,
        }
    }

    /// Create a directory entry
    pub fn directory(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data: Vec::new(),
            is_dir: true,
        }
    }
}

/// A wrapper around a ZIP archive for reading DOCX files
pub struct DocxReader<R: Read + Seek> {
    archive: ZipArchive<R>,
}

impl<R: Read + Seek> DocxReader<R> {
    /// Create a new DOCX reader from a source that implements Read + Seek
    pub fn new(reader: R) -> DocxResult<Self> {
        let archive = ZipArchive::new(reader)?;
        Ok(Self { archive })
    }

    /// Read a file from the archive as a string
    pub fn read_file_as_string(&mut self, path: &str) -> DocxResult<String> {
        let bytes = self.read_file_as_bytes(path)?;
        Ok(String::from_utf8(bytes)?)
    }

    /// Read a file from the archive as bytes
    pub fn read_file_as_bytes(&mut self, path: &str) -> DocxResult<Vec<u8>> {
        let mut file = self.archive.by_name(path).map_err(|e| {
            if matches!(e, zip::result::ZipError::FileNotFound) {
                DocxError::MissingPart(path.to_string())
            } else {
                DocxError::from(e)
            }
        })?;

        let mut contents = Vec::new();
        file.read_to_end(&mut contents)?;
        Ok(contents)
    }

    /// Check if a file exists in the archive
    pub fn file_exists(&self, path: &str) -> bool {
        self.archive.file_names().any(|name| name == path)
    }

    /// Check if this is a valid DOCX file
    pub fn is_valid_docx(&self) -> bool {
        self.file_exists("[Content_Types].xml") && self.file_exists("_rels/.rels")
    }

    /// Read every entry of the archive, in archive order
    pub fn read_all_parts(&mut self) -> DocxResult<Vec<PackagePart>> {
        let mut parts = Vec::with_capacity(self.archive.len());

        for index in 0..self.archive.len() {
            let mut file = self.archive.by_index(index)?;
            let name = file.name().to_string();

            if file.is_dir() {
                parts.push(PackagePart::directory(name));
                continue;
            }

            let mut data = Vec::with_capacity(file.size() as usize);
            file.read_to_end(&mut data)?;
            parts.push(PackagePart::file(name, data));
        }

        Ok(parts)
    }
}

/// XML reader utilities for DOCX XML content
pub struct XmlParser;

impl XmlParser {
    /// Create an XML reader that keeps whitespace-only text untouched
    pub fn from_string(content: &str) -> Reader<&[u8]> {
        let mut reader = Reader::from_str(content);
        reader.config_mut().trim_text(false);
        reader
    }

    /// Get an attribute value from an element
    pub fn get_attribute(event: &BytesStart, name: &[u8]) -> Option<String> {
        event
            .attributes()
            .filter_map(|a| a.ok())
            .find(|a| a.key.as_ref() == name)
            .map(|a| {
                a.unescape_value()
                    .map(|v| v.into_owned())
                    .unwrap_or_else(|_| String::from_utf8_lossy(&a.value).into_owned())
            })
    }

    /// Get a w: namespaced attribute, falling back to the bare name
    pub fn get_w_attribute(event: &BytesStart, name: &str) -> Option<String> {
        let key = format!("w:{}", name);
        Self::get_attribute(event, key.as_bytes())
            .or_else(|| Self::get_attribute(event, name.as_bytes()))
    }

    /// Parse an OOXML on/off value; a missing value means "on"
    pub fn parse_bool(value: &str) -> bool {
        matches!(value.to_lowercase().as_str(), "1" | "true" | "on" | "yes")
    }

    /// Check if an element name matches with optional namespace prefix
    pub fn matches_element(name: &[u8], expected: &str) -> bool {
        let expected = expected.as_bytes();
        if name == expected {
            return true;
        }
        name.len() > expected.len()
            && name.ends_with(expected)
            && name[name.len() - expected.len() - 1] == b':'
    }

    /// Namespace prefix of a qualified name (`w` for `w:p`), if any
    pub fn prefix_of(name: &[u8]) -> Option<&str> {
        let colon = name.iter().position(|&b| b == b':')?;
        std::str::from_utf8(&name[..colon]).ok()
    }
}
