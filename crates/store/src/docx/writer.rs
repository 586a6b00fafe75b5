//! DOCX package writer
//!
//! Writes every part of a package back into a ZIP archive in its original
//! order.

use crate::docx::error::DocxResult;
use crate::docx::reader::PackagePart;
use std::io::{Seek, Write};
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

/// ZIP writer for DOCX packages
pub struct DocxWriter<W: Write + Seek> {
    zip: ZipWriter<W>,
}

impl<W: Write + Seek> DocxWriter<W> {
    /// Create a new DOCX writer
    pub fn new(writer: W) -> Self {
        Self {
            zip: ZipWriter::new(writer),
        }
    }

    /// Write all parts and finish the archive, returning the inner writer
    pub fn write(mut self, parts: &[PackagePart]) -> DocxResult<W> {
        for part in parts {
            if part.is_dir {
                self.zip
                    .add_directory(part.name.as_str(), SimpleFileOptions::default())?;
            } else {
                self.write_file(&part.name, &part.data)?;
            }
        }

        Ok(self.zip.finish()?)
    }

    /// Write a file to the ZIP archive
    pub fn write_file(&mut self, path: &str, content: &[u8]) -> DocxResult<()> {
        let options = SimpleFileOptions::default()
            .compression_method(zip::CompressionMethod::Deflated);

        self.zip.start_file(path, options)?;
        self.zip.write_all(content)?;

        Ok(())
    }
}
