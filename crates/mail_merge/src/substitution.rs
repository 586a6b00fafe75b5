//! Placeholder substitution over paragraphs
//!
//! A paragraph's run texts are joined, every token is replaced, and if the
//! text changed the runs are collapsed into one run styled like the first
//! original run. Paragraphs without a match are left exactly as they were.

use crate::merge_field::PlaceholderMap;
use serde::{Deserialize, Serialize};
use store::docx::{DocxResult, ParagraphMut};
use store::TemplateDocument;

/// Counts gathered while filling a document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubstitutionReport {
    /// Paragraphs examined (body and table cells)
    pub paragraphs_visited: usize,
    /// Paragraphs whose runs were replaced
    pub paragraphs_rewritten: usize,
}

/// Substitute tokens in one paragraph
///
/// Returns `true` when the paragraph was rewritten.
pub fn replace_in_paragraph(
    paragraph: &mut ParagraphMut<'_>,
    replacements: &PlaceholderMap,
) -> DocxResult<bool> {
    if paragraph.run_count() == 0 {
        return Ok(false);
    }

    let original = paragraph.text()?;
    if !replacements.matches(&original) {
        return Ok(false);
    }
    let replaced = replacements.apply(&original);
    if replaced == original {
        return Ok(false);
    }

    let format = paragraph.first_run_format().unwrap_or_default();
    paragraph.replace_runs(&replaced, &format);
    tracing::debug!(from = %original, to = %replaced, "rewrote paragraph");
    Ok(true)
}

/// Substitute tokens in every body paragraph and every table cell paragraph
pub fn replace_in_document(
    doc: &mut TemplateDocument,
    replacements: &PlaceholderMap,
) -> DocxResult<SubstitutionReport> {
    let mut report = SubstitutionReport::default();

    for mut paragraph in doc.paragraphs_mut() {
        report.paragraphs_visited += 1;
        if replace_in_paragraph(&mut paragraph, replacements)? {
            report.paragraphs_rewritten += 1;
        }
    }

    Ok(report)
}
