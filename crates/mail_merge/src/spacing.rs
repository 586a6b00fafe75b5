//! Character spacing for names and companies
//!
//! Badges often letter-space short CJK names ("王小明" → "王 小 明"). The
//! transform works on extended grapheme clusters so composed characters,
//! emoji sequences and Hangul syllables are never split.

use unicode_segmentation::UnicodeSegmentation;

/// Separator inserted between characters
pub const SEPARATOR: &str = " ";

/// Insert a single space between every pair of adjacent characters
///
/// Empty input is returned unchanged. The transform is not idempotent:
/// spacing already spaced text puts separators around the existing spaces
/// as well.
pub fn space_out(text: &str) -> String {
    space_out_with(text, SEPARATOR)
}

/// [`space_out`] with a custom separator
pub fn space_out_with(text: &str, separator: &str) -> String {
    let mut out = String::with_capacity(text.len() * 2);
    for (i, grapheme) in text.graphemes(true).enumerate() {
        if i > 0 {
            out.push_str(separator);
        }
        out.push_str(grapheme);
    }
    out
}
