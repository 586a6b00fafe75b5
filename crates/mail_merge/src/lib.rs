//! Badge Template Filling
//!
//! This crate fills name-badge templates: Word documents containing the
//! placeholders `{{NAME1}}`, `{{COMPANY1}}`, `{{NAME2}}` and `{{COMPANY2}}`.
//!
//! # Features
//!
//! - Placeholder substitution across body paragraphs and table cells,
//!   including tokens Word has split over several runs
//! - Replacement text keeps the first run's font, size, bold, italic,
//!   underline and color
//! - Optional character spacing ("王小明" → "王 小 明")
//! - One- and two-person badges with derived output file names
//!
//! # Example
//!
//! ```rust,no_run
//! use mail_merge::{generate_badge, BadgeRequest, Person};
//! use std::path::Path;
//!
//! let request = BadgeRequest::single(Person::new("Amy", "Acme")).with_spaces(true);
//! let result = generate_badge(Path::new("template.docx"), Path::new("."), &request).unwrap();
//! assert!(result.output_path.ends_with("Amy_badge.docx"));
//! ```

mod error;
pub mod merge_engine;
pub mod merge_field;
pub mod spacing;
pub mod substitution;

#[cfg(test)]
mod test_support;

// Re-export main types
pub use error::{MailMergeError, Result};
pub use merge_engine::{
    generate_badge, sanitize_file_component, BadgeRequest, MergeEngine, MergeOptions, MergeResult,
    Person, TEMPLATE_FILE_NAME,
};
pub use merge_field::{Placeholder, PlaceholderMap};
pub use spacing::{space_out, space_out_with};
pub use store::BadgeMode;
pub use substitution::{replace_in_document, replace_in_paragraph, SubstitutionReport};
