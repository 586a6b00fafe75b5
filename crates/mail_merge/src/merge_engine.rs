//! Badge Generation Engine
//!
//! Orchestrates one generation request: open the template, space out the
//! fields if asked, fill the placeholders, and save the result under a name
//! derived from the people on the badge.

use crate::error::{MailMergeError, Result};
use crate::merge_field::{Placeholder, PlaceholderMap};
use crate::spacing::space_out;
use crate::substitution::{replace_in_document, SubstitutionReport};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use store::{open_template, save_document, BadgeMode};

/// Default template file name
pub const TEMPLATE_FILE_NAME: &str = "template.docx";

/// One name/company pair
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub company: String,
}

impl Person {
    pub fn new(name: impl Into<String>, company: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            company: company.into(),
        }
    }

    fn spaced(&self) -> Self {
        Self {
            name: space_out(&self.name),
            company: space_out(&self.company),
        }
    }
}

/// A validated generation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadgeRequest {
    pub mode: BadgeMode,
    pub first: Person,
    /// Ignored in single-person mode
    pub second: Option<Person>,
    /// Insert a space between the characters of every field
    pub add_spaces: bool,
}

impl BadgeRequest {
    /// Request a single-person badge
    pub fn single(first: Person) -> Self {
        Self {
            mode: BadgeMode::OnePerson,
            first,
            second: None,
            add_spaces: false,
        }
    }

    /// Request a two-person badge
    pub fn pair(first: Person, second: Person) -> Self {
        Self {
            mode: BadgeMode::TwoPeople,
            first,
            second: Some(second),
            add_spaces: false,
        }
    }

    pub fn with_spaces(mut self, add_spaces: bool) -> Self {
        self.add_spaces = add_spaces;
        self
    }

    /// Second person, if the mode uses one
    pub fn second_person(&self) -> Option<&Person> {
        if self.mode.has_second_person() {
            self.second.as_ref()
        } else {
            None
        }
    }

    /// Output file name, built from the names as typed (before spacing)
    ///
    /// `<name1>_badge.docx` or `<name1>_<name2>_badge.docx`.
    pub fn output_file_name(&self) -> String {
        let mut stem = sanitize_file_component(&self.first.name);
        if self.mode.has_second_person() {
            let second = self.second.as_ref().map(|p| p.name.as_str()).unwrap_or("");
            stem.push('_');
            stem.push_str(&sanitize_file_component(second));
        }
        format!("{}_badge.docx", stem)
    }

    /// Token → value map for this request, with spacing applied if asked
    ///
    /// Every placeholder is bound; fields not in use map to empty strings.
    pub fn placeholder_map(&self) -> PlaceholderMap {
        let prepare = |person: &Person| {
            if self.add_spaces {
                person.spaced()
            } else {
                person.clone()
            }
        };

        let first = prepare(&self.first);
        let second = self.second_person().map(prepare).unwrap_or_default();

        let mut map = PlaceholderMap::new();
        map.set(Placeholder::Name1, first.name);
        map.set(Placeholder::Company1, first.company);
        map.set(Placeholder::Name2, second.name);
        map.set(Placeholder::Company2, second.company);
        map
    }
}

/// Replace characters that cannot appear in a file name with `_`
pub fn sanitize_file_component(value: &str) -> String {
    value
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect()
}

/// Where generated badges go
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeOptions {
    pub output_directory: PathBuf,
}

impl Default for MergeOptions {
    fn default() -> Self {
        Self {
            output_directory: PathBuf::from("."),
        }
    }
}

impl MergeOptions {
    pub fn with_output_directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_directory = dir.into();
        self
    }
}

/// Outcome of a successful generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeResult {
    pub output_path: PathBuf,
    pub report: SubstitutionReport,
}

/// Fills one template per request
pub struct MergeEngine {
    template_path: PathBuf,
    options: MergeOptions,
}

impl MergeEngine {
    pub fn new(template_path: impl Into<PathBuf>, options: MergeOptions) -> Self {
        Self {
            template_path: template_path.into(),
            options,
        }
    }

    /// Generate a badge for `request`
    ///
    /// The template is loaded first; if that fails nothing is written.
    pub fn execute(&self, request: &BadgeRequest) -> Result<MergeResult> {
        let output_path = self
            .options
            .output_directory
            .join(request.output_file_name());

        tracing::info!(
            template = %self.template_path.display(),
            output = %output_path.display(),
            mode = ?request.mode,
            "generating badge"
        );

        let mut doc = open_template(&self.template_path).map_err(|source| {
            MailMergeError::TemplateLoad {
                path: self.template_path.clone(),
                source,
            }
        })?;

        let replacements = request.placeholder_map();
        let report = replace_in_document(&mut doc, &replacements).map_err(|source| {
            MailMergeError::TemplateLoad {
                path: self.template_path.clone(),
                source,
            }
        })?;

        save_document(&doc, &output_path).map_err(|source| MailMergeError::Save {
            path: output_path.clone(),
            source,
        })?;

        tracing::info!(
            output = %output_path.display(),
            visited = report.paragraphs_visited,
            rewritten = report.paragraphs_rewritten,
            "badge saved"
        );

        Ok(MergeResult {
            output_path,
            report,
        })
    }
}

/// Convenience wrapper: generate one badge from `template` into `output_dir`
pub fn generate_badge(
    template: &Path,
    output_dir: &Path,
    request: &BadgeRequest,
) -> Result<MergeResult> {
    MergeEngine::new(template, MergeOptions::default().with_output_directory(output_dir))
        .execute(request)
}
