//! Paragraph and run views over the element tree
//!
//! A paragraph's runs are its direct `w:r` children. Runs nested inside
//! hyperlinks, fields or content controls belong to those containers and
//! are not visited here.

use crate::docx::error::DocxResult;
use crate::docx::run_format::RunFormat;
use crate::docx::xml_tree::{XmlElement, XmlNode};

fn is_run(node: &XmlNode) -> bool {
    node.as_element().is_some_and(|e| e.is("r"))
}

/// Text of a single `w:r`, with tabs and breaks mapped to `\t` and `\n`
fn run_text(run: &XmlElement) -> DocxResult<String> {
    let mut text = String::new();
    for child in run.child_elements() {
        if child.is("t") {
            text.push_str(&child.text()?);
        } else if child.is("tab") || child.is("ptab") {
            text.push('\t');
        } else if child.is("br") || child.is("cr") {
            text.push('\n');
        } else if child.is("noBreakHyphen") {
            text.push('-');
        }
    }
    Ok(text)
}

/// Read-only view of a `w:r`
#[derive(Debug, Clone, Copy)]
pub struct Run<'a> {
    element: &'a XmlElement,
}

impl<'a> Run<'a> {
    /// Plain text of the run
    pub fn text(&self) -> DocxResult<String> {
        run_text(self.element)
    }

    /// Formatting snapshot of the run
    pub fn format(&self) -> RunFormat {
        RunFormat::from_run(self.element)
    }
}

/// Read-only view of a `w:p`
#[derive(Debug, Clone, Copy)]
pub struct Paragraph<'a> {
    element: &'a XmlElement,
}

impl<'a> Paragraph<'a> {
    pub(crate) fn new(element: &'a XmlElement) -> Self {
        Self { element }
    }

    /// Direct runs in document order
    pub fn runs(&self) -> Vec<Run<'a>> {
        self.element
            .children_named("r")
            .map(|element| Run { element })
            .collect()
    }

    /// Concatenated text of the direct runs
    pub fn text(&self) -> DocxResult<String> {
        let mut text = String::new();
        for run in self.element.children_named("r") {
            text.push_str(&run_text(run)?);
        }
        Ok(text)
    }
}

/// Mutable view of a `w:p`
#[derive(Debug)]
pub struct ParagraphMut<'a> {
    element: &'a mut XmlElement,
}

impl<'a> ParagraphMut<'a> {
    pub(crate) fn new(element: &'a mut XmlElement) -> Self {
        Self { element }
    }

    /// Read-only view of the same paragraph
    pub fn view(&self) -> Paragraph<'_> {
        Paragraph::new(self.element)
    }

    /// Number of direct runs
    pub fn run_count(&self) -> usize {
        self.element.children_named("r").count()
    }

    /// Concatenated text of the direct runs
    pub fn text(&self) -> DocxResult<String> {
        self.view().text()
    }

    /// Formatting of the first run, if there is one
    pub fn first_run_format(&self) -> Option<RunFormat> {
        self.element.first_child("r").map(RunFormat::from_run)
    }

    /// Drop every direct run and put a single run holding `text` in place
    /// of the first one
    ///
    /// Paragraph properties and non-run children (bookmarks, hyperlinks,
    /// ...) are kept where they are. The new run uses the paragraph's own
    /// prefix, or none when the paragraph is in the default namespace.
    pub fn replace_runs(&mut self, text: &str, format: &RunFormat) {
        let prefix = self.element.prefix().map(str::to_string);
        let run = build_run(prefix.as_deref(), text, format);
        let children = &mut self.element.children;

        let insert_at = children.iter().position(is_run).unwrap_or(children.len());
        children.retain(|node| !is_run(node));
        children.insert(insert_at, XmlNode::Element(run));
    }
}

/// Build a `w:r` for `text`; `\t` becomes `w:tab` and `\n` becomes `w:br`
pub fn build_run(prefix: Option<&str>, text: &str, format: &RunFormat) -> XmlElement {
    let tag = |local: &str| XmlElement::qualified(prefix, local);
    let mut run = XmlElement::new(tag("r"));

    if let Some(props) = format.to_run_properties(prefix) {
        run.push_element(props);
    }

    let mut pending = String::new();
    let flush = |run: &mut XmlElement, pending: &mut String| {
        if pending.is_empty() {
            return;
        }
        let mut t = XmlElement::new(tag("t")).with_attribute("xml:space", "preserve");
        t.push_text(pending);
        run.push_element(t);
        pending.clear();
    };

    for ch in text.chars() {
        match ch {
            '\t' => {
                flush(&mut run, &mut pending);
                run.push_element(XmlElement::empty(tag("tab")));
            }
            '\n' => {
                flush(&mut run, &mut pending);
                run.push_element(XmlElement::empty(tag("br")));
            }
            _ => pending.push(ch),
        }
    }
    flush(&mut run, &mut pending);

    run
}
