//! Lossless XML element tree
//!
//! Template parts are edited structurally, so the whole part is loaded into
//! a small element tree. Every event the reader produces is kept (including
//! declarations, comments and whitespace) and written back unchanged, which
//! means untouched parts of the document round-trip byte for byte apart
//! from insignificant attribute quoting.

use crate::docx::error::{DocxError, DocxResult};
use crate::docx::reader::XmlParser;
use quick_xml::events::{BytesStart, BytesText, Event};
use quick_xml::Writer;

/// A node in the element tree
#[derive(Debug, Clone)]
pub enum XmlNode {
    /// An element with its children
    Element(XmlElement),
    /// Character data, kept in its escaped form
    Text(BytesText<'static>),
    /// Anything else (declaration, comment, CDATA, processing instruction)
    Other(Event<'static>),
}

impl XmlNode {
    /// The element, if this node is one
    pub fn as_element(&self) -> Option<&XmlElement> {
        match self {
            XmlNode::Element(element) => Some(element),
            _ => None,
        }
    }

    /// The element, if this node is one
    pub fn as_element_mut(&mut self) -> Option<&mut XmlElement> {
        match self {
            XmlNode::Element(element) => Some(element),
            _ => None,
        }
    }
}

/// An XML element: start tag plus children
#[derive(Debug, Clone)]
pub struct XmlElement {
    start: BytesStart<'static>,
    /// Child nodes in document order
    pub children: Vec<XmlNode>,
    self_closing: bool,
}

impl XmlElement {
    /// Create an element that will be written as a start/end pair
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            start: BytesStart::new(name.into()),
            children: Vec::new(),
            self_closing: false,
        }
    }

    /// Create an element that is written as `<name/>` while it has no children
    pub fn empty(name: impl Into<String>) -> Self {
        Self {
            self_closing: true,
            ..Self::new(name)
        }
    }

    fn from_start(start: BytesStart<'static>, self_closing: bool) -> Self {
        Self {
            start,
            children: Vec::new(),
            self_closing,
        }
    }

    /// Builder-style attribute setter
    pub fn with_attribute(mut self, key: &str, value: &str) -> Self {
        self.start.push_attribute((key, value));
        self
    }

    /// Qualified name for `local` under an optional prefix (`w:r` or `r`)
    pub fn qualified(prefix: Option<&str>, local: &str) -> String {
        match prefix {
            Some(prefix) => format!("{}:{}", prefix, local),
            None => local.to_string(),
        }
    }

    /// Qualified name, e.g. `w:p`
    pub fn name(&self) -> &[u8] {
        self.start.name().into_inner()
    }

    /// Whether the local name (ignoring any prefix) equals `local`
    pub fn is(&self, local: &str) -> bool {
        XmlParser::matches_element(self.name(), local)
    }

    /// Namespace prefix of this element, if any
    pub fn prefix(&self) -> Option<&str> {
        XmlParser::prefix_of(self.name())
    }

    /// Look up a `w:` attribute (or its unprefixed form)
    pub fn w_attribute(&self, name: &str) -> Option<String> {
        XmlParser::get_w_attribute(&self.start, name)
    }

    /// Child elements, skipping text and other nodes
    pub fn child_elements(&self) -> impl Iterator<Item = &XmlElement> {
        self.children.iter().filter_map(XmlNode::as_element)
    }

    /// Child elements with the given local name
    pub fn children_named<'s>(&'s self, local: &'s str) -> impl Iterator<Item = &'s XmlElement> + 's {
        self.child_elements().filter(move |e| e.is(local))
    }

    /// Mutable child elements with the given local name
    pub fn children_named_mut<'s>(
        &'s mut self,
        local: &'s str,
    ) -> impl Iterator<Item = &'s mut XmlElement> + 's {
        self.children
            .iter_mut()
            .filter_map(XmlNode::as_element_mut)
            .filter(move |e| e.is(local))
    }

    /// First child element with the given local name
    pub fn first_child(&self, local: &str) -> Option<&XmlElement> {
        self.child_elements().find(|e| e.is(local))
    }

    /// Append a child element
    pub fn push_element(&mut self, child: XmlElement) {
        self.children.push(XmlNode::Element(child));
    }

    /// Append text, escaping it as needed
    pub fn push_text(&mut self, text: &str) {
        self.children
            .push(XmlNode::Text(BytesText::new(text).into_owned()));
    }

    /// Concatenated, unescaped text of the direct text children
    pub fn text(&self) -> DocxResult<String> {
        let mut out = String::new();
        for child in &self.children {
            match child {
                XmlNode::Text(text) => {
                    let unescaped = text
                        .unescape()
                        .map_err(|e| DocxError::XmlParse(e.to_string()))?;
                    out.push_str(&unescaped);
                }
                XmlNode::Other(Event::CData(data)) => {
                    out.push_str(&String::from_utf8_lossy(data));
                }
                _ => {}
            }
        }
        Ok(out)
    }

    fn write<W: std::io::Write>(&self, writer: &mut Writer<W>) -> DocxResult<()> {
        if self.children.is_empty() && self.self_closing {
            return write_event(writer, Event::Empty(self.start.borrow()));
        }

        write_event(writer, Event::Start(self.start.borrow()))?;
        for child in &self.children {
            write_node(writer, child)?;
        }
        write_event(writer, Event::End(self.start.to_end()))
    }
}

/// A parsed XML part: top-level nodes (prolog and root element)
#[derive(Debug, Clone, Default)]
pub struct XmlDocument {
    /// Top-level nodes in document order
    pub nodes: Vec<XmlNode>,
}

impl XmlDocument {
    /// Parse an XML part into a tree
    pub fn parse(content: &str) -> DocxResult<Self> {
        let mut reader = XmlParser::from_string(content);
        let mut buf = Vec::new();
        let mut open: Vec<XmlElement> = Vec::new();
        let mut nodes = Vec::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(e)) => {
                    open.push(XmlElement::from_start(e.into_owned(), false));
                }
                Ok(Event::Empty(e)) => {
                    let element = XmlElement::from_start(e.into_owned(), true);
                    attach(&mut open, &mut nodes, XmlNode::Element(element));
                }
                Ok(Event::End(e)) => {
                    let element = open.pop().ok_or_else(|| {
                        DocxError::XmlParse(format!(
                            "unexpected closing tag </{}>",
                            String::from_utf8_lossy(e.name().as_ref())
                        ))
                    })?;
                    attach(&mut open, &mut nodes, XmlNode::Element(element));
                }
                Ok(Event::Text(e)) => {
                    attach(&mut open, &mut nodes, XmlNode::Text(e.into_owned()));
                }
                Ok(Event::Eof) => break,
                Ok(other) => {
                    attach(&mut open, &mut nodes, XmlNode::Other(other.into_owned()));
                }
                Err(e) => return Err(DocxError::from(e)),
            }
            buf.clear();
        }

        if let Some(unclosed) = open.last() {
            return Err(DocxError::XmlParse(format!(
                "unclosed element <{}>",
                String::from_utf8_lossy(unclosed.name())
            )));
        }

        Ok(Self { nodes })
    }

    /// The root element
    pub fn root(&self) -> Option<&XmlElement> {
        self.nodes.iter().find_map(XmlNode::as_element)
    }

    /// The root element, mutably
    pub fn root_mut(&mut self) -> Option<&mut XmlElement> {
        self.nodes.iter_mut().find_map(XmlNode::as_element_mut)
    }

    /// Serialize the tree back to XML bytes
    pub fn to_bytes(&self) -> DocxResult<Vec<u8>> {
        let mut writer = Writer::new(Vec::new());
        for node in &self.nodes {
            write_node(&mut writer, node)?;
        }
        Ok(writer.into_inner())
    }
}

fn attach(open: &mut [XmlElement], nodes: &mut Vec<XmlNode>, node: XmlNode) {
    match open.last_mut() {
        Some(parent) => parent.children.push(node),
        None => nodes.push(node),
    }
}

fn write_node<W: std::io::Write>(writer: &mut Writer<W>, node: &XmlNode) -> DocxResult<()> {
    match node {
        XmlNode::Element(element) => element.write(writer),
        XmlNode::Text(text) => write_event(writer, Event::Text(text.clone())),
        XmlNode::Other(event) => write_event(writer, event.clone()),
    }
}

fn write_event<W: std::io::Write>(writer: &mut Writer<W>, event: Event<'_>) -> DocxResult<()> {
    writer
        .write_event(event)
        .map_err(|e| DocxError::XmlWrite(e.to_string()))
}
