//! Run formatting snapshot
//!
//! Captures the handful of character properties that survive when a
//! paragraph's runs are merged into one: bold, italic, underline, font,
//! size and color.

use crate::docx::reader::XmlParser;
use crate::docx::xml_tree::XmlElement;

/// East Asian face applied when a run uses Microsoft JhengHei
pub const JHENGHEI: &str = "Microsoft JhengHei";

const JHENGHEI_ALIASES: [&str; 2] = ["微軟正黑體", JHENGHEI];

/// Character properties of a single run
///
/// Boolean toggles are tri-state: `None` means the run inherits the value
/// from its style.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunFormat {
    /// Bold toggle
    pub bold: Option<bool>,
    /// Italic toggle
    pub italic: Option<bool>,
    /// Underline style value (`single`, `double`, `none`, ...)
    pub underline: Option<String>,
    /// Latin font face (`w:rFonts/@w:ascii`)
    pub font_name: Option<String>,
    /// East Asian font face (`w:rFonts/@w:eastAsia`)
    pub east_asia_font: Option<String>,
    /// Font size in half-points
    pub size_half_points: Option<u32>,
    /// RGB hex color without the leading `#`
    pub color: Option<String>,
}

impl RunFormat {
    /// Read the formatting of a `w:r` element from its `w:rPr`
    pub fn from_run(run: &XmlElement) -> Self {
        let mut format = Self::default();
        let Some(props) = run.first_child("rPr") else {
            return format;
        };

        for prop in props.child_elements() {
            if prop.is("b") {
                format.bold = Some(toggle_value(prop));
            } else if prop.is("i") {
                format.italic = Some(toggle_value(prop));
            } else if prop.is("u") {
                format.underline = Some(prop.w_attribute("val").unwrap_or_else(|| "single".to_string()));
            } else if prop.is("rFonts") {
                format.font_name = prop.w_attribute("ascii");
                format.east_asia_font = prop.w_attribute("eastAsia");
            } else if prop.is("sz") {
                format.size_half_points = prop.w_attribute("val").and_then(|v| v.parse().ok());
            } else if prop.is("color") {
                format.color = prop.w_attribute("val").filter(|v| !v.eq_ignore_ascii_case("auto"));
            }
        }

        format
    }

    /// Whether no property is set
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// East Asian face to write for this format
    ///
    /// A captured value wins; otherwise Microsoft JhengHei is forced when the
    /// Latin face names it, so CJK glyphs keep rendering in that font.
    pub fn effective_east_asia_font(&self) -> Option<&str> {
        if let Some(face) = self.east_asia_font.as_deref() {
            return Some(face);
        }
        let name = self.font_name.as_deref()?;
        JHENGHEI_ALIASES
            .iter()
            .any(|alias| name.contains(alias))
            .then_some(JHENGHEI)
    }

    /// Build a `w:rPr` element carrying this format, or `None` when empty
    ///
    /// Children are emitted in schema order: rFonts, b, i, color, sz, u.
    pub fn to_run_properties(&self, prefix: Option<&str>) -> Option<XmlElement> {
        if self.is_empty() {
            return None;
        }

        let tag = |local: &str| XmlElement::qualified(prefix, local);
        let mut props = XmlElement::new(tag("rPr"));

        if self.font_name.is_some() || self.effective_east_asia_font().is_some() {
            let mut fonts = XmlElement::empty(tag("rFonts"));
            if let Some(name) = self.font_name.as_deref() {
                fonts = fonts
                    .with_attribute(&tag("ascii"), name)
                    .with_attribute(&tag("hAnsi"), name);
            }
            if let Some(face) = self.effective_east_asia_font() {
                fonts = fonts.with_attribute(&tag("eastAsia"), face);
            }
            props.push_element(fonts);
        }

        if let Some(bold) = self.bold {
            props.push_element(toggle_element(&tag("b"), &tag("val"), bold));
        }
        if let Some(italic) = self.italic {
            props.push_element(toggle_element(&tag("i"), &tag("val"), italic));
        }
        if let Some(color) = self.color.as_deref() {
            props.push_element(XmlElement::empty(tag("color")).with_attribute(&tag("val"), color));
        }
        if let Some(size) = self.size_half_points {
            props.push_element(
                XmlElement::empty(tag("sz")).with_attribute(&tag("val"), &size.to_string()),
            );
        }
        if let Some(underline) = self.underline.as_deref() {
            props.push_element(XmlElement::empty(tag("u")).with_attribute(&tag("val"), underline));
        }

        Some(props)
    }
}

fn toggle_value(prop: &XmlElement) -> bool {
    prop.w_attribute("val")
        .map(|v| XmlParser::parse_bool(&v))
        .unwrap_or(true)
}

fn toggle_element(tag: &str, val_attr: &str, on: bool) -> XmlElement {
    let element = XmlElement::empty(tag);
    if on {
        element
    } else {
        element.with_attribute(val_attr, "0")
    }
}
