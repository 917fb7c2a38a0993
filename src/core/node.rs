//! Source content tree
//!
//! A minimal markup tree: text runs and elements with ordered children. This is
//! what the segmenter consumes and what markup parts carry as their content.

use std::fmt;

/// A node of the source content tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentNode {
    /// A run of text with entities already decoded
    Text(String),
    /// A markup element
    Element(Element),
}

/// A markup element with its attributes and children
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<ContentNode>,
}

impl ContentNode {
    /// Create a text node
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Concatenated text of this node and all its descendants
    ///
    /// Matches the DOM's `textContent`: a `<br>` contributes nothing.
    ///
    /// # Examples
    /// ```
    /// use reveal_puzzle::core::{ContentNode, Element};
    ///
    /// let node = ContentNode::Element(
    ///     Element::new("b").with_child(ContentNode::text("bold")),
    /// );
    /// assert_eq!(node.text_content(), "bold");
    /// ```
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Self::Text(text) => out.push_str(text),
            Self::Element(element) => {
                for child in &element.children {
                    child.collect_text(out);
                }
            }
        }
    }

    /// Get the element if this node is one
    #[inline]
    #[must_use]
    pub const fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(element) => Some(element),
            Self::Text(_) => None,
        }
    }
}

impl Element {
    /// Create an empty element; the name is lower-cased
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into().to_ascii_lowercase(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Builder: add an attribute
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Builder: append a child node
    #[must_use]
    pub fn with_child(mut self, child: ContentNode) -> Self {
        self.children.push(child);
        self
    }

    pub(crate) fn push_child(&mut self, child: ContentNode) {
        self.children.push(child);
    }

    pub(crate) fn push_attribute(&mut self, name: String, value: String) {
        self.attributes.push((name, value));
    }

    /// Lower-case tag name
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Look up an attribute value by name (case-insensitive)
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(attr, _)| attr.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// All attributes in source order
    #[inline]
    #[must_use]
    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    /// Child nodes in document order
    #[inline]
    #[must_use]
    pub fn children(&self) -> &[ContentNode] {
        &self.children
    }

    /// Whether this element is a line-break marker
    #[inline]
    #[must_use]
    pub fn is_line_break(&self) -> bool {
        self.name == "br"
    }

    /// Concatenated text of all descendants
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            child.collect_text(&mut out);
        }
        out
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.name)?;
        for (name, value) in &self.attributes {
            write!(f, " {name}=\"{}\"", html_escape::encode_double_quoted_attribute(value))?;
        }
        if self.is_line_break() && self.children.is_empty() {
            return write!(f, ">");
        }
        write!(f, ">")?;
        for child in &self.children {
            write!(f, "{child}")?;
        }
        write!(f, "</{}>", self.name)
    }
}

impl fmt::Display for ContentNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => write!(f, "{}", html_escape::encode_text(text)),
            Self::Element(element) => write!(f, "{element}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ruby() -> Element {
        Element::new("ruby")
            .with_child(ContentNode::text("漢"))
            .with_child(ContentNode::Element(
                Element::new("rt").with_child(ContentNode::text("かん")),
            ))
    }

    #[test]
    fn element_name_is_lowercased() {
        assert_eq!(Element::new("BR").name(), "br");
        assert!(Element::new("Br").is_line_break());
    }

    #[test]
    fn text_content_is_depth_first() {
        assert_eq!(ruby().text_content(), "漢かん");
    }

    #[test]
    fn line_break_has_no_text() {
        let node = ContentNode::Element(Element::new("br"));
        assert_eq!(node.text_content(), "");
    }

    #[test]
    fn attribute_lookup_ignores_case() {
        let element = Element::new("div").with_attribute("ID", "buttons_source");
        assert_eq!(element.attribute("id"), Some("buttons_source"));
        assert_eq!(element.attribute("class"), None);
    }

    #[test]
    fn display_serializes_markup() {
        let element = Element::new("a")
            .with_attribute("href", "x?a=1&b=2")
            .with_child(ContentNode::text("1 < 2"));
        assert_eq!(element.to_string(), "<a href=\"x?a=1&amp;b=2\">1 &lt; 2</a>");
        assert_eq!(Element::new("br").to_string(), "<br>");
    }

    #[test]
    fn clone_is_independent() {
        let original = ruby();
        let mut copy = original.clone();
        copy.push_child(ContentNode::text("!"));
        assert_eq!(original.children().len(), 2);
        assert_eq!(copy.children().len(), 3);
    }
}
