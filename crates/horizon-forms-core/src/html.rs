//! A minimal HTML element model.
//!
//! Controls describe their rendered form as an [`Element`] tree; turning it
//! into text is a matter of formatting it with `Display`.
//!
//! # Example
//!
//! ```
//! use horizon_forms_core::html::Element;
//!
//! let mut option = Element::new("option");
//! option.set_attribute("value", "1");
//! option.set_attribute("selected", true);
//! option.push_text("One & only");
//!
//! assert_eq!(option.to_string(), r#"<option value="1" selected>One &amp; only</option>"#);
//! ```

use std::fmt;

use indexmap::IndexMap;

use crate::key::Label;

/// The value of an HTML attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeValue {
    /// A boolean attribute: rendered bare when true, omitted when false.
    Bool(bool),
    /// An integer attribute.
    Int(i64),
    /// A text attribute.
    Text(String),
}

impl AttributeValue {
    /// The value as an integer, parsing text when needed.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            Self::Text(s) => s.trim().parse().ok(),
            Self::Bool(b) => Some(i64::from(*b)),
        }
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for AttributeValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// A child of an [`Element`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A nested element.
    Element(Element),
    /// Text, escaped when rendered.
    Text(String),
    /// Raw markup, rendered verbatim.
    Html(String),
}

impl From<&Label> for Node {
    fn from(label: &Label) -> Self {
        match label {
            Label::Text(text) => Self::Text(text.clone()),
            Label::Html(html) => Self::Html(html.clone()),
        }
    }
}

/// An HTML element with ordered attributes and children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: String,
    attributes: IndexMap<String, AttributeValue>,
    children: Vec<Node>,
}

impl Element {
    /// Create an element with the given tag name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: IndexMap::new(),
            children: Vec::new(),
        }
    }

    /// The tag name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Change the tag name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Attributes in insertion order.
    pub fn attributes(&self) -> &IndexMap<String, AttributeValue> {
        &self.attributes
    }

    /// Look up an attribute.
    pub fn attribute(&self, name: &str) -> Option<&AttributeValue> {
        self.attributes.get(name)
    }

    /// Whether the attribute is set.
    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    /// Set an attribute, replacing any previous value in place.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<AttributeValue>) {
        self.attributes.insert(name.into(), value.into());
    }

    /// Remove an attribute, returning its value.
    pub fn remove_attribute(&mut self, name: &str) -> Option<AttributeValue> {
        self.attributes.shift_remove(name)
    }

    /// Add attributes that are not set yet.
    ///
    /// Attributes already present keep their value.
    pub fn merge_attributes<'a>(
        &mut self,
        attributes: impl IntoIterator<Item = (&'a String, &'a AttributeValue)>,
    ) {
        for (name, value) in attributes {
            self.attributes
                .entry(name.clone())
                .or_insert_with(|| value.clone());
        }
    }

    /// Children in document order.
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Child elements in document order.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(element) => Some(element),
            _ => None,
        })
    }

    /// Append a child node.
    pub fn push(&mut self, node: Node) {
        self.children.push(node);
    }

    /// Append a child element.
    pub fn push_element(&mut self, element: Element) {
        self.children.push(Node::Element(element));
    }

    /// Append escaped text.
    pub fn push_text(&mut self, text: impl Into<String>) {
        self.children.push(Node::Text(text.into()));
    }

    /// The concatenated text content of this element and its descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            match child {
                Node::Element(element) => out.push_str(&element.text_content()),
                Node::Text(text) | Node::Html(text) => out.push_str(text),
            }
        }
        out
    }

    fn is_void(&self) -> bool {
        matches!(
            self.name.as_str(),
            "input" | "br" | "hr" | "img" | "meta" | "link"
        )
    }
}

fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

fn escape_attribute(s: &str) -> String {
    escape_text(s).replace('"', "&quot;").replace('\'', "&#039;")
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Element(element) => fmt::Display::fmt(element, f),
            Self::Text(text) => f.write_str(&escape_text(text)),
            Self::Html(html) => f.write_str(html),
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.name)?;
        for (name, value) in &self.attributes {
            match value {
                AttributeValue::Bool(true) => write!(f, " {name}")?,
                AttributeValue::Bool(false) => {}
                AttributeValue::Int(n) => write!(f, " {name}=\"{n}\"")?,
                AttributeValue::Text(s) => write!(f, " {name}=\"{}\"", escape_attribute(s))?,
            }
        }
        f.write_str(">")?;
        if self.is_void() {
            return Ok(());
        }
        for child in &self.children {
            fmt::Display::fmt(child, f)?;
        }
        write!(f, "</{}>", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_attributes() {
        let mut el = Element::new("select");
        el.set_attribute("name", "color");
        el.set_attribute("size", 3);
        el.set_attribute("required", true);
        el.set_attribute("disabled", false);
        assert_eq!(el.to_string(), r#"<select name="color" size="3" required></select>"#);
    }

    #[test]
    fn test_attribute_escaping() {
        let mut el = Element::new("option");
        el.set_attribute("title", r#"a "b" <c>"#);
        assert_eq!(
            el.to_string(),
            r#"<option title="a &quot;b&quot; &lt;c&gt;"></option>"#
        );
    }

    #[test]
    fn test_markup_child_is_verbatim() {
        let mut el = Element::new("option");
        el.push(Node::from(&Label::html("<b>bold</b>")));
        assert_eq!(el.to_string(), "<option><b>bold</b></option>");
    }

    #[test]
    fn test_merge_does_not_clobber() {
        let mut el = Element::new("select");
        el.set_attribute("id", "mine");
        let mut base = Element::new("input");
        base.set_attribute("id", "frm-color");
        base.set_attribute("name", "color");
        el.merge_attributes(base.attributes());

        assert_eq!(el.attribute("id"), Some(&AttributeValue::from("mine")));
        assert_eq!(el.attribute("name"), Some(&AttributeValue::from("color")));
    }

    #[test]
    fn test_set_attribute_replaces_in_place() {
        let mut el = Element::new("input");
        el.set_attribute("a", "1");
        el.set_attribute("b", "2");
        el.set_attribute("a", "3");
        assert_eq!(el.to_string(), r#"<input a="3" b="2">"#);
        assert_eq!(el.remove_attribute("b"), Some(AttributeValue::from("2")));
    }

    #[test]
    fn test_as_int() {
        assert_eq!(AttributeValue::from(" 4 ").as_int(), Some(4));
        assert_eq!(AttributeValue::from(2).as_int(), Some(2));
        assert_eq!(AttributeValue::from("big").as_int(), None);
    }
}
