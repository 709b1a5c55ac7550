//! XML data model

use indexmap::IndexMap;

use crate::error::Result;
use crate::xml::node::XmlNode;

/// XML document
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    pub root: Element,
}

/// XML element
#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    pub name: String,
    pub attributes: IndexMap<String, String>,
    pub children: Vec<Content>,
}

/// XML content node
#[derive(Clone, Debug, PartialEq)]
pub enum Content {
    Element(Element),
    Text(String),
    CData(String),
}

impl Element {
    /// Create an element with no attributes or content
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: IndexMap::new(),
            children: Vec::new(),
        }
    }

    /// Builder: append an attribute
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Builder: append a child element
    pub fn with_child(mut self, child: Self) -> Self {
        self.children.push(Content::Element(child));
        self
    }

    /// Builder: append a text node
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Content::Text(text.into()));
        self
    }

    /// Iterate over element children only
    pub fn elements(&self) -> impl Iterator<Item = &Self> {
        self.children.iter().filter_map(|content| match content {
            Content::Element(element) => Some(element),
            Content::Text(_) | Content::CData(_) => None,
        })
    }
}

impl XmlNode for Element {
    fn tag_name(&self) -> &str {
        &self.name
    }

    fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    fn child_elements(&self) -> impl Iterator<Item = &Self> {
        self.elements()
    }

    /// Adjacent text and CDATA runs are joined by the parser, so the first
    /// child holds the element's whole leading character data.
    fn text(&self) -> Result<Option<&str>> {
        Ok(match self.children.first() {
            Some(Content::Text(text) | Content::CData(text)) => Some(text.as_str()),
            Some(Content::Element(_)) | None => None,
        })
    }
}
