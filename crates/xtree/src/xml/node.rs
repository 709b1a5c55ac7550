//! Read-only element interface consumed by the tree transformer

use crate::error::Result;

/// Minimal read model of an XML element.
///
/// The transformer only needs a tag name, ordered attributes, ordered child
/// elements and the leading text node, so any DOM-like structure can be
/// converted without going through [`crate::xml::Parser`].
pub trait XmlNode {
    /// Element tag name, including any namespace prefix
    fn tag_name(&self) -> &str;

    /// Attributes as `(name, value)` pairs in document order
    fn attributes(&self) -> impl Iterator<Item = (&str, &str)>;

    /// Child elements in document order; text and other content excluded
    fn child_elements(&self) -> impl Iterator<Item = &Self>;

    /// Content of the element's first child when that child is character data.
    ///
    /// Implementations return `MalformedInput` when the text sits alongside
    /// content they cannot represent.
    fn text(&self) -> Result<Option<&str>>;
}
