//! xtree - XML to annotated tree conversion
//!
//! Turns an XML document into an ordered tree of [`AnnotatedNode`]s, each
//! carrying an XPath-like path, a display label and array metadata, ready
//! to feed a hierarchical UI widget.
//!
//! # Quick Start
//!
//! ```
//! use xtree::{tree_from_str, TreeConfig};
//! # fn main() -> Result<(), xtree::Error> {
//! let config = TreeConfig::new().with_root_slash(true);
//! let tree = tree_from_str("<Items><Item>A</Item><Item>B</Item></Items>", &config)?;
//! assert!(tree.is_array);
//! assert!(tree.find("/Items/Item[1]").is_some());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub use error::{BoxError, Error, ErrorKind, Pos, Result, Span};

pub mod xml;
pub use xml::{Content, Document, Element, Parser, ParserConfig, XmlNode};

pub mod tree;
pub use tree::{transform, transform_decorated, AnnotatedNode, TreeConfig, TreeTransformer};

#[cfg(feature = "serde")]
pub mod jstree;
#[cfg(feature = "serde")]
pub use jstree::JsTreeNode;

/// Parse XML from string
pub fn from_xml_str(s: &str) -> Result<Document> {
    let mut parser = Parser::new(s.as_bytes());
    parser.parse()
}

/// Parse XML from bytes
pub fn from_xml_bytes(bytes: &[u8]) -> Result<Document> {
    let mut parser = Parser::new(bytes);
    parser.parse()
}

/// Parse XML with custom limits
pub fn from_xml_str_with_config(s: &str, config: ParserConfig) -> Result<Document> {
    let mut parser = Parser::with_config(s.as_bytes(), config);
    parser.parse()
}

/// Parse XML and convert it into an annotated tree
pub fn tree_from_str(s: &str, config: &TreeConfig) -> Result<AnnotatedNode> {
    let doc = from_xml_str(s)?;
    transform(&doc.root, config)
}

/// Parse XML and convert it into an annotated tree with decorated labels
pub fn tree_from_str_decorated<F, E>(
    s: &str,
    config: &TreeConfig,
    decorator: F,
) -> Result<AnnotatedNode>
where
    F: Fn(&str) -> std::result::Result<String, E>,
    E: Into<BoxError>,
{
    let doc = from_xml_str(s)?;
    transform_decorated(&doc.root, config, decorator)
}
