//! XML read model and parser

pub mod cursor;
pub mod model;
pub mod node;
pub mod parser;

pub use cursor::Cursor;
pub use model::{Content, Document, Element};
pub use node::XmlNode;
pub use parser::{Parser, ParserConfig};
