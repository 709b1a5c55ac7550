//! Conversion of XML elements into annotated, path-addressed trees

pub mod array;
pub mod attributes;
pub mod decorator;
pub mod node;
pub mod path;
pub mod transform;

pub use array::is_array_container;
pub use attributes::attributes_to_leaves;
pub use decorator::DecoratorFn;
pub use node::AnnotatedNode;
pub use path::{attribute_path, child_path, root_path};
pub use transform::{transform, transform_decorated, TreeConfig, TreeTransformer};
