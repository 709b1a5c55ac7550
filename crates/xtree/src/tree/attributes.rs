//! Attribute to value-leaf conversion

use crate::error::Result;
use crate::tree::decorator::{append_decoration, decorate, DecoratorFn};
use crate::tree::node::AnnotatedNode;
use crate::tree::path::{attribute_path, validate_segment};
use crate::xml::XmlNode;

/// Convert the attributes of `element` into value leaves, in document order.
///
/// Each leaf is labelled `@name = value` followed by its decoration. The
/// decorator is called once per attribute. An element without attributes
/// yields an empty vector.
pub fn attributes_to_leaves<N: XmlNode>(
    element: &N,
    element_path: &str,
    decorator: Option<&DecoratorFn<'_>>,
) -> Result<Vec<AnnotatedNode>> {
    element
        .attributes()
        .map(|(name, value)| {
            validate_segment(name)?;
            let path = attribute_path(element_path, name);
            let decoration = decorate(decorator, &path)?;
            let mut label = format!("@{name} = {value}");
            append_decoration(&mut label, &decoration);
            Ok(AnnotatedNode::value_leaf(path, label))
        })
        .collect()
}
