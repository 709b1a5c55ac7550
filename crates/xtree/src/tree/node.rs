//! Output node of the tree transformation

#[cfg(feature = "serde")]
use serde::Serialize;

/// A node of the annotated tree handed to a hierarchical widget.
///
/// `children` is `None` for leaves that never had a child list, which is
/// different from an element whose child list is empty (only the root).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct AnnotatedNode {
    pub path: String,
    pub label: String,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub children: Option<Vec<AnnotatedNode>>,
    /// The children of this node are indexed array members
    pub is_array: bool,
    /// Synthetic leaf holding text content or an attribute value
    pub is_leaf_value: bool,
    pub expanded: bool,
}

impl AnnotatedNode {
    /// Element node with an optional child list
    pub fn element(
        path: String,
        label: String,
        children: Option<Vec<Self>>,
        is_array: bool,
    ) -> Self {
        Self {
            path,
            label,
            children,
            is_array,
            is_leaf_value: false,
            expanded: false,
        }
    }

    /// Value leaf for text content or an attribute
    pub fn value_leaf(path: String, label: String) -> Self {
        Self {
            path,
            label,
            children: None,
            is_array: false,
            is_leaf_value: true,
            expanded: false,
        }
    }

    /// Children as a slice, empty for leaves
    pub fn children(&self) -> &[Self] {
        self.children.as_deref().unwrap_or_default()
    }

    pub fn is_leaf(&self) -> bool {
        self.children().is_empty()
    }

    /// Attribute leaves are value leaves whose last segment starts with `@`
    pub fn is_attribute(&self) -> bool {
        self.is_leaf_value
            && self
                .path
                .rsplit('/')
                .next()
                .is_some_and(|segment| segment.starts_with('@'))
    }

    /// Depth-first, pre-order iteration over this node and its descendants
    pub fn iter(&self) -> Iter<'_> {
        Iter { stack: vec![self] }
    }

    /// Find a node by exact path
    pub fn find(&self, path: &str) -> Option<&Self> {
        self.iter().find(|node| node.path == path)
    }

    /// Number of nodes in this subtree, including `self`
    pub fn node_count(&self) -> usize {
        self.iter().count()
    }
}

/// Pre-order iterator returned by [`AnnotatedNode::iter`]
#[derive(Debug)]
pub struct Iter<'a> {
    stack: Vec<&'a AnnotatedNode>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a AnnotatedNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children().iter().rev());
        Some(node)
    }
}

impl<'a> IntoIterator for &'a AnnotatedNode {
    type Item = &'a AnnotatedNode;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
