//! jsTree node data encoding
//!
//! Produces the `core.data` shape a jsTree widget consumes. Only the data is
//! built here; widget options, search and rendering belong to the caller.

use serde::Serialize;

use crate::tree::AnnotatedNode;

/// Identifier jsTree gets for the root node
pub const ROOT_ID: &str = "root_node";

/// One node of jsTree's JSON data format
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct JsTreeNode {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<JsTreeNode>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<State>,
    pub a_attr: AnchorAttributes,
    /// `Some(false)` hides the icon of value leaves
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<bool>,
}

/// Open/closed state of a node
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct State {
    pub opened: bool,
}

/// Attributes placed on the node's anchor element
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AnchorAttributes {
    pub path: String,
    #[serde(rename = "isArray", skip_serializing_if = "Option::is_none")]
    pub is_array: Option<bool>,
}

impl JsTreeNode {
    /// Encode a whole tree; `root` gets the fixed root id.
    ///
    /// Every anchor path, the root's included, is the node's own tree path,
    /// so any `a_attr.path` can be passed back to [`AnnotatedNode::find`].
    pub fn from_root(root: &AnnotatedNode) -> Self {
        let mut node = Self::from(root);
        node.id = Some(ROOT_ID.to_string());
        node
    }
}

impl From<&AnnotatedNode> for JsTreeNode {
    fn from(node: &AnnotatedNode) -> Self {
        if node.is_leaf_value {
            return Self {
                id: None,
                text: node.label.clone(),
                children: None,
                state: None,
                a_attr: AnchorAttributes {
                    path: node.path.clone(),
                    is_array: None,
                },
                icon: Some(false),
            };
        }

        Self {
            id: None,
            text: node.label.clone(),
            children: node
                .children
                .as_ref()
                .map(|children| children.iter().map(Self::from).collect()),
            state: Some(State {
                opened: node.expanded,
            }),
            a_attr: AnchorAttributes {
                path: node.path.clone(),
                is_array: Some(node.is_array),
            },
            icon: None,
        }
    }
}
