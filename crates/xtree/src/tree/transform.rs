//! Recursive XML element to annotated tree transformation

use tracing::{debug, instrument, trace};

use crate::error::{BoxError, Error, ErrorKind, Result, Span};
use crate::tree::array::{count_annotation, is_array_container};
use crate::tree::attributes::attributes_to_leaves;
use crate::tree::decorator::{append_decoration, decorate, DecoratorFn};
use crate::tree::node::AnnotatedNode;
use crate::tree::path::{child_path, root_path, text_path, validate_segment};
use crate::xml::parser::NESTING_LIMIT;
use crate::xml::XmlNode;

/// Options of the tree transformation
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TreeConfig {
    /// Prefix the root path (and so every path) with `/`
    pub include_root_slash: bool,
    /// Deepest element nesting converted, root included (0 means [`NESTING_LIMIT`])
    pub max_depth: u16,
}

impl TreeConfig {
    pub const fn new() -> Self {
        Self {
            include_root_slash: false,
            max_depth: NESTING_LIMIT,
        }
    }

    pub const fn with_root_slash(mut self, include_root_slash: bool) -> Self {
        self.include_root_slash = include_root_slash;
        self
    }

    pub const fn with_max_depth(mut self, max_depth: u16) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Nesting depth actually enforced, capped at [`NESTING_LIMIT`]
    pub const fn depth_limit(&self) -> u16 {
        if self.max_depth == 0 || self.max_depth > NESTING_LIMIT {
            NESTING_LIMIT
        } else {
            self.max_depth
        }
    }
}

/// Depth-first transformer from an [`XmlNode`] tree to an [`AnnotatedNode`] tree.
///
/// One transformer holds no per-document state; `generate` can be called
/// any number of times, from any number of threads if the decorator allows.
pub struct TreeTransformer<'d> {
    config: TreeConfig,
    decorator: Option<&'d DecoratorFn<'d>>,
}

impl std::fmt::Debug for TreeTransformer<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TreeTransformer")
            .field("config", &self.config)
            .field("decorated", &self.decorator.is_some())
            .finish()
    }
}

impl<'d> TreeTransformer<'d> {
    pub const fn new(config: TreeConfig) -> Self {
        Self {
            config,
            decorator: None,
        }
    }

    /// Attach a title decorator
    pub fn with_decorator(mut self, decorator: &'d DecoratorFn<'d>) -> Self {
        self.decorator = Some(decorator);
        self
    }

    /// Build the annotated tree rooted at `root`.
    ///
    /// The root is queried from the decorator with an empty path rather
    /// than its own path, after all of its descendants. Any error aborts
    /// the whole conversion, as does nesting deeper than
    /// [`TreeConfig::depth_limit`].
    #[instrument(level = "debug", skip_all, fields(root = root.tag_name()))]
    pub fn generate<N: XmlNode>(&self, root: &N) -> Result<AnnotatedNode> {
        let tag = root.tag_name();
        validate_segment(tag)?;

        let path = root_path(tag, self.config.include_root_slash);
        let is_array = is_array_container(root.child_elements().map(N::tag_name));
        let descendants = self.visit_children(root, &path, is_array)?;

        let decoration = decorate(self.decorator, "")?;
        let mut children = attributes_to_leaves(root, &path, self.decorator)?;
        children.extend(descendants);

        let mut label = tag.to_string();
        match root.text()? {
            Some(text) if children.is_empty() => {
                children.push(AnnotatedNode::value_leaf(text_path(&path), text.to_string()));
            }
            Some(text) => {
                label.push(' ');
                label.push_str(text);
            }
            None => {}
        }
        if is_array {
            label.push_str(&count_annotation(root.child_elements().count()));
        }
        append_decoration(&mut label, &decoration);

        let mut node = AnnotatedNode::element(path, label, Some(children), is_array);
        node.expanded = true;
        Ok(node)
    }

    /// Convert every child element of `node`, in document order.
    ///
    /// `parent_is_array` selects indexed paths for the children. `node`
    /// counts as the root for the depth limit.
    pub fn visit_children<N: XmlNode>(
        &self,
        node: &N,
        path: &str,
        parent_is_array: bool,
    ) -> Result<Vec<AnnotatedNode>> {
        self.visit_level(node, path, parent_is_array, 2)
    }

    /// Convert the children of `node`, which sit at nesting level `depth`
    fn visit_level<N: XmlNode>(
        &self,
        node: &N,
        path: &str,
        parent_is_array: bool,
        depth: u16,
    ) -> Result<Vec<AnnotatedNode>> {
        let mut nodes = Vec::new();
        for (index, child) in node.child_elements().enumerate() {
            nodes.push(self.visit_element(child, index, path, parent_is_array, depth)?);
        }
        Ok(nodes)
    }

    fn visit_element<N: XmlNode>(
        &self,
        element: &N,
        index: usize,
        parent_path: &str,
        parent_is_array: bool,
        depth: u16,
    ) -> Result<AnnotatedNode> {
        let tag = element.tag_name();
        validate_segment(tag)?;

        let node_path = child_path(parent_path, tag, index, parent_is_array);
        let limit = self.config.depth_limit();
        if depth > limit {
            return Err(Error::with_message(
                ErrorKind::MaxDepthExceeded { max: limit },
                Span::empty(),
                format!("{node_path} is nested deeper than {limit} levels"),
            ));
        }

        let is_array = is_array_container(element.child_elements().map(N::tag_name));
        let descendants = self.visit_level(element, &node_path, is_array, depth + 1)?;

        let decoration = decorate(self.decorator, &node_path)?;
        let mut children = attributes_to_leaves(element, &node_path, self.decorator)?;
        children.extend(descendants);

        let mut label = tag.to_string();
        let children = match (element.text()?, children.is_empty()) {
            (Some(text), false) => {
                label.push(' ');
                label.push_str(text);
                Some(children)
            }
            (Some(text), true) => Some(vec![AnnotatedNode::value_leaf(
                text_path(&node_path),
                text.to_string(),
            )]),
            (None, false) => Some(children),
            (None, true) => None,
        };

        if is_array {
            let members = element.child_elements().count();
            debug!(path = %node_path, members, "array container");
            label.push_str(&count_annotation(members));
        }
        append_decoration(&mut label, &decoration);

        trace!(path = %node_path, "visited element");
        Ok(AnnotatedNode::element(node_path, label, children, is_array))
    }
}

/// Convert `root` into an annotated tree without decorations.
pub fn transform<N: XmlNode>(root: &N, config: &TreeConfig) -> Result<AnnotatedNode> {
    TreeTransformer::new(*config).generate(root)
}

/// Convert `root` into an annotated tree, decorating labels.
///
/// `decorator` is called once per element with its path, once per
/// attribute with the attribute path, and once with `""` for the root. An
/// error from it is returned as `DecoratorFailure`.
pub fn transform_decorated<N, F, E>(
    root: &N,
    config: &TreeConfig,
    decorator: F,
) -> Result<AnnotatedNode>
where
    N: XmlNode,
    F: Fn(&str) -> std::result::Result<String, E>,
    E: Into<BoxError>,
{
    let erased = move |path: &str| -> std::result::Result<String, BoxError> {
        decorator(path).map_err(Into::into)
    };
    TreeTransformer::new(*config)
        .with_decorator(&erased)
        .generate(root)
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::convert::Infallible;

    use super::*;
    use crate::xml::Element;

    fn labels(node: &AnnotatedNode) -> Vec<&str> {
        node.children()
            .iter()
            .map(|child| child.label.as_str())
            .collect()
    }

    #[test]
    fn test_bare_root() -> Result<()> {
        let tree = transform(&Element::new("Config"), &TreeConfig::new())?;
        assert_eq!(tree.path, "Config");
        assert_eq!(tree.label, "Config");
        assert_eq!(tree.children, Some(Vec::new()));
        assert!(tree.expanded);
        assert!(!tree.is_array);
        Ok(())
    }

    #[test]
    fn test_bare_child_has_no_child_list() -> Result<()> {
        let root = Element::new("Root").with_child(Element::new("Empty"));
        let tree = transform(&root, &TreeConfig::new())?;
        let empty = tree.find("Root/Empty");
        assert_eq!(empty.map(|node| node.children.is_none()), Some(true));
        assert_eq!(empty.map(|node| node.expanded), Some(false));
        Ok(())
    }

    #[test]
    fn test_text_with_children_embeds_text() -> Result<()> {
        let root = Element::new("Root").with_child(
            Element::new("Price")
                .with_text("9.99")
                .with_attribute("currency", "EUR"),
        );
        let tree = transform(&root, &TreeConfig::new().with_root_slash(true))?;
        let price = tree.find("/Root/Price");
        assert_eq!(price.map(|node| node.label.as_str()), Some("Price 9.99"));
        assert_eq!(price.map(labels), Some(vec!["@currency = EUR"]));
        Ok(())
    }

    #[test]
    fn test_array_children_are_indexed() -> Result<()> {
        let root = Element::new("Root").with_child(
            Element::new("List")
                .with_child(Element::new("Entry"))
                .with_child(Element::new("Entry"))
                .with_child(Element::new("Entry")),
        );
        let tree = transform(&root, &TreeConfig::new())?;
        let list = tree.find("Root/List");
        assert_eq!(list.map(|node| node.label.as_str()), Some("List (3)"));
        assert_eq!(list.map(|node| node.is_array), Some(true));
        let paths: Vec<&str> = list
            .map(AnnotatedNode::children)
            .unwrap_or_default()
            .iter()
            .map(|node| node.path.as_str())
            .collect();
        assert_eq!(
            paths,
            vec!["Root/List/Entry[0]", "Root/List/Entry[1]", "Root/List/Entry[2]"]
        );
        Ok(())
    }

    #[test]
    fn test_root_array_is_indexed() -> Result<()> {
        let root = Element::new("Items")
            .with_child(Element::new("Item"))
            .with_child(Element::new("Item"));
        let tree = transform(&root, &TreeConfig::new().with_root_slash(true))?;
        assert!(tree.is_array);
        assert_eq!(tree.label, "Items (2)");
        assert!(tree.find("/Items/Item[1]").is_some());
        Ok(())
    }

    #[test]
    fn test_root_attributes_precede_children() -> Result<()> {
        let root = Element::new("Root")
            .with_attribute("version", "2")
            .with_child(Element::new("Body"));
        let tree = transform(&root, &TreeConfig::new())?;
        assert_eq!(labels(&tree), vec!["@version = 2", "Body"]);
        Ok(())
    }

    #[test]
    fn test_decorator_call_order() -> Result<()> {
        let calls = RefCell::new(Vec::new());
        let root = Element::new("Root").with_child(
            Element::new("User")
                .with_attribute("id", "7")
                .with_child(Element::new("Name").with_text("Alice")),
        );
        transform_decorated(&root, &TreeConfig::new().with_root_slash(true), |path| {
            calls.borrow_mut().push(path.to_string());
            Ok::<_, Infallible>(String::new())
        })?;
        assert_eq!(
            *calls.borrow(),
            vec!["/Root/User/Name", "/Root/User", "/Root/User/@id", ""]
        );
        Ok(())
    }

    #[test]
    fn test_root_decoration_uses_empty_path() -> Result<()> {
        let root = Element::new("Root");
        let tree = transform_decorated(&root, &TreeConfig::new(), |path| {
            Ok::<_, Infallible>(if path.is_empty() {
                "(document)".to_string()
            } else {
                String::new()
            })
        })?;
        assert_eq!(tree.label, "Root (document)");
        Ok(())
    }

    #[test]
    fn test_decorator_failure_aborts() {
        let root = Element::new("Root").with_child(Element::new("Bad"));
        let result = transform_decorated(&root, &TreeConfig::new(), |path| {
            if path == "Root/Bad" {
                Err("no title for Bad")
            } else {
                Ok(String::new())
            }
        });
        let err = result.err();
        assert_eq!(
            err.as_ref().map(Error::kind),
            Some(&ErrorKind::DecoratorFailure {
                path: "Root/Bad".to_string()
            })
        );
    }

    fn chain(depth: usize) -> Element {
        let mut element = Element::new("a");
        for _ in 1..depth {
            element = Element::new("a").with_child(element);
        }
        element
    }

    #[test]
    fn test_depth_limit_counts_the_root() -> Result<()> {
        let config = TreeConfig::new().with_max_depth(3);
        let tree = transform(&chain(3), &config)?;
        assert!(tree.find("a/a/a").is_some());

        let err = transform(&chain(4), &config).err();
        assert_eq!(
            err.as_ref().map(Error::kind),
            Some(&ErrorKind::MaxDepthExceeded { max: 3 })
        );
        Ok(())
    }

    #[test]
    fn test_depth_limit_is_capped() {
        assert_eq!(TreeConfig::new().with_max_depth(0).depth_limit(), NESTING_LIMIT);
        assert_eq!(
            TreeConfig::new().with_max_depth(u16::MAX).depth_limit(),
            NESTING_LIMIT
        );
        assert_eq!(TreeConfig::default().depth_limit(), NESTING_LIMIT);
    }

    #[test]
    fn test_empty_tag_name_is_malformed() {
        let root = Element::new("Root").with_child(Element::new(""));
        let err = transform(&root, &TreeConfig::new()).err();
        assert!(matches!(
            err.as_ref().map(Error::kind),
            Some(ErrorKind::MalformedInput { .. })
        ));
    }
}
