//! Path construction for elements and attributes
//!
//! Paths are simplified XPath locators: `/Root/Items/Item[1]/@id`. Every
//! function here is pure string work so it can be exercised without a
//! document.

use crate::error::{Error, Result};

/// Separator between path segments
pub const SEPARATOR: char = '/';

/// Path of the document root.
pub fn root_path(root_tag: &str, include_root_slash: bool) -> String {
    if include_root_slash {
        format!("{SEPARATOR}{root_tag}")
    } else {
        root_tag.to_string()
    }
}

/// Path of a child element.
///
/// Children of an array container always get `parent/tag[index]`; otherwise
/// the tag is appended with a separator, unless the parent is empty or the
/// bare `/`.
pub fn child_path(
    parent_path: &str,
    tag_name: &str,
    sibling_index: usize,
    parent_is_array: bool,
) -> String {
    if parent_is_array {
        return format!("{parent_path}{SEPARATOR}{tag_name}[{sibling_index}]");
    }

    if parent_path.is_empty() || parent_path == "/" {
        format!("{parent_path}{tag_name}")
    } else {
        format!("{parent_path}{SEPARATOR}{tag_name}")
    }
}

/// Path of an attribute on the element at `element_path`.
pub fn attribute_path(element_path: &str, attribute_name: &str) -> String {
    format!("{element_path}{SEPARATOR}@{attribute_name}")
}

/// Path of the synthetic value leaf holding an element's text.
pub fn text_path(element_path: &str) -> String {
    format!("{element_path}{SEPARATOR}text()")
}

/// Check that `name` can be used as a path segment.
///
/// Empty names and names containing `/`, `[`, `]`, `@` or whitespace would
/// make paths ambiguous and are rejected as malformed input.
pub fn validate_segment(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::malformed("node has no tag name"));
    }
    match name
        .chars()
        .find(|ch| matches!(ch, '/' | '[' | ']' | '@') || ch.is_whitespace())
    {
        Some(ch) => Err(Error::malformed(format!("name {name:?} contains {ch:?}"))),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_path() {
        assert_eq!(root_path("Config", false), "Config");
        assert_eq!(root_path("Config", true), "/Config");
    }

    #[test]
    fn test_child_path_plain() {
        assert_eq!(child_path("/Root", "Name", 3, false), "/Root/Name");
        assert_eq!(child_path("Root", "Name", 0, false), "Root/Name");
    }

    #[test]
    fn test_child_path_under_empty_or_slash() {
        assert_eq!(child_path("", "Name", 0, false), "Name");
        assert_eq!(child_path("/", "Name", 0, false), "/Name");
    }

    #[test]
    fn test_child_path_array_overrides_separator_rule() {
        assert_eq!(child_path("/Items", "Item", 1, true), "/Items/Item[1]");
        assert_eq!(child_path("", "Item", 0, true), "/Item[0]");
        assert_eq!(child_path("/", "Item", 2, true), "//Item[2]");
    }

    #[test]
    fn test_attribute_path() {
        assert_eq!(attribute_path("/Root/User", "id"), "/Root/User/@id");
        assert_eq!(attribute_path("Items/Item[0]", "sku"), "Items/Item[0]/@sku");
    }

    #[test]
    fn test_validate_segment() {
        assert!(validate_segment("ns:Item-1.x").is_ok());
        assert!(validate_segment("").is_err());
        assert!(validate_segment("a/b").is_err());
        assert!(validate_segment("Item[0]").is_err());
        assert!(validate_segment("@id").is_err());
        assert!(validate_segment("two words").is_err());
    }

    #[test]
    fn test_text_path() {
        assert_eq!(text_path("/Root/Name"), "/Root/Name/text()");
    }
}
