#![cfg(feature = "serde")]

use serde_json::json;
use xtree::{tree_from_str, JsTreeNode, TreeConfig};

#[test]
fn test_jstree_data_shape() -> Result<(), Box<dyn std::error::Error>> {
    let input = r#"<Root><User id="7"><Name>Alice</Name></User></Root>"#;
    let tree = tree_from_str(input, &TreeConfig::new().with_root_slash(true))?;
    let data = serde_json::to_value(JsTreeNode::from_root(&tree))?;

    let expected = json!({
        "id": "root_node",
        "text": "Root",
        "state": {"opened": true},
        "a_attr": {"path": "/Root", "isArray": false},
        "children": [{
            "text": "User",
            "state": {"opened": false},
            "a_attr": {"path": "/Root/User", "isArray": false},
            "children": [
                {"text": "@id = 7", "a_attr": {"path": "/Root/User/@id"}, "icon": false},
                {
                    "text": "Name",
                    "state": {"opened": false},
                    "a_attr": {"path": "/Root/User/Name", "isArray": false},
                    "children": [
                        {"text": "Alice", "a_attr": {"path": "/Root/User/Name/text()"}, "icon": false}
                    ]
                }
            ]
        }]
    });
    assert_eq!(data, expected);
    Ok(())
}

#[test]
fn test_bare_leaf_omits_children() -> Result<(), Box<dyn std::error::Error>> {
    let tree = tree_from_str("<Root><Empty/></Root>", &TreeConfig::new())?;
    let data = serde_json::to_value(JsTreeNode::from_root(&tree))?;

    let empty = &data["children"][0];
    assert_eq!(empty["text"], "Empty");
    assert!(empty.get("children").is_none());
    Ok(())
}

#[test]
fn test_annotated_node_serializes_camel_case() -> Result<(), Box<dyn std::error::Error>> {
    let tree = tree_from_str("<Items><Item/><Item/></Items>", &TreeConfig::new())?;
    let data = serde_json::to_value(&tree)?;

    assert_eq!(data["isArray"], true);
    assert_eq!(data["expanded"], true);
    assert_eq!(data["children"][1]["path"], "Items/Item[1]");
    assert_eq!(data["children"][1]["isLeafValue"], false);
    assert!(data["children"][1].get("children").is_none());
    Ok(())
}
