//! JSON scene description consumed by the CLI.
//!
//! The interactive engine is the real tree provider; offline, a serialized
//! dump of the control hierarchy stands in for it. Shape:
//!
//! ```json
//! {
//!   "roots": [
//!     {
//!       "name": "Hud",
//!       "type": "Panel",
//!       "children": [
//!         { "name": "Fire", "type": "Button" }
//!       ]
//!     }
//!   ]
//! }
//! ```
//!
//! Child order in the file is traversal order and therefore part of the
//! output: reordering children reorders the emitted fields.

use bumpalo::Bump;
use guiaccess_core::{ControlNode, SceneTree};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SceneDoc {
    #[serde(default)]
    pub roots: Vec<NodeDoc>,
}

#[derive(Debug, Deserialize)]
pub struct NodeDoc {
    pub name: String,

    #[serde(rename = "type")]
    pub type_name: String,

    /// Defaults to "has children". Lets a scene mark an empty container so
    /// sibling validation still covers it.
    #[serde(default)]
    pub container: Option<bool>,

    #[serde(default)]
    pub children: Vec<NodeDoc>,
}

impl NodeDoc {
    fn is_container(&self) -> bool {
        self.container.unwrap_or(!self.children.is_empty())
    }
}

/// Build the arena-backed tree the generator consumes.
pub fn build_tree<'a>(arena: &'a Bump, doc: &SceneDoc) -> SceneTree<'a> {
    let mut tree = SceneTree::new(arena);
    for root_doc in &doc.roots {
        let root = tree.add_root(&root_doc.name, &root_doc.type_name, root_doc.is_container());
        attach_children(&mut tree, root, &root_doc.children);
    }
    tree
}

fn attach_children<'a>(
    tree: &mut SceneTree<'a>,
    parent: &'a ControlNode<'a>,
    children: &[NodeDoc],
) {
    for child_doc in children {
        let child = tree.add_child(
            parent,
            &child_doc.name,
            &child_doc.type_name,
            child_doc.is_container(),
        );
        attach_children(tree, child, &child_doc.children);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use guiaccess_core::TreeProvider;
    use pretty_assertions::assert_eq;

    #[test]
    fn scene_json_builds_ordered_tree() {
        let doc: SceneDoc = serde_json::from_str(
            r#"{
                "roots": [{
                    "name": "Hud",
                    "type": "Panel",
                    "children": [
                        { "name": "Fire", "type": "Button" },
                        { "name": "Reload", "type": "Button" }
                    ]
                }]
            }"#,
        )
        .unwrap();

        let arena = Bump::new();
        let tree = build_tree(&arena, &doc);
        let root = tree.roots()[0];
        assert!(root.is_container());

        let names: Vec<&str> = tree
            .descendants(root)
            .iter()
            .map(|node| node.name())
            .collect();
        assert_eq!(names, vec!["Hud", "Fire", "Reload"]);
    }

    #[test]
    fn explicit_container_flag_wins_over_children() {
        let doc: SceneDoc = serde_json::from_str(
            r#"{ "roots": [{ "name": "Bar", "type": "Panel", "container": true }] }"#,
        )
        .unwrap();

        let arena = Bump::new();
        let tree = build_tree(&arena, &doc);
        assert!(tree.roots()[0].is_container());
    }
}
