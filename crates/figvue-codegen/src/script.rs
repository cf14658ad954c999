//! Script (`<script setup lang="ts">`) generator.
//!
//! Two independent scans of the tree: one infers the component's props from
//! node kinds, the other its external imports from node names.

use figvue_model::{DesignNode, NodeKind};

/// Import added when the design uses buttons or icons.
pub const UI_KIT_IMPORT: &str = "import { HButton, HIcon } from '@hcomponents'";

/// Name fragments that pull in the UI kit import (matched case-insensitively).
const UI_KIT_MARKERS: &[&str] = &["button", "icon"];

/// Generate the script body for `root`.
///
/// `_component_name` is accepted for the public contract but does not
/// affect the generated script.
pub fn generate(root: &DesignNode, _component_name: &str) -> String {
    let imports = imports(root).join("\n");
    let props = props(root).join("\n");

    format!("{imports}\n\ndefineProps<{{\n{props}\n}}>();")
}

/// Prop declarations for the component, one per line.
///
/// Any text node in the tree produces a single `text?: string` prop.
/// Style variation is not translated into props.
pub fn props(root: &DesignNode) -> Vec<String> {
    let mut props = Vec::new();
    if contains_text(root) {
        props.push("  text?: string".to_string());
    }
    props
}

/// Whether the subtree holds a text node, including under shapes.
fn contains_text(node: &DesignNode) -> bool {
    node.kind == NodeKind::Text || node.children.iter().any(contains_text)
}

/// Import statements the component needs.
pub fn imports(root: &DesignNode) -> Vec<String> {
    let mut imports = Vec::new();
    if requires_ui_kit(root) {
        imports.push(UI_KIT_IMPORT.to_string());
    }
    imports
}

/// Whether any node in the subtree is named like a button or an icon.
pub fn requires_ui_kit(node: &DesignNode) -> bool {
    let name = node.name.to_lowercase();
    UI_KIT_MARKERS.iter().any(|marker| name.contains(*marker))
        || node.children.iter().any(requires_ui_kit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // =========================================================================
    // Props
    // =========================================================================

    #[test]
    fn test_text_root_declares_text_prop() {
        let node = DesignNode::text("1", "Label", "Hello");
        assert_eq!(props(&node), vec!["  text?: string"]);
    }

    #[test]
    fn test_container_with_text_child_declares_text_prop() {
        let node = DesignNode::container("1", "Card", vec![DesignNode::text("2", "Title", "Hi")]);
        assert_eq!(props(&node), vec!["  text?: string"]);
    }

    #[test]
    fn test_nested_text_declares_text_prop() {
        let node = DesignNode::container(
            "1",
            "Page",
            vec![DesignNode::container(
                "2",
                "Section",
                vec![DesignNode::text("3", "Caption", "x")],
            )],
        );
        assert_eq!(props(&node), vec!["  text?: string"]);
    }

    #[test]
    fn test_many_text_nodes_declare_prop_once() {
        let node = DesignNode::container(
            "1",
            "List",
            vec![DesignNode::text("2", "A", "a"), DesignNode::text("3", "B", "b")],
        );
        assert_eq!(props(&node).len(), 1);
    }

    #[test]
    fn test_container_without_text_declares_no_props() {
        let node = DesignNode::container(
            "1",
            "Card",
            vec![DesignNode::new("2", "Divider", NodeKind::Shape)],
        );
        assert!(props(&node).is_empty());
    }

    #[test]
    fn test_shape_root_declares_no_props() {
        let node = DesignNode::new("1", "Box", NodeKind::Shape);
        assert!(props(&node).is_empty());
    }

    // =========================================================================
    // Imports
    // =========================================================================

    #[test]
    fn test_button_anywhere_requires_ui_kit() {
        let node = DesignNode::container(
            "1",
            "Toolbar",
            vec![DesignNode::container(
                "2",
                "Actions",
                vec![DesignNode::new("3", "Icon Button", NodeKind::Other)],
            )],
        );
        assert!(requires_ui_kit(&node));
        assert_eq!(imports(&node), vec![UI_KIT_IMPORT]);
    }

    #[test]
    fn test_match_is_case_insensitive() {
        assert!(requires_ui_kit(&DesignNode::new("1", "SUBMIT BUTTON", NodeKind::Other)));
        assert!(requires_ui_kit(&DesignNode::new("1", "arrowIcon", NodeKind::Shape)));
    }

    #[test]
    fn test_match_inside_shape_children() {
        let node = DesignNode::new("1", "Graphic", NodeKind::Shape)
            .with_children(vec![DesignNode::new("2", "icon/close", NodeKind::Shape)]);
        assert!(requires_ui_kit(&node));
    }

    #[test]
    fn test_no_match_omits_import() {
        let node = DesignNode::container(
            "1",
            "Card",
            vec![DesignNode::text("2", "Title", "Hi"), DesignNode::text("3", "Butt on", "x")],
        );
        assert!(!requires_ui_kit(&node));
        assert!(imports(&node).is_empty());
    }

    #[test]
    fn test_result_independent_of_child_order() {
        let a = DesignNode::text("2", "Caption", "x");
        let b = DesignNode::new("3", "Play Icon", NodeKind::Shape);
        let forward = DesignNode::container("1", "Row", vec![a.clone(), b.clone()]);
        let reverse = DesignNode::container("1", "Row", vec![b, a]);
        assert_eq!(requires_ui_kit(&forward), requires_ui_kit(&reverse));
        assert!(requires_ui_kit(&forward));
    }

    // =========================================================================
    // Script body
    // =========================================================================

    #[test]
    fn test_script_for_text_root() {
        let node = DesignNode::text("1", "Label", "Hello");
        assert_eq!(
            generate(&node, "Label"),
            "\n\ndefineProps<{\n  text?: string\n}>();"
        );
    }

    #[test]
    fn test_script_with_import() {
        let node = DesignNode::new("1", "Icon", NodeKind::Shape);
        assert_eq!(
            generate(&node, "Icon"),
            "import { HButton, HIcon } from '@hcomponents'\n\ndefineProps<{\n\n}>();"
        );
    }

    #[test]
    fn test_component_name_does_not_change_script() {
        let node = DesignNode::text("1", "Label", "Hello");
        assert_eq!(generate(&node, "First"), generate(&node, "Second"));
    }
}
