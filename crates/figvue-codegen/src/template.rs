//! Template (markup) generator.
//!
//! Walks the design tree and emits the `<template>` body. Containers nest
//! their children two spaces deeper per level; shapes and unknown nodes are
//! empty blocks whose children are never rendered.

use figvue_model::{DesignNode, NodeKind};

use crate::naming::class_name;

const INDENT: &str = "  ";

/// Generate the template markup for `root` and its subtree.
///
/// The result has no trailing newline.
pub fn generate(root: &DesignNode) -> String {
    let mut out = String::new();
    generate_node(root, &mut out, 0);
    out
}

fn generate_node(node: &DesignNode, out: &mut String, depth: usize) {
    let indent = INDENT.repeat(depth);
    let class = class_name(&node.name);

    out.push_str(&indent);
    match node.kind {
        NodeKind::Container => {
            out.push_str(&format!("<div class=\"{class}\">"));
            for child in &node.children {
                out.push('\n');
                generate_node(child, out, depth + 1);
            }
            out.push('\n');
            out.push_str(&indent);
            out.push_str("</div>");
        }
        NodeKind::Text => {
            // Continuation lines of multi-line text get the same indent as the element
            let text = node.text.as_deref().unwrap_or_default();
            let text = text.replace('\n', &format!("\n{indent}"));
            out.push_str(&format!("<span class=\"{class}\">{text}</span>"));
        }
        // Children of leaf kinds are still styled, but never rendered
        NodeKind::Shape | NodeKind::Other => {
            out.push_str(&format!("<div class=\"{class}\"></div>"));
        }
    }
}
