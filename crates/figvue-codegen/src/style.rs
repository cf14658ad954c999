//! Style (SCSS) generator.
//!
//! Emits one rule block per styled node, in depth-first pre-order. Unlike the
//! template pass, this walks every child, including children of shapes.

use figvue_model::{DesignNode, Fill};

use crate::format_number;
use crate::naming::class_name;

/// Generate the style rules for `root` and its subtree.
pub fn generate(root: &DesignNode) -> String {
    let mut out = String::new();
    generate_rules(root, &mut out);
    out
}

fn generate_rules(node: &DesignNode, out: &mut String) {
    if let Some(style) = &node.style {
        out.push_str(&format!(".{} {{\n", class_name(&node.name)));

        if let Some(fill) = style.fill() {
            out.push_str(&format!("  background-color: {};\n", fill_to_css(fill)));
        }
        if let Some(size) = style.font_size() {
            out.push_str(&format!("  font-size: {}px;\n", format_number(size)));
        }

        out.push_str("}\n");
    }

    for child in &node.children {
        generate_rules(child, out);
    }
}

/// Convert a fill to a CSS color: `rgba(R, G, B, A)` or `transparent`.
pub fn fill_to_css(fill: &Fill) -> String {
    match *fill {
        Fill::Rgba { r, g, b, a } => format!(
            "rgba({}, {}, {}, {})",
            channel_to_byte(r),
            channel_to_byte(g),
            channel_to_byte(b),
            format_number(a.unwrap_or(1.0)),
        ),
        Fill::Unresolved => "transparent".into(),
    }
}

/// Scale a `0..=1` channel to `0..=255`, rounding halves up.
fn channel_to_byte(channel: f64) -> String {
    format_number((channel * 255.0 + 0.5).floor())
}
