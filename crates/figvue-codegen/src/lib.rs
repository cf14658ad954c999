//! figvue Code Generator
//!
//! Compiles a design tree into the three sections of a Vue single-file
//! component: template, script, and style. Each section comes from an
//! independent pass over the same read-only tree.
//!
//! ```text
//! DesignNode → compile() → ComponentOutput { template, script, style } → assemble()
//! ```
//!
//! Generation is total: every structurally valid tree produces output.

pub mod naming;
pub mod script;
pub mod style;
pub mod template;

use figvue_model::DesignNode;
use tracing::debug;

/// The three generated sections of a component.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentOutput {
    pub template: String,
    pub script: String,
    pub style: String,
}

impl ComponentOutput {
    /// Wrap the three sections into a single `.vue` document.
    pub fn assemble(&self) -> String {
        format!(
            "<template>\n{}\n</template>\n\n<script setup lang=\"ts\">\n{}\n</script>\n\n<style lang=\"scss\" scoped>\n{}\n</style>",
            self.template, self.script, self.style
        )
    }
}

/// Compile a design tree into template, script, and style sections.
///
/// `component_name` is passed through to the script pass; it does not
/// currently change the output.
pub fn compile(root: &DesignNode, component_name: &str) -> ComponentOutput {
    debug!(
        component = component_name,
        root = %root.id,
        nodes = root.node_count(),
        "generating component"
    );

    ComponentOutput {
        template: template::generate(root),
        script: script::generate(root, component_name),
        style: style::generate(root),
    }
}

/// Compile and assemble a design tree into a complete `.vue` document.
pub fn generate_component(root: &DesignNode, component_name: &str) -> String {
    compile(root, component_name).assemble()
}

/// Format a number, removing `.0` for integers.
pub fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.is_finite() {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}
