//! Design tree types.
//!
//! A `DesignNode` exclusively owns its children; the tree is acyclic and
//! built once per generation request.

/// One visual element of the source design.
#[derive(Debug, Clone, PartialEq)]
pub struct DesignNode {
    /// Opaque identifier from the design service (e.g. `1:2`).
    pub id: String,
    /// Human-authored label. Not unique, not a valid identifier.
    pub name: String,
    pub kind: NodeKind,
    /// Ordered children. Order determines markup emission order.
    pub children: Vec<DesignNode>,
    /// `None` when the source node carries no style object at all.
    pub style: Option<StyleProperties>,
    /// Literal text content, only ever set for `NodeKind::Text`.
    pub text: Option<String>,
}

/// Node categories the generator dispatches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// `FRAME` or `GROUP`
    Container,
    /// `TEXT`
    Text,
    /// `RECTANGLE` or `VECTOR`
    Shape,
    /// Any other node type.
    Other,
}

impl NodeKind {
    /// Classify a design-service node type string. Total: unknown types map to `Other`.
    pub fn from_type(node_type: &str) -> Self {
        match node_type {
            "FRAME" | "GROUP" => NodeKind::Container,
            "TEXT" => NodeKind::Text,
            "RECTANGLE" | "VECTOR" => NodeKind::Shape,
            _ => NodeKind::Other,
        }
    }
}

/// Classified style entries of a node, ordered by key.
///
/// Declaration order in generated CSS is fixed by the generator, not by this list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleProperties {
    pub properties: Vec<StyleProperty>,
}

/// A single style entry, classified at the decoding boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleProperty {
    /// `fill`
    Fill(Fill),
    /// `fontSize`, in pixels.
    FontSize(f64),
    /// Any entry the generator does not translate. Keeps the key for diagnostics.
    Ignored(String),
}

/// A fill value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Fill {
    /// Channels in the `0..=1` range. Alpha defaults to 1 when absent.
    Rgba {
        r: f64,
        g: f64,
        b: f64,
        a: Option<f64>,
    },
    /// A fill that lacks numeric `r`, `g`, `b` channels.
    Unresolved,
}

impl StyleProperties {
    pub fn new(properties: Vec<StyleProperty>) -> Self {
        Self { properties }
    }

    pub fn fill(&self) -> Option<&Fill> {
        self.properties.iter().find_map(|p| match p {
            StyleProperty::Fill(fill) => Some(fill),
            _ => None,
        })
    }

    pub fn font_size(&self) -> Option<f64> {
        self.properties.iter().find_map(|p| match p {
            StyleProperty::FontSize(size) => Some(*size),
            _ => None,
        })
    }

    /// Keys of entries that were not translated.
    pub fn ignored(&self) -> impl Iterator<Item = &str> {
        self.properties.iter().filter_map(|p| match p {
            StyleProperty::Ignored(key) => Some(key.as_str()),
            _ => None,
        })
    }
}

impl DesignNode {
    /// Create a childless, unstyled node.
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            children: Vec::new(),
            style: None,
            text: None,
        }
    }

    /// Create a container node owning `children`.
    pub fn container(
        id: impl Into<String>,
        name: impl Into<String>,
        children: Vec<DesignNode>,
    ) -> Self {
        Self {
            children,
            ..Self::new(id, name, NodeKind::Container)
        }
    }

    /// Create a text node.
    pub fn text(id: impl Into<String>, name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::new(id, name, NodeKind::Text)
        }
    }

    pub fn with_style(mut self, properties: Vec<StyleProperty>) -> Self {
        self.style = Some(StyleProperties::new(properties));
        self
    }

    pub fn with_children(mut self, children: Vec<DesignNode>) -> Self {
        self.children = children;
        self
    }

    /// Total number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(DesignNode::node_count).sum::<usize>()
    }

    /// Depth of the subtree. A leaf has depth 1.
    pub fn depth(&self) -> usize {
        1 + self.children.iter().map(DesignNode::depth).max().unwrap_or(0)
    }
}
