//! Decoding of design-service JSON into `DesignNode` trees.
//!
//! The wire shape is deserialized with serde into private raw types, then
//! normalized: node types are classified, style entries are sorted into
//! `StyleProperty` variants, and text content is dropped from non-text nodes.

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::node::{DesignNode, Fill, NodeKind, StyleProperties, StyleProperty};
use crate::DecodeError;

#[derive(Deserialize)]
struct RawNode {
    id: String,
    name: String,
    #[serde(rename = "type")]
    node_type: String,
    #[serde(default)]
    children: Option<Vec<RawNode>>,
    #[serde(default)]
    style: Option<Map<String, Value>>,
    #[serde(default)]
    characters: Option<String>,
}

#[derive(Deserialize)]
struct RawResponse {
    #[serde(default)]
    nodes: HashMap<String, Option<RawEntry>>,
}

#[derive(Deserialize)]
struct RawEntry {
    #[serde(default)]
    document: Option<RawNode>,
}

/// Decode a single node object (and its subtree) from JSON text.
pub fn from_json(source: &str) -> Result<DesignNode, DecodeError> {
    let raw: RawNode = serde_json::from_str(source)?;
    Ok(finish(raw))
}

/// Decode a single node object (and its subtree) from an already-parsed JSON value.
pub fn from_value(value: Value) -> Result<DesignNode, DecodeError> {
    let raw: RawNode = serde_json::from_value(value)?;
    Ok(finish(raw))
}

/// Extract and decode `nodes[node_id].document` from a nodes-endpoint response.
///
/// ```text
/// { "nodes": { "1:2": { "document": { "id": "1:2", ... } } } }
/// ```
pub fn document_from_response(source: &str, node_id: &str) -> Result<DesignNode, DecodeError> {
    let mut response: RawResponse = serde_json::from_str(source)?;
    let raw = response
        .nodes
        .remove(node_id)
        .flatten()
        .and_then(|entry| entry.document)
        .ok_or_else(|| DecodeError::NodeNotFound {
            node_id: node_id.to_string(),
        })?;
    Ok(finish(raw))
}

fn finish(raw: RawNode) -> DesignNode {
    let node = normalize(raw);
    debug!(
        id = %node.id,
        nodes = node.node_count(),
        depth = node.depth(),
        "decoded design tree"
    );
    node
}

fn normalize(raw: RawNode) -> DesignNode {
    let kind = NodeKind::from_type(&raw.node_type);
    if kind == NodeKind::Other {
        trace!(id = %raw.id, node_type = %raw.node_type, "unrecognized node type");
    }

    let text = match kind {
        NodeKind::Text => raw.characters,
        _ => None,
    };

    DesignNode {
        style: raw.style.map(|style| classify_style(&raw.id, style)),
        children: raw
            .children
            .unwrap_or_default()
            .into_iter()
            .map(normalize)
            .collect(),
        id: raw.id,
        name: raw.name,
        kind,
        text,
    }
}

fn classify_style(id: &str, style: Map<String, Value>) -> StyleProperties {
    let properties = style
        .into_iter()
        .map(|(key, value)| {
            let property = classify_entry(key, &value);
            if let StyleProperty::Ignored(key) = &property {
                debug!(id, key = %key, "ignoring style entry");
            }
            property
        })
        .collect();
    StyleProperties::new(properties)
}

fn classify_entry(key: String, value: &Value) -> StyleProperty {
    match key.as_str() {
        "fill" if !is_falsy(value) => StyleProperty::Fill(fill_from_value(value)),
        "fontSize" => match value.as_f64() {
            Some(size) if size != 0.0 => StyleProperty::FontSize(size),
            _ => StyleProperty::Ignored(key),
        },
        _ => StyleProperty::Ignored(key),
    }
}

fn fill_from_value(value: &Value) -> Fill {
    let channel = |name: &str| value.get(name).and_then(Value::as_f64);
    match (channel("r"), channel("g"), channel("b")) {
        (Some(r), Some(g), Some(b)) => Fill::Rgba {
            r,
            g,
            b,
            a: channel("a"),
        },
        _ => Fill::Unresolved,
    }
}

/// A fill that is null, `false`, `0` or `""` counts as absent.
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}
