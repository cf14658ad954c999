//! figvue Design Tree Model
//!
//! The normalized, read-only representation of a design document subtree
//! (frames, groups, text, shapes) that the code generator consumes.
//! Also decodes the JSON node shape delivered by the design service.
//!
//! # Example
//!
//! ```
//! use figvue_model::{decode, NodeKind};
//!
//! let node = decode::from_json(r#"{"id":"1:2","name":"Card","type":"FRAME"}"#).unwrap();
//! assert_eq!(node.kind, NodeKind::Container);
//! ```

pub mod decode;
pub mod node;

pub use node::{DesignNode, Fill, NodeKind, StyleProperties, StyleProperty};

/// Error produced while decoding design-service JSON into a `DesignNode` tree.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The payload is not valid JSON or a node lacks a required field.
    #[error("Malformed design node: {0}")]
    Malformed(#[from] serde_json::Error),

    /// A nodes response does not contain the requested node.
    #[error("Node not found: {node_id}")]
    NodeNotFound { node_id: String },
}
