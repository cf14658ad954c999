//! figvue Design Source
//!
//! The boundary between the generator and the outside world: decomposes
//! design-file URLs into locators, fetches design trees through the
//! `DesignSource` trait, and runs the generate-component request.
//!
//! ```text
//! GenerateRequest → DesignLocator::parse → DesignSource::fetch → figvue_codegen → GenerateResponse
//! ```

pub mod locator;
pub mod request;
pub mod source;

use std::path::PathBuf;

pub use locator::DesignLocator;
pub use request::{handle, GenerateRequest, GenerateResponse};
pub use source::{DesignSource, ResponseSource};

use figvue_model::DecodeError;

/// A design-file URL that cannot be decomposed into a file key and node id.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LocatorError {
    #[error("Invalid design URL: {0}")]
    Unparsable(#[from] url::ParseError),

    #[error("Design URL has no file key: {url}")]
    MissingFileKey { url: String },

    #[error("Design URL has no node-id parameter: {url}")]
    MissingNodeId { url: String },
}

/// Failure of the design source to deliver a tree.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Node {node_id} not found in file {file_key}")]
    NotFound { file_key: String, node_id: String },

    #[error("Design response is pinned to file {expected}, not {actual}")]
    FileMismatch { expected: String, actual: String },

    #[error("Malformed design response: {0}")]
    Malformed(#[source] DecodeError),

    #[error("Failed to read design response {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Failure of a generate-component request.
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    #[error("Missing required parameter: {0}")]
    MissingInput(&'static str),

    #[error(transparent)]
    InvalidLocator(#[from] LocatorError),

    #[error("Failed to fetch design: {0}")]
    Upstream(#[from] FetchError),
}

/// The two failure classes a caller surfaces to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing parameters or an undecomposable locator.
    InvalidInput,
    /// The design source failed or returned an unusable node.
    UpstreamFailure,
}

impl RequestError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RequestError::MissingInput(_) | RequestError::InvalidLocator(_) => {
                ErrorKind::InvalidInput
            }
            RequestError::Upstream(_) => ErrorKind::UpstreamFailure,
        }
    }
}
