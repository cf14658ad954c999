//! Design sources.
//!
//! `DesignSource` is the seam where a design service client plugs in.
//! `ResponseSource` serves trees from a saved nodes-endpoint response.

use std::path::Path;

use figvue_model::{decode, DecodeError, DesignNode};
use tracing::debug;

use crate::{DesignLocator, FetchError};

/// Supplies design trees by locator.
pub trait DesignSource {
    fn fetch(&self, locator: &DesignLocator) -> Result<DesignNode, FetchError>;
}

/// A design source backed by a saved nodes-endpoint response body.
#[derive(Debug, Clone)]
pub struct ResponseSource {
    body: String,
    file_key: Option<String>,
}

impl ResponseSource {
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            file_key: None,
        }
    }

    /// Read a saved response from disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, FetchError> {
        let path = path.as_ref();
        let body = std::fs::read_to_string(path).map_err(|source| FetchError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), bytes = body.len(), "loaded design response");
        Ok(Self::new(body))
    }

    /// Only serve locators that point into `file_key`.
    pub fn for_file(mut self, file_key: impl Into<String>) -> Self {
        self.file_key = Some(file_key.into());
        self
    }
}

impl DesignSource for ResponseSource {
    fn fetch(&self, locator: &DesignLocator) -> Result<DesignNode, FetchError> {
        if let Some(expected) = &self.file_key {
            if *expected != locator.file_key {
                return Err(FetchError::FileMismatch {
                    expected: expected.clone(),
                    actual: locator.file_key.clone(),
                });
            }
        }

        decode::document_from_response(&self.body, &locator.node_id).map_err(|err| match err {
            DecodeError::NodeNotFound { node_id } => FetchError::NotFound {
                file_key: locator.file_key.clone(),
                node_id,
            },
            other => FetchError::Malformed(other),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    fn response() -> String {
        json!({
            "nodes": {
                "1:2": {"document": {
                    "id": "1:2", "name": "Card", "type": "FRAME",
                    "children": [{"id": "1:3", "name": "Title", "type": "TEXT", "characters": "Hi"}]
                }}
            }
        })
        .to_string()
    }

    // =========================================================================
    // Fetching
    // =========================================================================

    #[test]
    fn test_fetch_existing_node() {
        let source = ResponseSource::new(response());
        let node = source.fetch(&DesignLocator::new("K", "1:2")).unwrap();
        assert_eq!(node.name, "Card");
        assert_eq!(node.children.len(), 1);
    }

    #[test]
    fn test_fetch_missing_node() {
        let source = ResponseSource::new(response());
        let err = source.fetch(&DesignLocator::new("K", "9:9")).unwrap_err();
        assert!(
            matches!(err, FetchError::NotFound { file_key, node_id } if file_key == "K" && node_id == "9:9")
        );
    }

    #[test]
    fn test_fetch_malformed_body() {
        let source = ResponseSource::new("<html>rate limited</html>");
        let err = source.fetch(&DesignLocator::new("K", "1:2")).unwrap_err();
        assert!(matches!(err, FetchError::Malformed(_)));
    }

    #[test]
    fn test_fetch_node_missing_required_field() {
        let body = json!({"nodes": {"1:2": {"document": {"id": "1:2", "type": "FRAME"}}}}).to_string();
        let err = ResponseSource::new(body)
            .fetch(&DesignLocator::new("K", "1:2"))
            .unwrap_err();
        assert!(matches!(err, FetchError::Malformed(_)));
    }

    #[test]
    fn test_pinned_file_key() {
        let source = ResponseSource::new(response()).for_file("K");
        assert!(source.fetch(&DesignLocator::new("K", "1:2")).is_ok());

        let err = source.fetch(&DesignLocator::new("Other", "1:2")).unwrap_err();
        assert!(
            matches!(err, FetchError::FileMismatch { ref expected, ref actual } if expected == "K" && actual == "Other")
        );
        assert_eq!(
            err.to_string(),
            "Design response is pinned to file K, not Other"
        );
    }

    // =========================================================================
    // Files
    // =========================================================================

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(response().as_bytes()).unwrap();

        let source = ResponseSource::from_path(file.path()).unwrap();
        let node = source.fetch(&DesignLocator::new("K", "1:2")).unwrap();
        assert_eq!(node.id, "1:2");
    }

    #[test]
    fn test_from_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let err = ResponseSource::from_path(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, FetchError::Io { .. }));
    }
}
