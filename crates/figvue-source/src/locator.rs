//! Design-file URL decomposition.

use url::Url;

use crate::LocatorError;

/// Path segments that precede the file key in a design-file URL.
const FILE_SEGMENTS: &[&str] = &["file", "design", "proto"];

/// Identifies one node inside one design file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesignLocator {
    pub file_key: String,
    /// Node id in `1:2` form.
    pub node_id: String,
}

impl DesignLocator {
    pub fn new(file_key: impl Into<String>, node_id: impl Into<String>) -> Self {
        Self {
            file_key: file_key.into(),
            node_id: node_id.into(),
        }
    }

    /// Decompose a design-file URL.
    ///
    /// ```
    /// use figvue_source::DesignLocator;
    ///
    /// let locator =
    ///     DesignLocator::parse("https://www.figma.com/file/AbC123/Landing?node-id=12-34").unwrap();
    /// assert_eq!(locator, DesignLocator::new("AbC123", "12:34"));
    /// ```
    pub fn parse(input: &str) -> Result<Self, LocatorError> {
        let url = Url::parse(input.trim())?;

        let segments: Vec<&str> = url
            .path_segments()
            .map(|segments| segments.filter(|s| !s.is_empty()).collect())
            .unwrap_or_default();

        let file_key = segments
            .iter()
            .position(|s| FILE_SEGMENTS.contains(s))
            .and_then(|i| segments.get(i + 1))
            .ok_or_else(|| LocatorError::MissingFileKey {
                url: input.to_string(),
            })?;

        // URLs spell `1:2` as `1-2`
        let node_id = url
            .query_pairs()
            .find(|(key, _)| key == "node-id")
            .map(|(_, value)| value.replace('-', ":"))
            .filter(|id| !id.is_empty())
            .ok_or_else(|| LocatorError::MissingNodeId {
                url: input.to_string(),
            })?;

        Ok(Self {
            file_key: (*file_key).to_string(),
            node_id,
        })
    }
}
