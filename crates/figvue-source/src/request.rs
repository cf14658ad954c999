//! The generate-component request.
//!
//! One-shot: validate parameters, decompose the URL, fetch the tree, and
//! generate. Any failure aborts with no partial output and no retry.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{DesignLocator, DesignSource, RequestError};

/// Request body: `{ "figmaUrl": "...", "componentName": "..." }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    #[serde(default)]
    pub figma_url: Option<String>,
    #[serde(default)]
    pub component_name: Option<String>,
}

/// Response body: `{ "component": "<template>..." }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub component: String,
}

impl GenerateRequest {
    pub fn new(figma_url: impl Into<String>, component_name: impl Into<String>) -> Self {
        Self {
            figma_url: Some(figma_url.into()),
            component_name: Some(component_name.into()),
        }
    }
}

/// Run a generate-component request against `source`.
pub fn handle(
    request: &GenerateRequest,
    source: &dyn DesignSource,
) -> Result<GenerateResponse, RequestError> {
    let result = run(request, source);
    if let Err(err) = &result {
        warn!(kind = ?err.kind(), error = %err, "generate request failed");
    }
    result
}

fn run(request: &GenerateRequest, source: &dyn DesignSource) -> Result<GenerateResponse, RequestError> {
    let figma_url = required(&request.figma_url, "figmaUrl")?;
    let component_name = required(&request.component_name, "componentName")?;

    let locator = DesignLocator::parse(figma_url)?;
    debug!(file_key = %locator.file_key, node_id = %locator.node_id, "fetching design");

    let root = source.fetch(&locator)?;
    let component = figvue_codegen::generate_component(&root, component_name);

    Ok(GenerateResponse { component })
}

fn required<'a>(value: &'a Option<String>, name: &'static str) -> Result<&'a str, RequestError> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or(RequestError::MissingInput(name))
}
