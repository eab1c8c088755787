//! MCP tool parameter types with JSON Schema support.

use schemars::JsonSchema;
use serde::Deserialize;

/// Resource types supported by MCP tools.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ResourceType {
    /// Action run.
    Run,
    /// Hook run within an action run.
    Hook,
}

/// Parameters for the `get` MCP tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetParams {
    /// Repository name.
    pub repository: String,
    /// The run ID.
    pub run_id: String,
}

/// Parameters for the `list` MCP tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ListParams {
    /// The type of resource to list.
    pub resource: ResourceType,
    /// Repository name.
    pub repository: String,
    /// Run ID (required for Hook).
    #[serde(default)]
    pub run_id: Option<String>,
    /// Cursor returned as `next_offset` by the previous page.
    #[serde(default)]
    pub after: Option<String>,
    /// Number of items per page (max 1000).
    #[serde(default)]
    pub amount: Option<u32>,
    /// Branch filter (Run only).
    #[serde(default)]
    pub branch: Option<String>,
    /// Commit filter (Run only).
    #[serde(default)]
    pub commit: Option<String>,
}

/// Parameters for the `output` MCP tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct OutputParams {
    /// Repository name.
    pub repository: String,
    /// The run ID.
    pub run_id: String,
    /// The hook run ID.
    pub hook_run_id: String,
    /// Keep only the last N bytes of output.
    #[serde(default)]
    pub tail_bytes: Option<usize>,
}
