//! MCP Server handler for the lakeFS Actions API.

use rmcp::{
    handler::server::ServerHandler,
    model::{
        CallToolRequestParam, CallToolResult, Content, ErrorData as McpError, Implementation,
        ListToolsResult, PaginatedRequestParam, ServerCapabilities, ServerInfo, Tool,
        ToolsCapability,
    },
    service::RequestContext,
    RoleServer,
};
use schemars::JsonSchema;
use serde::Serialize;
use std::sync::Arc;

use crate::{
    mcp::{GetParams, ListParams, OutputParams, ResourceType},
    ActionsApi, LakeClient, LakeError,
};

/// Output returned by the `output` tool when `tail_bytes` is not given.
const DEFAULT_OUTPUT_TAIL: usize = 64 * 1024;

/// lakeFS Actions MCP Server.
///
/// Implements the MCP ServerHandler trait, providing tools to inspect
/// action runs through the Model Context Protocol.
///
/// # Tools
///
/// - `get` - Fetch a single run
/// - `list` - List runs of a repository or hooks of a run
/// - `output` - Read the tail of a hook run's output
#[derive(Clone)]
pub struct ActionsServer {
    api: Arc<ActionsApi>,
}

impl ActionsServer {
    /// Create a new ActionsServer from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if no credentials are configured.
    pub fn from_env() -> crate::Result<Self> {
        let client = LakeClient::from_env()?;
        Ok(Self::new(client))
    }

    /// Create a new ActionsServer with an existing client.
    pub fn new(client: LakeClient) -> Self {
        Self {
            api: Arc::new(ActionsApi::new(client)),
        }
    }

    /// Generate JSON Schema for a type.
    fn schema<T: JsonSchema>() -> Arc<serde_json::Map<String, serde_json::Value>> {
        let schema = schemars::schema_for!(T);
        let value = serde_json::to_value(&schema).unwrap_or(serde_json::json!({}));
        match value {
            serde_json::Value::Object(map) => Arc::new(map),
            _ => Arc::new(serde_json::Map::new()),
        }
    }

    /// Convert LakeError to McpError.
    fn to_mcp_error(err: LakeError) -> McpError {
        match &err {
            LakeError::NotFound { message, .. } => {
                McpError::resource_not_found(message.clone(), None)
            }
            LakeError::InvalidArgument { .. } | LakeError::ConfigMissing(_) => {
                McpError::invalid_params(err.to_string(), None)
            }
            _ => McpError::internal_error(err.to_string(), None),
        }
    }

    fn to_json<T: Serialize>(value: &T) -> Result<String, McpError> {
        serde_json::to_string_pretty(value).map_err(|e| McpError::internal_error(e.to_string(), None))
    }

    /// Handle the `get` tool.
    ///
    /// Returns the run as pretty-printed JSON in a `CallToolResult`.
    ///
    /// # Errors
    ///
    /// Returns an MCP error if an id is empty or the underlying API call fails.
    pub async fn handle_get(&self, params: GetParams) -> Result<CallToolResult, McpError> {
        let run = self
            .api
            .get_run(&params.repository, &params.run_id)
            .await
            .map_err(Self::to_mcp_error)?;

        Ok(CallToolResult::success(vec![Content::text(Self::to_json(
            &run,
        )?)]))
    }

    /// Handle the `list` tool.
    pub async fn handle_list(&self, params: ListParams) -> Result<CallToolResult, McpError> {
        let result = match params.resource {
            ResourceType::Run => {
                let page = self
                    .api
                    .list_repository_runs(
                        &params.repository,
                        params.after.as_deref(),
                        params.amount,
                        params.branch.as_deref(),
                        params.commit.as_deref(),
                    )
                    .await
                    .map_err(Self::to_mcp_error)?;
                Self::to_json(&page)?
            }
            ResourceType::Hook => {
                let run_id = params.run_id.ok_or_else(|| {
                    McpError::invalid_params("run_id is required for listing hooks", None)
                })?;
                let page = self
                    .api
                    .list_run_hooks(
                        &params.repository,
                        &run_id,
                        params.after.as_deref(),
                        params.amount,
                    )
                    .await
                    .map_err(Self::to_mcp_error)?;
                Self::to_json(&page)?
            }
        };

        Ok(CallToolResult::success(vec![Content::text(result)]))
    }

    /// Handle the `output` tool.
    ///
    /// Streams the hook output and keeps only the trailing bytes.
    pub async fn handle_output(&self, params: OutputParams) -> Result<CallToolResult, McpError> {
        let limit = params.tail_bytes.unwrap_or(DEFAULT_OUTPUT_TAIL);
        let mut output = self
            .api
            .get_run_hook_output(&params.repository, &params.run_id, &params.hook_run_id)
            .await
            .map_err(Self::to_mcp_error)?;

        let mut tail: Vec<u8> = Vec::new();
        let mut truncated = false;
        while let Some(chunk) = output.next_chunk().await.map_err(Self::to_mcp_error)? {
            tail.extend_from_slice(&chunk);
            if tail.len() > limit {
                let excess = tail.len() - limit;
                tail.drain(..excess);
                truncated = true;
            }
        }

        let mut text = String::from_utf8_lossy(&tail).into_owned();
        if truncated {
            text.insert_str(0, "[output truncated]\n");
        }

        Ok(CallToolResult::success(vec![Content::text(text)]))
    }
}

impl ServerHandler for ActionsServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability {
                    list_changed: Some(false),
                }),
                ..Default::default()
            },
            server_info: Implementation {
                name: "lakeapi".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            instructions: Some(
                "lakeFS Actions MCP Server - Inspect action runs, hook runs and hook output."
                    .to_string(),
            ),
        }
    }

    async fn list_tools(
        &self,
        _request: PaginatedRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        let tools = vec![
            Tool::new(
                "get",
                "Fetch a single lakeFS action run by repository and run ID.",
                Self::schema::<GetParams>(),
            ),
            Tool::new(
                "list",
                "List lakeFS action runs with cursor pagination. \
                 Run: optional branch/commit filters. \
                 Hook: run_id is required. \
                 Pass the previous page's next_offset as after.",
                Self::schema::<ListParams>(),
            ),
            Tool::new(
                "output",
                "Read the output of a hook run (trailing bytes only).",
                Self::schema::<OutputParams>(),
            ),
        ];

        Ok(ListToolsResult {
            tools,
            next_cursor: None,
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let args = request
            .arguments
            .map(serde_json::Value::Object)
            .unwrap_or(serde_json::json!({}));

        match request.name.as_ref() {
            "get" => {
                let params: GetParams = serde_json::from_value(args)
                    .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                self.handle_get(params).await
            }
            "list" => {
                let params: ListParams = serde_json::from_value(args)
                    .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                self.handle_list(params).await
            }
            "output" => {
                let params: OutputParams = serde_json::from_value(args)
                    .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                self.handle_output(params).await
            }
            other => Err(McpError::invalid_params(
                format!("Unknown tool: {other}"),
                None,
            )),
        }
    }
}
