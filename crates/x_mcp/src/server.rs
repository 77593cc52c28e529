//! MCP server exposing the draft tools through `rmcp`.

use crate::tools::{self, CreateDraftParams, DraftIdParams, ToolContext, ToolResult};
use rmcp::{
    ErrorData as McpError, ServerHandler, ServiceExt,
    handler::server::{tool::ToolRouter, wrapper::Parameters},
    model::{
        CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
    },
    tool, tool_handler, tool_router,
    transport::stdio,
};
use tracing::{info, warn};

const SERVER_NAME: &str = "x_mcp";

/// Turn a tool outcome into an MCP result.
///
/// Domain failures are reported in-band with `isError` set so the assistant
/// can read the `{"error": {...}}` body and react to it.
fn into_call_result(tool: &str, result: ToolResult) -> CallToolResult {
    match result {
        Ok(value) => CallToolResult::success(vec![Content::text(format!("{:#}", value))]),
        Err(err) => {
            warn!(tool, kind = err.error().kind().category(), error = %err.error(), "Tool failed");
            CallToolResult::error(vec![Content::text(err.to_json().to_string())])
        }
    }
}

/// MCP server for X drafts.
#[derive(Clone)]
pub struct XMcpServer {
    context: ToolContext,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl XMcpServer {
    /// Create a server whose tools share `context`.
    pub fn new(context: ToolContext) -> Self {
        Self {
            context,
            tool_router: Self::tool_router(),
        }
    }

    /// Serve on the process's stdin and stdout until the client disconnects.
    pub async fn run_stdio(self) -> anyhow::Result<()> {
        info!("MCP server starting on stdio");
        let service = self.serve(stdio()).await?;
        let reason = service.waiting().await?;
        info!(?reason, "MCP server shutting down");
        Ok(())
    }

    #[tool(
        description = "Create a draft post or thread for X (Twitter). Pass 'content' (with optional \
                       'media' file paths) for a single post, or 'thread' as a list of posts. \
                       Nothing is published until publish_draft is called."
    )]
    async fn create_draft(
        &self,
        Parameters(params): Parameters<CreateDraftParams>,
    ) -> Result<CallToolResult, McpError> {
        let result = tools::create_draft(&self.context, params).await;
        Ok(into_call_result("create_draft", result))
    }

    #[tool(description = "List all unpublished drafts with their ids, text and attached media.")]
    async fn list_drafts(&self) -> Result<CallToolResult, McpError> {
        let result = tools::list_drafts(&self.context).await;
        Ok(into_call_result("list_drafts", result))
    }

    #[tool(
        description = "Publish a draft to X (Twitter) and remove it from the drafts list. Threads \
                       are posted as a chain of replies. If publishing fails the draft is kept."
    )]
    async fn publish_draft(
        &self,
        Parameters(params): Parameters<DraftIdParams>,
    ) -> Result<CallToolResult, McpError> {
        let result = tools::publish_draft(&self.context, params).await;
        Ok(into_call_result("publish_draft", result))
    }

    #[tool(description = "Delete a draft by id without publishing it.")]
    async fn delete_draft(
        &self,
        Parameters(params): Parameters<DraftIdParams>,
    ) -> Result<CallToolResult, McpError> {
        let result = tools::delete_draft(&self.context, params).await;
        Ok(into_call_result("delete_draft", result))
    }
}

#[tool_handler]
impl ServerHandler for XMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: SERVER_NAME.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Implementation::from_build_env()
            },
            instructions: Some(
                "Draft X (Twitter) posts and threads with create_draft, review them with \
                 list_drafts, then publish_draft or delete_draft. Media is given as local \
                 image or GIF file paths."
                    .to_string(),
            ),
        }
    }
}
