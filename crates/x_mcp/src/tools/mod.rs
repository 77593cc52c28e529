//! Draft tools behind the MCP server.
//!
//! Each tool is an async function over a shared [`ToolContext`] returning a
//! [`ToolResult`]. The server turns `Ok` values into pretty-printed JSON text
//! and `Err` values into `isError` results carrying [`ToolError::to_json`].

mod create_draft;
mod delete_draft;
mod list_drafts;
mod publish_draft;

pub use create_draft::{CreateDraftParams, ThreadPost, create_draft};
pub use delete_draft::delete_draft;
pub use list_drafts::list_drafts;
pub use publish_draft::publish_draft;

use serde::Deserialize;
use serde_json::{Map, Value, json};
use std::sync::Arc;
use std::time::Duration;
use typed_builder::TypedBuilder;
use x_mcp_core::{Draft, DraftId, PostLimits};
use x_mcp_error::{ValidationError, XMcpError};
use x_mcp_social::XPlatform;
use x_mcp_storage::DraftStore;

/// Failure returned by a tool.
///
/// Wraps the underlying error and optional extra fields, such as the ids of
/// posts published before a thread failed.
#[derive(Debug)]
pub struct ToolError {
    error: XMcpError,
    details: Map<String, Value>,
}

impl ToolError {
    /// Attach an extra field to the reported error.
    pub fn with_detail(mut self, key: impl Into<String>, value: Value) -> Self {
        self.details.insert(key.into(), value);
        self
    }

    /// The underlying error.
    pub fn error(&self) -> &XMcpError {
        &self.error
    }

    /// Structured form sent to the model:
    /// `{"error": {"kind": ..., "message": ..., ...details}}`.
    pub fn to_json(&self) -> Value {
        let mut body = Map::new();
        body.insert("kind".to_string(), json!(self.error.kind().category()));
        body.insert("message".to_string(), json!(self.error.kind().message()));
        body.extend(self.details.clone());
        json!({ "error": body })
    }
}

impl From<XMcpError> for ToolError {
    fn from(error: XMcpError) -> Self {
        Self {
            error,
            details: Map::new(),
        }
    }
}

impl From<ValidationError> for ToolError {
    fn from(error: ValidationError) -> Self {
        XMcpError::from(error).into()
    }
}

/// Result type for tool execution.
pub type ToolResult = Result<Value, ToolError>;

/// Shared state handed to every tool.
#[derive(Clone, TypedBuilder)]
pub struct ToolContext {
    /// Where drafts are kept
    pub store: Arc<dyn DraftStore>,
    /// Where drafts are published
    pub platform: Arc<dyn XPlatform>,
    /// Limits checked at creation
    #[builder(default)]
    pub limits: PostLimits,
    /// Pause between thread posts
    #[builder(default = Duration::from_millis(1000))]
    pub thread_delay: Duration,
}

/// Arguments of the tools that act on one stored draft.
#[derive(Debug, Clone, Deserialize, schemars::JsonSchema)]
pub struct DraftIdParams {
    /// Id returned by create_draft
    pub draft_id: String,
}

impl DraftIdParams {
    /// Wrap a raw id.
    pub fn new(draft_id: impl Into<String>) -> Self {
        Self {
            draft_id: draft_id.into(),
        }
    }

    fn id(&self) -> DraftId {
        DraftId::new(self.draft_id.as_str())
    }
}

/// JSON view of a draft returned by create and list.
fn draft_json(draft: &Draft) -> Value {
    let segments: Vec<Value> = draft
        .segments()
        .iter()
        .map(|segment| {
            let media: Vec<Value> = segment
                .media()
                .iter()
                .map(|m| {
                    json!({
                        "path": m.path().display().to_string(),
                        "media_type": m.media_type(),
                        "size_bytes": m.size_bytes(),
                    })
                })
                .collect();
            json!({ "text": segment.text(), "media": media })
        })
        .collect();

    json!({
        "draft_id": draft.id(),
        "kind": draft.kind(),
        "created_at": draft.created_at().to_rfc3339(),
        "segments": segments,
    })
}
