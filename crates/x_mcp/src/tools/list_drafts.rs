//! Tool for listing drafts.

use super::{ToolContext, ToolResult, draft_json};
use serde_json::json;
use tracing::{debug, instrument};

/// List every stored draft, oldest first.
#[instrument(skip_all)]
pub async fn list_drafts(context: &ToolContext) -> ToolResult {
    let drafts = context.store.list().await?;
    debug!(count = drafts.len(), "Listed drafts");

    Ok(json!({
        "count": drafts.len(),
        "drafts": drafts.iter().map(draft_json).collect::<Vec<_>>(),
    }))
}
