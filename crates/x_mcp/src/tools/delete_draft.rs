//! Tool for deleting drafts.

use super::{DraftIdParams, ToolContext, ToolResult};
use serde_json::json;
use tracing::{info, instrument};

/// Discard a draft without publishing it.
#[instrument(skip_all, fields(draft_id = %params.draft_id))]
pub async fn delete_draft(context: &ToolContext, params: DraftIdParams) -> ToolResult {
    let removed = context.store.delete(&params.id()).await?;
    info!("Draft deleted");

    Ok(json!({ "draft_id": removed.id(), "deleted": true }))
}
