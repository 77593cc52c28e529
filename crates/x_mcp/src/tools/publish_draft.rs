//! Tool for publishing drafts.

use super::{DraftIdParams, ToolContext, ToolError, ToolResult};
use serde_json::{Value, json};
use tracing::{error, info, instrument};
use x_mcp_core::DraftKind;
use x_mcp_error::{ValidationError, ValidationErrorKind};
use x_mcp_social::{ThreadOutcome, TweetId, post_single, post_thread};

/// Public URL of a post.
fn tweet_url(id: &TweetId) -> String {
    format!("https://x.com/i/web/status/{}", id)
}

fn posted_ids(ids: &[TweetId]) -> Value {
    json!(ids.iter().map(TweetId::as_str).collect::<Vec<_>>())
}

/// Publish a draft as a post or thread, then remove it.
///
/// Media files are re-checked before anything is sent. If publishing fails
/// part way through a thread the draft is kept and the error lists the posts
/// that already went out.
#[instrument(skip_all, fields(draft_id = %params.draft_id))]
pub async fn publish_draft(context: &ToolContext, params: DraftIdParams) -> ToolResult {
    let draft_id = params.id();
    let draft = context.store.get(&draft_id).await?;

    // Only reachable through a hand-edited filesystem draft.
    let Some(first) = draft.segments().first() else {
        return Err(ValidationError::new(ValidationErrorKind::EmptyDraft).into());
    };

    for segment in draft.segments() {
        segment.verify_media()?;
    }

    info!(
        kind = %draft.kind(),
        segments = draft.segments().len(),
        "Publishing draft"
    );

    let platform = context.platform.as_ref();
    let outcome = match draft.kind() {
        DraftKind::Tweet => match post_single(platform, first).await {
            Ok(tweet) => ThreadOutcome {
                posted: vec![tweet],
                error: None,
            },
            Err(e) => ThreadOutcome {
                posted: Vec::new(),
                error: Some(e),
            },
        },
        DraftKind::Thread => post_thread(platform, draft.segments(), context.thread_delay).await,
    };
    let tweet_ids = outcome.tweet_ids();

    if let Some(err) = outcome.error {
        error!(posted = tweet_ids.len(), error = %err, "Publish failed; draft kept");
        return Err(ToolError::from(err)
            .with_detail("draft_id", json!(draft_id))
            .with_detail("posted_tweet_ids", posted_ids(&tweet_ids)));
    }

    context.store.delete(&draft_id).await.map_err(|err| {
        ToolError::from(err)
            .with_detail("draft_id", json!(draft_id))
            .with_detail("posted_tweet_ids", posted_ids(&tweet_ids))
    })?;

    let first_id = tweet_ids.first();
    info!(posts = tweet_ids.len(), "Draft published");

    Ok(json!({
        "draft_id": draft_id,
        "tweet_ids": posted_ids(&tweet_ids),
        "first_tweet_id": first_id,
        "url": first_id.map(tweet_url),
    }))
}
