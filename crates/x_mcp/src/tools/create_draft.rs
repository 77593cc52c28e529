//! Tool for creating drafts.

use super::{ToolContext, ToolResult, draft_json};
use serde::Deserialize;
use std::path::PathBuf;
use tracing::{info, instrument};
use x_mcp_core::{SegmentInput, build_segments};
use x_mcp_error::{ValidationError, ValidationErrorKind};

/// One post of a thread: plain text, or text with attached media.
#[derive(Debug, Clone, Deserialize, schemars::JsonSchema)]
#[serde(untagged)]
pub enum ThreadPost {
    /// Text only
    Text(String),
    /// Text with local image or GIF paths
    Post {
        /// Post text
        text: String,
        /// Local image or GIF paths attached to this post
        #[serde(default)]
        media: Vec<PathBuf>,
    },
}

impl From<ThreadPost> for SegmentInput {
    fn from(post: ThreadPost) -> Self {
        match post {
            ThreadPost::Text(text) => SegmentInput::Text(text),
            ThreadPost::Post { text, media } => SegmentInput::Post { text, media },
        }
    }
}

/// Arguments of `create_draft`.
///
/// Exactly one of `content` and `thread` must be given.
#[derive(Debug, Clone, Default, Deserialize, schemars::JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateDraftParams {
    /// Text of a single post
    #[serde(default)]
    pub content: Option<String>,
    /// Local image or GIF paths to attach to the single post
    #[serde(default)]
    pub media: Vec<PathBuf>,
    /// Posts of a thread, in order
    #[serde(default)]
    pub thread: Option<Vec<ThreadPost>>,
}

impl CreateDraftParams {
    fn into_inputs(self) -> Result<Vec<SegmentInput>, ValidationError> {
        let invalid = |msg: &str| {
            ValidationError::new(ValidationErrorKind::InvalidArguments(msg.to_string()))
        };

        match (self.content, self.thread) {
            (Some(text), None) => Ok(vec![SegmentInput::Post {
                text,
                media: self.media,
            }]),
            (None, Some(thread)) if self.media.is_empty() => {
                Ok(thread.into_iter().map(SegmentInput::from).collect())
            }
            (None, Some(_)) => Err(invalid(
                "'media' applies to 'content'; attach thread media per post",
            )),
            (Some(_), Some(_)) => Err(invalid("provide either 'content' or 'thread', not both")),
            (None, None) => Err(invalid("one of 'content' or 'thread' is required")),
        }
    }
}

/// Validate and store a new single-post or thread draft.
#[instrument(skip_all)]
pub async fn create_draft(context: &ToolContext, params: CreateDraftParams) -> ToolResult {
    let segments = build_segments(params.into_inputs()?, &context.limits)?;

    let draft = context.store.create(segments).await?;
    info!(
        draft_id = %draft.id(),
        kind = %draft.kind(),
        segments = draft.segments().len(),
        media = draft.media_count(),
        "Draft created"
    );

    Ok(draft_json(&draft))
}
