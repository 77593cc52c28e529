//! Publishing seam between the tool handlers and the X API.

use crate::{MediaId, PostedTweet, TweetId};
use async_trait::async_trait;
use x_mcp_core::MediaReference;
use x_mcp_error::XMcpResult;

/// Operations needed to publish a draft.
///
/// [`XClient`](crate::XClient) implements this against the real API. Tests
/// use an in-memory implementation that records calls.
#[async_trait]
pub trait XPlatform: Send + Sync {
    /// Upload one media file and return its id.
    async fn upload_media(&self, media: &MediaReference) -> XMcpResult<MediaId>;

    /// Create one post, optionally as a reply and with attached media.
    async fn create_post(
        &self,
        text: &str,
        reply_to: Option<&TweetId>,
        media_ids: &[MediaId],
    ) -> XMcpResult<PostedTweet>;

    /// Name used in logs.
    fn platform_name(&self) -> &'static str {
        "x"
    }
}
