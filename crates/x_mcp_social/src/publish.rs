//! Publishing draft segments as posts.

use crate::{MediaId, PostedTweet, TweetId, XPlatform};
use std::time::Duration;
use tracing::{debug, info, instrument, warn};
use x_mcp_core::Segment;
use x_mcp_error::{XMcpError, XMcpResult};

/// Result of publishing a thread.
///
/// `posted` holds every post that was created, in order. When `error` is set
/// the thread stopped at segment `posted.len()`.
#[derive(Debug)]
pub struct ThreadOutcome {
    /// Posts created before completion or failure
    pub posted: Vec<PostedTweet>,
    /// Failure that stopped the thread, if any
    pub error: Option<XMcpError>,
}

impl ThreadOutcome {
    /// True when every segment was posted.
    pub fn is_complete(&self) -> bool {
        self.error.is_none()
    }

    /// Ids of the posts that were created.
    pub fn tweet_ids(&self) -> Vec<TweetId> {
        self.posted.iter().map(|p| p.id().clone()).collect()
    }
}

async fn post_segment<P>(
    platform: &P,
    segment: &Segment,
    reply_to: Option<&TweetId>,
) -> XMcpResult<PostedTweet>
where
    P: XPlatform + ?Sized,
{
    let mut media_ids: Vec<MediaId> = Vec::with_capacity(segment.media().len());
    for media in segment.media() {
        media_ids.push(platform.upload_media(media).await?);
    }
    platform
        .create_post(segment.text(), reply_to, &media_ids)
        .await
}

/// Upload a segment's media, then create the post.
#[instrument(skip_all, fields(platform = platform.platform_name(), media = segment.media().len()))]
pub async fn post_single<P>(platform: &P, segment: &Segment) -> XMcpResult<PostedTweet>
where
    P: XPlatform + ?Sized,
{
    let posted = post_segment(platform, segment, None).await?;
    info!(tweet_id = %posted.id(), "Published post");
    Ok(posted)
}

/// Post segments in order, each replying to the one before.
///
/// Sleeps for `delay` between posts. Stops at the first failure; nothing
/// already posted is rolled back.
#[instrument(skip_all, fields(platform = platform.platform_name(), segments = segments.len()))]
pub async fn post_thread<P>(platform: &P, segments: &[Segment], delay: Duration) -> ThreadOutcome
where
    P: XPlatform + ?Sized,
{
    let mut posted: Vec<PostedTweet> = Vec::with_capacity(segments.len());

    for (index, segment) in segments.iter().enumerate() {
        if index > 0 && !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        let result = {
            let reply_to = posted.last().map(|p| p.id());
            post_segment(platform, segment, reply_to).await
        };

        match result {
            Ok(tweet) => {
                debug!(index, tweet_id = %tweet.id(), "Posted thread segment");
                posted.push(tweet);
            }
            Err(error) => {
                warn!(index, posted = posted.len(), error = %error, "Thread publishing stopped");
                return ThreadOutcome {
                    posted,
                    error: Some(error),
                };
            }
        }
    }

    info!(posts = posted.len(), "Published thread");
    ThreadOutcome {
        posted,
        error: None,
    }
}
