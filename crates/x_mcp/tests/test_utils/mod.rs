//! Test utilities for x_mcp tests.
//!
//! Provides a recording X platform and a tool context wired to an in-memory
//! draft store.

#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use x_mcp::ToolContext;
use x_mcp_core::MediaReference;
use x_mcp_error::{XApiError, XApiErrorKind, XMcpResult};
use x_mcp_social::{MediaId, PostedTweet, TweetId, XPlatform};
use x_mcp_storage::{DraftStore, MemoryDraftStore};

/// A call made against the mock platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlatformCall {
    Upload(String),
    Post {
        text: String,
        reply_to: Option<String>,
        media_ids: Vec<String>,
    },
}

/// Records calls instead of talking to X.
#[derive(Default)]
pub struct MockPlatform {
    calls: Mutex<Vec<PlatformCall>>,
    fail_on_post: Option<usize>,
}

impl MockPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail the n-th post (1-based) with a 503.
    pub fn failing_on(post: usize) -> Self {
        Self {
            fail_on_post: Some(post),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<PlatformCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn post_count(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, PlatformCall::Post { .. }))
            .count()
    }
}

#[async_trait]
impl XPlatform for MockPlatform {
    async fn upload_media(&self, media: &MediaReference) -> XMcpResult<MediaId> {
        let mut calls = self.calls.lock().unwrap();
        calls.push(PlatformCall::Upload(media.file_name()));
        Ok(MediaId::new(format!("media-{}", calls.len())))
    }

    async fn create_post(
        &self,
        text: &str,
        reply_to: Option<&TweetId>,
        media_ids: &[MediaId],
    ) -> XMcpResult<PostedTweet> {
        let number = self.post_count() + 1;
        self.calls.lock().unwrap().push(PlatformCall::Post {
            text: text.to_string(),
            reply_to: reply_to.map(ToString::to_string),
            media_ids: media_ids.iter().map(ToString::to_string).collect(),
        });

        if self.fail_on_post == Some(number) {
            return Err(XApiError::new(XApiErrorKind::Status {
                status: 503,
                message: "Service Unavailable".to_string(),
            })
            .into());
        }
        Ok(PostedTweet::new(format!("{}", 1000 + number), text))
    }
}

/// Context over a fresh memory store with no thread delay.
pub fn context_with(platform: Arc<MockPlatform>) -> (ToolContext, Arc<dyn DraftStore>) {
    let store: Arc<dyn DraftStore> = Arc::new(MemoryDraftStore::new());
    let context = ToolContext::builder()
        .store(store.clone())
        .platform(platform)
        .thread_delay(Duration::ZERO)
        .build();
    (context, store)
}
