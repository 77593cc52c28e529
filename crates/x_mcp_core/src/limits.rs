//! Post size limits.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

/// Limits applied when a draft is created.
///
/// Defaults match a standard X account: 280 characters, four attachments per
/// post, 25 posts per thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters, TypedBuilder)]
pub struct PostLimits {
    /// Maximum characters per post.
    #[builder(default = 280)]
    #[serde(default = "default_max_text_length")]
    max_text_length: usize,

    /// Maximum media attachments per post.
    #[builder(default = 4)]
    #[serde(default = "default_max_media_per_post")]
    max_media_per_post: usize,

    /// Maximum posts in one thread.
    #[builder(default = 25)]
    #[serde(default = "default_max_thread_length")]
    max_thread_length: usize,
}

fn default_max_text_length() -> usize {
    280
}

fn default_max_media_per_post() -> usize {
    4
}

fn default_max_thread_length() -> usize {
    25
}

impl Default for PostLimits {
    fn default() -> Self {
        Self {
            max_text_length: default_max_text_length(),
            max_media_per_post: default_max_media_per_post(),
            max_thread_length: default_max_thread_length(),
        }
    }
}
