//! Request and response bodies for the X API.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Identifier of a published post.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display, derive_more::From,
)]
#[serde(transparent)]
#[display("{}", _0)]
pub struct TweetId(String);

impl TweetId {
    /// Wrap an identifier returned by the API.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Identifier of an uploaded media file.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display, derive_more::From,
)]
#[serde(transparent)]
#[display("{}", _0)]
pub struct MediaId(String);

impl MediaId {
    /// Wrap an identifier returned by the upload endpoint.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A post that was accepted by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct PostedTweet {
    /// Post id
    id: TweetId,
    /// Text as stored by X
    text: String,
}

impl PostedTweet {
    /// Create a record of a published post.
    pub fn new(id: impl Into<TweetId>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

/// Body of `POST /2/tweets`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateTweetRequest {
    /// Post text
    pub text: String,
    /// Present when the post continues a thread
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply: Option<ReplySettings>,
    /// Present when media is attached
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media: Option<TweetMedia>,
}

impl CreateTweetRequest {
    /// Build a request, omitting empty reply and media sections.
    pub fn new(text: &str, reply_to: Option<&TweetId>, media_ids: &[MediaId]) -> Self {
        Self {
            text: text.to_string(),
            reply: reply_to.map(|id| ReplySettings {
                in_reply_to_tweet_id: id.clone(),
            }),
            media: (!media_ids.is_empty()).then(|| TweetMedia {
                media_ids: media_ids.to_vec(),
            }),
        }
    }
}

/// Reply target of a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplySettings {
    /// Post being replied to
    pub in_reply_to_tweet_id: TweetId,
}

/// Media attached to a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TweetMedia {
    /// Uploaded media, in display order
    pub media_ids: Vec<MediaId>,
}

/// Response of `POST /2/tweets`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTweetResponse {
    /// The created post
    pub data: CreatedTweet,
}

/// `data` section of [`CreateTweetResponse`].
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedTweet {
    /// Post id
    pub id: String,
    /// Text as stored by X
    pub text: String,
}

impl From<CreatedTweet> for PostedTweet {
    fn from(created: CreatedTweet) -> Self {
        PostedTweet::new(created.id, created.text)
    }
}

/// Response of `POST /1.1/media/upload.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct MediaUploadResponse {
    /// Media id as a string; the numeric form overflows JSON doubles
    pub media_id_string: String,
}

/// Error body shapes returned by v1.1 and v2 endpoints.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ApiErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub errors: Vec<ApiErrorEntry>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorEntry {
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiErrorBody {
    /// Most specific message available: `detail`, `title`, then the first
    /// entry of `errors`.
    pub(crate) fn message(self) -> Option<String> {
        self.detail
            .or(self.title)
            .or_else(|| self.errors.into_iter().find_map(|e| e.message))
    }
}
