//! Draft types.

use crate::Segment;
use chrono::{DateTime, Utc};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Opaque draft identifier, unique within a store.
///
/// # Examples
///
/// ```
/// use x_mcp_core::DraftId;
///
/// let a = DraftId::generate();
/// let b = DraftId::generate();
/// assert_ne!(a, b);
/// assert!(a.as_str().starts_with("draft-"));
/// ```
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(transparent)]
#[display("{}", _0)]
pub struct DraftId(String);

impl DraftId {
    /// Wrap an existing identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh identifier.
    pub fn generate() -> Self {
        Self(format!("draft-{}", uuid::Uuid::new_v4().simple()))
    }

    /// Borrow the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for DraftId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for DraftId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Whether a draft is a single post or a thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(rename_all = "lowercase")]
pub enum DraftKind {
    /// One post
    #[display("tweet")]
    Tweet,
    /// Two or more reply-linked posts
    #[display("thread")]
    Thread,
}

/// An unpublished post or thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Draft {
    /// Store-assigned identifier
    id: DraftId,
    /// Posts in publication order
    segments: Vec<Segment>,
    /// When the draft was created
    created_at: DateTime<Utc>,
}

impl Draft {
    /// Create a draft stamped with the current time.
    pub fn new(id: DraftId, segments: Vec<Segment>) -> Self {
        Self {
            id,
            segments,
            created_at: Utc::now(),
        }
    }

    /// Single post or thread, derived from the segment count.
    pub fn kind(&self) -> DraftKind {
        if self.segments.len() > 1 {
            DraftKind::Thread
        } else {
            DraftKind::Tweet
        }
    }

    /// Total number of media attachments across all segments.
    pub fn media_count(&self) -> usize {
        self.segments.iter().map(|s| s.media().len()).sum()
    }
}
