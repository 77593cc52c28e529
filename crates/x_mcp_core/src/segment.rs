//! Draft segments and their validation.

use crate::{MediaReference, MediaType, PostLimits};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use x_mcp_error::{ValidationError, ValidationErrorKind, XMcpResult};

/// One post within a draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Segment {
    /// Post text
    text: String,
    /// Attachments, uploaded in order before the post is created
    #[serde(default)]
    media: Vec<MediaReference>,
}

impl Segment {
    /// Create a segment from already validated parts.
    pub fn new(text: impl Into<String>, media: Vec<MediaReference>) -> Self {
        Self {
            text: text.into(),
            media,
        }
    }

    /// Re-check that every attached file is still present.
    pub fn verify_media(&self) -> XMcpResult<()> {
        self.media.iter().try_for_each(MediaReference::verify)
    }
}

/// Unvalidated segment as supplied by a tool call.
///
/// Deserializes from either a plain string or `{"text": ..., "media": [...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum SegmentInput {
    /// Text only
    Text(String),
    /// Text with optional media paths
    Post {
        /// Post text
        text: String,
        /// Local media file paths
        #[serde(default)]
        media: Vec<PathBuf>,
    },
}

impl SegmentInput {
    fn into_parts(self) -> (String, Vec<PathBuf>) {
        match self {
            Self::Text(text) => (text, Vec::new()),
            Self::Post { text, media } => (text, media),
        }
    }
}

/// Validate raw inputs against `limits` and resolve their media.
///
/// Checks run in order: the draft is non-empty and within the thread limit,
/// then for each segment the text is non-blank and short enough, the
/// attachment count is within limits, every media path resolves, and a GIF
/// is never combined with other attachments.
///
/// # Errors
///
/// Returns the first validation failure found.
pub fn build_segments(inputs: Vec<SegmentInput>, limits: &PostLimits) -> XMcpResult<Vec<Segment>> {
    if inputs.is_empty() {
        return Err(ValidationError::new(ValidationErrorKind::EmptyDraft).into());
    }
    if inputs.len() > *limits.max_thread_length() {
        return Err(ValidationError::new(ValidationErrorKind::ThreadTooLong {
            length: inputs.len(),
            max: *limits.max_thread_length(),
        })
        .into());
    }

    inputs
        .into_iter()
        .enumerate()
        .map(|(index, input)| -> XMcpResult<Segment> {
            let (text, paths) = input.into_parts();

            if text.trim().is_empty() {
                return Err(ValidationError::new(ValidationErrorKind::EmptyText(index)).into());
            }

            let length = text.chars().count();
            if length > *limits.max_text_length() {
                return Err(ValidationError::new(ValidationErrorKind::TextTooLong {
                    segment: index,
                    length,
                    max: *limits.max_text_length(),
                })
                .into());
            }

            if paths.len() > *limits.max_media_per_post() {
                return Err(ValidationError::new(ValidationErrorKind::TooManyMedia {
                    segment: index,
                    count: paths.len(),
                    max: *limits.max_media_per_post(),
                })
                .into());
            }

            let media = paths
                .iter()
                .map(MediaReference::resolve)
                .collect::<XMcpResult<Vec<_>>>()?;

            // A GIF has to be the only attachment on its post.
            let has_gif = media.iter().any(|m| *m.media_type() == MediaType::Gif);
            if has_gif && media.len() > 1 {
                return Err(ValidationError::new(ValidationErrorKind::GifNotAlone {
                    segment: index,
                })
                .into());
            }

            Ok(Segment::new(text, media))
        })
        .collect()
}
