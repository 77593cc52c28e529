//! Input validation error types.

/// Kinds of validation failures.
///
/// Every variant is raised before any call to the X API is made.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ValidationErrorKind {
    /// Post text is empty or whitespace only
    #[display("Post text must not be empty (segment {})", _0)]
    EmptyText(usize),
    /// Post text exceeds the configured limit
    #[display("Segment {segment} is {length} characters; the limit is {max}")]
    TextTooLong {
        /// Zero-based segment index
        segment: usize,
        /// Character count of the text
        length: usize,
        /// Configured maximum
        max: usize,
    },
    /// A draft needs at least one segment
    #[display("A draft must contain at least one post")]
    EmptyDraft,
    /// Thread has more posts than allowed
    #[display("Thread has {length} posts; the limit is {max}")]
    ThreadTooLong {
        /// Number of segments supplied
        length: usize,
        /// Configured maximum
        max: usize,
    },
    /// Too many media attachments on one post
    #[display("Segment {segment} has {count} media attachments; the limit is {max}")]
    TooManyMedia {
        /// Zero-based segment index
        segment: usize,
        /// Number of attachments supplied
        count: usize,
        /// Configured maximum
        max: usize,
    },
    /// A GIF shares its post with another attachment
    #[display("Segment {segment}: a GIF must be the only attachment on its post")]
    GifNotAlone {
        /// Zero-based segment index
        segment: usize,
    },
    /// Media path does not exist or is not a regular file
    #[display("Media file not found: {}", _0)]
    MediaNotFound(String),
    /// Media file exists but could not be read for upload
    #[display("Media file unreadable: {}", _0)]
    MediaUnreadable(String),
    /// Media file extension is not a supported image or GIF type
    #[display("Unsupported media type: {}", _0)]
    UnsupportedMedia(String),
    /// Media file exceeds the size allowed for its type
    #[display("Media file {path} is {size} bytes; the limit is {max}")]
    MediaTooLarge {
        /// File path
        path: String,
        /// Actual size in bytes
        size: u64,
        /// Maximum size in bytes
        max: u64,
    },
    /// Tool arguments are missing or malformed
    #[display("Invalid arguments: {}", _0)]
    InvalidArguments(String),
}

/// Validation error with location tracking.
///
/// # Examples
///
/// ```
/// use x_mcp_error::{ValidationError, ValidationErrorKind};
///
/// let err = ValidationError::new(ValidationErrorKind::EmptyText(0));
/// assert!(format!("{}", err).contains("must not be empty"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error, derive_getters::Getters)]
#[display("Validation Error: {} at line {} in {}", kind, line, file)]
pub struct ValidationError {
    kind: ValidationErrorKind,
    line: u32,
    file: &'static str,
}

impl ValidationError {
    /// Create a new validation error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ValidationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
