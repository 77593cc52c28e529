//! Draft lookup error types.

/// Kinds of draft lookup errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum DraftErrorKind {
    /// No draft with the given id exists (never created, deleted, or published)
    #[display("Draft not found: {}", _0)]
    NotFound(String),
    /// A draft with the given id is already stored
    #[display("Draft already exists: {}", _0)]
    AlreadyExists(String),
}

/// Draft error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error, derive_getters::Getters)]
#[display("Draft Error: {} at line {} in {}", kind, line, file)]
pub struct DraftError {
    kind: DraftErrorKind,
    line: u32,
    file: &'static str,
}

impl DraftError {
    /// Create a new draft error with automatic location tracking.
    ///
    /// # Examples
    ///
    /// ```
    /// use x_mcp_error::{DraftError, DraftErrorKind};
    ///
    /// let err = DraftError::new(DraftErrorKind::NotFound("draft-1".to_string()));
    /// assert_eq!(err.kind(), &DraftErrorKind::NotFound("draft-1".to_string()));
    /// ```
    #[track_caller]
    pub fn new(kind: DraftErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Shorthand for a not-found error.
    #[track_caller]
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::new(DraftErrorKind::NotFound(id.into()))
    }
}
