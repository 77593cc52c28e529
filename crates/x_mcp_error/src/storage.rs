//! Draft storage error types.

/// Kinds of storage errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum StorageErrorKind {
    /// Failed to create the drafts directory
    #[display("Failed to create drafts directory: {}", _0)]
    DirectoryCreation(String),
    /// Failed to write a draft file
    #[display("Failed to write draft: {}", _0)]
    FileWrite(String),
    /// Failed to read a draft file or directory
    #[display("Failed to read draft: {}", _0)]
    FileRead(String),
    /// Failed to remove a draft file
    #[display("Failed to remove draft: {}", _0)]
    FileDelete(String),
    /// A draft file exists but could not be decoded
    #[display("Corrupt draft file: {}", _0)]
    Corrupt(String),
}

/// Storage error with location tracking.
///
/// # Examples
///
/// ```
/// use x_mcp_error::{StorageError, StorageErrorKind};
///
/// let err = StorageError::new(StorageErrorKind::Corrupt("drafts/x.json".to_string()));
/// assert!(format!("{}", err).contains("Corrupt"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error, derive_getters::Getters)]
#[display("Storage Error: {} at line {} in {}", kind, line, file)]
pub struct StorageError {
    kind: StorageErrorKind,
    line: u32,
    file: &'static str,
}

impl StorageError {
    /// Create a new storage error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StorageErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
