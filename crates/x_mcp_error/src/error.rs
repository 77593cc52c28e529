//! Top-level error wrapper types.

use crate::{
    ConfigError, DraftError, DraftErrorKind, HttpError, StorageError, ValidationError,
    XApiError,
};

/// Every error condition the server can surface.
///
/// # Examples
///
/// ```
/// use x_mcp_error::{XMcpError, HttpError};
///
/// let http_err = HttpError::new("Connection failed");
/// let err: XMcpError = http_err.into();
/// assert!(format!("{}", err).contains("HTTP Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum XMcpErrorKind {
    /// Missing credentials or bad configuration
    #[from(ConfigError)]
    Config(ConfigError),
    /// Unknown draft id
    #[from(DraftError)]
    Draft(DraftError),
    /// Rejected input
    #[from(ValidationError)]
    Validation(ValidationError),
    /// Error reported by the X API
    #[from(XApiError)]
    XApi(XApiError),
    /// Network or transport failure talking to the X API
    #[from(HttpError)]
    Http(HttpError),
    /// Draft storage backend failure
    #[from(StorageError)]
    Storage(StorageError),
}

impl XMcpErrorKind {
    /// Failure category reported to the calling assistant.
    ///
    /// One of `configuration`, `not_found`, `validation`, `upstream`,
    /// `storage`, or `internal`.
    pub fn category(&self) -> &'static str {
        match self {
            Self::Config(_) => "configuration",
            Self::Draft(e) => match e.kind() {
                DraftErrorKind::NotFound(_) => "not_found",
                DraftErrorKind::AlreadyExists(_) => "internal",
            },
            Self::Validation(_) => "validation",
            Self::XApi(_) | Self::Http(_) => "upstream",
            Self::Storage(_) => "storage",
        }
    }

    /// Human-readable message without source location.
    pub fn message(&self) -> String {
        match self {
            Self::Config(e) => e.message.clone(),
            Self::Draft(e) => e.kind().to_string(),
            Self::Validation(e) => e.kind().to_string(),
            Self::XApi(e) => e.kind().to_string(),
            Self::Http(e) => e.message.clone(),
            Self::Storage(e) => e.kind().to_string(),
        }
    }
}

/// x_mcp error with kind discrimination.
///
/// # Examples
///
/// ```
/// use x_mcp_error::{XMcpError, XMcpResult, ConfigError};
///
/// fn might_fail() -> XMcpResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// let err = might_fail().unwrap_err();
/// assert_eq!(err.kind().category(), "configuration");
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("x_mcp Error: {}", _0)]
pub struct XMcpError(Box<XMcpErrorKind>);

impl XMcpError {
    /// Create a new error from a kind.
    pub fn new(kind: XMcpErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &XMcpErrorKind {
        &self.0
    }

    /// True if this is a not-found error for a draft.
    pub fn is_not_found(&self) -> bool {
        self.kind().category() == "not_found"
    }

    /// True if this is an input validation error.
    pub fn is_validation(&self) -> bool {
        matches!(self.kind(), XMcpErrorKind::Validation(_))
    }
}

// Generic From implementation for any type that converts to XMcpErrorKind
impl<T> From<T> for XMcpError
where
    T: Into<XMcpErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for x_mcp operations.
pub type XMcpResult<T> = std::result::Result<T, XMcpError>;
