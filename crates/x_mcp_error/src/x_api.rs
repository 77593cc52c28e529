//! Upstream X API error types.

/// Failures reported by the X API.
///
/// These are passed through to the caller unchanged; nothing is retried.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum XApiErrorKind {
    /// 401: credentials rejected
    #[display("Unauthorized: {}", _0)]
    Unauthorized(String),
    /// 403: the account may not perform this action
    #[display("Forbidden: {}", _0)]
    Forbidden(String),
    /// 429: rate limit exhausted
    #[display("Rate limited ({})", describe_retry(retry_after))]
    RateLimited {
        /// Seconds until the limit resets, if the API said so
        retry_after: Option<u64>,
    },
    /// Any other non-success status
    #[display("HTTP {status}: {message}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Error detail from the response body
        message: String,
    },
    /// Success status with a body that could not be decoded
    #[display("Malformed response: {}", _0)]
    MalformedResponse(String),
}

fn describe_retry(retry_after: &Option<u64>) -> String {
    match retry_after {
        Some(secs) => format!("retry after {}s", secs),
        None => "retry time unknown".to_string(),
    }
}

/// X API error with location tracking.
///
/// # Examples
///
/// ```
/// use x_mcp_error::{XApiError, XApiErrorKind};
///
/// let err = XApiError::new(XApiErrorKind::RateLimited { retry_after: Some(60) });
/// assert!(format!("{}", err).contains("retry after 60s"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error, derive_getters::Getters)]
#[display("X API Error: {} at line {} in {}", kind, line, file)]
pub struct XApiError {
    kind: XApiErrorKind,
    line: u32,
    file: &'static str,
}

impl XApiError {
    /// Create a new X API error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: XApiErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
