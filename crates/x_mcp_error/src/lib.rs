//! Error types for the x_mcp draft server.
//!
//! # Error Hierarchy
//!
//! Errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! Everything converts into [`XMcpError`] with `?`.
//!
//! # Examples
//!
//! ```
//! use x_mcp_error::{XMcpResult, DraftError};
//!
//! fn lookup(id: &str) -> XMcpResult<String> {
//!     Err(DraftError::not_found(id))?
//! }
//!
//! assert!(lookup("draft-42").unwrap_err().is_not_found());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod draft;
mod error;
mod http;
mod storage;
mod validation;
mod x_api;

pub use config::ConfigError;
pub use draft::{DraftError, DraftErrorKind};
pub use error::{XMcpError, XMcpErrorKind, XMcpResult};
pub use http::HttpError;
pub use storage::{StorageError, StorageErrorKind};
pub use validation::{ValidationError, ValidationErrorKind};
pub use x_api::{XApiError, XApiErrorKind};
