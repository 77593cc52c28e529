//! Draft storage for the x_mcp server.
//!
//! Drafts live in a [`DraftStore`] between creation and publication. Two
//! backends are provided:
//!
//! - [`MemoryDraftStore`]: a map held for the lifetime of the process
//! - [`FileSystemDraftStore`]: one JSON file per draft in a directory
//!
//! # Example
//!
//! ```rust
//! use x_mcp_core::Segment;
//! use x_mcp_storage::{DraftStore, MemoryDraftStore};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = MemoryDraftStore::new();
//! let draft = store.create(vec![Segment::new("hello", vec![])]).await?;
//!
//! let listed = store.list().await?;
//! assert_eq!(listed.len(), 1);
//!
//! store.delete(draft.id()).await?;
//! assert!(store.get(draft.id()).await.is_err());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod filesystem;
mod memory;

pub use filesystem::FileSystemDraftStore;
pub use memory::MemoryDraftStore;

use serde::{Deserialize, Serialize};
use x_mcp_core::{Draft, DraftId, Segment};
use x_mcp_error::XMcpResult;

/// Trait for pluggable draft storage backends.
///
/// Identifiers are assigned by the store and are never reused while the
/// store is alive. A deleted draft is no longer returned by `get` or `list`.
#[async_trait::async_trait]
pub trait DraftStore: Send + Sync {
    /// Store a new draft and return it with its assigned id and timestamp.
    ///
    /// Segments are expected to be validated already.
    async fn create(&self, segments: Vec<Segment>) -> XMcpResult<Draft>;

    /// All stored drafts, oldest first.
    async fn list(&self) -> XMcpResult<Vec<Draft>>;

    /// Fetch one draft.
    ///
    /// # Errors
    ///
    /// Not-found if no draft has this id.
    async fn get(&self, id: &DraftId) -> XMcpResult<Draft>;

    /// Remove a draft, returning what was removed.
    ///
    /// # Errors
    ///
    /// Not-found if no draft has this id.
    async fn delete(&self, id: &DraftId) -> XMcpResult<Draft>;

    /// Backend name for logging.
    fn backend(&self) -> StoreBackend;
}

/// Available storage backends.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// In-process map; drafts vanish on exit
    #[default]
    #[display("memory")]
    Memory,
    /// JSON files in a directory
    #[display("filesystem")]
    Filesystem,
}

/// Order drafts oldest first, falling back to id for equal timestamps.
pub(crate) fn sort_drafts(drafts: &mut [Draft]) {
    drafts.sort_by(|a, b| {
        a.created_at()
            .cmp(b.created_at())
            .then_with(|| a.id().cmp(b.id()))
    });
}
