//! In-memory draft store.

use crate::{DraftStore, StoreBackend, sort_drafts};
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::{debug, instrument};
use x_mcp_core::{Draft, DraftId, Segment};
use x_mcp_error::{DraftError, DraftErrorKind, XMcpResult};

/// Draft store backed by a `HashMap`.
///
/// Contents last only as long as the process.
#[derive(Debug, Default)]
pub struct MemoryDraftStore {
    drafts: RwLock<HashMap<DraftId, Draft>>,
}

impl MemoryDraftStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl DraftStore for MemoryDraftStore {
    #[instrument(skip(self, segments), fields(segments = segments.len()))]
    async fn create(&self, segments: Vec<Segment>) -> XMcpResult<Draft> {
        let mut drafts = self.drafts.write().await;

        let draft = Draft::new(DraftId::generate(), segments);
        if drafts.contains_key(draft.id()) {
            return Err(DraftError::new(DraftErrorKind::AlreadyExists(draft.id().to_string())).into());
        }

        debug!(draft_id = %draft.id(), "Stored draft in memory");
        drafts.insert(draft.id().clone(), draft.clone());
        Ok(draft)
    }

    async fn list(&self) -> XMcpResult<Vec<Draft>> {
        let mut drafts: Vec<Draft> = self.drafts.read().await.values().cloned().collect();
        sort_drafts(&mut drafts);
        Ok(drafts)
    }

    async fn get(&self, id: &DraftId) -> XMcpResult<Draft> {
        self.drafts
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| DraftError::not_found(id.as_str()).into())
    }

    #[instrument(skip(self), fields(draft_id = %id))]
    async fn delete(&self, id: &DraftId) -> XMcpResult<Draft> {
        let removed = self
            .drafts
            .write()
            .await
            .remove(id)
            .ok_or_else(|| DraftError::not_found(id.as_str()))?;

        debug!("Removed draft from memory");
        Ok(removed)
    }

    fn backend(&self) -> StoreBackend {
        StoreBackend::Memory
    }
}
