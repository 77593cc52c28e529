//! Filesystem-backed draft store.
//!
//! Each draft is written to `{directory}/{draft_id}.json` as pretty-printed
//! JSON, so drafts survive restarts and can be inspected by hand.

use crate::{DraftStore, StoreBackend, sort_drafts};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};
use x_mcp_core::{Draft, DraftId, Segment};
use x_mcp_error::{DraftError, DraftErrorKind, StorageError, StorageErrorKind, XMcpResult};

/// Draft store writing one JSON file per draft.
///
/// # Example Structure
///
/// ```text
/// drafts/
/// ├── draft-3f2a9c...json
/// └── draft-b71e04...json
/// ```
#[derive(Debug, Clone)]
pub struct FileSystemDraftStore {
    directory: PathBuf,
}

impl FileSystemDraftStore {
    /// Open a store rooted at `directory`, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the directory cannot be created.
    #[tracing::instrument(skip(directory))]
    pub fn new(directory: impl Into<PathBuf>) -> XMcpResult<Self> {
        let directory = directory.into();

        std::fs::create_dir_all(&directory).map_err(|e| {
            StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                "{}: {}",
                directory.display(),
                e
            )))
        })?;

        tracing::info!(path = %directory.display(), "Opened filesystem draft store");
        Ok(Self { directory })
    }

    /// Root directory of the store.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Path for a draft id, or `None` if the id could escape the directory.
    fn path_for(&self, id: &DraftId) -> Option<PathBuf> {
        let safe = !id.as_str().is_empty()
            && id
                .as_str()
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        safe.then(|| self.directory.join(format!("{}.json", id)))
    }

    async fn read_draft(path: &Path) -> XMcpResult<Draft> {
        let bytes = tokio::fs::read(path).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileRead(format!(
                "{}: {}",
                path.display(),
                e
            )))
        })?;

        serde_json::from_slice(&bytes).map_err(|e| {
            StorageError::new(StorageErrorKind::Corrupt(format!(
                "{}: {}",
                path.display(),
                e
            )))
            .into()
        })
    }

    /// Write via a temp file and rename so readers never see partial JSON.
    async fn write_draft(&self, path: &Path, draft: &Draft) -> XMcpResult<()> {
        let json = serde_json::to_vec_pretty(draft).map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "{}: {}",
                draft.id(),
                e
            )))
        })?;

        let temp_path = path.with_extension("json.tmp");
        let write_err = |e: std::io::Error| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "{}: {}",
                path.display(),
                e
            )))
        };

        tokio::fs::write(&temp_path, &json).await.map_err(write_err)?;
        tokio::fs::rename(&temp_path, path).await.map_err(write_err)?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl DraftStore for FileSystemDraftStore {
    #[instrument(skip(self, segments), fields(segments = segments.len()))]
    async fn create(&self, segments: Vec<Segment>) -> XMcpResult<Draft> {
        let draft = Draft::new(DraftId::generate(), segments);
        let path = self
            .path_for(draft.id())
            .ok_or_else(|| DraftError::not_found(draft.id().as_str()))?;

        if tokio::fs::try_exists(&path).await.unwrap_or(false) {
            return Err(DraftError::new(DraftErrorKind::AlreadyExists(draft.id().to_string())).into());
        }

        self.write_draft(&path, &draft).await?;
        debug!(draft_id = %draft.id(), path = %path.display(), "Wrote draft file");
        Ok(draft)
    }

    #[instrument(skip(self), fields(directory = %self.directory.display()))]
    async fn list(&self) -> XMcpResult<Vec<Draft>> {
        let read_err = |e: std::io::Error| {
            StorageError::new(StorageErrorKind::FileRead(format!(
                "{}: {}",
                self.directory.display(),
                e
            )))
        };

        let mut entries = tokio::fs::read_dir(&self.directory)
            .await
            .map_err(read_err)?;

        let mut drafts = Vec::new();
        while let Some(entry) = entries.next_entry().await.map_err(read_err)? {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            drafts.push(Self::read_draft(&path).await?);
        }

        sort_drafts(&mut drafts);
        debug!(count = drafts.len(), "Listed drafts from disk");
        Ok(drafts)
    }

    async fn get(&self, id: &DraftId) -> XMcpResult<Draft> {
        let path = self
            .path_for(id)
            .ok_or_else(|| DraftError::not_found(id.as_str()))?;

        match tokio::fs::metadata(&path).await {
            Ok(_) => Self::read_draft(&path).await,
            Err(e) if e.kind() == ErrorKind::NotFound => Err(DraftError::not_found(id.as_str()).into()),
            Err(e) => Err(StorageError::new(StorageErrorKind::FileRead(format!(
                "{}: {}",
                path.display(),
                e
            )))
            .into()),
        }
    }

    #[instrument(skip(self), fields(draft_id = %id))]
    async fn delete(&self, id: &DraftId) -> XMcpResult<Draft> {
        let draft = self.get(id).await?;
        let path = self
            .path_for(id)
            .ok_or_else(|| DraftError::not_found(id.as_str()))?;

        tokio::fs::remove_file(&path).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileDelete(format!(
                "{}: {}",
                path.display(),
                e
            )))
        })?;

        debug!(path = %path.display(), "Removed draft file");
        Ok(draft)
    }

    fn backend(&self) -> StoreBackend {
        StoreBackend::Filesystem
    }
}
