use tempfile::TempDir;
use x_mcp_core::{DraftId, Segment};
use x_mcp_storage::{DraftStore, FileSystemDraftStore, StoreBackend};

#[tokio::test]
async fn test_drafts_persist_across_store_instances() {
    let dir = TempDir::new().unwrap();
    let draft = {
        let store = FileSystemDraftStore::new(dir.path()).unwrap();
        store
            .create(vec![Segment::new("persisted", vec![])])
            .await
            .unwrap()
    };

    let reopened = FileSystemDraftStore::new(dir.path()).unwrap();
    let fetched = reopened.get(draft.id()).await.unwrap();
    assert_eq!(fetched, draft);
    assert_eq!(reopened.backend(), StoreBackend::Filesystem);
}

#[tokio::test]
async fn test_creates_missing_directory() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("a/b/drafts");
    let store = FileSystemDraftStore::new(&nested).unwrap();
    assert!(nested.is_dir());
    assert!(store.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_writes_one_json_file_per_draft() {
    let dir = TempDir::new().unwrap();
    let store = FileSystemDraftStore::new(dir.path()).unwrap();
    let draft = store
        .create(vec![Segment::new("one", vec![]), Segment::new("two", vec![])])
        .await
        .unwrap();

    let file = dir.path().join(format!("{}.json", draft.id()));
    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&file).unwrap()).unwrap();
    assert_eq!(json["segments"][1]["text"], "two");
}

#[tokio::test]
async fn test_list_skips_foreign_files() {
    let dir = TempDir::new().unwrap();
    let store = FileSystemDraftStore::new(dir.path()).unwrap();
    store.create(vec![Segment::new("x", vec![])]).await.unwrap();
    std::fs::write(dir.path().join("notes.txt"), "not a draft").unwrap();

    assert_eq!(store.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_corrupt_file_is_a_storage_error() {
    let dir = TempDir::new().unwrap();
    let store = FileSystemDraftStore::new(dir.path()).unwrap();
    std::fs::write(dir.path().join("draft-bad.json"), "{ nope").unwrap();

    let err = store.list().await.unwrap_err();
    assert_eq!(err.kind().category(), "storage");
}

#[tokio::test]
async fn test_delete_removes_the_file() {
    let dir = TempDir::new().unwrap();
    let store = FileSystemDraftStore::new(dir.path()).unwrap();
    let draft = store.create(vec![Segment::new("bye", vec![])]).await.unwrap();

    store.delete(draft.id()).await.unwrap();
    assert!(!dir.path().join(format!("{}.json", draft.id())).exists());
    assert!(store.get(draft.id()).await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn test_path_traversal_ids_are_not_found() {
    let dir = TempDir::new().unwrap();
    let store = FileSystemDraftStore::new(dir.path().join("drafts")).unwrap();
    std::fs::write(dir.path().join("secret.json"), "{}").unwrap();

    let err = store.get(&DraftId::new("../secret")).await.unwrap_err();
    assert!(err.is_not_found());
}
