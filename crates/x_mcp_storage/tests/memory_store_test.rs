use x_mcp_core::{DraftId, Segment};
use x_mcp_storage::{DraftStore, MemoryDraftStore, StoreBackend};

fn segments(texts: &[&str]) -> Vec<Segment> {
    texts.iter().map(|t| Segment::new(*t, vec![])).collect()
}

#[tokio::test]
async fn test_created_draft_is_listed_exactly_once() {
    let store = MemoryDraftStore::new();
    let draft = store.create(segments(&["hello"])).await.unwrap();

    let listed = store.list().await.unwrap();
    let matches = listed.iter().filter(|d| d.id() == draft.id()).count();
    assert_eq!(matches, 1);
    assert_eq!(listed.len(), 1);
}

#[tokio::test]
async fn test_get_returns_stored_segments() {
    let store = MemoryDraftStore::new();
    let draft = store.create(segments(&["one", "two"])).await.unwrap();

    let fetched = store.get(draft.id()).await.unwrap();
    assert_eq!(fetched, draft);
    assert_eq!(fetched.segments()[1].text(), "two");
}

#[tokio::test]
async fn test_deleted_draft_is_gone() {
    let store = MemoryDraftStore::new();
    let keep = store.create(segments(&["keep"])).await.unwrap();
    let drop = store.create(segments(&["drop"])).await.unwrap();

    let removed = store.delete(drop.id()).await.unwrap();
    assert_eq!(removed.id(), drop.id());

    let listed = store.list().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id(), keep.id());

    assert!(store.get(drop.id()).await.unwrap_err().is_not_found());
    assert!(store.delete(drop.id()).await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn test_unknown_id_is_not_found() {
    let store = MemoryDraftStore::new();
    let err = store.get(&DraftId::new("draft-missing")).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_list_is_ordered_by_creation() {
    let store = MemoryDraftStore::new();
    let mut ids = Vec::new();
    for text in ["a", "b", "c"] {
        ids.push(store.create(segments(&[text])).await.unwrap().id().clone());
        tokio::time::sleep(std::time::Duration::from_millis(2)).await;
    }

    let listed: Vec<_> = store
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|d| d.id().clone())
        .collect();
    assert_eq!(listed, ids);
    assert_eq!(store.backend(), StoreBackend::Memory);
}
