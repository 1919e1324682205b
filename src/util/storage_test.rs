use super::*;
use futures::executor::block_on;

struct FailingStorage;

#[async_trait(?Send)]
impl StorageBackend for FailingStorage {
    async fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Read("disk on fire".to_owned()))
    }

    async fn set_item(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Rejected("quota exceeded".to_owned()))
    }

    async fn remove_item(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }
}

/// Reads work; every write is refused as if storage were full.
struct QuotaStorage(MemoryStorage);

#[async_trait(?Send)]
impl StorageBackend for QuotaStorage {
    async fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.0.get_item(key).await
    }

    async fn set_item(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Rejected("quota exceeded".to_owned()))
    }

    async fn remove_item(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Rejected("quota exceeded".to_owned()))
    }
}

// =============================================================
// MemoryStorage
// =============================================================

#[test]
fn memory_storage_clones_share_items() {
    let a = MemoryStorage::new();
    let b = a.clone();
    block_on(a.set_item("k", "v")).unwrap();
    assert_eq!(b.raw("k").as_deref(), Some("v"));
}

#[test]
fn memory_storage_remove_missing_key_is_ok() {
    let storage = MemoryStorage::new();
    assert_eq!(block_on(storage.remove_item("missing")), Ok(()));
}

#[test]
fn memory_storage_with_item_seeds_value() {
    let storage = MemoryStorage::new().with_item("k", "seeded");
    assert_eq!(block_on(storage.get_item("k")), Ok(Some("seeded".to_owned())));
}

// =============================================================
// PersistentStore
// =============================================================

#[test]
fn persistent_store_reads_written_value() {
    let store = PersistentStore::new(MemoryStorage::new());
    block_on(store.write("k", "v"));
    assert_eq!(block_on(store.read("k")).as_deref(), Some("v"));
}

#[test]
fn persistent_store_delete_removes_value() {
    let memory = MemoryStorage::new().with_item("k", "v");
    let store = PersistentStore::new(memory.clone());
    block_on(store.delete("k"));
    assert!(memory.raw("k").is_none());
}

#[test]
fn persistent_store_read_fault_is_absent() {
    let store = PersistentStore::new(FailingStorage);
    assert!(block_on(store.read("k")).is_none());
}

#[test]
fn persistent_store_write_and_delete_faults_are_swallowed() {
    let store = PersistentStore::new(FailingStorage);
    block_on(store.write("k", "v"));
    block_on(store.delete("k"));
}

// =============================================================
// Session shadow
// =============================================================

#[test]
fn refused_write_is_served_back_this_session() {
    let store = PersistentStore::new(FailingStorage);
    block_on(store.write("k", "v1"));
    assert_eq!(block_on(store.read("k")).as_deref(), Some("v1"));
    assert!(store.is_pending("k"));

    block_on(store.write("k", "v2"));
    assert_eq!(block_on(store.read("k")).as_deref(), Some("v2"));
}

#[test]
fn refused_write_hides_stale_backend_value() {
    let memory = MemoryStorage::new().with_item("k", "old");
    let store = PersistentStore::new(QuotaStorage(memory.clone()));
    block_on(store.write("k", "new"));

    assert_eq!(block_on(store.read("k")).as_deref(), Some("new"));
    assert_eq!(memory.raw("k").as_deref(), Some("old"));
}

#[test]
fn refused_delete_reads_as_absent() {
    let store = PersistentStore::new(QuotaStorage(MemoryStorage::new().with_item("k", "v")));
    block_on(store.delete("k"));
    assert!(block_on(store.read("k")).is_none());
    assert!(store.is_pending("k"));
}

#[test]
fn accepted_write_leaves_nothing_pending() {
    let store = PersistentStore::new(MemoryStorage::new());
    block_on(store.write("k", "v"));
    assert!(!store.is_pending("k"));
}

#[test]
fn clones_share_the_shadow() {
    let store = PersistentStore::new(FailingStorage);
    let other = store.clone();
    block_on(store.write("k", "v"));
    assert_eq!(block_on(other.read("k")).as_deref(), Some("v"));
}

// =============================================================
// JSON
// =============================================================

#[test]
fn read_json_distinguishes_absent_present_and_corrupt() {
    let memory = MemoryStorage::new()
        .with_item("good", "[1,2,3]")
        .with_item("bad", "{not json");
    let store = PersistentStore::new(memory);

    assert_eq!(block_on(store.read_json::<Vec<u32>>("good")), ReadOutcome::Present(vec![1, 2, 3]));
    assert_eq!(block_on(store.read_json::<Vec<u32>>("bad")), ReadOutcome::Corrupt);
    assert_eq!(block_on(store.read_json::<Vec<u32>>("missing")), ReadOutcome::Absent);
}

#[test]
fn read_json_wrong_shape_is_corrupt() {
    let store = PersistentStore::new(MemoryStorage::new().with_item("k", r#"{"a":1}"#));
    assert_eq!(block_on(store.read_json::<Vec<u32>>("k")), ReadOutcome::Corrupt);
}

#[test]
fn read_json_fault_is_absent() {
    let store = PersistentStore::new(FailingStorage);
    assert_eq!(block_on(store.read_json::<Vec<u32>>("k")), ReadOutcome::Absent);
}

#[test]
fn write_json_round_trips() {
    let store = PersistentStore::new(MemoryStorage::new());
    block_on(store.write_json("k", &vec!["a", "b"]));
    assert_eq!(
        block_on(store.read_json::<Vec<String>>("k")),
        ReadOutcome::Present(vec!["a".to_owned(), "b".to_owned()])
    );
}

#[test]
fn read_outcome_unwrap_or_default_collapses_missing_data() {
    assert_eq!(ReadOutcome::<Vec<u32>>::Absent.unwrap_or_default(), Vec::<u32>::new());
    assert_eq!(ReadOutcome::<Vec<u32>>::Corrupt.unwrap_or_default(), Vec::<u32>::new());
    assert_eq!(ReadOutcome::Present(vec![7_u32]).unwrap_or_default(), vec![7]);
}
