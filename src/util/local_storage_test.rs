#![cfg(not(feature = "hydrate"))]

use super::*;
use crate::util::storage::PersistentStore;
use futures::executor::block_on;

#[test]
fn browser_storage_is_unavailable_outside_the_browser() {
    assert_eq!(block_on(BrowserStorage.get_item("k")), Err(StorageError::Unavailable));
    assert_eq!(block_on(BrowserStorage.set_item("k", "v")), Err(StorageError::Unavailable));
    assert_eq!(block_on(BrowserStorage.remove_item("k")), Err(StorageError::Unavailable));
}

#[test]
fn persistent_store_over_browser_storage_reads_absent() {
    let store = PersistentStore::new(BrowserStorage);
    assert!(block_on(store.read("k")).is_none());
}

#[test]
fn persistent_store_over_browser_storage_keeps_session_value() {
    let store = PersistentStore::new(BrowserStorage);
    block_on(store.write("k", "v"));
    assert_eq!(block_on(store.read("k")).as_deref(), Some("v"));
    assert!(store.is_pending("k"));
}
