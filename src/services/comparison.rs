//! Comparison list rules: bounded, id-deduplicated, insertion-ordered.
//!
//! DESIGN
//! ======
//! The list is read from storage before every mutation and written back before
//! the operation returns. Storage faults never reach callers: reads degrade to
//! an empty list, and write failures keep the in-memory result (the adapter
//! logs them). Policy rejections are ordinary outcomes, not errors.

#[cfg(test)]
#[path = "comparison_test.rs"]
mod comparison_test;

use serde::{Deserialize, Serialize};

use crate::net::types::Property;
use crate::util::storage::{PersistentStore, ReadOutcome};

/// Maximum number of properties that can be compared at once.
pub const MAX_COMPARISON_ITEMS: usize = 4;

/// Storage key holding the serialized comparison list.
pub const COMPARISON_STORAGE_KEY: &str = "compareList";

/// Why an `add` was accepted or rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AddReason {
    Added,
    Duplicate,
    LimitReached,
}

/// Result of [`ComparisonService::add`].
#[derive(Clone, Debug, PartialEq)]
pub struct AddOutcome {
    pub accepted: bool,
    pub reason: AddReason,
    /// The list after the operation (unchanged when rejected).
    pub list: Vec<Property>,
}

/// Append `property` to `list` if its id is new and there is room.
///
/// Duplicates are checked before the limit, so re-adding an existing entry to
/// a full list reports `Duplicate`.
pub fn try_append(list: &mut Vec<Property>, property: Property) -> AddReason {
    if list.iter().any(|p| p.id == property.id) {
        return AddReason::Duplicate;
    }
    if list.len() >= MAX_COMPARISON_ITEMS {
        return AddReason::LimitReached;
    }
    list.push(property);
    AddReason::Added
}

/// Copy of `list` without any entry whose id is `id`.
#[must_use]
pub fn without_id(list: &[Property], id: &str) -> Vec<Property> {
    list.iter().filter(|p| p.id != id).cloned().collect()
}

/// Comparison operations over a persistent store.
#[derive(Clone)]
pub struct ComparisonService {
    store: PersistentStore,
}

impl ComparisonService {
    #[must_use]
    pub fn new(store: PersistentStore) -> Self {
        Self { store }
    }

    /// Current persisted list; empty when nothing is stored or it cannot be read.
    pub async fn get_list(&self) -> Vec<Property> {
        match self.store.read_json::<Vec<Property>>(COMPARISON_STORAGE_KEY).await {
            ReadOutcome::Present(list) => list,
            ReadOutcome::Absent => Vec::new(),
            ReadOutcome::Corrupt => {
                leptos::logging::warn!("comparison payload unreadable; treating as empty");
                Vec::new()
            }
        }
    }

    pub async fn add(&self, property: Property) -> AddOutcome {
        let mut list = self.get_list().await;
        let reason = try_append(&mut list, property);
        let accepted = reason == AddReason::Added;
        if accepted {
            self.store.write_json(COMPARISON_STORAGE_KEY, &list).await;
        }
        AddOutcome { accepted, reason, list }
    }

    /// Drop the entry with `id` (no-op if absent) and persist the result.
    pub async fn remove(&self, id: &str) -> Vec<Property> {
        let list = without_id(&self.get_list().await, id);
        self.store.write_json(COMPARISON_STORAGE_KEY, &list).await;
        list
    }

    /// Delete the persisted list entirely.
    pub async fn clear(&self) {
        self.store.delete(COMPARISON_STORAGE_KEY).await;
    }

    pub async fn is_member(&self, id: &str) -> bool {
        self.get_list().await.iter().any(|p| p.id == id)
    }

    pub async fn count(&self) -> usize {
        self.get_list().await.len()
    }
}
