//! Session-wide comparison list shared by the whole component tree.
//!
//! DESIGN
//! ======
//! `ComparisonStore` is a plain observable holder: it owns the service, the
//! latest list snapshot, and a subscriber list. It knows nothing about Leptos,
//! so its lifecycle can be exercised directly in tests.
//!
//! `ComparisonContext` is the Leptos-facing handle. It mirrors the store's
//! snapshot into an `RwSignal` through a subscription, which is what lets a
//! header badge and a card checkmark stay consistent without prop drilling.
//!
//! SYSTEM CONTEXT
//! ==============
//! One store is created per page load in `App`. Tabs do not synchronise; a
//! reload re-reads storage.

#[cfg(test)]
#[path = "comparison_test.rs"]
mod comparison_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;

use crate::net::types::Property;
use crate::services::comparison::{AddOutcome, ComparisonService};

/// Whether the persisted list has been read yet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Uninitialized,
    Loaded,
}

/// Handle returned by [`ComparisonStore::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Rc<dyn Fn(&[Property])>;

/// Observable owner of the session's comparison list.
pub struct ComparisonStore {
    service: ComparisonService,
    snapshot: RefCell<Vec<Property>>,
    load_state: Cell<LoadState>,
    listeners: RefCell<Vec<(SubscriptionId, Listener)>>,
    next_subscription: Cell<u64>,
}

impl ComparisonStore {
    #[must_use]
    pub fn new(service: ComparisonService) -> Self {
        Self {
            service,
            snapshot: RefCell::new(Vec::new()),
            load_state: Cell::new(LoadState::Uninitialized),
            listeners: RefCell::new(Vec::new()),
            next_subscription: Cell::new(0),
        }
    }

    #[must_use]
    pub fn load_state(&self) -> LoadState {
        self.load_state.get()
    }

    /// Read the persisted list once. Later calls are no-ops.
    pub async fn load(&self) {
        if self.load_state.get() == LoadState::Loaded {
            return;
        }
        let list = self.service.get_list().await;
        // A mutation may have completed while the read was pending.
        if self.load_state.get() == LoadState::Loaded {
            return;
        }
        self.replace(list);
    }

    pub async fn add(&self, property: Property) -> AddOutcome {
        let outcome = self.service.add(property).await;
        self.replace(outcome.list.clone());
        outcome
    }

    pub async fn remove(&self, id: &str) -> Vec<Property> {
        let list = self.service.remove(id).await;
        self.replace(list.clone());
        list
    }

    pub async fn clear(&self) {
        self.service.clear().await;
        self.replace(Vec::new());
    }

    /// Current snapshot.
    #[must_use]
    pub fn list(&self) -> Vec<Property> {
        self.snapshot.borrow().clone()
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.snapshot.borrow().len()
    }

    #[must_use]
    pub fn is_in_comparison(&self, id: &str) -> bool {
        self.snapshot.borrow().iter().any(|p| p.id == id)
    }

    /// Register `listener`; it runs after every load or mutation with the new list.
    pub fn subscribe(&self, listener: impl Fn(&[Property]) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription.get());
        self.next_subscription.set(id.0 + 1);
        self.listeners.borrow_mut().push((id, Rc::new(listener)));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.listeners.borrow_mut().retain(|(sub, _)| *sub != id);
    }

    fn replace(&self, list: Vec<Property>) {
        *self.snapshot.borrow_mut() = list;
        self.load_state.set(LoadState::Loaded);
        self.notify();
    }

    fn notify(&self) {
        // Listeners may subscribe/unsubscribe while running.
        let listeners: Vec<Listener> = self.listeners.borrow().iter().map(|(_, l)| l.clone()).collect();
        let snapshot = self.list();
        for listener in listeners {
            listener(&snapshot);
        }
    }
}

/// Copyable Leptos handle over the session's [`ComparisonStore`].
#[derive(Clone, Copy)]
pub struct ComparisonContext {
    store: StoredValue<Rc<ComparisonStore>, LocalStorage>,
    list: RwSignal<Vec<Property>>,
}

impl ComparisonContext {
    /// Tracked snapshot of the list.
    pub fn comparison_list(&self) -> Vec<Property> {
        self.list.get()
    }

    pub fn comparison_count(&self) -> usize {
        self.list.with(Vec::len)
    }

    pub fn is_in_comparison(&self, id: &str) -> bool {
        self.list.with(|list| list.iter().any(|p| p.id == id))
    }

    pub async fn add_to_comparison(self, property: Property) -> AddOutcome {
        let store = self.store.get_value();
        store.add(property).await
    }

    pub async fn remove_from_comparison(self, id: String) -> Vec<Property> {
        let store = self.store.get_value();
        store.remove(&id).await
    }

    pub async fn clear_comparison(self) {
        let store = self.store.get_value();
        store.clear().await;
    }

    #[cfg(feature = "hydrate")]
    async fn load(self) {
        let store = self.store.get_value();
        store.load().await;
    }
}

/// Create the session store, mirror it into a signal, and provide it as context.
///
/// The persisted list is read once after mount (browser only).
pub fn provide_comparison_context(store: ComparisonStore) -> ComparisonContext {
    let list = RwSignal::new(store.list());
    let store = Rc::new(store);
    let subscription = store.subscribe(move |items| list.set(items.to_vec()));

    let ctx = ComparisonContext { store: StoredValue::new_local(store), list };
    provide_context(ctx);

    on_cleanup(move || ctx.store.with_value(|s| s.unsubscribe(subscription)));

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(ctx.load());

    ctx
}

/// Fetch the comparison context provided by `App`.
pub fn use_comparison() -> ComparisonContext {
    expect_context::<ComparisonContext>()
}
