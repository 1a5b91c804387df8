//! Shared Application State
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The only state
//! shared across views is the notification collection: the sidebar badge
//! and the Notifications page both read it here, so marking items read or
//! deleting them is reflected everywhere at once.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::fixtures;
use crate::inbox;
use crate::models::Notification;

#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Notification inbox, seeded once and mutated in place
    pub notifications: Vec<Notification>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            notifications: fixtures::notifications(),
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_mark_read(store: &AppStore, id: u32) {
    inbox::mark_read(&mut store.notifications().write(), id);
}

pub fn store_mark_all_read(store: &AppStore) {
    inbox::mark_all_read(&mut store.notifications().write());
}

pub fn store_remove_notification(store: &AppStore, id: u32) {
    inbox::remove(&mut store.notifications().write(), id);
}
