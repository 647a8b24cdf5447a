//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity: toggling one
//! task re-renders that row, not the whole list.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Contact, Task};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Current page of the contacts list
    pub contacts: Vec<Contact>,
    /// Tasks of the contact being viewed
    pub tasks: Vec<Task>,
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

/// Prepend a freshly created contact (lists default to newest-first)
pub fn store_insert_contact(store: &AppStore, contact: Contact) {
    store.contacts().write().insert(0, contact);
}

/// Remove a contact from the store by ID
pub fn store_remove_contact(store: &AppStore, contact_id: u32) {
    store.contacts().write().retain(|contact| contact.id != contact_id);
}

/// Prepend a freshly created task
pub fn store_insert_task(store: &AppStore, task: Task) {
    store.tasks().write().insert(0, task);
}

/// Replace a task in the store with the server's representation
pub fn store_update_task(store: &AppStore, updated_task: Task) {
    if let Some(task) = store
        .tasks()
        .write()
        .iter_mut()
        .find(|task| task.id == updated_task.id)
    {
        *task = updated_task;
    }
}

/// Remove a task from the store by ID
pub fn store_remove_task(store: &AppStore, task_id: u32) {
    store.tasks().write().retain(|task| task.id != task_id);
}
