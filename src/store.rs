//! List State Store
//!
//! Wraps `ListState` in a reactive_stores `Store` shared with the list's
//! child components through context.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::error::FetchError;
use crate::models::Post;
use crate::state::{ListState, PageView};

/// Type alias for the store
pub type ListStore = Store<ListState>;

/// Get the list store from context
pub fn use_list_store() -> ListStore {
    expect_context::<ListStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Derived view of the current state (never cached)
pub fn store_view(store: &ListStore) -> PageView {
    store.with(|state| state.view())
}

/// Claim the one mount fetch. False if it already ran.
pub fn store_begin_fetch(store: &ListStore) -> bool {
    store.try_update(|state| state.begin_fetch()).unwrap_or(false)
}

/// Record the fetch outcome
pub fn store_finish_fetch(store: &ListStore, result: Result<Vec<Post>, FetchError>) {
    match &result {
        Ok(posts) => tracing::info!(target: "posts", count = posts.len(), "posts loaded"),
        Err(e) => tracing::warn!(target: "posts", detail = %e.detail(), "{}", e),
    }
    store.update(|state| state.finish_fetch(result));
}

pub fn store_next_page(store: &ListStore) {
    if let Some(true) = store.try_update(|state| state.next_page()) {
        tracing::debug!(target: "page", current = store.with_untracked(|s| s.page.current_page), "next page");
    }
}

pub fn store_previous_page(store: &ListStore) {
    if let Some(true) = store.try_update(|state| state.previous_page()) {
        tracing::debug!(target: "page", current = store.with_untracked(|s| s.page.current_page), "previous page");
    }
}

pub fn store_change_page_size(store: &ListStore, items_per_page: usize) {
    if let Some(true) = store.try_update(|state| state.change_page_size(items_per_page)) {
        tracing::debug!(target: "page", items_per_page, "page size changed");
    } else {
        tracing::warn!(target: "page", items_per_page, "page size rejected");
    }
}
