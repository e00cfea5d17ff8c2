//! Pagination Controls Component
//!
//! Prev/Next buttons around the "current of total" indicator. A button
//! at its boundary is disabled rather than clamped on click.

use leptos::prelude::*;

use crate::store::{store_next_page, store_previous_page, store_view, use_list_store};

#[component]
pub fn PaginationControls() -> impl IntoView {
    let store = use_list_store();

    view! {
        <div id="pagination-controls">
            <button
                id="prev-page-button"
                disabled=move || store_view(&store).prev_disabled
                on:click=move |_| store_previous_page(&store)
            >
                "Prev"
            </button>
            <span id="page-indicator">" " {move || store_view(&store).indicator()} " "</span>
            <button
                id="next-page-button"
                disabled=move || store_view(&store).next_disabled
                on:click=move |_| store_next_page(&store)
            >
                "Next"
            </button>
        </div>
    }
}
