//! Paginated Posts App
//!
//! Page shell hosting one paginated post list.

use leptos::prelude::*;

use crate::components::PaginatedList;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <div class="App">
            <h1>"Pagination Problem Set"</h1>
            <PaginatedList />
        </div>
    }
}
