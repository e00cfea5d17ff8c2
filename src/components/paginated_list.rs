//! Paginated List Component
//!
//! Fetches the posts once on mount and lays out the list, the
//! pagination controls and the page-size selector.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::commands;
use crate::config::ListConfig;
use crate::components::{PageSizeSelector, PaginationControls, PostList};
use crate::pagination::PageState;
use crate::state::{ListState, ListStateStoreFields};
use crate::store::{store_begin_fetch, store_finish_fetch};

#[component]
pub fn PaginatedList(
    /// Page sizes offered by the selector (default 5, 10, 20)
    #[prop(optional)]
    items_per_page_options: Option<Vec<usize>>,
    /// Override for the posts endpoint
    #[prop(optional, into)]
    endpoint: Option<String>,
) -> impl IntoView {
    let mut config = ListConfig::default();
    if let Some(options) = items_per_page_options {
        config = config.with_page_size_options(options);
    }
    if let Some(endpoint) = endpoint {
        config = config.with_endpoint(endpoint);
    }

    let store = Store::new(ListState::new(PageState::new(config.items_per_page)));
    provide_context(store);

    // Load posts on mount
    let endpoint = config.endpoint.clone();
    Effect::new(move |_| {
        if !store_begin_fetch(&store) {
            return;
        }
        let endpoint = endpoint.clone();
        tracing::info!(target: "posts", endpoint = %endpoint, "fetching posts");
        spawn_local(async move {
            let result = commands::fetch_posts(&endpoint).await;
            store_finish_fetch(&store, result);
        });
    });

    let loading = move || store.load_state().with(|state| state.is_loading());
    let error = move || store.load_state().with(|state| state.error().map(str::to_string));

    view! {
        <div id="main-container">
            <h2 id="main-header">"Posts"</h2>
            <Show when=loading>
                <p id="loading-status">"Loading ..."</p>
            </Show>
            {move || error().map(|message| view! { <p id="error-message">{message}</p> })}
            <PostList />
            <PaginationControls />
            <PageSizeSelector options=config.page_size_options />
        </div>
    }
}
