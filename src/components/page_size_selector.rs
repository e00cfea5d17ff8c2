//! Page Size Selector Component
//!
//! Select populated from the configured page sizes.

use leptos::prelude::*;

use crate::pagination::parse_page_size;
use crate::store::{store_change_page_size, use_list_store};

#[component]
pub fn PageSizeSelector(options: Vec<usize>) -> impl IntoView {
    let store = use_list_store();

    let on_change = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        match parse_page_size(&value) {
            Some(size) => store_change_page_size(&store, size),
            None => tracing::warn!(target: "page", value = %value, "ignoring page size selection"),
        }
    };

    view! {
        <div id="page-size-controls">
            <label id="page-size-label" for="page-size-selector">"Items per page: "</label>
            <select id="page-size-selector" on:change=on_change>
                {options.into_iter().map(|option| {
                    let is_selected = move || store.with(|state| state.page.items_per_page == option);
                    view! {
                        <option value=option.to_string() prop:selected=is_selected>
                            {option}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}
