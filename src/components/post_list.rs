//! Post List Component
//!
//! Renders the current page's posts, keyed by id.

use leptos::prelude::*;

use crate::store::use_list_store;

#[component]
pub fn PostList() -> impl IntoView {
    let store = use_list_store();

    view! {
        <ul id="post-list">
            <For
                each=move || store.with(|state| state.visible_posts().to_vec())
                key=|post| post.id
                children=move |post| {
                    view! {
                        <li>
                            <h3>{post.title}</h3>
                            <p>{post.body}</p>
                        </li>
                    }
                }
            />
        </ul>
    }
}
