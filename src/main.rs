//! Paginated Posts Frontend Entry Point

mod models;
mod error;
mod config;
mod commands;
mod pagination;
mod state;
mod store;
mod logging;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = logging::init() {
        web_sys::console::warn_1(&e.to_string().into());
    }
    mount_to_body(App);
}
