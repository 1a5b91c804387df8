//! Fitxess Dashboard Entry Point

mod app;
mod chat;
mod components;
mod filter;
mod fixtures;
mod inbox;
mod models;
mod nav;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
