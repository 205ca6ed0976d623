//! Task Pilot Frontend Entry Point

mod api;
mod app;
mod auth;
mod chat;
mod components;
mod config;
mod context;
mod dialog;
mod error;
mod filter;
mod models;
mod session;
mod stats;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("[APP] Task Pilot starting");
    mount_to_body(App);
}
