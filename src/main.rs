//! Coleta Web Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod geolocation;
mod models;
mod pages;
mod routes;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(log_level()));
    log::info!("[APP] Coleta Web starting");
    mount_to_body(App);
}

fn log_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}
