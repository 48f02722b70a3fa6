use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen_futures::spawn_local;

mod api;
mod components;
pub mod config;
mod pages;
mod router;
mod state;
#[cfg(test)]
mod test_support;
pub mod utils;

fn init_logging() {
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    if console_log::init_with_level(level).is_err() {
        web_sys::console::warn_1(&"Logger was already initialized".into());
    }
}

/// Entry point for hosts that load the library build directly.
#[wasm_bindgen]
pub fn start() {
    console_error_panic_hook::set_once();
    init_logging();
    log::info!("Starting Security Advisories frontend");

    // Runtime config loads in the background; requests await it.
    spawn_local(async move {
        config::init().await;
    });

    router::mount_app();
}
