pub mod api;
mod components;
pub mod config;
mod pages;
mod router;
mod state;
#[cfg(test)]
mod test_support;
pub mod utils;

pub use router::{app_root, mount_app, ROUTE_PATHS};

/// Browser entry point: installs logging, resolves the backend URL, mounts the app.
#[cfg(target_arch = "wasm32")]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("Logger already initialised: {err}").into());
    }
    log::info!("Starting LeadDB frontend");

    leptos::spawn_local(async move {
        let api_base_url = config::resolve_api_base_url().await;
        log::info!("Using API base URL {}", api_base_url);
        mount_app(api_base_url);
    });
}
