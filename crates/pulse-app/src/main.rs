//! Pulse Metrics Dashboard - WASM entry point

mod app;
mod data;

use app::App;
use leptos::mount::mount_to_body;

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    tracing::info!("pulse dashboard starting");

    mount_to_body(App);
}
