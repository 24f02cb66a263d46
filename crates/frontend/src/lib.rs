pub mod app;
pub mod domain;
pub mod shared;

use app::App;
use leptos::prelude::*;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    // Конфигурация нужна до первого рендера: адрес вебхука приходит с бэкенда
    wasm_bindgen_futures::spawn_local(async {
        let config = shared::config::load_client_config().await;
        leptos::mount::mount_to_body(move || view! { <App config=config.clone() /> });
    });
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
