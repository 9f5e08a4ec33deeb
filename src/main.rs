//! Student Roster Frontend Entry Point

mod app;
mod components;
mod config;
mod logger;
mod storage;
mod store;

use app::App;
use leptos::prelude::*;
use log::warn;

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = match config::load_config() {
        Ok(config) => (config, None),
        Err(e) => (Default::default(), Some(e)),
    };
    logger::init(config.level_filter());
    if let Some(e) = config_error {
        warn!("[APP] Using default config: {}", e);
    }

    mount_to_body(move || view! { <App config=config.clone() /> });
}
