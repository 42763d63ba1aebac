#![allow(warnings)]
//! To-Do Screen Frontend Entry Point

mod config;
mod store;
mod keyboard;
mod components;
mod app;

use app::App;
use config::ScreenConfig;
use leptos::prelude::*;

const APP_NAME: &str = "TodoScreen";

fn main() {
    console_error_panic_hook::set_once();

    let config = ScreenConfig::default();
    if let Err(e) = console_logger::init_logger(APP_NAME, config.log_level) {
        web_sys::console::error_1(&e.into());
    }
    log::info!("[APP] Mounting screen");

    mount_to_body(move || view! { <App config=config.clone() /> });
}
