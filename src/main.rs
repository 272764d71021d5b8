//! Grocery List Frontend Entry Point

mod app;
mod cart;
mod catalog;
mod commands;
mod components;
mod config;
mod context;
mod controller;
mod export;
mod frequency;
mod logging;
mod models;
mod storage;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init(log::LevelFilter::Info);
    let config = AppConfig::load(context::open_store().as_ref());
    logging::set_level(config.level_filter());
    mount_to_body(move || view! { <App config=config /> });
}
