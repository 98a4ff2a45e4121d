#![allow(warnings)]
//! Pet Feeder Control Panel Entry Point

mod app;
mod commands;
mod components;
mod context;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let _ = console_logger::init(log::LevelFilter::Info);
    mount_to_body(App);
}
