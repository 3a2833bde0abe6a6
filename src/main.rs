#![allow(warnings)]
//! Storefront Frontend Entry Point

mod app;
mod cart;
mod catalog;
mod components;
mod context;
mod models;
mod render;
mod storage;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
