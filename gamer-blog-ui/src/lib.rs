//! Gamer Blog
//!
//! Client for a personal blog about video games and pop culture, built with
//! Leptos (WASM).
//!
//! # Features
//!
//! - Posts stored on the device (localStorage)
//! - Photo capture, quote and location on each post
//! - Local notifications and a writing reminder
//! - Battery indicator
//!
//! The server only renders the page shell; everything else runs here.

use leptos::*;
use wasm_bindgen::prelude::*;

pub mod app;
pub mod components;
pub mod form;
pub mod model;
pub mod notifications;
pub mod pages;
pub mod platform;
pub mod shell;
pub mod state;
pub mod store;

#[wasm_bindgen(start)]
pub fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("Starting Gamer Blog");

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
