//! Browser front-end for the Employee Management System.
//!
//! Client-side rendered Leptos application compiled to WebAssembly. All
//! domain state lives behind the REST API; this crate holds per-page
//! snapshots, filters them with pure functions and re-renders from them.

pub mod api;
pub mod auth;
pub mod components;
pub mod config;
pub mod logic;
pub mod model;
pub mod pages;
pub mod routes;

/// Boots the application: panic hook, console logger, configuration,
/// then the component tree. Called from the wasm entry point only.
pub fn run() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    config::init();
    log::info!("starting EMS front-end");
    leptos::mount_to_body(routes::App);
}
