pub mod catalog;
pub mod common;
pub mod config;
pub mod forms;
pub mod frontend;
pub mod models;
pub mod services;
pub mod types;

/// Browser entry point: mounts the client-side app onto `<body>`.
#[cfg(feature = "csr")]
pub fn mount() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Debug).ok();
    leptos::mount::mount_to_body(frontend::App);
}
