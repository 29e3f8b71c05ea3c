//! Echo Demo Client
//!
//! A tiny end-to-end demonstration frontend: one form page derives a typed
//! request from its inputs, POSTs it to the backend echo endpoint, and
//! renders both payloads as pretty-printed JSON.

mod app;
mod components;
mod layout;
mod pages;
mod parse;

fn main() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);

    leptos::mount::mount_to_body(|| leptos::view! { <app::App/> });
}
