//! MediClean Portal
//!
//! Medical waste collection portal built with Leptos (WASM).
//!
//! # Features
//!
//! - Login and signup with a session kept in `localStorage`
//! - Dashboard, bookings and profile pages behind an access gate
//! - Collection booking calendar with in-memory bookings
//!
//! # Architecture
//!
//! Client-side rendered (CSR) Leptos application compiled to WebAssembly.
//! Session, routing and booking rules come from the `mediclean` crate; this
//! crate only renders them.

use leptos::*;

mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
