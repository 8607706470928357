//! Clinic Website
//!
//! Practice website for Dr. Arijit Sen built with Leptos (WASM).
//!
//! # Features
//!
//! - Landing page with services, qualifications, reviews and blog
//! - Weekend appointment booking and video consultation requests
//! - Mock patient login with an appointments dashboard
//! - Light/dark theme remembered across visits
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Site content, booking and the patient session all go through
//! the clinic REST API.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
