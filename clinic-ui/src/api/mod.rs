//! API Access
//!
//! HTTP calls to the clinic REST API and the shapes it returns.

pub mod client;

pub use client::*;
