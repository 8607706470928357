//! API Routes
//!
//! Route handlers organized by functionality.

pub mod booking;
pub mod catalog;
pub mod health;
pub mod session;
