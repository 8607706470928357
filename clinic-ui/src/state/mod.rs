//! State Management
//!
//! Global application state, the booking form machine, the color theme and
//! component-owned timers.

pub mod booking;
pub mod global;
pub mod theme;
pub mod timer;

pub use global::{provide_global_state, ErrorNotice, GlobalState, PatientSession};
