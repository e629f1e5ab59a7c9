//! Interactive controller for slider-driven chart rendering.
//!
//! Requests are snapshots of the UI state. A single background worker renders
//! the newest one; older in-flight work is cancelled and its results dropped.

mod controller;
pub mod data;
pub mod errors;
pub mod events;
pub mod ports;

pub use controller::InteractiveController;
