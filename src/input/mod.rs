//! Input adapters that turn user interaction into comparison requests.

pub mod gui;
