//! Windowed explorer: winit for the window, pixels for the chart framebuffer,
//! egui for the side panel.

pub mod app;
pub mod commands;
