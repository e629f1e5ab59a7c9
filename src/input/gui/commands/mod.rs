pub mod errors;
pub mod ports;
pub mod run_gui;
