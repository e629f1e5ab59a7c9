#[allow(clippy::module_inception)]
pub mod evaluate_operators;
pub mod ports;
