pub mod adapter;
pub mod factory;
pub mod overlay;
pub mod presenter;
