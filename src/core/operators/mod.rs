pub mod branch;
pub mod errors;
pub mod fractional_integral;
pub mod fractional_maximal;
pub mod indicator;
