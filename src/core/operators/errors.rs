use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum OperatorError {
    #[error("alpha must lie in (0, 1], got {alpha}")]
    InvalidParameter { alpha: f64 },
    #[error("x = {x} matched no branch of the piecewise partition")]
    UnclassifiedPoint { x: f64 },
    #[error("negative base {base} reached a fractional power at x = {x}")]
    NegativeBase { x: f64, base: f64 },
    #[error("{operator} produced a non-finite value at x = {x}")]
    NonFinite { operator: &'static str, x: f64 },
}
