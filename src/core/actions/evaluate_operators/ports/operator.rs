use crate::core::operators::errors::OperatorError;

/// A real-valued transform of the indicator of `[0, 1]`, evaluated pointwise.
pub trait Operator: Sync {
    fn evaluate(&self, x: f64) -> Result<f64, OperatorError>;

    fn label(&self) -> &'static str;
}
