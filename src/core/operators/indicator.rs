use crate::core::actions::evaluate_operators::ports::operator::Operator;
use crate::core::operators::errors::OperatorError;

/// `χ_[0,1]`: one on the closed unit interval, zero elsewhere.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Indicator;

impl Operator for Indicator {
    fn evaluate(&self, x: f64) -> Result<f64, OperatorError> {
        if x.is_nan() {
            return Err(OperatorError::UnclassifiedPoint { x });
        }

        Ok(if (0.0..=1.0).contains(&x) { 1.0 } else { 0.0 })
    }

    fn label(&self) -> &'static str {
        "χ_[0,1](x)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indicator_is_one_on_closed_interval() {
        for x in [0.0, 0.5, 1.0] {
            assert_eq!(Indicator.evaluate(x), Ok(1.0), "x = {}", x);
        }
    }

    #[test]
    fn test_indicator_is_zero_outside_interval() {
        for x in [-1.0, 2.0, -1e-12, 1.0 + 1e-12] {
            assert_eq!(Indicator.evaluate(x), Ok(0.0), "x = {}", x);
        }
    }

    #[test]
    fn test_indicator_rejects_nan() {
        assert!(matches!(
            Indicator.evaluate(f64::NAN),
            Err(OperatorError::UnclassifiedPoint { .. })
        ));
    }
}
