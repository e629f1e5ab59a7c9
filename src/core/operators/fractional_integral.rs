use crate::core::actions::evaluate_operators::ports::operator::Operator;
use crate::core::data::alpha::Alpha;
use crate::core::operators::branch::{Branch, real_pow};
use crate::core::operators::errors::OperatorError;

/// `I_α[χ_[0,1]]` in closed form.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FractionalIntegral {
    alpha: Alpha,
}

impl FractionalIntegral {
    #[must_use]
    pub fn new(alpha: Alpha) -> Self {
        Self { alpha }
    }
}

impl Operator for FractionalIntegral {
    fn evaluate(&self, x: f64) -> Result<f64, OperatorError> {
        let a = self.alpha.value();

        let numerator = match Branch::classify(x)? {
            Branch::Interior => real_pow(x, a, x)? + real_pow(1.0 - x, a, x)?,
            Branch::Left => real_pow(1.0 - x, a, x)? - real_pow(-x, a, x)?,
            Branch::Right => real_pow(x, a, x)? - real_pow(x - 1.0, a, x)?,
        };

        Ok(numerator / a)
    }

    fn label(&self) -> &'static str {
        "I_α[χ_[0,1]](x)"
    }
}
