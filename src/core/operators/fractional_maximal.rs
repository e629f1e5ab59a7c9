use crate::core::actions::evaluate_operators::ports::operator::Operator;
use crate::core::data::alpha::Alpha;
use crate::core::operators::branch::{Branch, real_pow};
use crate::core::operators::errors::OperatorError;

/// `M_α[χ_[0,1]]` in closed form.
///
/// At `α = 1` the outer branches are pinned to 1 instead of evaluating
/// `(·)^0`, treating the limit as a removable discontinuity.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FractionalMaximal {
    alpha: Alpha,
}

impl FractionalMaximal {
    #[must_use]
    pub fn new(alpha: Alpha) -> Self {
        Self { alpha }
    }
}

impl Operator for FractionalMaximal {
    fn evaluate(&self, x: f64) -> Result<f64, OperatorError> {
        let exponent = self.alpha.value() - 1.0;

        match Branch::classify(x)? {
            Branch::Interior => Ok(1.0),
            _ if self.alpha.is_one() => Ok(1.0),
            Branch::Left => real_pow(1.0 - x, exponent, x),
            Branch::Right => real_pow(x, exponent, x),
        }
    }

    fn label(&self) -> &'static str {
        "M_α[χ_[0,1]](x)"
    }
}
