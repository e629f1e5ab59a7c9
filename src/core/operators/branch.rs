use crate::core::operators::errors::OperatorError;

/// Region of the real line selecting which closed-form formula applies.
///
/// The interior is open, so both boundary points belong to the outer branches.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Branch {
    /// `x <= 0`
    Left,
    /// `0 < x < 1`
    Interior,
    /// `x >= 1`
    Right,
}

impl Branch {
    pub fn classify(x: f64) -> Result<Self, OperatorError> {
        let interior = x > 0.0 && x < 1.0;
        let left = x <= 0.0;
        let right = x >= 1.0;

        match (left, interior, right) {
            (true, false, false) => Ok(Self::Left),
            (false, true, false) => Ok(Self::Interior),
            (false, false, true) => Ok(Self::Right),
            _ => Err(OperatorError::UnclassifiedPoint { x }),
        }
    }
}

/// `base.powf(exponent)` restricted to the real line.
///
/// A negative base here means the branch partition let a point through to the
/// wrong formula.
pub fn real_pow(base: f64, exponent: f64, x: f64) -> Result<f64, OperatorError> {
    if base < 0.0 {
        return Err(OperatorError::NegativeBase { x, base });
    }

    Ok(base.powf(exponent))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::sample_grid::SampleGrid;

    #[test]
    fn test_boundaries_go_to_outer_branches() {
        assert_eq!(Branch::classify(0.0), Ok(Branch::Left));
        assert_eq!(Branch::classify(-0.0), Ok(Branch::Left));
        assert_eq!(Branch::classify(1.0), Ok(Branch::Right));
    }

    #[test]
    fn test_classify_regions() {
        assert_eq!(Branch::classify(-2.0), Ok(Branch::Left));
        assert_eq!(Branch::classify(f64::MIN_POSITIVE), Ok(Branch::Interior));
        assert_eq!(Branch::classify(0.5), Ok(Branch::Interior));
        assert_eq!(Branch::classify(1.0 - f64::EPSILON), Ok(Branch::Interior));
        assert_eq!(Branch::classify(3.0), Ok(Branch::Right));
        assert_eq!(Branch::classify(f64::INFINITY), Ok(Branch::Right));
        assert_eq!(Branch::classify(f64::NEG_INFINITY), Ok(Branch::Left));
    }

    #[test]
    fn test_nan_matches_no_branch() {
        let result = Branch::classify(f64::NAN);

        assert!(matches!(result, Err(OperatorError::UnclassifiedPoint { x }) if x.is_nan()));
    }

    #[test]
    fn test_every_grid_point_has_exactly_one_branch() {
        let grid = SampleGrid::default();

        for &x in grid.points() {
            let matches = [x <= 0.0, x > 0.0 && x < 1.0, x >= 1.0]
                .iter()
                .filter(|&&hit| hit)
                .count();

            assert_eq!(matches, 1, "x = {} matched {} branches", x, matches);
            assert!(Branch::classify(x).is_ok());
        }
    }

    #[test]
    fn test_real_pow_rejects_negative_base() {
        assert_eq!(
            real_pow(-0.25, 0.5, 1.25),
            Err(OperatorError::NegativeBase { x: 1.25, base: -0.25 })
        );
    }

    #[test]
    fn test_real_pow_matches_powf() {
        assert_eq!(real_pow(4.0, 0.5, 0.0), Ok(2.0));
        assert_eq!(real_pow(0.0, 0.5, 0.0), Ok(0.0));
    }
}
