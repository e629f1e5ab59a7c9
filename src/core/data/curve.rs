use crate::core::data::alpha::Alpha;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CurvePoint {
    pub x: f64,
    pub y: f64,
}

/// One operator's values sampled along the grid, in grid order.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveSample {
    points: Vec<CurvePoint>,
}

impl CurveSample {
    #[must_use]
    pub fn new(points: Vec<CurvePoint>) -> Self {
        Self { points }
    }

    #[must_use]
    pub fn points(&self) -> &[CurvePoint] {
        &self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Smallest and largest finite y value, or `None` for an empty curve.
    #[must_use]
    pub fn y_range(&self) -> Option<(f64, f64)> {
        self.points
            .iter()
            .map(|p| p.y)
            .filter(|y| y.is_finite())
            .fold(None, |acc, y| match acc {
                None => Some((y, y)),
                Some((lo, hi)) => Some((lo.min(y), hi.max(y))),
            })
    }

    pub fn as_tuples(&self) -> impl Iterator<Item = (f64, f64)> + Clone + '_ {
        self.points.iter().map(|p| (p.x, p.y))
    }
}

/// The three curves drawn together for a single alpha.
#[derive(Debug, Clone, PartialEq)]
pub struct OperatorCurves {
    pub alpha: Alpha,
    pub indicator: CurveSample,
    pub integral: CurveSample,
    pub maximal: CurveSample,
}

impl OperatorCurves {
    /// Combined y extent of all three curves.
    #[must_use]
    pub fn y_bounds(&self) -> Option<(f64, f64)> {
        [&self.indicator, &self.integral, &self.maximal]
            .iter()
            .filter_map(|curve| curve.y_range())
            .reduce(|(lo_a, hi_a), (lo_b, hi_b)| (lo_a.min(lo_b), hi_a.max(hi_b)))
    }

    /// Grid x extent, taken from the indicator curve.
    #[must_use]
    pub fn x_bounds(&self) -> Option<(f64, f64)> {
        let first = self.indicator.points().first()?;
        let last = self.indicator.points().last()?;

        Some((first.x, last.x))
    }
}
