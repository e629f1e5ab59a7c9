use thiserror::Error;

pub const DEFAULT_GRID_START: f64 = -2.0;
pub const DEFAULT_GRID_END: f64 = 3.0;
pub const DEFAULT_GRID_SAMPLES: usize = 500;

#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum GridError {
    #[error("sample grid interval must be finite and increasing: [{start}, {end}]")]
    EmptyInterval { start: f64, end: f64 },
    #[error("sample grid needs at least two samples, got {samples}")]
    TooFewSamples { samples: usize },
}

/// Fixed, strictly increasing set of x-values shared by every evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleGrid {
    points: Vec<f64>,
}

impl SampleGrid {
    /// Evenly spaced samples over `[start, end]`, both endpoints included.
    pub fn linspace(start: f64, end: f64, samples: usize) -> Result<Self, GridError> {
        if !start.is_finite() || !end.is_finite() || end <= start {
            return Err(GridError::EmptyInterval { start, end });
        }

        if samples < 2 {
            return Err(GridError::TooFewSamples { samples });
        }

        let step = (end - start) / (samples - 1) as f64;
        let mut points: Vec<f64> = (0..samples).map(|i| start + step * i as f64).collect();

        // Pin the last sample so rounding never drifts past the interval.
        points[samples - 1] = end;

        Ok(Self { points })
    }

    #[must_use]
    pub fn points(&self) -> &[f64] {
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

    #[must_use]
    pub fn start(&self) -> f64 {
        self.points[0]
    }

    #[must_use]
    pub fn end(&self) -> f64 {
        self.points[self.points.len() - 1]
    }

    #[must_use]
    pub fn spacing(&self) -> f64 {
        (self.end() - self.start()) / (self.len() - 1) as f64
    }
}

impl Default for SampleGrid {
    fn default() -> Self {
        let step = (DEFAULT_GRID_END - DEFAULT_GRID_START) / (DEFAULT_GRID_SAMPLES - 1) as f64;
        let mut points: Vec<f64> = (0..DEFAULT_GRID_SAMPLES)
            .map(|i| DEFAULT_GRID_START + step * i as f64)
            .collect();
        points[DEFAULT_GRID_SAMPLES - 1] = DEFAULT_GRID_END;

        Self { points }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_grid_spans_fixed_interval() {
        let grid = SampleGrid::default();

        assert_eq!(grid.len(), 500);
        assert_eq!(grid.start(), -2.0);
        assert_eq!(grid.end(), 3.0);
        assert!((grid.spacing() - 5.0 / 499.0).abs() < 1e-15);
    }

    #[test]
    fn test_default_matches_linspace() {
        let from_linspace =
            SampleGrid::linspace(DEFAULT_GRID_START, DEFAULT_GRID_END, DEFAULT_GRID_SAMPLES)
                .unwrap();

        assert_eq!(SampleGrid::default(), from_linspace);
    }

    #[test]
    fn test_linspace_is_strictly_increasing() {
        let grid = SampleGrid::linspace(-1.0, 1.0, 7).unwrap();

        assert!(grid.points().windows(2).all(|w| w[0] < w[1]));
        assert!(grid.points()[3].abs() < 1e-15);
    }

    #[test]
    fn test_linspace_includes_both_endpoints() {
        let grid = SampleGrid::linspace(0.0, 1.0, 2).unwrap();

        assert_eq!(grid.points(), &[0.0, 1.0]);
    }

    #[test]
    fn test_linspace_rejects_empty_interval() {
        assert_eq!(
            SampleGrid::linspace(1.0, 1.0, 10),
            Err(GridError::EmptyInterval { start: 1.0, end: 1.0 })
        );
        assert_eq!(
            SampleGrid::linspace(3.0, -2.0, 10),
            Err(GridError::EmptyInterval { start: 3.0, end: -2.0 })
        );
        assert!(SampleGrid::linspace(f64::NAN, 1.0, 10).is_err());
        assert!(SampleGrid::linspace(0.0, f64::INFINITY, 10).is_err());
    }

    #[test]
    fn test_linspace_rejects_too_few_samples() {
        assert_eq!(
            SampleGrid::linspace(0.0, 1.0, 1),
            Err(GridError::TooFewSamples { samples: 1 })
        );
        assert_eq!(
            SampleGrid::linspace(0.0, 1.0, 0),
            Err(GridError::TooFewSamples { samples: 0 })
        );
    }
}
