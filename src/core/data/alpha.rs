use crate::core::operators::errors::OperatorError;

pub const ALPHA_MIN: f64 = 0.01;
pub const ALPHA_MAX: f64 = 1.00;
pub const ALPHA_DEFAULT: f64 = 0.50;
pub const ALPHA_STEP: f64 = 0.01;

/// Order of the fractional operators, restricted to (0, 1].
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Alpha(f64);

impl Alpha {
    pub fn new(value: f64) -> Result<Self, OperatorError> {
        if !(value > 0.0 && value <= 1.0) {
            return Err(OperatorError::InvalidParameter { alpha: value });
        }

        Ok(Self(value))
    }

    /// Snaps a raw slider position onto the slider grid.
    ///
    /// The slider itself bounds its value, so clamping here mirrors the widget
    /// and never runs on values that reach the evaluator through other paths.
    #[must_use]
    pub fn from_slider(raw: f64) -> Self {
        let steps = ((raw - ALPHA_MIN) / ALPHA_STEP).round();
        let snapped = ALPHA_MIN + steps * ALPHA_STEP;
        let clamped = if snapped.is_nan() {
            ALPHA_DEFAULT
        } else {
            snapped.clamp(ALPHA_MIN, ALPHA_MAX)
        };

        // Two decimals is the slider resolution; drop accumulated float noise.
        Self((clamped * 100.0).round() / 100.0)
    }

    #[must_use]
    pub fn value(&self) -> f64 {
        self.0
    }

    #[must_use]
    pub fn is_one(&self) -> bool {
        self.0 == 1.0
    }

    /// Default numeric string form, e.g. `0.5`, `0.01`, `1.0`.
    #[must_use]
    pub fn label(&self) -> String {
        if self.0.fract() == 0.0 {
            format!("{:.1}", self.0)
        } else {
            format!("{}", self.0)
        }
    }
}

impl Default for Alpha {
    fn default() -> Self {
        Self(ALPHA_DEFAULT)
    }
}

impl std::fmt::Display for Alpha {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alpha_accepts_half_open_unit_interval() {
        assert!(Alpha::new(0.01).is_ok());
        assert!(Alpha::new(0.5).is_ok());
        assert!(Alpha::new(1.0).is_ok());
        assert!(Alpha::new(1e-9).is_ok());
    }

    #[test]
    fn test_alpha_rejects_values_outside_domain() {
        assert_eq!(
            Alpha::new(0.0),
            Err(OperatorError::InvalidParameter { alpha: 0.0 })
        );
        assert_eq!(
            Alpha::new(-0.5),
            Err(OperatorError::InvalidParameter { alpha: -0.5 })
        );
        assert_eq!(
            Alpha::new(1.01),
            Err(OperatorError::InvalidParameter { alpha: 1.01 })
        );
        assert!(Alpha::new(f64::NAN).is_err());
        assert!(Alpha::new(f64::INFINITY).is_err());
    }

    #[test]
    fn test_alpha_label_uses_default_numeric_form() {
        assert_eq!(Alpha::new(0.5).unwrap().label(), "0.5");
        assert_eq!(Alpha::new(0.01).unwrap().label(), "0.01");
        assert_eq!(Alpha::new(0.25).unwrap().label(), "0.25");
        assert_eq!(Alpha::new(1.0).unwrap().label(), "1.0");
    }

    #[test]
    fn test_default_alpha_is_slider_default() {
        assert_eq!(Alpha::default().value(), ALPHA_DEFAULT);
        assert!(!Alpha::default().is_one());
        assert!(Alpha::new(1.0).unwrap().is_one());
    }

    #[test]
    fn test_from_slider_snaps_and_bounds() {
        assert_eq!(Alpha::from_slider(0.504).value(), 0.5);
        assert_eq!(Alpha::from_slider(0.736).value(), 0.74);
        assert_eq!(Alpha::from_slider(0.0).value(), ALPHA_MIN);
        assert_eq!(Alpha::from_slider(3.0).value(), ALPHA_MAX);
        assert_eq!(Alpha::from_slider(f64::NAN).value(), ALPHA_DEFAULT);
    }
}
