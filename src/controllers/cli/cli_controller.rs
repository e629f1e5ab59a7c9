use std::path::{Path, PathBuf};
use std::time::Instant;

use thiserror::Error;
use tracing::{debug, info};

use crate::controllers::ports::file_presenter::{FilePresenterPort, PresentError};
use crate::core::actions::evaluate_operators::evaluate_operators::evaluate_operators;
use crate::core::data::alpha::Alpha;
use crate::core::data::curve::OperatorCurves;
use crate::core::data::sample_grid::SampleGrid;
use crate::core::operators::errors::OperatorError;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Operator(#[from] OperatorError),
    #[error(transparent)]
    Present(#[from] PresentError),
    #[error("nothing to export: generate must run first")]
    NothingGenerated,
}

/// One-shot driver: evaluate for a single alpha, then export the chart.
pub struct CliController<P: FilePresenterPort> {
    presenter: P,
    grid: SampleGrid,
    curves: Option<OperatorCurves>,
}

impl<P: FilePresenterPort> CliController<P> {
    pub fn new(presenter: P, grid: SampleGrid) -> Self {
        Self {
            presenter,
            grid,
            curves: None,
        }
    }

    pub fn generate(&mut self, alpha: f64) -> Result<&OperatorCurves, CliError> {
        let alpha = Alpha::new(alpha)?;

        info!(alpha = %alpha, samples = self.grid.len(), "evaluating fractional operators");

        let start = Instant::now();
        let curves = evaluate_operators(&self.grid, alpha)?;
        let duration = start.elapsed();

        debug!(y_bounds = ?curves.y_bounds(), "curve extents");
        info!(?duration, "evaluation finished");

        Ok(self.curves.insert(curves))
    }

    pub fn export(&self, dir: impl AsRef<Path>) -> Result<PathBuf, CliError> {
        let curves = self.curves.as_ref().ok_or(CliError::NothingGenerated)?;

        Ok(self.presenter.present(curves, dir.as_ref())?)
    }

    #[must_use]
    pub fn curves(&self) -> Option<&OperatorCurves> {
        self.curves.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingPresenter {
        presented: Mutex<Vec<(Alpha, PathBuf)>>,
    }

    impl FilePresenterPort for &RecordingPresenter {
        fn present(&self, curves: &OperatorCurves, dir: &Path) -> Result<PathBuf, PresentError> {
            let path = dir.join(format!("{}.doc", curves.alpha));
            self.presented.lock().unwrap().push((curves.alpha, path.clone()));
            Ok(path)
        }
    }

    #[test]
    fn test_generate_then_export_presents_curves() {
        let presenter = RecordingPresenter::default();
        let mut controller = CliController::new(&presenter, SampleGrid::default());

        let curves = controller.generate(0.5).unwrap();
        assert_eq!(curves.integral.len(), 500);

        let path = controller.export("out").unwrap();

        assert_eq!(path, PathBuf::from("out").join("0.5.doc"));
        let presented = presenter.presented.lock().unwrap();
        assert_eq!(presented.len(), 1);
        assert_eq!(presented[0].0, Alpha::new(0.5).unwrap());
    }

    #[test]
    fn test_export_before_generate_fails() {
        let presenter = RecordingPresenter::default();
        let controller = CliController::new(&presenter, SampleGrid::default());

        assert!(matches!(
            controller.export("out"),
            Err(CliError::NothingGenerated)
        ));
        assert!(presenter.presented.lock().unwrap().is_empty());
    }

    #[test]
    fn test_generate_rejects_invalid_alpha() {
        let presenter = RecordingPresenter::default();
        let mut controller = CliController::new(&presenter, SampleGrid::default());

        assert!(matches!(
            controller.generate(0.0),
            Err(CliError::Operator(OperatorError::InvalidParameter { .. }))
        ));
        assert!(controller.curves().is_none());
    }

    #[test]
    fn test_generate_replaces_previous_curves() {
        let presenter = RecordingPresenter::default();
        let mut controller = CliController::new(&presenter, SampleGrid::default());

        controller.generate(0.2).unwrap();
        controller.generate(0.8).unwrap();

        assert_eq!(controller.curves().unwrap().alpha, Alpha::new(0.8).unwrap());
    }
}
