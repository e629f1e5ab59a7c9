use std::path::{Path, PathBuf};

use crate::controllers::ports::file_presenter::{FilePresenterPort, PresentError};
use crate::core::actions::render_chart::chart_style::ChartStyle;
use crate::core::data::canvas_size::CanvasSize;
use crate::core::data::curve::OperatorCurves;
use crate::storage::export::{ExportArtifact, write_artifact};

/// Writes the comparison chart as a PDF named after its alpha.
pub struct PdfFilePresenter {
    size: CanvasSize,
    style: ChartStyle,
}

impl FilePresenterPort for PdfFilePresenter {
    fn present(&self, curves: &OperatorCurves, dir: &Path) -> Result<PathBuf, PresentError> {
        let artifact = ExportArtifact::from_curves(curves, self.size, &self.style)?;

        Ok(write_artifact(&artifact, dir)?)
    }
}

impl PdfFilePresenter {
    pub fn new(size: CanvasSize, style: ChartStyle) -> Self {
        Self { size, style }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::evaluate_operators::evaluate_operators::evaluate_operators;
    use crate::core::data::alpha::Alpha;
    use crate::core::data::sample_grid::SampleGrid;

    #[test]
    fn test_present_writes_named_pdf() {
        let temp = tempfile::tempdir().unwrap();
        let curves =
            evaluate_operators(&SampleGrid::default(), Alpha::new(0.75).unwrap()).unwrap();
        let presenter =
            PdfFilePresenter::new(CanvasSize::new(800, 500).unwrap(), ChartStyle::default());

        let path = presenter.present(&curves, temp.path()).unwrap();

        assert_eq!(path, temp.path().join("fractional_operators_alpha_0.75.pdf"));
        let document = std::fs::read(&path).unwrap();
        assert!(document.starts_with(b"%PDF-"));
    }

    #[test]
    fn test_present_reports_unwritable_directory() {
        let temp = tempfile::tempdir().unwrap();
        let blocker = temp.path().join("taken");
        std::fs::write(&blocker, b"not a directory").unwrap();

        let curves = evaluate_operators(&SampleGrid::default(), Alpha::default()).unwrap();
        let presenter =
            PdfFilePresenter::new(CanvasSize::new(800, 500).unwrap(), ChartStyle::default());

        let result = presenter.present(&curves, &blocker);

        assert!(matches!(result, Err(PresentError::Io(_))));
    }
}
