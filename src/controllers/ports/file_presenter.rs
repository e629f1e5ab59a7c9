use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::actions::render_chart::render_chart::ChartError;
use crate::core::data::curve::OperatorCurves;

#[derive(Debug, Error)]
pub enum PresentError {
    #[error("chart error: {0}")]
    Chart(#[from] ChartError),
    #[error("write error: {0}")]
    Io(#[from] std::io::Error),
}

pub trait FilePresenterPort {
    /// Writes `curves` as a document under `dir` and returns the file path.
    fn present(&self, curves: &OperatorCurves, dir: &Path) -> Result<PathBuf, PresentError>;
}
