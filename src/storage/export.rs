use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::core::actions::render_chart::chart_style::ChartStyle;
use crate::core::actions::render_chart::render_chart::{ChartError, render_pdf};
use crate::core::data::alpha::Alpha;
use crate::core::data::canvas_size::CanvasSize;
use crate::core::data::curve::OperatorCurves;

pub const EXPORT_FILE_PREFIX: &str = "fractional_operators_alpha_";
pub const EXPORT_EXTENSION: &str = "pdf";
pub const EXPORT_MIME_TYPE: &str = "application/pdf";

#[must_use]
pub fn export_file_name(alpha: Alpha) -> String {
    format!("{}{}.{}", EXPORT_FILE_PREFIX, alpha.label(), EXPORT_EXTENSION)
}

/// A downloadable PDF of the comparison chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub file_name: String,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

impl ExportArtifact {
    /// Renders `curves` into a new in-memory document.
    pub fn from_curves(
        curves: &OperatorCurves,
        size: CanvasSize,
        style: &ChartStyle,
    ) -> Result<Self, ChartError> {
        let bytes = render_pdf(curves, size, style)?;

        Ok(Self {
            file_name: export_file_name(curves.alpha),
            mime_type: EXPORT_MIME_TYPE,
            bytes,
        })
    }
}

/// Writes the artifact under `dir`, creating the directory when missing.
pub fn write_artifact(artifact: &ExportArtifact, dir: impl AsRef<Path>) -> io::Result<PathBuf> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;

    let path = dir.join(&artifact.file_name);
    fs::write(&path, &artifact.bytes)?;

    info!(path = %path.display(), bytes = artifact.bytes.len(), "exported chart");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::evaluate_operators::evaluate_operators::evaluate_operators;
    use crate::core::data::sample_grid::SampleGrid;

    fn artifact(alpha: f64) -> ExportArtifact {
        let alpha = Alpha::new(alpha).unwrap();
        let curves = evaluate_operators(&SampleGrid::default(), alpha).unwrap();
        let size = CanvasSize::new(600, 400).unwrap();

        ExportArtifact::from_curves(&curves, size, &ChartStyle::default()).unwrap()
    }

    #[test]
    fn test_export_file_name_embeds_alpha() {
        assert_eq!(
            export_file_name(Alpha::new(0.5).unwrap()),
            "fractional_operators_alpha_0.5.pdf"
        );
        assert_eq!(
            export_file_name(Alpha::new(1.0).unwrap()),
            "fractional_operators_alpha_1.0.pdf"
        );
        assert_eq!(
            export_file_name(Alpha::new(0.01).unwrap()),
            "fractional_operators_alpha_0.01.pdf"
        );
    }

    #[test]
    fn test_artifact_carries_name_mime_and_document() {
        let artifact = artifact(0.3);

        assert_eq!(artifact.file_name, "fractional_operators_alpha_0.3.pdf");
        assert_eq!(artifact.mime_type, "application/pdf");
        assert!(artifact.bytes.starts_with(b"%PDF-"));
    }

    #[test]
    fn test_write_artifact_creates_directory_and_file() {
        let temp = tempfile::tempdir().unwrap();
        let target = temp.path().join("nested").join("exports");
        let artifact = artifact(0.5);

        let path = write_artifact(&artifact, &target).unwrap();

        assert_eq!(path, target.join("fractional_operators_alpha_0.5.pdf"));
        assert_eq!(std::fs::read(&path).unwrap(), artifact.bytes);
    }
}
