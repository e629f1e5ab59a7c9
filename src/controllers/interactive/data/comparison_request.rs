use crate::core::data::canvas_size::CanvasSize;

/// Snapshot of the UI for one render job.
///
/// `alpha` is the raw widget value and is validated by the worker.
/// `PartialEq` lets the UI skip redundant submissions.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ComparisonRequest {
    pub alpha: f64,
    pub size: CanvasSize,
}
