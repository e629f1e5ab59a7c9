use thiserror::Error;

use crate::core::data::canvas_size::CanvasSizeError;
use crate::core::data::sample_grid::GridError;

#[derive(Debug, Error)]
pub enum GuiError {
    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),
    #[error("failed to create pixels surface: {0}")]
    Surface(#[from] pixels::Error),
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error(transparent)]
    CanvasSize(#[from] CanvasSizeError),
}
