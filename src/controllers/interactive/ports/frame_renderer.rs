use crate::core::actions::render_chart::chart_style::ChartStyle;
use crate::core::actions::render_chart::render_chart::{ChartError, render_rgb};
use crate::core::data::canvas_size::CanvasSize;
use crate::core::data::curve::OperatorCurves;
use crate::core::data::pixel_buffer::PixelBuffer;

/// Turns evaluated curves into an on-screen frame.
pub trait FrameRendererPort: Send + Sync {
    fn render(&self, curves: &OperatorCurves, size: CanvasSize) -> Result<PixelBuffer, ChartError>;
}

/// Rasterizes the comparison chart with a fixed style.
pub struct ChartFrameRenderer {
    style: ChartStyle,
}

impl ChartFrameRenderer {
    pub fn new(style: ChartStyle) -> Self {
        Self { style }
    }
}

impl FrameRendererPort for ChartFrameRenderer {
    fn render(&self, curves: &OperatorCurves, size: CanvasSize) -> Result<PixelBuffer, ChartError> {
        render_rgb(curves, size, &self.style)
    }
}
