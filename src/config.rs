use std::path::PathBuf;

use crate::core::actions::render_chart::chart_style::ChartStyle;
use crate::core::data::alpha::Alpha;
use crate::core::data::canvas_size::{CanvasSize, CanvasSizeError};
use crate::core::data::sample_grid::{
    DEFAULT_GRID_END, DEFAULT_GRID_SAMPLES, DEFAULT_GRID_START, GridError, SampleGrid,
};

const DEFAULT_CANVAS_WIDTH: u32 = 1000;
const DEFAULT_CANVAS_HEIGHT: u32 = 600;
const DEFAULT_OUTPUT_DIR: &str = "output";

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GridConfig {
    pub start: f64,
    pub end: f64,
    pub samples: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            start: DEFAULT_GRID_START,
            end: DEFAULT_GRID_END,
            samples: DEFAULT_GRID_SAMPLES,
        }
    }
}

impl GridConfig {
    pub fn build(&self) -> Result<SampleGrid, GridError> {
        SampleGrid::linspace(self.start, self.end, self.samples)
    }
}

/// Settings shared by the CLI and the GUI.
#[derive(Debug, Clone, PartialEq)]
pub struct ExplorerConfig {
    pub grid: GridConfig,
    pub alpha: Alpha,
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub chart_style: ChartStyle,
    pub output_dir: PathBuf,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            grid: GridConfig::default(),
            alpha: Alpha::default(),
            canvas_width: DEFAULT_CANVAS_WIDTH,
            canvas_height: DEFAULT_CANVAS_HEIGHT,
            chart_style: ChartStyle::default(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

impl ExplorerConfig {
    pub fn canvas_size(&self) -> Result<CanvasSize, CanvasSizeError> {
        CanvasSize::new(self.canvas_width, self.canvas_height)
    }

    #[must_use]
    pub fn with_alpha(mut self, alpha: Alpha) -> Self {
        self.alpha = alpha;
        self
    }
}
