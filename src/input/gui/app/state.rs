use crate::controllers::interactive::data::comparison_request::ComparisonRequest;
use crate::core::data::alpha::{ALPHA_DEFAULT, Alpha};
use crate::core::data::canvas_size::CanvasSize;

/// Side-panel state that survives across egui frames.
pub struct GuiAppState {
    /// Raw slider position; snapped to the slider grid when a request is built.
    pub alpha: f64,
    last_submitted_request: Option<ComparisonRequest>,
    latest_submitted_generation: u64,
}

impl Default for GuiAppState {
    fn default() -> Self {
        Self {
            alpha: ALPHA_DEFAULT,
            last_submitted_request: None,
            latest_submitted_generation: 0,
        }
    }
}

impl GuiAppState {
    #[must_use]
    pub fn selected_alpha(&self) -> Alpha {
        Alpha::from_slider(self.alpha)
    }

    #[must_use]
    pub fn build_request(&self, size: CanvasSize) -> ComparisonRequest {
        ComparisonRequest {
            alpha: self.selected_alpha().value(),
            size,
        }
    }

    #[must_use]
    pub fn should_submit(&self, request: &ComparisonRequest) -> bool {
        self.last_submitted_request
            .as_ref()
            .is_none_or(|last| last != request)
    }

    pub fn record_submission(&mut self, request: ComparisonRequest, generation: u64) {
        self.last_submitted_request = Some(request);
        self.latest_submitted_generation = generation;
    }

    /// Whether the newest submitted request is still waiting for its frame.
    #[must_use]
    pub fn is_rendering(&self, last_completed_generation: u64) -> bool {
        last_completed_generation < self.latest_submitted_generation
    }
}
