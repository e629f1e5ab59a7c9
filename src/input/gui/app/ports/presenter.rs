use std::sync::Arc;
use std::time::Duration;

use egui::Context as EguiContext;
use winit::event_loop::EventLoopProxy;
use winit::window::Window;

use crate::controllers::interactive::ports::presenter::InteractiveControllerPresenterPort;
use crate::core::data::alpha::Alpha;
use crate::input::gui::app::events::gui::GuiEvent;

pub trait GuiPresenterPort {
    fn new(window: &'static Window, event_loop_proxy: EventLoopProxy<GuiEvent>) -> Result<Self, pixels::Error>
    where
        Self: Sized;
    fn share_adapter(&self) -> Arc<dyn InteractiveControllerPresenterPort>;
    /// Pulls any pending render event so status queries see it.
    fn poll_frame(&mut self);
    fn render(&mut self, egui_output: egui::FullOutput, egui_ctx: &EguiContext) -> Result<(), pixels::Error>;
    fn resize(&mut self, width: u32, height: u32) -> Result<(), pixels::TextureError>;
    fn last_presented_alpha(&self) -> Option<Alpha>;
    fn last_render_duration(&self) -> Option<Duration>;
    fn last_error_message(&self) -> Option<&str>;
}
