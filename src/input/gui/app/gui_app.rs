use std::path::PathBuf;

use egui::Context;
use egui_winit::State as EguiWinitState;
use tracing::{error, info};
use winit::error::EventLoopError;
use winit::event::{Event, WindowEvent};
use winit::event_loop::EventLoop;
use winit::window::Window;

use crate::controllers::cli::{CliController, CliError};
use crate::controllers::interactive::InteractiveController;
use crate::core::data::alpha::{ALPHA_MAX, ALPHA_MIN, ALPHA_STEP};
use crate::core::data::canvas_size::CanvasSize;
use crate::input::gui::app::events::gui::GuiEvent;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::app::state::GuiAppState;
use crate::presenters::file::pdf::PdfFilePresenter;

pub const PAGE_TITLE: &str = "Fractional Operators Behavior";
const PAGE_SUBTITLE: &str = "Fractional integral operator vs Fractional maximal operator";

/// Side panel width in logical points. The chart fills the rest of the window.
pub const SIDE_PANEL_WIDTH: f32 = 300.0;

const DEFINITIONS: &[&str] = &[
    "I_α f(x) := ∫ f(y) / |x − y|^(1−α) dy",
    "M_α f(x) := sup over intervals I of |I|^α · (1/|I|) ∫_I |f(y)| dy · χ_I(x)",
    "Here 0 < α < 1 and |I| denotes the length of I.",
    "χ_[0,1](x) = 1 for 0 ≤ x ≤ 1, and 0 otherwise.",
];

enum ExportStatus {
    Written(PathBuf),
    Failed(String),
}

pub struct GuiApp<T: GuiPresenterPort> {
    width: u32,
    height: u32,
    scale_factor: f64,
    presenter: T,
    controller: InteractiveController,
    exporter: CliController<PdfFilePresenter>,
    output_dir: PathBuf,
    ui_state: GuiAppState,
    export_status: Option<ExportStatus>,
    egui_ctx: Context,
    egui_state: EguiWinitState,
}

impl<T: GuiPresenterPort> GuiApp<T> {
    pub fn new(
        window: &'static Window,
        event_loop: &EventLoop<GuiEvent>,
        presenter: T,
        controller: InteractiveController,
        exporter: CliController<PdfFilePresenter>,
        output_dir: PathBuf,
    ) -> Self {
        let size = window.inner_size();
        let scale_factor = window.scale_factor();
        let egui_ctx = Context::default();

        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(scale_factor as f32),
            None, // max_texture_side, use default
        );

        Self {
            width: size.width,
            height: size.height,
            scale_factor,
            presenter,
            controller,
            exporter,
            output_dir,
            ui_state: GuiAppState::default(),
            export_status: None,
            egui_ctx,
            egui_state,
        }
    }

    /// Drives the winit loop until the window closes.
    pub fn run(
        mut self,
        window: &'static Window,
        event_loop: EventLoop<GuiEvent>,
    ) -> Result<(), EventLoopError> {
        let mut redraw_pending = true;

        event_loop.run(move |event, elwt| match event {
            Event::UserEvent(GuiEvent::Wake) => {
                redraw_pending = true;
            }
            Event::WindowEvent {
                ref event,
                window_id,
            } if window_id == window.id() => {
                if self.handle_window_event(window, event) {
                    redraw_pending = true;
                }

                match event {
                    WindowEvent::CloseRequested => {
                        self.controller.shutdown();
                        elwt.exit();
                    }
                    WindowEvent::RedrawRequested => {
                        redraw_pending = false;

                        self.presenter.poll_frame();
                        let egui_output = self.update_ui(window);
                        self.submit_render_request_if_needed();

                        self.egui_state
                            .handle_platform_output(window, egui_output.platform_output.clone());

                        if egui_output
                            .viewport_output
                            .values()
                            .any(|v| v.repaint_delay.is_zero())
                        {
                            redraw_pending = true;
                        }

                        if let Err(e) = self.presenter.render(egui_output, &self.egui_ctx) {
                            error!("render error: {e}");
                            elwt.exit();
                        }
                    }
                    WindowEvent::Resized(size) => {
                        if let Err(e) = self.resize(size.width, size.height) {
                            error!("resize error: {e}");
                            elwt.exit();
                        }
                        redraw_pending = true;
                    }
                    WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                        self.scale_factor = *scale_factor;
                        self.egui_ctx.set_pixels_per_point(*scale_factor as f32);
                        let size = window.inner_size();
                        if let Err(e) = self.resize(size.width, size.height) {
                            error!("resize error: {e}");
                            elwt.exit();
                        }
                        redraw_pending = true;
                    }
                    _ => {}
                }
            }
            Event::AboutToWait => {
                if redraw_pending {
                    window.request_redraw();
                }
            }
            _ => {}
        })
    }

    fn resize(&mut self, width: u32, height: u32) -> Result<(), pixels::TextureError> {
        self.width = width;
        self.height = height;

        if width == 0 || height == 0 {
            return Ok(());
        }

        self.presenter.resize(width, height)
    }

    /// Physical size of the chart area to the right of the side panel.
    fn chart_size(&self) -> Option<CanvasSize> {
        let panel_px = (f64::from(SIDE_PANEL_WIDTH) * self.scale_factor).round() as u32;

        CanvasSize::new(self.width.saturating_sub(panel_px), self.height).ok()
    }

    fn submit_render_request_if_needed(&mut self) {
        let Some(size) = self.chart_size() else {
            return;
        };

        let request = self.ui_state.build_request(size);

        if self.ui_state.should_submit(&request) {
            let generation = self.controller.submit_request(request);
            self.ui_state.record_submission(request, generation);
        }
    }

    fn export_current_chart(&mut self) {
        self.export_status = Some(match self.write_export() {
            Ok(path) => {
                info!(path = %path.display(), "chart exported from gui");
                ExportStatus::Written(path)
            }
            Err(e) => {
                error!("export failed: {e}");
                ExportStatus::Failed(e.to_string())
            }
        });
    }

    fn write_export(&mut self) -> Result<PathBuf, CliError> {
        let alpha = self.ui_state.selected_alpha();
        self.exporter.generate(alpha.value())?;

        self.exporter.export(&self.output_dir)
    }

    fn update_ui(&mut self, window: &Window) -> egui::FullOutput {
        let raw_input = self.egui_state.take_egui_input(window);
        let egui_ctx = self.egui_ctx.clone();
        let mut export_clicked = false;

        let output = egui_ctx.run(raw_input, |ctx| {
            egui::SidePanel::left("controls")
                .exact_width(SIDE_PANEL_WIDTH)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.heading(PAGE_TITLE);
                    ui.label(PAGE_SUBTITLE);
                    ui.separator();

                    ui.label("The definitions of fractional operators as follows (one variable):");
                    for line in DEFINITIONS {
                        ui.monospace(*line);
                    }

                    ui.separator();
                    ui.strong("Simulation Settings");
                    ui.add(
                        egui::Slider::new(&mut self.ui_state.alpha, ALPHA_MIN..=ALPHA_MAX)
                            .step_by(ALPHA_STEP)
                            .text("α (Fractional Order)"),
                    );

                    if ui.button("Export a graph to PDF").clicked() {
                        export_clicked = true;
                    }

                    match &self.export_status {
                        Some(ExportStatus::Written(path)) => {
                            ui.label(format!("Saved {}", path.display()));
                        }
                        Some(ExportStatus::Failed(message)) => {
                            ui.colored_label(egui::Color32::LIGHT_RED, message);
                        }
                        None => {}
                    }

                    ui.separator();
                    if self
                        .ui_state
                        .is_rendering(self.controller.last_completed_generation())
                    {
                        ui.label("Rendering…");
                    }
                    if let Some(alpha) = self.presenter.last_presented_alpha() {
                        ui.label(format!("Showing α = {alpha}"));
                    }
                    if let Some(render_duration) = self.presenter.last_render_duration() {
                        ui.label(format!("Last render: {} ms", render_duration.as_millis()));
                    }
                    if let Some(message) = self.presenter.last_error_message() {
                        ui.colored_label(egui::Color32::LIGHT_RED, message);
                    }
                });
        });

        if export_clicked {
            self.export_current_chart();
        }

        output
    }

    /// Forwards the event to egui. Returns whether egui asked for a repaint.
    fn handle_window_event(&mut self, window: &Window, event: &WindowEvent) -> bool {
        self.egui_state.on_window_event(window, event).repaint
    }
}
