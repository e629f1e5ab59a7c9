use std::sync::Arc;
use std::time::Duration;

use egui::Context as EguiContext;
use pixels::{Pixels, SurfaceTexture};
use tracing::warn;
use winit::event_loop::EventLoopProxy;
use winit::window::Window;

use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::events::render::RenderEvent;
use crate::controllers::interactive::ports::presenter::InteractiveControllerPresenterPort;
use crate::core::data::alpha::Alpha;
use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer};
use crate::input::gui::app::events::gui::GuiEvent;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::presenters::pixels::adapter::PixelsAdapter;
use crate::presenters::pixels::overlay::EguiOverlay;

const RGBA_BYTES: usize = 4;
const WHITE: [u8; RGBA_BYTES] = [255; RGBA_BYTES];

/// What the side panel reports about the chart on screen.
#[derive(Debug, Default)]
struct ChartStatus {
    generation: u64,
    alpha: Option<Alpha>,
    render_duration: Option<Duration>,
    error_message: Option<String>,
}

impl ChartStatus {
    fn accepts(&self, generation: u64) -> bool {
        generation > self.generation
    }

    fn shown(&mut self, frame: &FrameData) {
        self.generation = frame.generation;
        self.alpha = Some(frame.curves.alpha);
        self.render_duration = Some(frame.render_duration);
        self.error_message = None;
    }

    fn failed(&mut self, generation: u64, message: String) {
        if generation >= self.generation {
            self.error_message = Some(message);
        }
    }
}

/// Paints `chart` flush against the right edge of an RGBA `frame` that is
/// `frame_width` pixels wide. Everything left of the chart is cleared to white.
fn blit_chart(chart: &PixelBuffer, frame: &mut [u8], frame_width: usize) {
    frame.fill(255);

    let left = frame_width.saturating_sub(chart.size().width() as usize) * RGBA_BYTES;

    for (src, dest) in chart.rows().zip(frame.chunks_exact_mut(frame_width * RGBA_BYTES)) {
        let dest = dest[left..].chunks_exact_mut(RGBA_BYTES);

        for (rgb, rgba) in src.chunks_exact(BYTES_PER_PIXEL).zip(dest) {
            rgba[..BYTES_PER_PIXEL].copy_from_slice(rgb);
        }
    }
}

pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    overlay: EguiOverlay,
    adapter: Arc<PixelsAdapter>,
    width: u32,
    height: u32,
    has_frame: bool,
    status: ChartStatus,
}

impl GuiPresenterPort for PixelsPresenter {
    fn new(
        window: &'static Window,
        event_loop_proxy: EventLoopProxy<GuiEvent>,
    ) -> Result<Self, pixels::Error> {
        let size = window.inner_size();
        let pixels = Pixels::new(
            size.width,
            size.height,
            SurfaceTexture::new(size.width, size.height, window),
        )?;

        Ok(Self {
            overlay: EguiOverlay::new(&pixels),
            pixels,
            adapter: Arc::new(PixelsAdapter::new(event_loop_proxy)),
            width: size.width,
            height: size.height,
            has_frame: false,
            status: ChartStatus::default(),
        })
    }

    fn share_adapter(&self) -> Arc<dyn InteractiveControllerPresenterPort> {
        self.adapter.clone()
    }

    fn poll_frame(&mut self) {
        let Some(event) = self.adapter.render_event() else {
            return;
        };

        match event {
            RenderEvent::Frame(frame) => {
                let size = frame.pixel_buffer.size();
                let fits = size.width() <= self.width && size.height() == self.height;

                if fits && self.status.accepts(frame.generation) {
                    blit_chart(&frame.pixel_buffer, self.pixels.frame_mut(), self.width as usize);
                    self.has_frame = true;
                    self.status.shown(&frame);
                }
            }
            RenderEvent::Error(error) => {
                warn!(generation = error.generation, "{}", error.message);
                self.status.failed(error.generation, error.message);
            }
        }
    }

    fn render(
        &mut self,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
    ) -> Result<(), pixels::Error> {
        if self.width == 0 || self.height == 0 {
            return Ok(());
        }

        self.poll_frame();

        if !self.has_frame {
            for pixel in self.pixels.frame_mut().chunks_exact_mut(RGBA_BYTES) {
                pixel.copy_from_slice(&WHITE);
            }
        }

        let size_in_pixels = [self.width, self.height];
        let overlay = &mut self.overlay;

        self.pixels.render_with(|encoder, target, context| {
            context.scaling_renderer.render(encoder, target);
            overlay.paint(encoder, target, context, egui_output, egui_ctx, size_in_pixels);
            Ok(())
        })
    }

    fn resize(&mut self, width: u32, height: u32) -> Result<(), pixels::TextureError> {
        self.pixels.resize_surface(width, height)?;
        self.pixels.resize_buffer(width, height)?;

        self.width = width;
        self.height = height;
        self.has_frame = false;
        Ok(())
    }

    fn last_presented_alpha(&self) -> Option<Alpha> {
        self.status.alpha
    }

    fn last_render_duration(&self) -> Option<Duration> {
        self.status.render_duration
    }

    fn last_error_message(&self) -> Option<&str> {
        self.status.error_message.as_deref()
    }
}
