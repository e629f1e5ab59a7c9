use std::marker::PhantomData;
use std::sync::Arc;

use tracing::info;
use winit::dpi::LogicalSize;
use winit::event_loop::EventLoopBuilder;
use winit::window::{Window, WindowBuilder};

use crate::config::ExplorerConfig;
use crate::controllers::cli::CliController;
use crate::controllers::interactive::InteractiveController;
use crate::controllers::interactive::ports::frame_renderer::ChartFrameRenderer;
use crate::input::gui::app::events::gui::GuiEvent;
use crate::input::gui::app::gui_app::{GuiApp, PAGE_TITLE};
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::commands::errors::GuiError;
use crate::input::gui::commands::ports::presenter_factory::GuiPresenterFactoryPort;
use crate::presenters::file::pdf::PdfFilePresenter;

pub struct RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    presenter_factory: F,
    _phantom: PhantomData<fn() -> P>,
}

impl<F, P> RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    pub fn new(presenter_factory: F) -> Self {
        Self {
            presenter_factory,
            _phantom: PhantomData,
        }
    }

    /// Opens the explorer window. Returns once the window is closed.
    pub fn execute(&self, config: ExplorerConfig) -> Result<(), GuiError> {
        let grid = config.grid.build()?;
        let export_size = config.canvas_size()?;

        let event_loop = EventLoopBuilder::<GuiEvent>::with_user_event().build()?;
        let event_loop_proxy = event_loop.create_proxy();

        // pixels needs a 'static window; it lives for the rest of the process anyway.
        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title(PAGE_TITLE)
                .with_inner_size(LogicalSize::new(1280.0, 720.0))
                .with_min_inner_size(LogicalSize::new(760.0, 420.0))
                .build(&event_loop)?,
        ));

        let presenter: P = self.presenter_factory.build(window, event_loop_proxy)?;
        let controller = InteractiveController::new(
            presenter.share_adapter(),
            Arc::new(grid.clone()),
            Arc::new(ChartFrameRenderer::new(config.chart_style)),
        );
        let exporter = CliController::new(
            PdfFilePresenter::new(export_size, config.chart_style),
            grid,
        );

        info!(samples = config.grid.samples, "starting gui");

        let app = GuiApp::new(
            window,
            &event_loop,
            presenter,
            controller,
            exporter,
            config.output_dir,
        );

        Ok(app.run(window, event_loop)?)
    }
}
