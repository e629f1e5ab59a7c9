pub mod config;
pub mod controllers;
pub mod core;
#[cfg(feature = "gui")]
pub mod input;
pub mod logging;
pub mod presenters;
pub mod storage;

pub use crate::config::ExplorerConfig;
pub use crate::controllers::cli::{CliController, CliError};
pub use crate::core::data::alpha::Alpha;
pub use crate::logging::init_logging;
pub use crate::presenters::file::pdf::PdfFilePresenter;

#[cfg(feature = "gui")]
pub use crate::input::gui::commands::run_gui::RunGuiCommand;
#[cfg(feature = "gui")]
pub use crate::presenters::pixels::factory::PixelsPresenterFactory;
