//! Exports the comparison chart for one alpha as a PDF under `output/`.
//!
//! Usage: `fractional_operators [ALPHA]`. The single optional positional
//! argument is the only command-line input; there are no flags. ALPHA must lie
//! in (0, 1] and defaults to 0.5. Anything else exits with an error.

use fractional_operators::{CliController, ExplorerConfig, PdfFilePresenter, init_logging};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging()?;

    let config = ExplorerConfig::default();
    let alpha = match std::env::args().nth(1) {
        Some(arg) => arg.parse::<f64>()?,
        None => config.alpha.value(),
    };

    let presenter = PdfFilePresenter::new(config.canvas_size()?, config.chart_style);
    let mut controller = CliController::new(presenter, config.grid.build()?);

    controller.generate(alpha)?;
    controller.export(&config.output_dir)?;

    Ok(())
}
