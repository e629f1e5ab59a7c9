use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use thiserror::Error;

use svg2pdf::usvg;

use crate::core::actions::evaluate_operators::ports::operator::Operator;
use crate::core::actions::render_chart::chart_style::{ChartStyle, TITLE_PREFIX};
use crate::core::data::canvas_size::CanvasSize;
use crate::core::data::curve::OperatorCurves;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
use crate::core::operators::fractional_integral::FractionalIntegral;
use crate::core::operators::fractional_maximal::FractionalMaximal;
use crate::core::operators::indicator::Indicator;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChartError {
    #[error("cannot chart empty curves")]
    EmptyCurves,
    #[error("drawing failed: {0}")]
    Draw(String),
    #[error(transparent)]
    Frame(#[from] PixelBufferError),
    #[error("pdf conversion failed: {0}")]
    Pdf(String),
}

fn draw_error<E>(err: DrawingAreaErrorKind<E>) -> ChartError
where
    E: std::error::Error + Send + Sync,
{
    ChartError::Draw(err.to_string())
}

#[must_use]
pub fn chart_title(curves: &OperatorCurves) -> String {
    format!("{}{}", TITLE_PREFIX, curves.alpha.label())
}

/// Pads a data range by 5% on each side, widening degenerate ranges.
fn padded_range(lo: f64, hi: f64) -> (f64, f64) {
    let span = hi - lo;

    if span < 1e-9 {
        return (lo - 0.5, hi + 0.5);
    }

    (lo - span * 0.05, hi + span * 0.05)
}

/// Draws the three curves overlaid on `area` with title, grid and legend.
pub fn draw_comparison<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    curves: &OperatorCurves,
    style: &ChartStyle,
) -> Result<(), ChartError> {
    let (x_min, x_max) = curves.x_bounds().ok_or(ChartError::EmptyCurves)?;
    let (y_lo, y_hi) = curves.y_bounds().ok_or(ChartError::EmptyCurves)?;
    let (y_min, y_max) = padded_range(y_lo, y_hi);

    let title_style: TextStyle = (style.font_family, style.title_font_size).into();
    let label_style: TextStyle = (style.font_family, style.label_font_size).into();

    area.fill(&WHITE).map_err(draw_error)?;

    let mut chart = ChartBuilder::on(area)
        .caption(chart_title(curves), title_style)
        .margin(style.margin)
        .x_label_area_size(style.x_label_area_size)
        .y_label_area_size(style.y_label_area_size)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)
        .map_err(draw_error)?;

    chart
        .configure_mesh()
        .x_desc("x")
        .y_desc("y")
        .label_style(label_style.clone())
        .light_line_style(BLACK.mix(0.05))
        .bold_line_style(BLACK.mix(0.3))
        .draw()
        .map_err(draw_error)?;

    let legend_length = style.legend_line_length;
    let integral_label = FractionalIntegral::new(curves.alpha).label();
    let maximal_label = FractionalMaximal::new(curves.alpha).label();

    chart
        .draw_series(DashedLineSeries::new(
            curves.integral.as_tuples(),
            10,
            6,
            BLUE.stroke_width(2),
        ))
        .map_err(draw_error)?
        .label(integral_label)
        .legend(move |(x, y)| {
            PathElement::new(vec![(x, y), (x + legend_length, y)], BLUE.stroke_width(2))
        });

    chart
        .draw_series(DashedLineSeries::new(
            curves.maximal.as_tuples(),
            2,
            4,
            RED.stroke_width(2),
        ))
        .map_err(draw_error)?
        .label(maximal_label)
        .legend(move |(x, y)| {
            PathElement::new(vec![(x, y), (x + legend_length, y)], RED.stroke_width(2))
        });

    chart
        .draw_series(LineSeries::new(
            curves.indicator.as_tuples(),
            BLACK.stroke_width(2),
        ))
        .map_err(draw_error)?
        .label(Indicator.label())
        .legend(move |(x, y)| {
            PathElement::new(vec![(x, y), (x + legend_length, y)], BLACK.stroke_width(2))
        });

    chart
        .configure_series_labels()
        .label_font(label_style)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .position(SeriesLabelPosition::UpperRight)
        .draw()
        .map_err(draw_error)?;

    Ok(())
}

/// Renders the chart as an SVG document into a fresh string.
pub fn render_svg(
    curves: &OperatorCurves,
    size: CanvasSize,
    style: &ChartStyle,
) -> Result<String, ChartError> {
    let mut document = String::new();

    {
        let root = SVGBackend::with_string(&mut document, size.as_tuple()).into_drawing_area();
        draw_comparison(&root, curves, style)?;
        root.present().map_err(draw_error)?;
    }

    Ok(document)
}

/// Renders the chart as a single-page PDF document.
///
/// The SVG document is the drawing step; the PDF is converted from it.
pub fn render_pdf(
    curves: &OperatorCurves,
    size: CanvasSize,
    style: &ChartStyle,
) -> Result<Vec<u8>, ChartError> {
    let document = render_svg(curves, size, style)?;

    let mut options = usvg::Options::default();
    options.fontdb_mut().load_system_fonts();

    let tree = usvg::Tree::from_str(&document, &options)
        .map_err(|e| ChartError::Pdf(e.to_string()))?;

    svg2pdf::to_pdf(
        &tree,
        svg2pdf::ConversionOptions::default(),
        svg2pdf::PageOptions::default(),
    )
    .map_err(|e| ChartError::Pdf(format!("{e:?}")))
}

/// Rasterizes the chart into an RGB frame for on-screen display.
pub fn render_rgb(
    curves: &OperatorCurves,
    size: CanvasSize,
    style: &ChartStyle,
) -> Result<PixelBuffer, ChartError> {
    let mut data = vec![255; PixelBuffer::byte_len(size)];

    {
        let root = BitMapBackend::with_buffer(&mut data, size.as_tuple()).into_drawing_area();
        draw_comparison(&root, curves, style)?;
        root.present().map_err(draw_error)?;
    }

    Ok(PixelBuffer::from_data(size, data)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::evaluate_operators::evaluate_operators::evaluate_operators;
    use crate::core::data::alpha::Alpha;
    use crate::core::data::curve::CurveSample;
    use crate::core::data::sample_grid::SampleGrid;

    fn sample_curves(alpha: f64) -> OperatorCurves {
        evaluate_operators(&SampleGrid::default(), Alpha::new(alpha).unwrap()).unwrap()
    }

    #[test]
    fn test_chart_title_embeds_alpha() {
        assert_eq!(chart_title(&sample_curves(0.5)), "Comparison for α = 0.5");
        assert_eq!(chart_title(&sample_curves(1.0)), "Comparison for α = 1.0");
    }

    #[test]
    fn test_padded_range_widens_degenerate_ranges() {
        assert_eq!(padded_range(1.0, 1.0), (0.5, 1.5));

        let (lo, hi) = padded_range(0.0, 2.0);
        assert!((lo + 0.1).abs() < 1e-12);
        assert!((hi - 2.1).abs() < 1e-12);
    }

    #[test]
    fn test_render_svg_contains_title_and_legend() {
        let size = CanvasSize::new(800, 480).unwrap();
        let svg = render_svg(&sample_curves(0.5), size, &ChartStyle::default()).unwrap();

        assert!(svg.contains("<svg"));
        assert!(svg.contains("Comparison for α = 0.5"));
        assert!(svg.contains("I_α[χ_[0,1]](x)"));
        assert!(svg.contains("M_α[χ_[0,1]](x)"));
        assert!(svg.contains("χ_[0,1](x)"));
    }

    #[test]
    fn test_render_svg_is_fresh_per_call() {
        let size = CanvasSize::new(400, 300).unwrap();
        let style = ChartStyle::default();
        let first = render_svg(&sample_curves(0.25), size, &style).unwrap();
        let second = render_svg(&sample_curves(0.75), size, &style).unwrap();

        assert!(first.contains("α = 0.25"));
        assert!(!second.contains("α = 0.25"));
        assert!(second.contains("α = 0.75"));
    }

    #[test]
    fn test_render_rgb_draws_into_frame() {
        let size = CanvasSize::new(320, 200).unwrap();
        let frame = render_rgb(&sample_curves(0.5), size, &ChartStyle::default()).unwrap();

        assert_eq!(frame.size(), size);
        assert_eq!(frame.buffer().len(), 320 * 200 * 3);
        assert!(frame.buffer().iter().any(|&b| b != 255), "frame stayed blank");
    }

    #[test]
    fn test_render_rgb_frame_has_chart_dimensions() {
        let size = CanvasSize::new(480, 320).unwrap();
        let frame = render_rgb(&sample_curves(1.0), size, &ChartStyle::default()).unwrap();

        assert_eq!(frame.rows().count(), 320);
        assert!(frame.rows().all(|row| row.len() == 480 * 3));
    }

    #[test]
    fn test_render_pdf_produces_pdf_document() {
        let size = CanvasSize::new(600, 400).unwrap();
        let pdf = render_pdf(&sample_curves(0.5), size, &ChartStyle::default()).unwrap();

        assert!(pdf.starts_with(b"%PDF-"));
        assert!(pdf.len() > 1000);
    }

    #[test]
    fn test_empty_curves_are_rejected() {
        let empty = OperatorCurves {
            alpha: Alpha::default(),
            indicator: CurveSample::new(vec![]),
            integral: CurveSample::new(vec![]),
            maximal: CurveSample::new(vec![]),
        };
        let size = CanvasSize::new(100, 100).unwrap();

        assert_eq!(
            render_svg(&empty, size, &ChartStyle::default()),
            Err(ChartError::EmptyCurves)
        );
    }
}
