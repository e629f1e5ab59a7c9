pub mod chart_style;
#[allow(clippy::module_inception)]
pub mod render_chart;
