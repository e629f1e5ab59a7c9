pub const TITLE_PREFIX: &str = "Comparison for α = ";

/// Fonts and spacing of the comparison chart.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ChartStyle {
    pub font_family: &'static str,
    pub title_font_size: f64,
    pub label_font_size: f64,
    pub margin: u32,
    pub x_label_area_size: u32,
    pub y_label_area_size: u32,
    pub legend_line_length: i32,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            font_family: "sans-serif",
            title_font_size: 22.0,
            label_font_size: 16.0,
            margin: 16,
            x_label_area_size: 40,
            y_label_area_size: 56,
            legend_line_length: 24,
        }
    }
}
