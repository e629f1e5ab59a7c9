pub mod cancellation;
pub mod evaluate_operators;
pub mod render_chart;
