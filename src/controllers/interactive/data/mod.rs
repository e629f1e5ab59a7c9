pub mod comparison_request;
pub mod frame_data;
