pub mod alpha;
pub mod canvas_size;
pub mod curve;
pub mod pixel_buffer;
pub mod sample_grid;
