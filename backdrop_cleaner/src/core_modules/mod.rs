pub mod alpha_flatten;
pub mod checkerboard;
pub mod flood_fill;
pub mod pixel;
pub mod pixel_grid;
pub mod utils;
