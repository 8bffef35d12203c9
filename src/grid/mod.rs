mod pixel_grid;
mod scale;

pub use pixel_grid::{BACKGROUND, PixelGrid};
pub use scale::{ScaleFactors, compute_destination_size};
