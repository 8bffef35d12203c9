mod bilinear;
pub mod color_math;
mod fill;
mod k_times;
mod nearest;

pub use bilinear::bilinear;
pub use k_times::k_times;
pub use nearest::nearest_neighbor;
