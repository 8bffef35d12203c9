use crate::error::RasterError;
use crate::grid::{PixelGrid, ScaleFactors};

use super::fill::fill_grid;

/// Resize by copying the source pixel at `(trunc(x / coef_x), trunc(y / coef_y))`
pub fn nearest_neighbor(
    source: &PixelGrid,
    scale: ScaleFactors,
    parallel: bool,
) -> Result<PixelGrid, RasterError> {
    let (width, height) = scale.destination_size(source.width(), source.height())?;

    fill_grid(width, height, parallel, |x, y| {
        let src_x = (f64::from(x) / scale.x()) as u32;
        let src_y = (f64::from(y) / scale.y()) as u32;
        source.get(src_x, src_y).map(Some)
    })
}
