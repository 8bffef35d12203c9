use crate::error::RasterError;
use crate::grid::{PixelGrid, ScaleFactors};

use super::color_math::{band_phase, k_times_color};
use super::fill::fill_grid;

/// Resize with the K-times row scheme
///
/// Columns are picked like nearest-neighbor. Rows blend the source row at
/// `trunc(y / coef_y)` with the next one (or itself on the last row), using
/// the destination row's phase inside a band of `ceil(first_y * coef_y)` rows
/// as the blend distance. The bands do not track the source rows, so the
/// output repeats in a saw-tooth pattern instead of a smooth vertical ramp.
pub fn k_times(
    source: &PixelGrid,
    scale: ScaleFactors,
    parallel: bool,
) -> Result<PixelGrid, RasterError> {
    let src_height = source.height();
    let (width, height) = scale.destination_size(source.width(), src_height)?;

    fill_grid(width, height, parallel, |x, y| {
        let src_x = (f64::from(x) / scale.x()) as u32;
        let first_y = (f64::from(y) / scale.y()) as u32;
        let second_y = if first_y.saturating_add(1) < src_height {
            first_y + 1
        } else {
            first_y
        };

        let first = source.get(src_x, first_y)?;
        let second = source.get(src_x, second_y)?;
        let phase = band_phase(y, first_y, scale.y());

        Ok(Some(k_times_color(first, second, scale.y(), phase)))
    })
}
