use crate::error::RasterError;
use crate::grid::{PixelGrid, ScaleFactors};

use super::color_math::interpolate_color;
use super::fill::{Sample, fill_grid};

/// Offset applied to integral source coordinates so both anchors differ
const ANCHOR_NUDGE: f64 = 0.00001;

/// Resize by blending the four source pixels around each mapped coordinate
///
/// The mapping is stretched by `w / (w - 1)` (and `h / (h - 1)`) so the last
/// destination column and row line up with the last source ones. Pixels whose
/// left or top anchor lands on the last source column or row are skipped and
/// keep the background color.
///
/// Sources narrower or shorter than 2 pixels fail with
/// [`RasterError::DegenerateSource`].
pub fn bilinear(
    source: &PixelGrid,
    scale: ScaleFactors,
    parallel: bool,
) -> Result<PixelGrid, RasterError> {
    let (src_width, src_height) = source.dimensions();
    if src_width <= 1 || src_height <= 1 {
        return Err(RasterError::DegenerateSource {
            width: src_width,
            height: src_height,
        });
    }

    let (width, height) = scale.destination_size(src_width, src_height)?;
    let stretch_x = scale.x() * f64::from(src_width) / f64::from(src_width - 1);
    let stretch_y = scale.y() * f64::from(src_height) / f64::from(src_height - 1);

    fill_grid(width, height, parallel, |x, y| {
        sample(
            source,
            f64::from(x) / stretch_x,
            f64::from(y) / stretch_y,
        )
    })
}

/// Interpolate the source at the fractional coordinate `(src_x, src_y)`
pub(crate) fn sample(source: &PixelGrid, src_x: f64, src_y: f64) -> Sample {
    let (first_x, second_x, src_x) = anchors(src_x);
    let (first_y, second_y, src_y) = anchors(src_y);

    if first_x == source.width() - 1 || first_y == source.height() - 1 {
        return Ok(None);
    }

    let top = interpolate_color(
        source.get(first_x, first_y)?,
        source.get(second_x, first_y)?,
        first_x,
        second_x,
        src_x,
    );
    let bottom = interpolate_color(
        source.get(first_x, second_y)?,
        source.get(second_x, second_y)?,
        first_x,
        second_x,
        src_x,
    );

    Ok(Some(interpolate_color(
        top, bottom, first_y, second_y, src_y,
    )))
}

/// Floor and ceil anchors of `coord`, nudging exact integers forward
fn anchors(coord: f64) -> (u32, u32, f64) {
    let first = coord.floor() as u32;
    let second = coord.ceil() as u32;

    if first == second {
        (first, first.saturating_add(1), coord + ANCHOR_NUDGE)
    } else {
        (first, second, coord)
    }
}
