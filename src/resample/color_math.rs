//! Integer-truncating interpolation helpers shared by the resamplers.
//!
//! All results are truncated toward zero before they are clamped into the
//! channel range. Nothing here rounds.

use image::Rgb;

/// Linearly interpolate a value at `axis` between `(coord1, value1)` and
/// `(coord2, value2)`
///
/// Each weighted term is truncated separately before the sum, so the result
/// can sit one below the exact interpolation. `coord1` and `coord2` must
/// differ.
pub fn linear_interpolation(coord1: u32, coord2: u32, value1: u8, value2: u8, axis: f64) -> i32 {
    let span = f64::from(coord2) - f64::from(coord1);
    let coef1 = (f64::from(coord2) - axis) / span;
    let coef2 = (axis - f64::from(coord1)) / span;

    (coef1 * f64::from(value1)) as i32 + (coef2 * f64::from(value2)) as i32
}

/// Interpolate every channel of two colors located at `coord1` and `coord2`
pub fn interpolate_color(
    first: Rgb<u8>,
    second: Rgb<u8>,
    coord1: u32,
    coord2: u32,
    axis: f64,
) -> Rgb<u8> {
    Rgb(std::array::from_fn(|c| {
        clamp_channel(i64::from(linear_interpolation(
            coord1, coord2, first[c], second[c], axis,
        )))
    }))
}

/// Phase of destination row `dest_y` inside its K-times band
///
/// The band length is `ceil(first_y * coef_y)`, with a `first_y` of 0
/// counted as 1.
pub fn band_phase(dest_y: u32, first_y: u32, coef_y: f64) -> u64 {
    let anchor = first_y.max(1);
    let divisor = (f64::from(anchor) * coef_y).ceil() as u64;

    u64::from(dest_y) % divisor.max(1)
}

/// K-times blend of one channel: `trunc(phase * ((second - first) / coef_y) + first)`
pub fn k_times_channel(first: u8, second: u8, coef_y: f64, phase: u64) -> u8 {
    let step = f64::from(i32::from(second) - i32::from(first)) / coef_y;
    let value = (phase as f64 * step + f64::from(first)).trunc();

    clamp_channel(value as i64)
}

/// K-times blend applied to each channel independently
pub fn k_times_color(first: Rgb<u8>, second: Rgb<u8>, coef_y: f64, phase: u64) -> Rgb<u8> {
    Rgb(std::array::from_fn(|c| {
        k_times_channel(first[c], second[c], coef_y, phase)
    }))
}

fn clamp_channel(value: i64) -> u8 {
    value.clamp(0, i64::from(u8::MAX)) as u8
}
