use image::Rgb;
use rayon::prelude::*;

use crate::error::RasterError;
use crate::grid::{BACKGROUND, PixelGrid};

/// Result of sampling one destination pixel. `None` keeps the background.
pub(crate) type Sample = Result<Option<Rgb<u8>>, RasterError>;

/// Build a `width` x `height` grid by evaluating `pixel` at every coordinate
///
/// Rows are independent, so with `parallel` set they are filled on the rayon
/// pool. The first error aborts the fill and no grid is returned.
pub(crate) fn fill_grid<F>(
    width: u32,
    height: u32,
    parallel: bool,
    pixel: F,
) -> Result<PixelGrid, RasterError>
where
    F: Fn(u32, u32) -> Sample + Sync,
{
    let row_len = width as usize;
    let mut samples = vec![BACKGROUND; row_len * height as usize];

    if !samples.is_empty() {
        if parallel {
            samples
                .par_chunks_mut(row_len)
                .enumerate()
                .try_for_each(|(y, row)| fill_row(&pixel, y, row))?;
        } else {
            samples
                .chunks_mut(row_len)
                .enumerate()
                .try_for_each(|(y, row)| fill_row(&pixel, y, row))?;
        }
    }

    PixelGrid::from_samples(width, height, samples)
}

fn fill_row<F>(pixel: &F, y: usize, row: &mut [Rgb<u8>]) -> Result<(), RasterError>
where
    F: Fn(u32, u32) -> Sample,
{
    let y = y as u32;
    for (x, slot) in row.iter_mut().enumerate() {
        if let Some(color) = pixel(x as u32, y)? {
            *slot = color;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coordinate_color(x: u32, y: u32) -> Sample {
        Ok(Some(Rgb([x as u8, y as u8, 0])))
    }

    #[test]
    fn test_fill_visits_every_pixel() {
        let grid = fill_grid(3, 2, false, coordinate_color).unwrap();

        assert_eq!(grid.dimensions(), (3, 2));
        for y in 0..2 {
            for x in 0..3 {
                assert_eq!(grid.get(x, y).unwrap(), Rgb([x as u8, y as u8, 0]));
            }
        }
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let sequential = fill_grid(17, 9, false, coordinate_color).unwrap();
        let parallel = fill_grid(17, 9, true, coordinate_color).unwrap();

        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_none_keeps_background() {
        let grid = fill_grid(2, 2, true, |x, _| {
            Ok((x == 1).then_some(Rgb([9, 9, 9])))
        })
        .unwrap();

        assert_eq!(grid.get(0, 0).unwrap(), BACKGROUND);
        assert_eq!(grid.get(1, 1).unwrap(), Rgb([9, 9, 9]));
    }

    #[test]
    fn test_error_aborts_fill() {
        for parallel in [false, true] {
            let result = fill_grid(4, 4, parallel, |x, y| {
                if x == 2 && y == 3 {
                    Err(RasterError::OutOfRangeAccess {
                        x,
                        y,
                        width: 1,
                        height: 1,
                    })
                } else {
                    Ok(None)
                }
            });

            assert!(matches!(result, Err(RasterError::OutOfRangeAccess { .. })));
        }
    }

    #[test]
    fn test_empty_grid() {
        let grid = fill_grid(0, 4, true, coordinate_color).unwrap();

        assert!(grid.is_empty());
        assert_eq!(grid.dimensions(), (0, 4));
    }
}
