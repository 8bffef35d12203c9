use std::time::Instant;

use log::debug;

use super::{ResizeMode, ResizeOutcome};
use crate::error::RasterError;
use crate::grid::{PixelGrid, ScaleFactors};

/// Configuration for resizing grids
#[derive(Debug, Clone, Copy)]
pub struct ResizeEngine {
    pub mode: ResizeMode,
    pub parallel: bool,
}

impl ResizeEngine {
    pub fn new(mode: ResizeMode) -> Self {
        Self {
            mode,
            parallel: true,
        }
    }

    /// Fill destination rows on the rayon pool (default: true)
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Resize `source` by the given factors and time the resampler
    ///
    /// Factors are validated before any work. Errors from the resampler are
    /// returned unchanged and no partial grid is produced.
    pub fn resize(
        &self,
        source: &PixelGrid,
        coef_x: f64,
        coef_y: f64,
    ) -> Result<ResizeOutcome, RasterError> {
        let scale = ScaleFactors::new(coef_x, coef_y)?;
        self.resize_with(source, scale)
    }

    pub fn resize_with(
        &self,
        source: &PixelGrid,
        scale: ScaleFactors,
    ) -> Result<ResizeOutcome, RasterError> {
        let started = Instant::now();
        let grid = self.mode.resample(source, scale, self.parallel)?;
        let elapsed = started.elapsed();

        debug!(
            "{}: {}x{} -> {}x{} (x{}, x{}) in {:?}",
            self.mode.label(),
            source.width(),
            source.height(),
            grid.width(),
            grid.height(),
            scale.x(),
            scale.y(),
            elapsed
        );

        Ok(ResizeOutcome { grid, elapsed })
    }
}

/// Resize `source` with `mode` using the default engine settings
pub fn resize(
    source: &PixelGrid,
    mode: ResizeMode,
    coef_x: f64,
    coef_y: f64,
) -> Result<ResizeOutcome, RasterError> {
    ResizeEngine::new(mode).resize(source, coef_x, coef_y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resample::{bilinear, k_times, nearest_neighbor};
    use image::Rgb;

    fn gradient(width: u32, height: u32) -> PixelGrid {
        PixelGrid::from_fn(width, height, |x, y| {
            Rgb([(x * 30) as u8, (y * 30) as u8, ((x + y) * 10) as u8])
        })
    }

    #[test]
    fn test_dispatches_each_mode() {
        let source = gradient(5, 4);
        let scale = ScaleFactors::new(1.6, 2.2).unwrap();

        for mode in ResizeMode::ALL {
            let outcome = ResizeEngine::new(mode)
                .parallel(false)
                .resize(&source, 1.6, 2.2)
                .unwrap();
            let expected = match mode {
                ResizeMode::NearestNeighbor => nearest_neighbor(&source, scale, false),
                ResizeMode::KTimes => k_times(&source, scale, false),
                ResizeMode::BilinearInterpolation => bilinear(&source, scale, false),
            }
            .unwrap();

            assert_eq!(outcome.grid, expected, "mode {}", mode.label());
            assert_eq!(outcome.grid.dimensions(), (8, 8));
        }
    }

    #[test]
    fn test_solid_red_end_to_end() {
        let red = Rgb([255, 0, 0]);
        let source = PixelGrid::filled(4, 4, red);

        let outcome = resize(&source, ResizeMode::NearestNeighbor, 2.0, 2.0).unwrap();

        assert_eq!(outcome.grid.dimensions(), (8, 8));
        assert!(outcome.grid.samples().iter().all(|p| *p == red));
        assert_eq!(outcome.elapsed_millis(), outcome.elapsed.as_millis());
    }

    #[test]
    fn test_degenerate_bilinear_end_to_end() {
        let source =
            PixelGrid::from_samples(2, 1, vec![Rgb([0, 0, 0]), Rgb([255, 255, 255])]).unwrap();

        let result = resize(&source, ResizeMode::BilinearInterpolation, 2.0, 1.0);

        assert!(matches!(
            result,
            Err(RasterError::DegenerateSource { .. })
        ));
    }

    #[test]
    fn test_invalid_scale_rejected_for_every_mode() {
        let source = gradient(3, 3);

        for mode in ResizeMode::ALL {
            assert!(matches!(
                resize(&source, mode, 0.0, 1.0),
                Err(RasterError::InvalidScaleFactor { .. })
            ));
            assert!(matches!(
                resize(&source, mode, 1.0, f64::NAN),
                Err(RasterError::InvalidScaleFactor { .. })
            ));
        }
    }

    #[test]
    fn test_zero_sized_result_for_every_mode() {
        let source = gradient(4, 4);

        for mode in ResizeMode::ALL {
            let outcome = resize(&source, mode, 0.1, 0.1).unwrap();
            assert!(outcome.grid.is_empty());
        }
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let source = gradient(8, 6);

        for mode in ResizeMode::ALL {
            let sequential = ResizeEngine::new(mode)
                .parallel(false)
                .resize(&source, 2.5, 1.5)
                .unwrap();
            let parallel = ResizeEngine::new(mode).resize(&source, 2.5, 1.5).unwrap();

            assert_eq!(sequential.grid, parallel.grid);
        }
    }
}
