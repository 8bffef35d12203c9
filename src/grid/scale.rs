use crate::error::RasterError;

/// Independent horizontal and vertical scale factors
///
/// Both factors are finite and strictly positive; construction fails otherwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleFactors {
    x: f64,
    y: f64,
}

impl ScaleFactors {
    pub fn new(x: f64, y: f64) -> Result<Self, RasterError> {
        Ok(Self {
            x: validate("horizontal", x)?,
            y: validate("vertical", y)?,
        })
    }

    /// Same factor on both axes
    pub fn uniform(factor: f64) -> Result<Self, RasterError> {
        Self::new(factor, factor)
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    /// Destination size for a source of the given size
    ///
    /// Each side is truncated toward zero, so a side may come out as 0. That
    /// is an empty result, not an error.
    pub fn destination_size(
        &self,
        source_width: u32,
        source_height: u32,
    ) -> Result<(u32, u32), RasterError> {
        let width = (f64::from(source_width) * self.x).trunc();
        let height = (f64::from(source_height) * self.y).trunc();

        let too_large = RasterError::DestinationTooLarge { width, height };
        if width > f64::from(u32::MAX) || height > f64::from(u32::MAX) {
            return Err(too_large);
        }

        let (width, height) = (width as u32, height as u32);
        if (width as usize).checked_mul(height as usize).is_none() {
            return Err(too_large);
        }

        Ok((width, height))
    }
}

fn validate(axis: &'static str, value: f64) -> Result<f64, RasterError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(RasterError::InvalidScaleFactor { axis, value })
    }
}

/// Validate the factors and compute `(trunc(w * coef_x), trunc(h * coef_y))`
pub fn compute_destination_size(
    source_width: u32,
    source_height: u32,
    coef_x: f64,
    coef_y: f64,
) -> Result<(u32, u32), RasterError> {
    ScaleFactors::new(coef_x, coef_y)?.destination_size(source_width, source_height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_destination_size_truncates() {
        assert_eq!(compute_destination_size(10, 10, 1.5, 1.5).unwrap(), (15, 15));
        assert_eq!(compute_destination_size(10, 10, 0.33, 0.33).unwrap(), (3, 3));
        assert_eq!(compute_destination_size(7, 3, 2.0, 0.5).unwrap(), (14, 1));
    }

    #[test]
    fn test_independent_axes() {
        assert_eq!(compute_destination_size(10, 20, 3.0, 1.0).unwrap(), (30, 20));
        assert_eq!(compute_destination_size(10, 20, 1.0, 0.25).unwrap(), (10, 5));
    }

    #[test]
    fn test_zero_sized_result_is_valid() {
        assert_eq!(compute_destination_size(3, 3, 0.1, 0.1).unwrap(), (0, 0));
        assert_eq!(compute_destination_size(10, 1, 1.0, 0.5).unwrap(), (10, 0));
    }

    #[test]
    fn test_invalid_factors_rejected() {
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(matches!(
                ScaleFactors::new(bad, 1.0),
                Err(RasterError::InvalidScaleFactor {
                    axis: "horizontal",
                    ..
                })
            ));
            assert!(matches!(
                ScaleFactors::new(1.0, bad),
                Err(RasterError::InvalidScaleFactor {
                    axis: "vertical",
                    ..
                })
            ));
        }
    }

    #[test]
    fn test_destination_too_large() {
        let result = compute_destination_size(u32::MAX, 1, 2.0, 1.0);

        assert!(matches!(
            result,
            Err(RasterError::DestinationTooLarge { .. })
        ));
    }

    #[test]
    fn test_uniform() {
        let scale = ScaleFactors::uniform(2.5).unwrap();

        assert_eq!(scale.x(), 2.5);
        assert_eq!(scale.y(), 2.5);
    }
}
