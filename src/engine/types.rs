use std::time::Duration;

use clap::ValueEnum;

use crate::error::RasterError;
use crate::grid::{PixelGrid, ScaleFactors};
use crate::resample::{bilinear, k_times, nearest_neighbor};

/// Resampling strategy
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq, Hash)]
pub enum ResizeMode {
    /// Copy the nearest source pixel (best for pixel art)
    #[default]
    #[value(name = "nearest", alias = "knn")]
    NearestNeighbor,
    /// Nearest column, banded blend between neighbouring rows
    #[value(name = "k-times", alias = "ktimes")]
    KTimes,
    /// Blend the four surrounding source pixels
    #[value(name = "bilinear", alias = "bli")]
    BilinearInterpolation,
}

impl ResizeMode {
    pub const ALL: [ResizeMode; 3] = [
        ResizeMode::NearestNeighbor,
        ResizeMode::KTimes,
        ResizeMode::BilinearInterpolation,
    ];

    /// Short display label
    pub fn label(self) -> &'static str {
        match self {
            ResizeMode::NearestNeighbor => "KNN",
            ResizeMode::KTimes => "K-times",
            ResizeMode::BilinearInterpolation => "BLI",
        }
    }

    /// Parse the names accepted on the command line and in config files
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "nearest" | "knn" => Some(ResizeMode::NearestNeighbor),
            "k-times" | "ktimes" => Some(ResizeMode::KTimes),
            "bilinear" | "bli" => Some(ResizeMode::BilinearInterpolation),
            _ => None,
        }
    }

    /// Canonical name, as written to config files
    pub fn name(self) -> &'static str {
        match self {
            ResizeMode::NearestNeighbor => "nearest",
            ResizeMode::KTimes => "k-times",
            ResizeMode::BilinearInterpolation => "bilinear",
        }
    }

    pub(crate) fn resample(
        self,
        source: &PixelGrid,
        scale: ScaleFactors,
        parallel: bool,
    ) -> Result<PixelGrid, RasterError> {
        match self {
            ResizeMode::NearestNeighbor => nearest_neighbor(source, scale, parallel),
            ResizeMode::KTimes => k_times(source, scale, parallel),
            ResizeMode::BilinearInterpolation => bilinear(source, scale, parallel),
        }
    }
}

/// A finished resize
#[derive(Debug)]
pub struct ResizeOutcome {
    /// Freshly built destination grid
    pub grid: PixelGrid,
    /// Wall-clock time spent in the resampler
    pub elapsed: Duration,
}

impl ResizeOutcome {
    pub fn elapsed_millis(&self) -> u128 {
        self.elapsed.as_millis()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names_and_aliases() {
        assert_eq!(ResizeMode::parse("nearest"), Some(ResizeMode::NearestNeighbor));
        assert_eq!(ResizeMode::parse("KNN"), Some(ResizeMode::NearestNeighbor));
        assert_eq!(ResizeMode::parse("k-times"), Some(ResizeMode::KTimes));
        assert_eq!(ResizeMode::parse("BLI"), Some(ResizeMode::BilinearInterpolation));
        assert_eq!(ResizeMode::parse("lanczos3"), None);
    }

    #[test]
    fn test_value_enum_accepts_config_names() {
        for name in ["nearest", "knn", "k-times", "ktimes", "bilinear", "bli"] {
            assert_eq!(
                ResizeMode::from_str(name, true).ok(),
                ResizeMode::parse(name),
                "{name}"
            );
        }
    }

    #[test]
    fn test_name_round_trips_through_parse() {
        for mode in ResizeMode::ALL {
            assert_eq!(ResizeMode::parse(mode.name()), Some(mode));
        }
    }
}
