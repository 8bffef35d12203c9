use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RasterError {
    #[error("Invalid {axis} scale factor {value}: must be finite and greater than zero")]
    InvalidScaleFactor { axis: &'static str, value: f64 },

    #[error(
        "Source image ({width}x{height}) is too small for bilinear interpolation: both sides must be at least 2 pixels"
    )]
    DegenerateSource { width: u32, height: u32 },

    #[error("Pixel ({x}, {y}) is outside the {width}x{height} source grid")]
    OutOfRangeAccess {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    #[error("Destination size {width}x{height} is too large")]
    DestinationTooLarge { width: f64, height: f64 },

    #[error("Grid of {width}x{height} needs {expected} samples, got {actual}")]
    SampleCountMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    #[error("No scale factor given: use --scale, --scale-x or --scale-y")]
    MissingScaleFactor,

    #[error("Failed to load image '{path}': {source}")]
    ImageLoad {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Failed to save image '{path}': {source}")]
    ImageSave {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("No valid images found in input")]
    NoImages,

    #[error("Failed to write output file '{path}': {source}")]
    OutputWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to compress PNG '{path}': {message}")]
    PngCompress { path: PathBuf, message: String },

    #[error("Input path does not exist: {0}")]
    InputNotFound(PathBuf),
}
