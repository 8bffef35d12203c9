use std::path::PathBuf;

use crate::grid::PixelGrid;

/// A decoded input image
#[derive(Debug, Clone)]
pub struct SourceImage {
    /// Original file path
    pub path: PathBuf,
    /// Path relative to the input directory, or the bare file name
    pub name: PathBuf,
    /// Lowercase extension with leading dot (".png"), empty if none
    pub extension: String,
    /// Size of the encoded file in bytes
    pub file_size: u64,
    /// Decoded RGB samples
    pub grid: PixelGrid,
}

impl SourceImage {
    pub fn width(&self) -> u32 {
        self.grid.width()
    }

    pub fn height(&self) -> u32 {
        self.grid.height()
    }

    /// Resolution formatted as `WIDTHxHEIGHT`
    pub fn resolution(&self) -> String {
        format!("{}x{}", self.width(), self.height())
    }
}
