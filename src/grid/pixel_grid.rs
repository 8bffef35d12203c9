use image::{Rgb, RgbImage};

use crate::error::RasterError;

/// Color of destination pixels that no resampler writes to
pub const BACKGROUND: Rgb<u8> = Rgb([0, 0, 0]);

/// Row-major grid of RGB samples
///
/// Dimensions are fixed at construction and the samples are never mutated
/// afterwards. Every read goes through [`PixelGrid::get`], which rejects
/// coordinates outside the grid instead of clamping them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    samples: Vec<Rgb<u8>>,
}

impl PixelGrid {
    /// Create a grid filled with [`BACKGROUND`]
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, BACKGROUND)
    }

    /// Create a grid filled with a single color
    pub fn filled(width: u32, height: u32, color: Rgb<u8>) -> Self {
        let len = width as usize * height as usize;
        Self {
            width,
            height,
            samples: vec![color; len],
        }
    }

    /// Wrap a row-major sample buffer
    pub fn from_samples(
        width: u32,
        height: u32,
        samples: Vec<Rgb<u8>>,
    ) -> Result<Self, RasterError> {
        let expected = width as usize * height as usize;
        if samples.len() != expected {
            return Err(RasterError::SampleCountMismatch {
                width,
                height,
                expected,
                actual: samples.len(),
            });
        }

        Ok(Self {
            width,
            height,
            samples,
        })
    }

    /// Build a grid from a generator called once per pixel in row-major order
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> Rgb<u8>) -> Self {
        let mut samples = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                samples.push(f(x, y));
            }
        }

        Self {
            width,
            height,
            samples,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// True when the grid holds no pixels
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[Rgb<u8>] {
        &self.samples
    }

    /// Read the sample at `(x, y)`
    pub fn get(&self, x: u32, y: u32) -> Result<Rgb<u8>, RasterError> {
        if x >= self.width || y >= self.height {
            return Err(RasterError::OutOfRangeAccess {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }

        Ok(self.samples[y as usize * self.width as usize + x as usize])
    }

    /// Copy into an `image` buffer for encoding
    pub fn to_rgb_image(&self) -> RgbImage {
        let width = self.width as usize;
        RgbImage::from_fn(self.width, self.height, |x, y| {
            self.samples[y as usize * width + x as usize]
        })
    }
}

impl From<&RgbImage> for PixelGrid {
    fn from(image: &RgbImage) -> Self {
        let (width, height) = image.dimensions();
        Self {
            width,
            height,
            samples: image.pixels().copied().collect(),
        }
    }
}

impl From<RgbImage> for PixelGrid {
    fn from(image: RgbImage) -> Self {
        Self::from(&image)
    }
}
