pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod grid;
pub mod output;
pub mod resample;
pub mod source;

pub use cli::{CliArgs, Command, CompressionLevel, ResizeArgs};
pub use engine::{ResizeEngine, ResizeMode, ResizeOutcome, resize};
pub use error::RasterError;
pub use grid::{PixelGrid, ScaleFactors, compute_destination_size};
pub use source::SourceImage;
