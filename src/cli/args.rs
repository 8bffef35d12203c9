use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::engine::ResizeMode;

#[derive(Parser, Debug)]
#[command(name = "raster-resize")]
#[command(version, about = "Raster image resizer", long_about = None)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Resize images and save them as PNG
    Resize(ResizeArgs),
    /// Show extension, resolution and file size of images
    Info(InfoArgs),
}

#[derive(Args, Debug, Clone)]
pub struct ResizeArgs {
    /// Input image files or directories
    #[arg(required_unless_present = "config")]
    pub input: Vec<PathBuf>,

    /// Load settings from a JSON config file
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output directory for resized images [default: .]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Resampling mode [default: nearest]
    #[arg(short, long, value_enum)]
    pub mode: Option<ResizeMode>,

    /// Scale factor for both axes
    #[arg(short, long, value_name = "FACTOR")]
    pub scale: Option<f64>,

    /// Horizontal scale factor (vertical stays 1 unless given)
    #[arg(long, value_name = "FACTOR")]
    pub scale_x: Option<f64>,

    /// Vertical scale factor (horizontal stays 1 unless given)
    #[arg(long, value_name = "FACTOR")]
    pub scale_y: Option<f64>,

    /// Text appended to each output file name [default: _resized]
    #[arg(long)]
    pub suffix: Option<String>,

    /// Fill destination rows on a single thread
    #[arg(long)]
    pub sequential: bool,

    /// Compress PNG output (0-6 or 'max'). Default level is 2 if flag is present without value.
    #[arg(long, value_name = "LEVEL", default_missing_value = "2", num_args = 0..=1)]
    pub compress: Option<CompressionLevel>,

    /// Write the effective settings to a config file
    #[arg(long, value_name = "FILE")]
    pub save_config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Args, Debug, Clone)]
pub struct InfoArgs {
    /// Input image files or directories
    #[arg(required = true)]
    pub input: Vec<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// PNG compression level (0-6 or max)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionLevel {
    /// Optimization level 0-6
    Level(u8),
    /// Maximum compression
    Max,
}

impl std::str::FromStr for CompressionLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("max") {
            Ok(CompressionLevel::Max)
        } else {
            s.parse::<u8>()
                .map_err(|_e| format!("invalid compression level: {}", s))
                .and_then(|n| {
                    if n <= 6 {
                        Ok(CompressionLevel::Level(n))
                    } else {
                        Err(format!("compression level must be 0-6 or 'max', got {}", n))
                    }
                })
        }
    }
}

impl Default for CompressionLevel {
    fn default() -> Self {
        CompressionLevel::Level(2)
    }
}
