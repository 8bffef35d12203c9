use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};

use raster_resize::cli::{CliArgs, Command, CompressionLevel, InfoArgs, ResizeArgs};
use raster_resize::config::{
    CompressConfig, LoadedConfig, ResizeConfig, make_relative, save_config,
};
use raster_resize::engine::{ResizeEngine, ResizeMode};
use raster_resize::error::RasterError;
use raster_resize::grid::{PixelGrid, ScaleFactors};
use raster_resize::output::{find_collisions, output_path, save_png};
use raster_resize::source::load_sources;

#[allow(clippy::print_stderr)]
fn main() {
    if let Err(e) = run() {
        // Use eprintln instead of error! because logger may not be initialized
        // (e.g., config loading fails before logger init)
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = CliArgs::parse();

    match &cli.command {
        Command::Resize(args) => run_resize(args),
        Command::Info(args) => run_info(args),
    }
}

fn init_logging(verbose: bool) {
    env_logger::Builder::new()
        .filter_level(if verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .format_timestamp(None)
        .format_target(false)
        .init();
}

fn run_info(args: &InfoArgs) -> Result<()> {
    init_logging(args.verbose);

    let sources = load_sources(&args.input)?;
    for source in &sources {
        info!(
            "{}: {} {} ({} bytes)",
            source.path.display(),
            source.extension,
            source.resolution(),
            source.file_size
        );
    }

    Ok(())
}

fn run_resize(args: &ResizeArgs) -> Result<()> {
    let merged = merge_config_with_args(args)?;

    init_logging(merged.verbose);

    info!("raster-resize v{}", env!("CARGO_PKG_VERSION"));

    if let Some(path) = &args.save_config {
        save_config(&merged.to_config(path), path)?;
        info!("Saved settings to {}", path.display());
    }

    let sources = load_sources(&merged.input)?;
    info!("Loaded {} images", sources.len());

    let engine = ResizeEngine::new(merged.mode).parallel(merged.parallel);

    let paths: Vec<PathBuf> = sources
        .iter()
        .map(|source| output_path(&merged.output, &source.name, &merged.suffix))
        .collect();
    for (earlier, later) in find_collisions(&paths) {
        warn!(
            "{} and {} both write {}; the later one wins",
            sources[earlier].path.display(),
            sources[later].path.display(),
            paths[later].display()
        );
    }

    for (source, path) in sources.iter().zip(&paths) {
        info!(
            "{}: {} {} ({} bytes)",
            source.name.display(),
            source.extension,
            source.resolution(),
            source.file_size
        );

        let outcome = engine
            .resize_with(&source.grid, merged.scale)
            .with_context(|| format!("failed to resize {}", source.path.display()))?;

        let Some(written) = write_outcome(&outcome.grid, path, merged.compress)? else {
            warn!(
                "{}: destination is {}x{}, nothing to save",
                source.path.display(),
                outcome.grid.width(),
                outcome.grid.height()
            );
            continue;
        };

        info!(
            "{} -> {}x{} in {} ms, saved {} ({} bytes)",
            merged.mode.label(),
            outcome.grid.width(),
            outcome.grid.height(),
            outcome.elapsed_millis(),
            path.display(),
            written
        );
    }

    info!("Done!");

    Ok(())
}

/// Save a resized grid, skipping empty grids since PNG cannot hold them.
/// Returns the bytes written, or `None` when nothing was saved.
fn write_outcome(
    grid: &PixelGrid,
    path: &Path,
    compress: Option<CompressionLevel>,
) -> Result<Option<u64>> {
    if grid.is_empty() {
        return Ok(None);
    }
    save_png(grid, path, compress).map(Some)
}

/// Merged configuration from CLI args and optional config file.
struct MergedConfig {
    input: Vec<PathBuf>,
    output: PathBuf,
    mode: ResizeMode,
    scale: ScaleFactors,
    suffix: String,
    parallel: bool,
    compress: Option<CompressionLevel>,
    verbose: bool,
}

impl MergedConfig {
    /// Config file contents reproducing these settings, with paths relative
    /// to the directory `path` will be written to.
    fn to_config(&self, path: &Path) -> ResizeConfig {
        let base = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let base = std::path::absolute(base).unwrap_or_else(|_| base.to_path_buf());
        let relative = |p: &Path| {
            let absolute = std::path::absolute(p).unwrap_or_else(|_| p.to_path_buf());
            make_relative(&absolute, &base)
        };

        ResizeConfig {
            input: self.input.iter().map(|p| relative(p.as_path())).collect(),
            output_dir: relative(self.output.as_path()),
            mode: self.mode.name().to_string(),
            scale_x: Some(self.scale.x()),
            scale_y: Some(self.scale.y()),
            suffix: self.suffix.clone(),
            parallel: self.parallel,
            compress: self.compress.map(|c| match c {
                CompressionLevel::Level(n) => CompressConfig::Level(n),
                CompressionLevel::Max => CompressConfig::Max("max".to_string()),
            }),
            ..ResizeConfig::default()
        }
    }
}

/// Merge config file values with CLI arguments.
/// CLI arguments always take precedence over config values.
fn merge_config_with_args(args: &ResizeArgs) -> Result<MergedConfig> {
    let loaded_config = if let Some(config_path) = &args.config {
        Some(
            LoadedConfig::load(config_path)
                .with_context(|| format!("failed to load config: {}", config_path.display()))?,
        )
    } else {
        None
    };

    // Determine input files: CLI args override config
    let input = if !args.input.is_empty() {
        args.input.clone()
    } else if let Some(ref lc) = loaded_config {
        lc.resolve_inputs()
            .context("failed to resolve input files from config")?
    } else {
        // This shouldn't happen due to clap's required_unless_present
        Vec::new()
    };

    // Determine output directory: CLI > config > default
    let output = args.output.clone().unwrap_or_else(|| {
        loaded_config
            .as_ref()
            .map(|lc| lc.resolve_output_dir())
            .unwrap_or_else(|| PathBuf::from("."))
    });

    // Mode: CLI > config > default
    let mode = if let Some(m) = args.mode {
        m
    } else if let Some(ref lc) = loaded_config {
        ResizeMode::parse(&lc.config.mode).ok_or_else(|| {
            anyhow::anyhow!(
                "unknown mode '{}' in config file. Valid values: nearest, k-times, bilinear",
                lc.config.mode
            )
        })?
    } else {
        ResizeMode::NearestNeighbor
    };

    // Scale: any CLI factor overrides the config factors; a missing axis is 1
    let cli_x = args.scale_x.or(args.scale);
    let cli_y = args.scale_y.or(args.scale);
    let (scale_x, scale_y) = if cli_x.is_some() || cli_y.is_some() {
        (cli_x, cli_y)
    } else if let Some(ref lc) = loaded_config {
        (lc.config.scale_x, lc.config.scale_y)
    } else {
        (None, None)
    };
    if scale_x.is_none() && scale_y.is_none() {
        return Err(RasterError::MissingScaleFactor.into());
    }
    let scale = ScaleFactors::new(scale_x.unwrap_or(1.0), scale_y.unwrap_or(1.0))?;

    let suffix = args.suffix.clone().unwrap_or_else(|| {
        loaded_config
            .as_ref()
            .map(|lc| lc.config.suffix.clone())
            .unwrap_or_else(|| ResizeConfig::default().suffix)
    });

    // Sequential flag: CLI presence forces it, otherwise use config
    let parallel = if args.sequential {
        false
    } else if let Some(ref lc) = loaded_config {
        lc.config.parallel
    } else {
        true
    };

    // Compress: CLI option overrides config
    let compress = if args.compress.is_some() {
        args.compress
    } else if let Some(ref lc) = loaded_config {
        match &lc.config.compress {
            Some(CompressConfig::Level(n)) if *n <= 6 => Some(CompressionLevel::Level(*n)),
            Some(CompressConfig::Max(s)) if s.eq_ignore_ascii_case("max") => {
                Some(CompressionLevel::Max)
            }
            Some(other) => {
                return Err(anyhow::anyhow!(
                    "invalid compress value {:?} in config file. Valid values: 0-6, \"max\"",
                    other
                ));
            }
            None => None,
        }
    } else {
        None
    };

    Ok(MergedConfig {
        input,
        output,
        mode,
        scale,
        suffix,
        parallel,
        compress,
        verbose: args.verbose,
    })
}
