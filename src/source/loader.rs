use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use image::ImageReader;
use log::info;
use rayon::prelude::*;

use super::SourceImage;
use crate::error::RasterError;
use crate::grid::PixelGrid;

const SUPPORTED_EXTENSIONS: &[&str] = &["bmp", "jpg", "jpeg", "png"];

/// Image path with its base directory for computing relative names
struct ImagePath {
    path: PathBuf,
    base: Option<PathBuf>,
}

/// Load source images from input paths (files or directories)
///
/// Directories are searched recursively and their images are named relative
/// to the directory, so output can mirror the input tree. File inputs are
/// named by their file name.
pub fn load_sources(inputs: &[impl AsRef<Path>]) -> Result<Vec<SourceImage>> {
    let image_paths = collect_image_paths(inputs)?;

    if image_paths.is_empty() {
        return Err(RasterError::NoImages.into());
    }

    info!("Loading {} images...", image_paths.len());

    image_paths
        .par_iter()
        .map(|img_path| load_single_image(&img_path.path, img_path.base.as_deref()))
        .collect()
}

/// Load a single image file
pub fn load_source(path: &Path) -> Result<SourceImage> {
    if !path.exists() {
        return Err(RasterError::InputNotFound(path.to_path_buf()).into());
    }
    load_single_image(path, None)
}

fn collect_image_paths(inputs: &[impl AsRef<Path>]) -> Result<Vec<ImagePath>> {
    let mut paths = Vec::new();

    for input in inputs {
        let path = input.as_ref();
        if !path.exists() {
            return Err(RasterError::InputNotFound(path.to_path_buf()).into());
        }

        if path.is_file() {
            if is_supported_image(path) {
                paths.push(ImagePath {
                    path: path.to_path_buf(),
                    base: None,
                });
            }
        } else if path.is_dir() {
            collect_from_directory(path, path, &mut paths)?;
        }
    }

    Ok(paths)
}

fn collect_from_directory(base: &Path, dir: &Path, paths: &mut Vec<ImagePath>) -> Result<()> {
    let mut entries = std::fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory {}", dir.display()))?
        .collect::<std::io::Result<Vec<_>>>()?;
    entries.sort_by_key(|entry| entry.path());

    for entry in entries {
        let path = entry.path();

        if path.is_file() && is_supported_image(&path) {
            paths.push(ImagePath {
                path,
                base: Some(base.to_path_buf()),
            });
        } else if path.is_dir() {
            collect_from_directory(base, &path, paths)?;
        }
    }

    Ok(())
}

fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| SUPPORTED_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

fn load_single_image(path: &Path, base: Option<&Path>) -> Result<SourceImage> {
    let image = ImageReader::open(path)
        .map_err(|e| RasterError::ImageLoad {
            path: path.to_path_buf(),
            source: e.into(),
        })?
        .with_guessed_format()
        .map_err(|e| RasterError::ImageLoad {
            path: path.to_path_buf(),
            source: e.into(),
        })?
        .decode()
        .map_err(|e| RasterError::ImageLoad {
            path: path.to_path_buf(),
            source: e,
        })?
        .into_rgb8();

    let file_size = std::fs::metadata(path)
        .with_context(|| format!("Failed to read metadata of {}", path.display()))?
        .len();

    // Relative path for directory inputs, bare file name otherwise
    let name = match base {
        Some(base_dir) => path.strip_prefix(base_dir).unwrap_or(path).to_path_buf(),
        None => path
            .file_name()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("unknown")),
    };

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{}", ext.to_lowercase()))
        .unwrap_or_default();

    Ok(SourceImage {
        path: path.to_path_buf(),
        name,
        extension,
        file_size,
        grid: PixelGrid::from(image),
    })
}
