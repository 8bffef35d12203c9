use std::collections::HashMap;
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use anyhow::Result;
use image::ImageFormat;

use crate::cli::CompressionLevel;
use crate::error::RasterError;
use crate::grid::PixelGrid;

/// Save a grid as PNG, optionally recompressed with oxipng
///
/// Parent directories are created as needed. Returns the number of bytes
/// written.
pub fn save_png(grid: &PixelGrid, path: &Path, compress: Option<CompressionLevel>) -> Result<u64> {
    // Encode to PNG in memory
    let mut png_data = Cursor::new(Vec::new());
    grid.to_rgb_image()
        .write_to(&mut png_data, ImageFormat::Png)
        .map_err(|e| RasterError::ImageSave {
            path: path.to_path_buf(),
            source: e,
        })?;

    let output_data = if let Some(level) = compress {
        let opts = match level {
            CompressionLevel::Level(n) => oxipng::Options::from_preset(n),
            CompressionLevel::Max => oxipng::Options::max_compression(),
        };
        oxipng::optimize_from_memory(&png_data.into_inner(), &opts).map_err(|e| {
            RasterError::PngCompress {
                path: path.to_path_buf(),
                message: e.to_string(),
            }
        })?
    } else {
        png_data.into_inner()
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| RasterError::OutputWrite {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    fs::write(path, &output_data).map_err(|e| RasterError::OutputWrite {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(output_data.len() as u64)
}

/// Output location for an image named `name`: `<dir>/<name stem><suffix>.png`
///
/// Subdirectories in `name` are kept.
pub fn output_path(output_dir: &Path, name: &Path, suffix: &str) -> PathBuf {
    let stem = name
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());
    let file_name = format!("{}{}.png", stem, suffix);

    match name.parent() {
        Some(parent) => output_dir.join(parent).join(file_name),
        None => output_dir.join(file_name),
    }
}

/// Pairs `(earlier, later)` of indices into `paths` that name the same file
///
/// Each later index is paired with the first index that used the path.
pub fn find_collisions(paths: &[PathBuf]) -> Vec<(usize, usize)> {
    let mut first_use: HashMap<&Path, usize> = HashMap::new();
    let mut collisions = Vec::new();

    for (index, path) in paths.iter().enumerate() {
        match first_use.get(path.as_path()) {
            Some(&earlier) => collisions.push((earlier, index)),
            None => {
                first_use.insert(path.as_path(), index);
            }
        }
    }

    collisions
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageReader, Rgb};

    #[test]
    fn test_output_path_flat() {
        let path = output_path(Path::new("out"), Path::new("photo.jpg"), "_2x");
        assert_eq!(path, PathBuf::from("out").join("photo_2x.png"));
    }

    #[test]
    fn test_output_path_keeps_subdirectories() {
        let name = PathBuf::from("scans").join("page.bmp");
        let path = output_path(Path::new("out"), &name, "");
        assert_eq!(path, PathBuf::from("out").join("scans").join("page.png"));
    }

    #[test]
    fn test_same_stem_inputs_collide() {
        let paths: Vec<PathBuf> = ["scan.png", "scan.jpg", "cover.bmp", "scan.bmp"]
            .iter()
            .map(|name| output_path(Path::new("out"), Path::new(name), "_resized"))
            .collect();

        assert_eq!(find_collisions(&paths), vec![(0, 1), (0, 3)]);
    }

    #[test]
    fn test_distinct_outputs_do_not_collide() {
        let paths = vec![
            output_path(Path::new("out"), Path::new("a.png"), ""),
            output_path(Path::new("out"), &PathBuf::from("sub").join("a.png"), ""),
        ];

        assert!(find_collisions(&paths).is_empty());
    }

    #[test]
    fn test_save_png_round_trip() {
        let dir = std::env::temp_dir().join(format!("raster-resize-format-{}", std::process::id()));
        let path = dir.join("nested").join("grid.png");
        let grid = PixelGrid::from_fn(3, 2, |x, y| Rgb([x as u8 * 80, y as u8 * 120, 5]));

        let written = save_png(&grid, &path, None).unwrap();

        assert_eq!(written, fs::metadata(&path).unwrap().len());
        let decoded = ImageReader::open(&path).unwrap().decode().unwrap().into_rgb8();
        assert_eq!(PixelGrid::from(decoded), grid);

        fs::remove_dir_all(&dir).unwrap();
    }
}
