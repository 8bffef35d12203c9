use std::path::Path;

use anyhow::{Context, Result};

use super::types::ResizeConfig;

/// Save a config to a JSON file with pretty formatting.
pub fn save_config(config: &ResizeConfig, path: &Path) -> Result<()> {
    let content = serde_json::to_string_pretty(config)
        .with_context(|| "failed to serialize config to JSON")?;

    std::fs::write(path, content)
        .with_context(|| format!("failed to write config file: {}", path.display()))?;

    Ok(())
}

/// Convert a path to a path relative to the base directory.
///
/// If the path cannot be made relative (e.g., different drive on Windows),
/// returns the original path as a string.
pub fn make_relative(path: &Path, base: &Path) -> String {
    if let Ok(relative) = path.strip_prefix(base) {
        relative.to_string_lossy().into_owned()
    } else {
        path.to_string_lossy().into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LoadedConfig;
    use std::path::PathBuf;

    #[test]
    fn test_make_relative_same_dir() {
        let path = PathBuf::from("/project/photos/cat.png");
        let base = PathBuf::from("/project");
        assert_eq!(make_relative(&path, &base), "photos/cat.png");
    }

    #[test]
    fn test_make_relative_not_prefix() {
        let path = PathBuf::from("/other/photos/cat.png");
        let base = PathBuf::from("/project");
        assert_eq!(make_relative(&path, &base), "/other/photos/cat.png");
    }

    #[test]
    fn test_save_then_load() {
        let path = std::env::temp_dir().join(format!(
            "raster-resize-config-{}.json",
            std::process::id()
        ));
        let config = ResizeConfig {
            input: vec!["photos/*.png".to_string()],
            mode: "bilinear".to_string(),
            scale_x: Some(1.5),
            scale_y: Some(0.5),
            suffix: "_small".to_string(),
            ..ResizeConfig::default()
        };

        save_config(&config, &path).unwrap();
        let loaded = LoadedConfig::load(&path).unwrap();

        assert_eq!(loaded.config, config);
        std::fs::remove_file(&path).unwrap();
    }
}
