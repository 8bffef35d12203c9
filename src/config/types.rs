use serde::{Deserialize, Serialize};

/// PNG compression level configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CompressConfig {
    /// Optimization level 0-6
    Level(u8),
    /// Maximum compression ("max")
    Max(String),
}

/// Resize job configuration file structure.
///
/// All paths in the config are relative to the config file location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResizeConfig {
    /// Config file version (currently 1)
    pub version: u32,
    /// Input file paths, directories or glob patterns
    pub input: Vec<String>,
    /// Output directory for resized images
    pub output_dir: String,
    /// Resampling mode: "nearest", "k-times" or "bilinear"
    pub mode: String,
    /// Horizontal scale factor
    pub scale_x: Option<f64>,
    /// Vertical scale factor
    pub scale_y: Option<f64>,
    /// Appended to each output file stem
    pub suffix: String,
    /// Fill destination rows in parallel
    pub parallel: bool,
    /// PNG compression configuration (optional)
    pub compress: Option<CompressConfig>,
}

impl Default for ResizeConfig {
    fn default() -> Self {
        Self {
            version: 1,
            input: Vec::new(),
            output_dir: ".".to_string(),
            mode: "nearest".to_string(),
            scale_x: None,
            scale_y: None,
            suffix: "_resized".to_string(),
            parallel: true,
            compress: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: ResizeConfig =
            serde_json::from_str(r#"{ "input": ["*.png"], "scale_x": 2.0 }"#).unwrap();

        assert_eq!(config.version, 1);
        assert_eq!(config.input, vec!["*.png".to_string()]);
        assert_eq!(config.scale_x, Some(2.0));
        assert_eq!(config.scale_y, None);
        assert_eq!(config.mode, "nearest");
        assert!(config.parallel);
    }

    #[test]
    fn test_compress_forms() {
        let level: ResizeConfig = serde_json::from_str(r#"{ "compress": 4 }"#).unwrap();
        let max: ResizeConfig = serde_json::from_str(r#"{ "compress": "max" }"#).unwrap();

        assert_eq!(level.compress, Some(CompressConfig::Level(4)));
        assert_eq!(max.compress, Some(CompressConfig::Max("max".to_string())));
    }
}
