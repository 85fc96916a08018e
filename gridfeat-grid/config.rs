use gridfeat_core::default_threads;

use crate::error::{GridError, GridResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Extraction settings, immutable for the lifetime of an extractor.
///
/// `num_features` is advisory: it sets the per-cell quota, but the actual
/// output can fall short (texture-poor cells) or overshoot slightly (the
/// quota rounds up so every cell may contribute at least one keypoint).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ExtractionConfig {
    /// Target total keypoint count across the whole image
    pub num_features: usize,
    /// Grid columns
    pub grid_x: usize,
    /// Grid rows
    pub grid_y: usize,
    /// Detector sensitivity, handed through to the primitive
    pub threshold: u8,
    /// Ask the primitive to suppress weaker nearby corners
    pub nonmax_suppression: bool,
    /// Worker threads for per-cell extraction
    pub n_threads: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            num_features: 200,
            grid_x: 5,
            grid_y: 5,
            threshold: 20,
            nonmax_suppression: true,
            n_threads: default_threads(),
        }
    }
}

impl ExtractionConfig {
    /// Preset for coarse, cheap extraction (tracking front-ends on a budget)
    pub fn sparse_preset() -> Self {
        Self {
            num_features: 100,
            grid_x: 4,
            grid_y: 3,
            threshold: 30,
            nonmax_suppression: true,
            n_threads: default_threads(),
        }
    }

    /// Preset for dense coverage on well-textured imagery
    pub fn dense_preset() -> Self {
        Self {
            num_features: 500,
            grid_x: 8,
            grid_y: 6,
            threshold: 15,
            nonmax_suppression: true,
            n_threads: default_threads(),
        }
    }

    /// Validate settings that can be checked without image dimensions
    pub fn validate(&self) -> GridResult<()> {
        if self.grid_x == 0 || self.grid_y == 0 {
            return Err(GridError::InvalidGridConfig {
                grid_x: self.grid_x,
                grid_y: self.grid_y,
                cell_width: 0,
                cell_height: 0,
            });
        }
        Ok(())
    }

    /// Generate human-readable summary
    pub fn summary(&self) -> String {
        format!(
            "ExtractionConfig: {} features over {}x{} grid, threshold={}, nonmax={}, threads={}",
            self.num_features,
            self.grid_x,
            self.grid_y,
            self.threshold,
            self.nonmax_suppression,
            self.n_threads
        )
    }

    /// Serialize to JSON string
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize from JSON string
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to JSON file
    #[cfg(feature = "serde")]
    pub fn save_json<P: AsRef<std::path::Path>>(&self, path: P) -> Result<(), Box<dyn std::error::Error>> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load configuration from JSON file
    #[cfg(feature = "serde")]
    pub fn load_json<P: AsRef<std::path::Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Serialize to TOML string
    #[cfg(feature = "serde")]
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Deserialize from TOML string
    #[cfg(feature = "serde")]
    pub fn from_toml(toml_str: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to TOML file
    #[cfg(feature = "serde")]
    pub fn save_toml<P: AsRef<std::path::Path>>(&self, path: P) -> Result<(), Box<dyn std::error::Error>> {
        let toml = toml::to_string_pretty(self)?;
        std::fs::write(path, toml)?;
        Ok(())
    }

    /// Load configuration from TOML file
    #[cfg(feature = "serde")]
    pub fn load_toml<P: AsRef<std::path::Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let cfg = ExtractionConfig::default();
        assert!(cfg.validate().is_ok());
        assert!(cfg.n_threads >= 1);
    }

    #[test]
    fn test_zero_grid_rejected() {
        let cfg = ExtractionConfig { grid_x: 0, ..Default::default() };
        assert!(matches!(cfg.validate(), Err(GridError::InvalidGridConfig { .. })));

        let cfg = ExtractionConfig { grid_y: 0, ..Default::default() };
        assert!(matches!(cfg.validate(), Err(GridError::InvalidGridConfig { .. })));
    }

    #[test]
    fn test_presets_differ() {
        let sparse = ExtractionConfig::sparse_preset();
        let dense = ExtractionConfig::dense_preset();
        assert!(sparse.num_features < dense.num_features);
        assert!(sparse.threshold > dense.threshold);
        assert!(sparse.validate().is_ok());
        assert!(dense.validate().is_ok());
    }

    #[test]
    fn test_summary_mentions_grid() {
        let summary = ExtractionConfig::default().summary();
        assert!(summary.contains("5x5"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_round_trip() {
        let cfg = ExtractionConfig::dense_preset();
        let json = cfg.to_json().unwrap();
        let back = ExtractionConfig::from_json(&json).unwrap();
        assert_eq!(cfg, back);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_toml_rejects_degenerate_grid() {
        let toml_str = r#"
num_features = 100
grid_x = 0
grid_y = 5
threshold = 20
nonmax_suppression = true
n_threads = 2
"#;
        assert!(ExtractionConfig::from_toml(toml_str).is_err());
    }
}
