use gridfeat_core::CornerDetector;

use crate::config::ExtractionConfig;
use crate::error::GridResult;
use crate::extractor::GridExtractor;

/// Fluent builder for a [`GridExtractor`]
#[derive(Debug, Clone)]
pub struct ExtractorBuilder {
    config: ExtractionConfig,
    width: usize,
    height: usize,
}

impl ExtractorBuilder {
    /// Create a new builder with default settings for the given image size
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            config: ExtractionConfig::default(),
            width,
            height,
        }
    }

    /// Create a builder from an existing configuration
    pub fn from_config(config: ExtractionConfig, width: usize, height: usize) -> Self {
        Self { config, width, height }
    }

    /// Set the target total feature count
    pub fn num_features(mut self, num_features: usize) -> Self {
        self.config.num_features = num_features;
        self
    }

    /// Set the grid resolution (columns x rows)
    pub fn grid(mut self, grid_x: usize, grid_y: usize) -> Self {
        self.config.grid_x = grid_x;
        self.config.grid_y = grid_y;
        self
    }

    /// Set the detector threshold
    pub fn threshold(mut self, threshold: u8) -> Self {
        self.config.threshold = threshold;
        self
    }

    /// Enable or disable non-max suppression in the primitive
    pub fn nonmax_suppression(mut self, enable: bool) -> Self {
        self.config.nonmax_suppression = enable;
        self
    }

    /// Set the number of threads for per-cell extraction
    pub fn threads(mut self, n_threads: usize) -> Self {
        self.config.n_threads = n_threads;
        self
    }

    /// Apply the sparse preset
    pub fn preset_sparse(mut self) -> Self {
        self.config = ExtractionConfig::sparse_preset();
        self
    }

    /// Apply the dense preset
    pub fn preset_dense(mut self) -> Self {
        self.config = ExtractionConfig::dense_preset();
        self
    }

    /// Generate a summary of the builder's configuration
    pub fn summary(&self) -> String {
        format!("{} for {}x{} image", self.config.summary(), self.width, self.height)
    }

    /// Convert the builder into its configuration
    pub fn to_config(self) -> ExtractionConfig {
        self.config
    }

    /// Build a [`GridExtractor`] around the given detection primitive
    pub fn build_with<D: CornerDetector>(self, detector: D) -> GridResult<GridExtractor<D>> {
        GridExtractor::new(self.config, self.width, self.height, detector)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }
}
