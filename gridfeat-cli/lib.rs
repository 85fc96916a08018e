use gridfeat_core::{init_thread_pool, Image, Keypoint};
use gridfeat_fast::FastCorners;
use gridfeat_grid::{ExtractionConfig, GridError, GridExtractor};

pub use gridfeat_core::{self, Image as GridImage, Keypoint as GridKeypoint};
pub use gridfeat_grid::{self, ExtractionConfig as Config};

#[derive(Debug)]
pub enum GridFastError {
    Grid(GridError),
    ThreadPool(rayon::ThreadPoolBuildError),
}

impl std::fmt::Display for GridFastError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GridFastError::Grid(e) => write!(f, "Grid extraction error: {}", e),
            GridFastError::ThreadPool(e) => write!(f, "Thread pool error: {}", e),
        }
    }
}

impl std::error::Error for GridFastError {}

impl From<GridError> for GridFastError {
    fn from(err: GridError) -> Self {
        GridFastError::Grid(err)
    }
}

impl From<rayon::ThreadPoolBuildError> for GridFastError {
    fn from(err: rayon::ThreadPoolBuildError) -> Self {
        GridFastError::ThreadPool(err)
    }
}

pub type GridFastResult<T> = Result<T, GridFastError>;

/// High-level extractor that wires the FAST primitive into the grid
pub struct GridFast {
    extractor: GridExtractor<FastCorners>,
}

impl GridFast {
    /// Create a new extractor with the given configuration and image dimensions
    pub fn new(cfg: ExtractionConfig, width: usize, height: usize) -> GridFastResult<Self> {
        // Initialize thread pool
        init_thread_pool(cfg.n_threads)?;

        let extractor = GridExtractor::new(cfg, width, height, FastCorners::new())?;

        Ok(Self { extractor })
    }

    /// Extract grid-distributed keypoints in full-image coordinates
    pub fn extract(&self, img: &Image) -> GridFastResult<Vec<Keypoint>> {
        Ok(self.extractor.extract(img)?)
    }

    /// Get extraction configuration
    pub fn config(&self) -> &ExtractionConfig {
        self.extractor.config()
    }

    /// Get image dimensions
    pub fn dimensions(&self) -> (usize, usize) {
        self.extractor.dimensions()
    }

    /// Get cell dimensions in pixels
    pub fn cell_size(&self) -> (usize, usize) {
        self.extractor.cell_size()
    }

    /// Get the per-cell keypoint quota
    pub fn quota(&self) -> usize {
        self.extractor.quota()
    }
}
