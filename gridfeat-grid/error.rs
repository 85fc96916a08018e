use gridfeat_core::DetectionError;

#[derive(Debug, Clone, PartialEq)]
pub enum GridError {
    InvalidImageSize { width: usize, height: usize },
    InvalidGridConfig { grid_x: usize, grid_y: usize, cell_width: usize, cell_height: usize },
    InvalidImageData { expected_len: usize, actual_len: usize },
    Detection(DetectionError),
}

impl std::fmt::Display for GridError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GridError::InvalidImageSize { width, height } => {
                write!(f, "Invalid image dimensions: {}x{} (must be > 0)", width, height)
            }
            GridError::InvalidGridConfig { grid_x, grid_y, cell_width, cell_height } => {
                write!(
                    f,
                    "Grid {}x{} degenerates to {}x{} pixel cells (both sides must be > 0)",
                    grid_x, grid_y, cell_width, cell_height
                )
            }
            GridError::InvalidImageData { expected_len, actual_len } => {
                write!(f, "Image data length mismatch: expected {}, got {}", expected_len, actual_len)
            }
            GridError::Detection(e) => {
                write!(f, "Corner detection failed: {}", e)
            }
        }
    }
}

impl std::error::Error for GridError {}

impl From<DetectionError> for GridError {
    fn from(err: DetectionError) -> Self {
        GridError::Detection(err)
    }
}

pub type GridResult<T> = Result<T, GridError>;
