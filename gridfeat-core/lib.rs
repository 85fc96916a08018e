/// Row-major 8-bit grayscale image
pub type Image = Vec<u8>;

/// Detected image feature with its corner response score
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Keypoint {
    pub x: f32,
    pub y: f32,
    pub response: f32,
}

/// Borrowed view over a rectangular sub-region of a grayscale image.
///
/// The view keeps the parent buffer's stride, so taking a sub-view never
/// copies pixels. Coordinates passed to `get`/`row` are local to the view.
#[derive(Debug, Clone, Copy)]
pub struct ImageRegion<'a> {
    data: &'a [u8],
    width: usize,
    height: usize,
    stride: usize,
}

impl<'a> ImageRegion<'a> {
    /// View over a full image buffer. Returns `None` if the buffer length
    /// does not match `width * height`.
    pub fn new(data: &'a [u8], width: usize, height: usize) -> Option<Self> {
        if data.len() != width * height {
            return None;
        }
        Some(Self {
            data,
            width,
            height,
            stride: width,
        })
    }

    /// Sub-view of `width x height` pixels with its origin at `(x, y)` in
    /// this view's local frame.
    ///
    /// Panics if the requested rectangle extends past the view bounds, the
    /// same way slice indexing does.
    pub fn view(&self, x: usize, y: usize, width: usize, height: usize) -> ImageRegion<'a> {
        assert!(
            x + width <= self.width && y + height <= self.height,
            "sub-view {}x{}+{}+{} out of bounds for {}x{} region",
            width,
            height,
            x,
            y,
            self.width,
            self.height
        );
        ImageRegion {
            data: &self.data[y * self.stride + x..],
            width,
            height,
            stride: self.stride,
        }
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        debug_assert!(x < self.width && y < self.height);
        self.data[y * self.stride + x]
    }

    /// One row of pixels, local coordinates.
    #[inline]
    pub fn row(&self, y: usize) -> &'a [u8] {
        &self.data[y * self.stride..y * self.stride + self.width]
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }
}

/// Failure surface of a corner-detection primitive
#[derive(Debug, Clone, PartialEq)]
pub enum DetectionError {
    InvalidThreshold(u8),
}

impl std::fmt::Display for DetectionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DetectionError::InvalidThreshold(t) => {
                write!(f, "Invalid threshold: {} (must be 1-127)", t)
            }
        }
    }
}

impl std::error::Error for DetectionError {}

/// Corner-detection strategy.
///
/// Implementations report keypoints in the region's local coordinate frame
/// and must be deterministic for fixed inputs. Detectors are shared across
/// worker threads, hence the `Sync` bound.
pub trait CornerDetector: Sync {
    fn detect(
        &self,
        region: &ImageRegion<'_>,
        threshold: u8,
        nonmax_suppression: bool,
    ) -> Result<Vec<Keypoint>, DetectionError>;
}

/// Initialize Rayon thread pool with the specified number of threads
pub fn init_thread_pool(n_threads: usize) -> Result<(), rayon::ThreadPoolBuildError> {
    rayon::ThreadPoolBuilder::new()
        .num_threads(n_threads)
        .build_global()
}

/// Default worker count for callers that do not care
pub fn default_threads() -> usize {
    num_cpus::get().max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_rejects_wrong_length() {
        let data = vec![0u8; 9];
        assert!(ImageRegion::new(&data, 3, 3).is_some());
        assert!(ImageRegion::new(&data, 3, 4).is_none());
    }

    #[test]
    fn test_subview_indexing_uses_parent_stride() {
        // 4x3 image, pixel value encodes position
        let data: Vec<u8> = (0..12).collect();
        let region = ImageRegion::new(&data, 4, 3).unwrap();

        let sub = region.view(1, 1, 2, 2);
        assert_eq!(sub.width(), 2);
        assert_eq!(sub.height(), 2);
        assert_eq!(sub.get(0, 0), 5);
        assert_eq!(sub.get(1, 0), 6);
        assert_eq!(sub.get(0, 1), 9);
        assert_eq!(sub.get(1, 1), 10);
        assert_eq!(sub.row(1), &[9, 10]);
    }

    #[test]
    fn test_nested_subviews_compose() {
        let data: Vec<u8> = (0..64).collect();
        let region = ImageRegion::new(&data, 8, 8).unwrap();
        let outer = region.view(2, 2, 4, 4);
        let inner = outer.view(1, 1, 2, 2);
        assert_eq!(inner.get(0, 0), region.get(3, 3));
    }

    #[test]
    #[should_panic]
    fn test_out_of_bounds_subview_panics() {
        let data = vec![0u8; 16];
        let region = ImageRegion::new(&data, 4, 4).unwrap();
        let _ = region.view(2, 2, 3, 3);
    }
}
