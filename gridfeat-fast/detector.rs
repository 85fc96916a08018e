use gridfeat_core::{CornerDetector, DetectionError, ImageRegion, Keypoint};
use rayon::prelude::*;

use crate::suppression::suppress_nearby;
use crate::utils::has_contiguous_arc;

/// Bresenham circle of radius 3 around the candidate pixel
const CIRCLE: [(i32, i32); 16] = [
    (0, -3), (1, -3), (2, -2), (3, -1),
    (3, 0), (3, 1), (2, 2), (1, 3),
    (0, 3), (-1, 3), (-2, 2), (-3, 1),
    (-3, 0), (-3, -1), (-2, -2), (-1, -3),
];

/// Segment test requires this many contiguous circle pixels to agree.
/// 9 of 16 catches right-angle corners; 12 of 16 would reject them because
/// a quarter-plane already covers five circle pixels.
const ARC_LENGTH: usize = 9;

/// Border where the circle does not fit inside the region
const BORDER: usize = 3;

/// FAST corner detector (9-of-16 segment test) operating on an
/// [`ImageRegion`].
///
/// Keypoints are reported in the region's local frame with a response equal
/// to the mean absolute intensity difference over the agreeing circle arc.
/// With suppression enabled, nearby weaker corners within `min_distance`
/// pixels are discarded.
#[derive(Debug, Clone, Copy)]
pub struct FastCorners {
    min_distance: f32,
}

impl FastCorners {
    pub fn new() -> Self {
        Self { min_distance: 3.0 }
    }

    /// Override the suppression radius used when the caller requests
    /// non-max suppression.
    pub fn with_min_distance(min_distance: f32) -> Self {
        Self { min_distance }
    }

    pub fn min_distance(&self) -> f32 {
        self.min_distance
    }
}

impl Default for FastCorners {
    fn default() -> Self {
        Self::new()
    }
}

impl CornerDetector for FastCorners {
    fn detect(
        &self,
        region: &ImageRegion<'_>,
        threshold: u8,
        nonmax_suppression: bool,
    ) -> Result<Vec<Keypoint>, DetectionError> {
        // Threshold 0 would fire on every pixel; 127 caps the useful
        // 8-bit contrast range
        if threshold == 0 || threshold > 127 {
            return Err(DetectionError::InvalidThreshold(threshold));
        }

        let (w, h) = (region.width(), region.height());

        // Regions too small to host the circle contribute nothing
        if w < 2 * BORDER + 1 || h < 2 * BORDER + 1 {
            return Ok(Vec::new());
        }

        let corners: Vec<Keypoint> = (BORDER..h - BORDER)
            .into_par_iter()
            .flat_map_iter(|y| {
                let mut row_corners = Vec::new();
                for x in BORDER..w - BORDER {
                    if let Some(response) = segment_test(region, x, y, threshold) {
                        row_corners.push(Keypoint {
                            x: x as f32,
                            y: y as f32,
                            response,
                        });
                    }
                }
                row_corners
            })
            .collect();

        if nonmax_suppression {
            Ok(suppress_nearby(&corners, self.min_distance))
        } else {
            Ok(corners)
        }
    }
}

/// Run the segment test at `(x, y)`. Returns the corner response if at
/// least `ARC_LENGTH` contiguous circle pixels are all brighter or all
/// darker than the center by the threshold.
fn segment_test(region: &ImageRegion<'_>, x: usize, y: usize, threshold: u8) -> Option<f32> {
    // i32 cut lines: u8 saturation near 0/255 would misclassify pixels
    let p = region.get(x, y) as i32;
    let bright_cut = p + threshold as i32;
    let dark_cut = p - threshold as i32;

    let mut bright_mask: u16 = 0;
    let mut dark_mask: u16 = 0;
    let mut bright_sum = 0i32;
    let mut dark_sum = 0i32;
    let mut bright_n = 0i32;
    let mut dark_n = 0i32;

    for (i, &(dx, dy)) in CIRCLE.iter().enumerate() {
        let q = region.get((x as i32 + dx) as usize, (y as i32 + dy) as usize) as i32;

        if q >= bright_cut {
            bright_mask |= 1 << i;
            bright_n += 1;
            bright_sum += q - p;
        } else if q <= dark_cut {
            dark_mask |= 1 << i;
            dark_n += 1;
            dark_sum += p - q;
        }
    }

    if has_contiguous_arc(bright_mask, ARC_LENGTH) {
        Some(bright_sum as f32 / bright_n as f32)
    } else if has_contiguous_arc(dark_mask, ARC_LENGTH) {
        Some(dark_sum as f32 / dark_n as f32)
    } else {
        None
    }
}
