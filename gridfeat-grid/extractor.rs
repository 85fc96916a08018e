use std::cmp::Ordering;

use gridfeat_core::{CornerDetector, Image, ImageRegion, Keypoint};
use rayon::prelude::*;

use crate::config::ExtractionConfig;
use crate::error::{GridError, GridResult};

/// Spreads keypoint detections across the image.
///
/// The image is partitioned into a regular grid, the detection primitive
/// runs on every fully in-bounds cell independently, and each cell keeps at
/// most a fixed quota of its strongest responses. High-texture regions can
/// therefore no longer crowd out the rest of the frame, which is what a
/// tracking front-end fed from a single global detection pass ends up with.
pub struct GridExtractor<D> {
    cfg: ExtractionConfig,
    w: usize,
    h: usize,
    cell_w: usize,
    cell_h: usize,
    quota: usize,
    detector: D,
}

impl<D: CornerDetector> GridExtractor<D> {
    /// Creates a new grid extractor with validation.
    ///
    /// Cell dimensions are `width / grid_x` by `height / grid_y` (integer
    /// division), so the grid does not need to divide the image evenly. A
    /// grid finer than the image is rejected here, before any detection
    /// work happens.
    pub fn new(cfg: ExtractionConfig, width: usize, height: usize, detector: D) -> GridResult<Self> {
        if width == 0 || height == 0 {
            return Err(GridError::InvalidImageSize { width, height });
        }

        cfg.validate()?;

        let cell_w = width / cfg.grid_x;
        let cell_h = height / cfg.grid_y;
        if cell_w == 0 || cell_h == 0 {
            return Err(GridError::InvalidGridConfig {
                grid_x: cfg.grid_x,
                grid_y: cfg.grid_y,
                cell_width: cell_w,
                cell_height: cell_h,
            });
        }

        // Uniform per-cell budget, deliberately blind to how much texture a
        // cell happens to contain. Rounds up so even a target below the
        // cell count leaves every cell one slot.
        let quota = cfg.num_features / (cfg.grid_x * cfg.grid_y) + 1;

        Ok(Self {
            cfg,
            w: width,
            h: height,
            cell_w,
            cell_h,
            quota,
            detector,
        })
    }

    /// Extract keypoints, at most `quota` per grid cell, in full-image
    /// coordinates.
    ///
    /// Output is ordered cell by cell in visitation order and never
    /// re-sorted globally; callers wanting a single global top-N must
    /// post-process. Any detector failure aborts the whole call.
    pub fn extract(&self, img: &Image) -> GridResult<Vec<Keypoint>> {
        let region = ImageRegion::new(img, self.w, self.h).ok_or(GridError::InvalidImageData {
            expected_len: self.w * self.h,
            actual_len: img.len(),
        })?;

        // Cell origins in visitation order. An origin whose cell would poke
        // past the image edge is skipped outright rather than clipped, so a
        // residual strip along the right/bottom is never scanned.
        let origins: Vec<(usize, usize)> = (0..self.w)
            .step_by(self.cell_w)
            .flat_map(|x| (0..self.h).step_by(self.cell_h).map(move |y| (x, y)))
            .filter(|&(x, y)| x + self.cell_w <= self.w && y + self.cell_h <= self.h)
            .collect();

        // Cells are independent, so they run on the worker pool; the
        // indexed collect merges per-cell results back in visitation order
        // no matter which worker finishes first, and the first detector
        // error aborts the collect.
        let per_cell: Vec<Vec<Keypoint>> = origins
            .par_iter()
            .map(|&(ox, oy)| self.extract_cell(&region, ox, oy))
            .collect::<GridResult<_>>()?;

        Ok(per_cell.into_iter().flatten().collect())
    }

    /// Detect in one cell, keep the strongest responses up to the quota,
    /// and shift the survivors from cell-local to full-image coordinates.
    fn extract_cell(
        &self,
        region: &ImageRegion<'_>,
        origin_x: usize,
        origin_y: usize,
    ) -> GridResult<Vec<Keypoint>> {
        let cell = region.view(origin_x, origin_y, self.cell_w, self.cell_h);

        let mut found = self
            .detector
            .detect(&cell, self.cfg.threshold, self.cfg.nonmax_suppression)?;

        // Stable sort: equal responses keep the detector's output order
        found.sort_by(|a, b| b.response.partial_cmp(&a.response).unwrap_or(Ordering::Equal));
        found.truncate(self.quota);

        for kp in &mut found {
            kp.x += origin_x as f32;
            kp.y += origin_y as f32;
        }

        Ok(found)
    }

    pub fn config(&self) -> &ExtractionConfig {
        &self.cfg
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.w, self.h)
    }

    /// Cell dimensions in pixels
    pub fn cell_size(&self) -> (usize, usize) {
        (self.cell_w, self.cell_h)
    }

    /// Maximum keypoints kept per cell
    pub fn quota(&self) -> usize {
        self.quota
    }

    pub fn detector(&self) -> &D {
        &self.detector
    }
}
