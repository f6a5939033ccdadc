//! Slanted-band geometry.
//!
//! Pure functions from (surface size, slant height, progress values) to the
//! parallelograms that cover the surface. Nothing here touches shared state,
//! so identical inputs always produce identical outputs.
//!
//! The surface is partitioned into five weighted bands across a span widened
//! by the slant's horizontal run, so the leaning left edge of the first band
//! can still clear the left surface edge at full coverage. Each region grows
//! a parallelogram outward from its band center.

use louver_core::{Path, Point, Size};
use smallvec::SmallVec;

use crate::region::{BAND_WEIGHTS, REGION_COUNT};

/// Covered widths below this are dropped instead of emitting sliver quads
const MIN_QUAD_WIDTH: f32 = 1e-4;

/// A slanted parallelogram covering one region
///
/// The top edge lies on `y = 0`; the bottom edge is shifted left by the
/// slant's horizontal run, making the side edges lean at 60 degrees from
/// vertical.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RegionQuad {
    /// Index of the region this quad belongs to
    pub region: usize,
    pub top_left: Point,
    pub top_right: Point,
    pub bottom_right: Point,
    pub bottom_left: Point,
}

impl RegionQuad {
    /// Width of the top edge
    pub fn top_width(&self) -> f32 {
        self.top_right.x - self.top_left.x
    }

    /// The quad as a closed path, wound top-left first
    pub fn to_path(&self) -> Path {
        Path::polygon(&[
            self.top_left,
            self.top_right,
            self.bottom_right,
            self.bottom_left,
        ])
    }
}

/// Clamp a configured slant height into `(0, surface_height]`
///
/// A zero or negative configuration falls back to the full surface height.
pub fn effective_slant_height(slant_height: f32, surface_height: f32) -> f32 {
    let mut h = slant_height;
    if h <= 0.0 {
        h = surface_height;
    }
    if h > surface_height {
        h = surface_height;
    }
    h
}

/// Horizontal run of the slant for a given height
///
/// The slant angle is fixed at 60 degrees from vertical, so the run is
/// tan(30°) of the height.
pub fn slant_run(slant_height: f32) -> f32 {
    (std::f32::consts::PI / 6.0).tan() * slant_height
}

/// Band boundaries across the widened span
///
/// `boundaries[i]` is where band `i` starts; the final entry equals
/// `total_width`.
pub fn band_boundaries(total_width: f32) -> [f32; REGION_COUNT + 1] {
    let mut boundaries = [0.0; REGION_COUNT + 1];
    let mut acc = 0.0;
    for (i, weight) in BAND_WEIGHTS.iter().enumerate() {
        acc += total_width * weight;
        boundaries[i] = acc;
    }
    boundaries
}

/// Build the quads covering the surface at the given progress values
///
/// Progress is clamped to `[0, 1]` per region on read. Returns an empty list
/// for a degenerate surface, and skips any region whose covered width is
/// negligible, so a fully withdrawn mask emits no geometry at all.
pub fn build_region_quads(
    surface: Size,
    slant_height: f32,
    progress: &[f32; REGION_COUNT],
) -> SmallVec<[RegionQuad; REGION_COUNT]> {
    let mut quads = SmallVec::new();
    if surface.is_empty() {
        return quads;
    }

    let h = effective_slant_height(slant_height, surface.height);
    let offset = slant_run(h);
    let total_width = surface.width + offset;
    let boundaries = band_boundaries(total_width);

    for (region, &raw) in progress.iter().enumerate() {
        let center = (boundaries[region] + boundaries[region + 1]) / 2.0;
        let full_width = total_width * BAND_WEIGHTS[region + 1];
        let current_width = full_width * raw.clamp(0.0, 1.0);
        if current_width < MIN_QUAD_WIDTH {
            continue;
        }

        let half = current_width / 2.0;
        quads.push(RegionQuad {
            region,
            top_left: Point::new(center - half, 0.0),
            top_right: Point::new(center + half, 0.0),
            bottom_right: Point::new(center + half - offset, h),
            bottom_left: Point::new(center - half - offset, h),
        });
    }
    quads
}

#[cfg(test)]
mod tests {
    use super::*;

    const SURFACE: Size = Size::new(1000.0, 100.0);
    const SLANT: f32 = 80.0;

    fn total_width() -> f32 {
        SURFACE.width + slant_run(SLANT)
    }

    #[test]
    fn test_boundaries_partition_total_width() {
        let total = total_width();
        let boundaries = band_boundaries(total);

        assert_eq!(boundaries[0], 0.0);
        for i in 1..boundaries.len() {
            assert!(boundaries[i] > boundaries[i - 1], "boundary {i} not increasing");
        }
        assert!((boundaries[REGION_COUNT] - total).abs() < 1e-3);

        let width_sum: f32 = (0..REGION_COUNT)
            .map(|i| total * BAND_WEIGHTS[i + 1])
            .sum();
        assert!((width_sum - total).abs() < 1e-3);
    }

    #[test]
    fn test_builder_is_pure() {
        let progress = [0.1, 0.4, 0.9, 0.4, 0.1];
        let first = build_region_quads(SURFACE, SLANT, &progress);
        let second = build_region_quads(SURFACE, SLANT, &progress);
        assert_eq!(first, second);
    }

    #[test]
    fn test_no_quads_when_withdrawn() {
        let quads = build_region_quads(SURFACE, SLANT, &[0.0; REGION_COUNT]);
        assert!(quads.is_empty());
    }

    #[test]
    fn test_no_quads_for_degenerate_surface() {
        let progress = [1.0; REGION_COUNT];
        assert!(build_region_quads(Size::ZERO, SLANT, &progress).is_empty());
        assert!(build_region_quads(Size::new(-10.0, 100.0), SLANT, &progress).is_empty());
        assert!(build_region_quads(Size::new(100.0, 0.0), SLANT, &progress).is_empty());
    }

    #[test]
    fn test_full_coverage_tiles_span_exactly() {
        let total = total_width();
        let quads = build_region_quads(SURFACE, SLANT, &[1.0; REGION_COUNT]);
        assert_eq!(quads.len(), REGION_COUNT);

        for (i, quad) in quads.iter().enumerate() {
            assert_eq!(quad.region, i);
            let full = total * BAND_WEIGHTS[i + 1];
            assert!(
                (quad.top_width() - full).abs() < 1e-3,
                "band {i} width {} != {full}",
                quad.top_width()
            );
        }

        // Adjacent bands meet with neither gaps nor overlap
        for pair in quads.windows(2) {
            assert!((pair[0].top_right.x - pair[1].top_left.x).abs() < 1e-3);
        }
        assert!(quads[0].top_left.x.abs() < 1e-3);
        assert!((quads[REGION_COUNT - 1].top_right.x - total).abs() < 1e-3);
    }

    #[test]
    fn test_progress_clamped_on_read() {
        let below = build_region_quads(SURFACE, SLANT, &[-0.5; REGION_COUNT]);
        assert!(below.is_empty());

        let above = build_region_quads(SURFACE, SLANT, &[1.5; REGION_COUNT]);
        let full = build_region_quads(SURFACE, SLANT, &[1.0; REGION_COUNT]);
        assert_eq!(above, full);
    }

    #[test]
    fn test_negligible_width_skipped() {
        let mut progress = [0.0; REGION_COUNT];
        progress[2] = 1e-9;
        assert!(build_region_quads(SURFACE, SLANT, &progress).is_empty());
    }

    #[test]
    fn test_partial_progress_grows_from_band_center() {
        let total = total_width();
        let boundaries = band_boundaries(total);

        let mut progress = [0.0; REGION_COUNT];
        progress[2] = 0.5;
        let quads = build_region_quads(SURFACE, SLANT, &progress);
        assert_eq!(quads.len(), 1);

        let quad = &quads[0];
        let center = (boundaries[2] + boundaries[3]) / 2.0;
        let expected_width = total * BAND_WEIGHTS[3] * 0.5;
        assert!((quad.top_width() - expected_width).abs() < 1e-3);
        assert!(((quad.top_left.x + quad.top_right.x) / 2.0 - center).abs() < 1e-3);
    }

    #[test]
    fn test_bottom_edge_leans_by_slant_run() {
        let mut progress = [0.0; REGION_COUNT];
        progress[0] = 1.0;
        let quads = build_region_quads(SURFACE, SLANT, &progress);
        let quad = &quads[0];
        let offset = slant_run(SLANT);

        assert_eq!(quad.top_left.y, 0.0);
        assert_eq!(quad.bottom_left.y, SLANT);
        assert!((quad.bottom_left.x - (quad.top_left.x - offset)).abs() < 1e-4);
        assert!((quad.bottom_right.x - (quad.top_right.x - offset)).abs() < 1e-4);
    }

    #[test]
    fn test_slant_height_clamping() {
        assert_eq!(effective_slant_height(80.0, 100.0), 80.0);
        assert_eq!(effective_slant_height(0.0, 100.0), 100.0);
        assert_eq!(effective_slant_height(-5.0, 100.0), 100.0);
        assert_eq!(effective_slant_height(150.0, 100.0), 100.0);

        // A non-positive configuration reaches the full surface height
        let mut progress = [0.0; REGION_COUNT];
        progress[1] = 1.0;
        let quads = build_region_quads(SURFACE, 0.0, &progress);
        assert_eq!(quads[0].bottom_left.y, SURFACE.height);
    }

    #[test]
    fn test_quad_path_is_closed() {
        let mut progress = [0.0; REGION_COUNT];
        progress[3] = 1.0;
        let quads = build_region_quads(SURFACE, SLANT, &progress);
        let path = quads[0].to_path();
        // MoveTo, three LineTos, Close
        assert_eq!(path.commands().len(), 5);
    }
}
