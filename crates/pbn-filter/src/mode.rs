//! Mode (plurality) filtering of region maps
//!
//! Removes speckle noise from a per-pixel palette-index map before boundary
//! detection: every pixel takes the most frequent value within its window.
//! Border pixels use only their in-bounds neighbors; there is no padding and
//! no wraparound.
//!
//! Tie-break: the first value to reach the maximum count during the window's
//! left-to-right, top-to-bottom scan wins. This is stable and deterministic
//! but asymmetric (not rotation-invariant); it is preserved exactly for
//! output compatibility with the original pipeline.

use pbn_core::RegionMap;

/// Radius of the standard 3x3 smoothing window
pub const SMOOTH_RADIUS: u32 = 1;

/// Apply a square mode filter of the given radius.
///
/// The window spans `(2 * radius + 1)^2` cells, clipped at the borders.
/// Radius 0 returns an identical copy.
///
/// Map values are palette indices; the filter allocates one scratch counter
/// per value up to the map's maximum.
pub fn mode_filter(map: &RegionMap, radius: u32) -> RegionMap {
    let (width, height) = map.dimensions();
    let mut out = map.clone();

    if radius == 0 {
        return out;
    }

    // One scratch counter per possible value; reset only the touched slots.
    let max_value = map.as_slice().iter().copied().max().unwrap_or(0) as usize;
    let mut counts = vec![0u32; max_value + 1];
    let mut touched: Vec<usize> = Vec::with_capacity(((2 * radius + 1) * (2 * radius + 1)) as usize);

    for y in 0..height {
        for x in 0..width {
            let x0 = x.saturating_sub(radius);
            let y0 = y.saturating_sub(radius);
            let x1 = (x + radius).min(width - 1);
            let y1 = (y + radius).min(height - 1);

            let mut best_value = 0u32;
            let mut best_count = 0u32;
            for wy in y0..=y1 {
                for wx in x0..=x1 {
                    let v = map.value(wx, wy).unwrap_or(0) as usize;
                    if counts[v] == 0 {
                        touched.push(v);
                    }
                    counts[v] += 1;
                    if counts[v] > best_count {
                        best_count = counts[v];
                        best_value = v as u32;
                    }
                }
            }

            // Cannot fail: (x, y) is in bounds by construction.
            let _ = out.set(x, y, best_value);

            for &v in &touched {
                counts[v] = 0;
            }
            touched.clear();
        }
    }

    out
}

/// Smooth a region map with the standard 3x3 window.
pub fn smooth_region_map(map: &RegionMap) -> RegionMap {
    mode_filter(map, SMOOTH_RADIUS)
}
