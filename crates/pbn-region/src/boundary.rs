//! Region boundary detection
//!
//! A pixel is a boundary pixel iff at least one of its 4-connected in-bounds
//! neighbors holds a different value. Out-of-bounds neighbors are skipped:
//! sitting on the image edge does not by itself make a pixel a boundary.

use pbn_core::Grid;

/// 4-connected neighbor offsets (left, right, up, down)
pub(crate) const NEIGHBORS_4: [(i64, i64); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Whether `(x, y)` lies on a region boundary of `map`.
///
/// Returns `false` for out-of-bounds coordinates.
pub fn is_boundary(map: &Grid<u32>, x: u32, y: u32) -> bool {
    let Some(value) = map.value(x, y) else {
        return false;
    };
    NEIGHBORS_4.iter().any(|&(dx, dy)| {
        let nx = x as i64 + dx;
        let ny = y as i64 + dy;
        if nx < 0 || ny < 0 {
            return false;
        }
        match map.value(nx as u32, ny as u32) {
            Some(neighbor) => neighbor != value,
            None => false,
        }
    })
}

/// Evaluate [`is_boundary`] for every pixel of `map` in one pass.
pub fn boundary_mask(map: &Grid<u32>) -> Grid<bool> {
    let (width, height) = map.dimensions();
    // Dimensions come from an existing grid, so construction cannot fail.
    let mut mask = Grid::new(width, height, false).expect("source grid has valid dimensions");
    for y in 0..height {
        for x in 0..width {
            if is_boundary(map, x, y) {
                let _ = mask.set(x, y, true);
            }
        }
    }
    mask
}
