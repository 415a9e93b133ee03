//! Interactive flood fill
//!
//! Computes the set of pixels one "color this region" gesture covers: the
//! full 4-connected component of same-numbered, not-yet-colored pixels
//! reachable from the seed. The traversal is an explicit-queue BFS with a
//! per-invocation visited grid; recursion is deliberately avoided so large
//! uniform regions cannot exhaust the stack.
//!
//! The engine only reads its inputs. Marking the returned pixels as colored
//! is the caller's job, and concurrent fills against one mask must be
//! serialized by the caller as well.

use crate::boundary::NEIGHBORS_4;
use crate::error::{RegionError, RegionResult};
use pbn_core::{ColoredMask, Grid};
use std::collections::VecDeque;

/// Flood from `(seed_x, seed_y)` across pixels numbered `target`.
///
/// # Arguments
///
/// * `numbers` - Per-pixel region numbers (the template's number grid)
/// * `seed_x`, `seed_y` - Seed coordinate of the gesture
/// * `target` - Region number the gesture claims to fill
/// * `colored` - Already-colored flags, owned and mutated by the caller
///
/// # Returns
///
/// All coordinates of the connected same-numbered, uncolored component
/// containing the seed. Only the set is contractual; its order is incidental
/// to the traversal.
///
/// A seed that is out of bounds, numbered differently than `target`, or
/// already colored yields `Ok` with an empty result: interactive callers
/// trigger those conditions routinely (double-clicks, stale taps) and must
/// not be penalized.
///
/// # Errors
///
/// Returns [`RegionError::DimensionMismatch`] if `colored` does not share
/// the dimensions of `numbers`; that is a caller invariant violation, not an
/// interaction artifact, and fails before any traversal.
///
/// # Example
///
/// ```
/// use pbn_core::{ColoredMask, Grid};
/// use pbn_region::flood_region;
///
/// let numbers: Grid<u32> = Grid::new(3, 3, 1).unwrap();
/// let colored = ColoredMask::new(3, 3, false).unwrap();
/// let filled = flood_region(&numbers, 1, 1, 1, &colored).unwrap();
/// assert_eq!(filled.len(), 9);
/// ```
pub fn flood_region(
    numbers: &Grid<u32>,
    seed_x: u32,
    seed_y: u32,
    target: u32,
    colored: &ColoredMask,
) -> RegionResult<Vec<(u32, u32)>> {
    if numbers.dimensions() != colored.dimensions() {
        return Err(RegionError::DimensionMismatch {
            expected: numbers.dimensions(),
            actual: colored.dimensions(),
        });
    }

    // Benign no-ops, in the order a gesture can violate them.
    if numbers.value(seed_x, seed_y) != Some(target) {
        return Ok(Vec::new());
    }
    if colored.value(seed_x, seed_y) == Some(true) {
        return Ok(Vec::new());
    }

    let (width, height) = numbers.dimensions();
    let mut visited = Grid::new(width, height, false)?;
    let mut queue = VecDeque::new();
    let mut result = Vec::new();

    visited.set(seed_x, seed_y, true)?;
    queue.push_back((seed_x, seed_y));

    while let Some((x, y)) = queue.pop_front() {
        result.push((x, y));

        for &(dx, dy) in &NEIGHBORS_4 {
            let nx = x as i64 + dx;
            let ny = y as i64 + dy;
            if nx < 0 || ny < 0 {
                continue;
            }
            let (nx, ny) = (nx as u32, ny as u32);
            if !numbers.in_bounds(nx, ny) || visited.value(nx, ny) == Some(true) {
                continue;
            }
            if numbers.value(nx, ny) != Some(target) || colored.value(nx, ny) == Some(true) {
                continue;
            }
            visited.set(nx, ny, true)?;
            queue.push_back((nx, ny));
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_block_fill() {
        let numbers: Grid<u32> = Grid::new(3, 3, 5).unwrap();
        let colored = ColoredMask::new(3, 3, false).unwrap();
        let mut filled = flood_region(&numbers, 1, 1, 5, &colored).unwrap();
        filled.sort_unstable();
        let mut expected: Vec<(u32, u32)> =
            (0..3).flat_map(|y| (0..3).map(move |x| (x, y))).collect();
        expected.sort_unstable();
        assert_eq!(filled, expected);
    }

    #[test]
    fn test_colored_seed_is_noop() {
        let numbers: Grid<u32> = Grid::new(3, 3, 5).unwrap();
        let mut colored = ColoredMask::new(3, 3, false).unwrap();
        colored.set(1, 1, true).unwrap();
        assert!(flood_region(&numbers, 1, 1, 5, &colored)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_wrong_target_is_noop() {
        let numbers: Grid<u32> = Grid::new(3, 3, 5).unwrap();
        let colored = ColoredMask::new(3, 3, false).unwrap();
        assert!(flood_region(&numbers, 1, 1, 4, &colored)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_out_of_bounds_seed_is_noop() {
        let numbers: Grid<u32> = Grid::new(3, 3, 5).unwrap();
        let colored = ColoredMask::new(3, 3, false).unwrap();
        assert!(flood_region(&numbers, 7, 0, 5, &colored)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_dimension_mismatch_is_an_error() {
        let numbers: Grid<u32> = Grid::new(3, 3, 5).unwrap();
        let colored = ColoredMask::new(4, 3, false).unwrap();
        assert!(matches!(
            flood_region(&numbers, 1, 1, 5, &colored),
            Err(RegionError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_fill_stops_at_other_region() {
        // Left half 1, right half 2 on a 5x5 grid (split after column 2).
        let mut numbers: Grid<u32> = Grid::new(5, 5, 1).unwrap();
        for y in 0..5 {
            for x in 3..5 {
                numbers.set(x, y, 2).unwrap();
            }
        }
        let colored = ColoredMask::new(5, 5, false).unwrap();

        let filled = flood_region(&numbers, 0, 0, 1, &colored).unwrap();
        assert_eq!(filled.len(), 15);
        assert!(filled.iter().all(|&(x, _)| x < 3));
    }

    #[test]
    fn test_colored_pixels_split_component() {
        // A colored column wall cuts the region in two.
        let numbers: Grid<u32> = Grid::new(5, 1, 1).unwrap();
        let mut colored = ColoredMask::new(5, 1, false).unwrap();
        colored.set(2, 0, true).unwrap();

        let mut filled = flood_region(&numbers, 0, 0, 1, &colored).unwrap();
        filled.sort_unstable();
        assert_eq!(filled, vec![(0, 0), (1, 0)]);
    }

    #[test]
    fn test_large_region_uses_queue_not_stack() {
        // A single 512x512 region; recursive fills would overflow here.
        let numbers: Grid<u32> = Grid::new(512, 512, 1).unwrap();
        let colored = ColoredMask::new(512, 512, false).unwrap();
        let filled = flood_region(&numbers, 256, 256, 1, &colored).unwrap();
        assert_eq!(filled.len(), 512 * 512);
    }
}
