//! Synthetic test inputs
//!
//! Small deterministic buffers and maps used by the regression suites in
//! place of image fixtures: the pipeline's properties (convergence,
//! smoothing fixed points, boundary columns, fill barriers) are all
//! checkable on constructed inputs.

use pbn_core::{Color, PixelBuffer, RegionMap};

/// A buffer filled with one color.
pub fn uniform_buffer(width: u32, height: u32, color: Color) -> PixelBuffer {
    PixelBuffer::new(width, height, color).expect("synthetic buffer dimensions")
}

/// Left half `left`, right half `right`; the split sits at `width / 2`.
pub fn two_tone_columns(width: u32, height: u32, left: Color, right: Color) -> PixelBuffer {
    let mut data = Vec::with_capacity((width as usize) * (height as usize));
    for _y in 0..height {
        for x in 0..width {
            data.push(if x < width / 2 { left } else { right });
        }
    }
    PixelBuffer::from_vec(width, height, data).expect("synthetic buffer dimensions")
}

/// A map filled with one value.
pub fn uniform_map(width: u32, height: u32, value: u32) -> RegionMap {
    RegionMap::new(width, height, value).expect("synthetic map dimensions")
}

/// Left half `left`, right half `right`; the split sits at `width / 2`.
pub fn vertical_split_map(width: u32, height: u32, left: u32, right: u32) -> RegionMap {
    let mut data = Vec::with_capacity((width as usize) * (height as usize));
    for _y in 0..height {
        for x in 0..width {
            data.push(if x < width / 2 { left } else { right });
        }
    }
    RegionMap::from_vec(width, height, data).expect("synthetic map dimensions")
}

/// Alternating values, `a` on even parity.
pub fn checkerboard_map(width: u32, height: u32, a: u32, b: u32) -> RegionMap {
    let mut data = Vec::with_capacity((width as usize) * (height as usize));
    for y in 0..height {
        for x in 0..width {
            data.push(if (x + y) % 2 == 0 { a } else { b });
        }
    }
    RegionMap::from_vec(width, height, data).expect("synthetic map dimensions")
}

/// A `base`-valued map with `speck` written at the given positions.
pub fn speckled_map(width: u32, height: u32, base: u32, speck: u32, specks: &[(u32, u32)]) -> RegionMap {
    let mut map = uniform_map(width, height, base);
    for &(x, y) in specks {
        map.set(x, y, speck).expect("speck position in bounds");
    }
    map
}
