//! Color palette
//!
//! An ordered list of colors produced by quantization. Palette index `i`
//! corresponds to the externally displayed region number `i + 1`; the 0-based
//! index never leaves the pipeline.

use crate::error::{Error, Result};
use crate::Color;

/// An ordered, immutable color table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    /// Create a palette from an ordered color list.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyPalette`] if `colors` is empty.
    pub fn from_colors(colors: Vec<Color>) -> Result<Self> {
        if colors.is_empty() {
            return Err(Error::EmptyPalette);
        }
        Ok(Self { colors })
    }

    /// Number of colors in the palette.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false: empty palettes cannot be constructed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color at `index`, or `None` past the end.
    #[inline]
    pub fn get(&self, index: usize) -> Option<Color> {
        self.colors.get(index).copied()
    }

    /// The full color list in palette order.
    #[inline]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Iterate over the colors in palette order.
    pub fn iter(&self) -> impl Iterator<Item = Color> + '_ {
        self.colors.iter().copied()
    }

    /// Index of the palette color nearest to `color` in RGB space.
    ///
    /// Ties are broken toward the lowest index: the scan only replaces the
    /// current best on a strictly smaller distance.
    pub fn nearest_index(&self, color: Color) -> usize {
        let mut best = 0;
        let mut best_dist = self.colors[0].dist_sq(color);
        for (i, &c) in self.colors.iter().enumerate().skip(1) {
            let d = c.dist_sq(color);
            if d < best_dist {
                best = i;
                best_dist = d;
            }
        }
        best
    }
}
