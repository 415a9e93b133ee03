//! K-means color quantization
//!
//! Reduces an image's color space to a small fixed palette using classic
//! Lloyd's k-means over 3-dimensional RGB space:
//!
//! 1. Seed k centroids by sampling k pixel colors uniformly at random,
//!    with replacement (duplicate seeds simply converge together).
//! 2. Iterate assignment and centroid update until every centroid moves by
//!    at most one unit of Euclidean distance, or the iteration cap is hit.
//! 3. Reassign every pixel against the final centroids.
//!
//! Randomness is injectable: [`kmeans_quantize`] builds a [`StdRng`] from the
//! optional seed in the options, and [`kmeans_quantize_with_rng`] accepts any
//! [`Rng`] so tests can pin the seeding exactly.

use crate::{ColorError, ColorResult};
use pbn_core::{Color, Palette, PixelBuffer, RegionMap};
use rand::rngs::StdRng;
use rand::{Rng, RngExt, SeedableRng};

// =============================================================================
// Options
// =============================================================================

/// Default palette size
pub const DEFAULT_COLORS: u32 = 8;

/// Default iteration cap for the training loop
pub const DEFAULT_MAX_ITERATIONS: u32 = 10;

/// A centroid that moves by at most this squared distance is considered settled
const CONVERGENCE_DIST_SQ: u32 = 1;

/// Options for k-means quantization
///
/// `colors` is the palette size k (the difficulty setting upstream;
/// recommended range 5-15, not enforced here). `seed` pins the centroid
/// seeding for reproducible output; `None` draws from OS entropy.
#[derive(Debug, Clone)]
pub struct KMeansOptions {
    /// Number of palette colors (k). Must be at least 1.
    pub colors: u32,
    /// Maximum number of training iterations before accepting the centroids.
    pub max_iterations: u32,
    /// Seed for centroid sampling. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for KMeansOptions {
    fn default() -> Self {
        Self {
            colors: DEFAULT_COLORS,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            seed: None,
        }
    }
}

impl KMeansOptions {
    /// Create options for a target palette size.
    pub fn for_colors(colors: u32) -> Self {
        Self {
            colors,
            ..Default::default()
        }
    }

    /// Pin the centroid-seeding RNG.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

// =============================================================================
// Main API
// =============================================================================

/// Result of a quantization run
#[derive(Debug, Clone)]
pub struct Quantization {
    /// Final centroids, in centroid-index order.
    pub palette: Palette,
    /// Nearest-centroid index per pixel, same dimensions as the input.
    pub map: RegionMap,
}

/// Quantize an image to `options.colors` palette entries.
///
/// # Arguments
///
/// * `pix` - Input RGB pixel buffer
/// * `options` - Quantization parameters
///
/// # Returns
///
/// A [`Quantization`] holding the palette (length exactly `options.colors`)
/// and the per-pixel index map (every index in `0..options.colors`).
///
/// # Errors
///
/// Returns [`ColorError::InvalidParameters`] if `options.colors` is zero and
/// [`ColorError::EmptyImage`] for a zero-length buffer. Both checks run
/// before any clustering work; no partial palette is ever produced.
/// `colors >= pixel count` is legal: surplus centroids degenerate to
/// duplicate palette entries.
///
/// # Example
///
/// ```
/// use pbn_color::{kmeans_quantize, KMeansOptions};
/// use pbn_core::{Color, PixelBuffer};
///
/// let pix = PixelBuffer::new(4, 4, Color::new(10, 20, 30)).unwrap();
/// let quant = kmeans_quantize(&pix, &KMeansOptions::for_colors(2)).unwrap();
/// assert_eq!(quant.palette.len(), 2);
/// assert_eq!(quant.map.dimensions(), (4, 4));
/// ```
pub fn kmeans_quantize(pix: &PixelBuffer, options: &KMeansOptions) -> ColorResult<Quantization> {
    let mut rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => rand::make_rng::<StdRng>(),
    };
    kmeans_quantize_with_rng(pix, options, &mut rng)
}

/// Quantize with a caller-supplied random source.
///
/// Same contract as [`kmeans_quantize`]; the RNG drives only the initial
/// centroid sampling.
pub fn kmeans_quantize_with_rng<R: Rng + ?Sized>(
    pix: &PixelBuffer,
    options: &KMeansOptions,
    rng: &mut R,
) -> ColorResult<Quantization> {
    if options.colors == 0 {
        return Err(ColorError::InvalidParameters(
            "colors must be at least 1".to_string(),
        ));
    }

    let pixels = pix.as_slice();
    if pixels.is_empty() {
        return Err(ColorError::EmptyImage);
    }

    let k = options.colors as usize;

    // Uniform sampling with replacement.
    let mut centroids: Vec<Color> = (0..k)
        .map(|_| pixels[rng.random_range(0..pixels.len())])
        .collect();

    for _ in 0..options.max_iterations {
        // Assignment: accumulate channel sums per nearest centroid.
        let mut sums = vec![ChannelSums::default(); k];
        for &p in pixels {
            sums[nearest_centroid(&centroids, p)].add(p);
        }

        // Update: integer-rounded mean per cluster. A cluster that lost all
        // members keeps its previous centroid.
        let mut converged = true;
        for (centroid, sum) in centroids.iter_mut().zip(&sums) {
            if sum.count == 0 {
                continue;
            }
            let updated = sum.mean();
            if centroid.dist_sq(updated) > CONVERGENCE_DIST_SQ {
                converged = false;
            }
            *centroid = updated;
        }

        if converged {
            break;
        }
    }

    // Final pass against the settled centroids. Recomputed rather than reused:
    // the last update moved the centroids after the last assignment.
    let (width, height) = pix.dimensions();
    let indices: Vec<u32> = pixels
        .iter()
        .map(|&p| nearest_centroid(&centroids, p) as u32)
        .collect();
    let map = RegionMap::from_vec(width, height, indices).map_err(ColorError::Core)?;
    let palette = Palette::from_colors(centroids).map_err(ColorError::Core)?;

    Ok(Quantization { palette, map })
}

// =============================================================================
// Internals
// =============================================================================

/// Index of the centroid nearest to `color`.
///
/// Ties break toward the lowest index: only a strictly smaller distance
/// replaces the current best.
fn nearest_centroid(centroids: &[Color], color: Color) -> usize {
    let mut best = 0;
    let mut best_dist = centroids[0].dist_sq(color);
    for (i, &c) in centroids.iter().enumerate().skip(1) {
        let d = c.dist_sq(color);
        if d < best_dist {
            best = i;
            best_dist = d;
        }
    }
    best
}

/// Per-cluster channel accumulator
#[derive(Debug, Default, Clone, Copy)]
struct ChannelSums {
    r: u64,
    g: u64,
    b: u64,
    count: u64,
}

impl ChannelSums {
    fn add(&mut self, c: Color) {
        self.r += c.r as u64;
        self.g += c.g as u64;
        self.b += c.b as u64;
        self.count += 1;
    }

    /// Channel-wise integer-rounded mean. Caller guarantees `count > 0`.
    fn mean(&self) -> Color {
        Color::new(
            round_div(self.r, self.count),
            round_div(self.g, self.count),
            round_div(self.b, self.count),
        )
    }
}

#[inline]
fn round_div(sum: u64, count: u64) -> u8 {
    ((sum + count / 2) / count) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn two_tone_2x2() -> PixelBuffer {
        PixelBuffer::from_vec(
            2,
            2,
            vec![Color::BLACK, Color::BLACK, Color::WHITE, Color::WHITE],
        )
        .unwrap()
    }

    #[test]
    fn test_rejects_zero_colors() {
        let pix = two_tone_2x2();
        let options = KMeansOptions::for_colors(0);
        assert!(matches!(
            kmeans_quantize(&pix, &options),
            Err(ColorError::InvalidParameters(_))
        ));
    }

    #[test]
    fn test_two_tone_converges_to_black_and_white() {
        let pix = two_tone_2x2();
        let options = KMeansOptions::for_colors(2).with_seed(7);
        let quant = kmeans_quantize(&pix, &options).unwrap();

        assert_eq!(quant.palette.len(), 2);
        let colors: Vec<Color> = quant.palette.iter().collect();
        assert!(colors.contains(&Color::BLACK));
        assert!(colors.contains(&Color::WHITE));

        // Same-colored pixels share an index, and exactly 2 indices appear.
        assert_eq!(quant.map.value(0, 0), quant.map.value(1, 0));
        assert_eq!(quant.map.value(0, 1), quant.map.value(1, 1));
        assert_ne!(quant.map.value(0, 0), quant.map.value(0, 1));
    }

    #[test]
    fn test_indices_in_range() {
        let pix = PixelBuffer::from_vec(
            3,
            2,
            vec![
                Color::new(200, 10, 10),
                Color::new(10, 200, 10),
                Color::new(10, 10, 200),
                Color::new(220, 30, 20),
                Color::new(20, 220, 30),
                Color::new(30, 20, 220),
            ],
        )
        .unwrap();
        let options = KMeansOptions::for_colors(3).with_seed(11);
        let quant = kmeans_quantize(&pix, &options).unwrap();
        assert_eq!(quant.palette.len(), 3);
        assert!(quant.map.as_slice().iter().all(|&i| i < 3));
    }

    #[test]
    fn test_k_exceeding_pixel_count_is_legal() {
        let pix = PixelBuffer::new(2, 1, Color::new(50, 60, 70)).unwrap();
        let options = KMeansOptions::for_colors(8).with_seed(3);
        let quant = kmeans_quantize(&pix, &options).unwrap();
        // Surplus centroids degenerate to duplicates of the only color.
        assert_eq!(quant.palette.len(), 8);
        assert!(quant
            .palette
            .iter()
            .all(|c| c == Color::new(50, 60, 70)));
    }

    #[test]
    fn test_seeded_runs_are_identical() {
        let pix = PixelBuffer::from_vec(
            4,
            1,
            vec![
                Color::new(0, 0, 0),
                Color::new(80, 80, 80),
                Color::new(170, 170, 170),
                Color::new(255, 255, 255),
            ],
        )
        .unwrap();
        let options = KMeansOptions::for_colors(2).with_seed(99);
        let a = kmeans_quantize(&pix, &options).unwrap();
        let b = kmeans_quantize(&pix, &options).unwrap();
        assert_eq!(a.palette, b.palette);
        assert_eq!(a.map, b.map);
    }

    #[test]
    fn test_injected_rng_matches_seed_option() {
        let pix = two_tone_2x2();
        let options = KMeansOptions::for_colors(2).with_seed(42);
        let from_options = kmeans_quantize(&pix, &options).unwrap();

        let mut rng = StdRng::seed_from_u64(42);
        let from_rng = kmeans_quantize_with_rng(&pix, &options, &mut rng).unwrap();

        assert_eq!(from_options.palette, from_rng.palette);
        assert_eq!(from_options.map, from_rng.map);
    }

    #[test]
    fn test_nearest_centroid_tie_breaks_low() {
        let centroids = [Color::new(10, 10, 10), Color::new(10, 10, 10)];
        assert_eq!(nearest_centroid(&centroids, Color::new(10, 10, 10)), 0);
    }

    #[test]
    fn test_round_div_half_up() {
        assert_eq!(round_div(3, 2), 2);
        assert_eq!(round_div(510, 4), 128);
        assert_eq!(round_div(0, 5), 0);
    }
}
