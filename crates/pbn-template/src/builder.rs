//! Numbered template assembly
//!
//! Runs the full pipeline over a decoded image: k-means quantization, mode
//! smoothing, then per-pixel numbering. The result is the externally
//! consumed artifact: a grid of palette colors paired with 1-based region
//! numbers, plus the palette itself.
//!
//! Changing the difficulty means rebuilding the whole template; a built
//! template is never mutated in place.

use crate::error::TemplateResult;
use pbn_color::{KMeansOptions, kmeans_quantize_with_rng};
use pbn_core::{Color, ColoredMask, Grid, Palette, PixelBuffer};
use pbn_filter::mode_filter;
use pbn_region::{LabelPoint, find_label_points, flood_region};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// =============================================================================
// Options
// =============================================================================

/// Options for template construction
///
/// `colors` is the difficulty: the number of distinct paint pots the player
/// gets. The recommended range is 5-15; it is not enforced here.
#[derive(Debug, Clone)]
pub struct TemplateOptions {
    /// Palette size (difficulty). Must be at least 1.
    pub colors: u32,
    /// Mode-filter window radius applied after quantization.
    pub smooth_radius: u32,
    /// K-means training iteration cap.
    pub max_iterations: u32,
    /// Seed for centroid sampling. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for TemplateOptions {
    fn default() -> Self {
        Self {
            colors: pbn_color::DEFAULT_COLORS,
            smooth_radius: pbn_filter::SMOOTH_RADIUS,
            max_iterations: pbn_color::DEFAULT_MAX_ITERATIONS,
            seed: None,
        }
    }
}

impl TemplateOptions {
    /// Create options for a difficulty level (palette size).
    pub fn for_difficulty(colors: u32) -> Self {
        Self {
            colors,
            ..Default::default()
        }
    }

    /// Pin the quantizer's centroid-seeding RNG.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    fn kmeans(&self) -> KMeansOptions {
        KMeansOptions {
            colors: self.colors,
            max_iterations: self.max_iterations,
            seed: self.seed,
        }
    }
}

// =============================================================================
// Template
// =============================================================================

/// One cell of a numbered template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateCell {
    /// Palette color of the cell's region
    pub color: Color,
    /// 1-based region number (palette index + 1)
    pub number: u32,
}

/// The paint-by-number artifact: palette colors and 1-based numbers per pixel
///
/// Every number satisfies `1 <= number <= palette.len()`; 0 never appears.
/// All grids share the source image's dimensions.
#[derive(Debug, Clone)]
pub struct NumberedTemplate {
    colors: Grid<Color>,
    numbers: Grid<u32>,
    palette: Palette,
}

impl NumberedTemplate {
    /// Template width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.numbers.width()
    }

    /// Template height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.numbers.height()
    }

    /// `(width, height)` pair.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        self.numbers.dimensions()
    }

    /// The palette the numbers index into (number = index + 1).
    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// The per-pixel number grid.
    #[inline]
    pub fn numbers(&self) -> &Grid<u32> {
        &self.numbers
    }

    /// Region number at `(x, y)`, or `None` out of bounds.
    #[inline]
    pub fn number_at(&self, x: u32, y: u32) -> Option<u32> {
        self.numbers.value(x, y)
    }

    /// Palette color at `(x, y)`, or `None` out of bounds.
    #[inline]
    pub fn color_at(&self, x: u32, y: u32) -> Option<Color> {
        self.colors.value(x, y)
    }

    /// Full cell at `(x, y)`, or `None` out of bounds.
    pub fn cell(&self, x: u32, y: u32) -> Option<TemplateCell> {
        Some(TemplateCell {
            color: self.colors.value(x, y)?,
            number: self.numbers.value(x, y)?,
        })
    }

    /// Flood-fill gesture against this template.
    ///
    /// See [`pbn_region::flood_region`] for the contract; this just routes
    /// the template's number grid in.
    pub fn flood(
        &self,
        seed_x: u32,
        seed_y: u32,
        target: u32,
        colored: &ColoredMask,
    ) -> TemplateResult<Vec<(u32, u32)>> {
        Ok(flood_region(&self.numbers, seed_x, seed_y, target, colored)?)
    }

    /// One number-overlay anchor per region number with interior pixels.
    pub fn label_points(&self) -> Vec<LabelPoint> {
        find_label_points(&self.numbers)
    }
}

// =============================================================================
// Construction
// =============================================================================

/// Build a numbered template from a decoded image.
///
/// Quantizes to `options.colors` palette entries, smooths the index map with
/// the mode filter, then numbers every pixel with its palette index + 1.
///
/// # Errors
///
/// Fails fast with a quantization error for `colors == 0`; nothing else in
/// the pipeline can fail.
///
/// # Example
///
/// ```
/// use pbn_core::{Color, PixelBuffer};
/// use pbn_template::{TemplateOptions, build_template};
///
/// let pix = PixelBuffer::new(16, 16, Color::new(90, 120, 30)).unwrap();
/// let template = build_template(&pix, &TemplateOptions::for_difficulty(5)).unwrap();
/// assert_eq!(template.dimensions(), (16, 16));
/// assert_eq!(template.palette().len(), 5);
/// ```
pub fn build_template(
    pix: &PixelBuffer,
    options: &TemplateOptions,
) -> TemplateResult<NumberedTemplate> {
    let mut rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => rand::make_rng::<StdRng>(),
    };
    build_template_with_rng(pix, options, &mut rng)
}

/// Build a numbered template with a caller-supplied random source.
pub fn build_template_with_rng<R: Rng + ?Sized>(
    pix: &PixelBuffer,
    options: &TemplateOptions,
    rng: &mut R,
) -> TemplateResult<NumberedTemplate> {
    let quant = kmeans_quantize_with_rng(pix, &options.kmeans(), rng)?;
    let smoothed = mode_filter(&quant.map, options.smooth_radius);

    let (width, height) = pix.dimensions();
    let palette = quant.palette;

    let mut color_data = Vec::with_capacity(smoothed.len());
    let mut number_data = Vec::with_capacity(smoothed.len());
    for &idx in smoothed.as_slice() {
        // Smoothing only rearranges indices the quantizer emitted, so every
        // index stays within the palette.
        color_data.push(palette.colors()[idx as usize]);
        number_data.push(idx + 1);
    }

    Ok(NumberedTemplate {
        colors: Grid::from_vec(width, height, color_data)?,
        numbers: Grid::from_vec(width, height, number_data)?,
        palette,
    })
}
