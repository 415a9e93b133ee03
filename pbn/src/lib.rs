//! pbn - Paint-by-number template engine
//!
//! Converts a decoded raster image into an interactive paint-by-number
//! template and answers fill gestures against it:
//!
//! - Palette reduction via k-means over RGB (seedable for reproducibility)
//! - Speckle removal via a mode filter on the palette-index map
//! - Boundary detection and black-outline rendering for static export
//! - One label point per region number for the number overlay
//! - Flood fill of same-numbered, uncolored pixels for interactive coloring
//!
//! # Example
//!
//! ```
//! use pbn::{Color, ColoredMask, PixelBuffer};
//! use pbn::template::{TemplateOptions, build_template};
//!
//! let pix = PixelBuffer::new(32, 32, Color::new(10, 160, 220)).unwrap();
//! let template = build_template(&pix, &TemplateOptions::for_difficulty(5)).unwrap();
//!
//! // One tap colors the whole connected region.
//! let colored = ColoredMask::new(32, 32, false).unwrap();
//! let number = template.number_at(16, 16).unwrap();
//! let filled = template.flood(16, 16, number, &colored).unwrap();
//! assert_eq!(filled.len(), 32 * 32);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use pbn_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use pbn_color as color;
pub use pbn_filter as filter;
pub use pbn_region as region;
pub use pbn_template as template;
