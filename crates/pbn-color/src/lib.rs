//! pbn-color - Color quantization for the pbn paint-by-number engine
//!
//! This crate reduces an image's color space to a small fixed palette:
//!
//! - **K-means quantization** - Lloyd's algorithm over RGB with injectable
//!   random seeding and a final reassignment pass
//!
//! # Example
//!
//! ```
//! use pbn_color::{kmeans_quantize, KMeansOptions};
//! use pbn_core::{Color, PixelBuffer};
//!
//! let pix = PixelBuffer::new(8, 8, Color::new(200, 40, 40)).unwrap();
//! let quant = kmeans_quantize(&pix, &KMeansOptions::for_colors(3).with_seed(1)).unwrap();
//! assert_eq!(quant.palette.len(), 3);
//! ```

pub mod error;
pub mod kmeans;

// Re-export error types
pub use error::{ColorError, ColorResult};

// Re-export kmeans types and functions
pub use kmeans::{
    DEFAULT_COLORS, DEFAULT_MAX_ITERATIONS, KMeansOptions, Quantization, kmeans_quantize,
    kmeans_quantize_with_rng,
};
