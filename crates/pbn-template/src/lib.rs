//! pbn-template - Template assembly for the pbn paint-by-number engine
//!
//! This crate wires the pipeline stages together and owns the externally
//! consumed artifact:
//!
//! - **Template construction** - quantize, smooth, number
//! - **Outline rendering** - black-boundary export image
//! - **Interaction surface** - flood fill and label points against a built
//!   template
//!
//! # Example
//!
//! ```
//! use pbn_core::{Color, ColoredMask, PixelBuffer};
//! use pbn_template::{TemplateOptions, build_template};
//!
//! // A uniform image quantizes to a single region.
//! let pix = PixelBuffer::new(8, 8, Color::new(40, 90, 160)).unwrap();
//! let template = build_template(&pix, &TemplateOptions::for_difficulty(1)).unwrap();
//!
//! let mut colored = ColoredMask::new(8, 8, false).unwrap();
//! let filled = template.flood(4, 4, template.number_at(4, 4).unwrap(), &colored).unwrap();
//! assert_eq!(filled.len(), 64);
//!
//! // The caller applies the result.
//! for (x, y) in filled {
//!     colored.set(x, y, true).unwrap();
//! }
//! ```

pub mod builder;
pub mod error;
pub mod outline;

// Re-export error types
pub use error::{TemplateError, TemplateResult};

// Re-export builder types and functions
pub use builder::{
    NumberedTemplate, TemplateCell, TemplateOptions, build_template, build_template_with_rng,
};

// Re-export outline functions
pub use outline::render_outline;
