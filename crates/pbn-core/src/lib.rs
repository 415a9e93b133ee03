//! pbn-core - Basic data structures for the paint-by-number engine
//!
//! This crate provides the fundamental data structures used throughout the
//! pbn pipeline:
//!
//! - [`Color`] - 8-bit RGB value type
//! - [`Grid`] - bounds-checked row-major 2D container
//! - [`PixelBuffer`] / [`RegionMap`] / [`ColoredMask`] - grid aliases for the
//!   decoded image, the palette-index map, and the caller-owned fill state
//! - [`Palette`] - ordered color table produced by quantization
//!
//! Conversions to and from the `image` crate's `RgbImage` live in
//! [`convert`]; everything else is purely in-memory.

pub mod color;
pub mod convert;
pub mod error;
pub mod grid;
pub mod palette;

pub use color::Color;
pub use convert::{from_rgb_image, to_rgb_image};
pub use error::{Error, Result};
pub use grid::{ColoredMask, Grid, PixelBuffer, RegionMap};
pub use palette::Palette;
