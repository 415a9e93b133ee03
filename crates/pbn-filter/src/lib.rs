//! pbn-filter - Region-map smoothing for the pbn paint-by-number engine
//!
//! This crate removes speckle noise from quantized palette-index maps:
//!
//! - **Mode filter** - windowed plurality vote with a stable scan-order
//!   tie-break, applied before boundary detection
//!
//! # Example
//!
//! ```
//! use pbn_core::RegionMap;
//! use pbn_filter::smooth_region_map;
//!
//! let mut map = RegionMap::new(5, 5, 0).unwrap();
//! map.set(2, 2, 1).unwrap();
//!
//! let smoothed = smooth_region_map(&map);
//! assert!(smoothed.as_slice().iter().all(|&v| v == 0));
//! ```

pub mod mode;

pub use mode::{SMOOTH_RADIUS, mode_filter, smooth_region_map};
