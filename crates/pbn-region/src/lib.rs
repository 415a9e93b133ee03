//! pbn-region - Region analysis for the pbn paint-by-number engine
//!
//! This crate provides the region-level operations of the pipeline:
//!
//! - **Boundary detection** - flagging pixels whose 4-connected neighbors
//!   hold a different region value
//! - **Label placement** - one representative interior point per region
//!   number, for the number overlay
//! - **Flood fill** - the interactive coloring engine: explicit-queue BFS
//!   over same-numbered, uncolored pixels
//!
//! # Examples
//!
//! ## Flood fill
//!
//! ```
//! use pbn_core::{ColoredMask, Grid};
//! use pbn_region::flood_region;
//!
//! let numbers: Grid<u32> = Grid::new(10, 10, 1).unwrap();
//! let colored = ColoredMask::new(10, 10, false).unwrap();
//!
//! let filled = flood_region(&numbers, 5, 5, 1, &colored).unwrap();
//! assert_eq!(filled.len(), 100); // the whole region
//! ```
//!
//! ## Boundary detection
//!
//! ```
//! use pbn_core::Grid;
//! use pbn_region::is_boundary;
//!
//! let mut numbers: Grid<u32> = Grid::new(4, 4, 0).unwrap();
//! numbers.set(0, 0, 1).unwrap();
//!
//! assert!(is_boundary(&numbers, 0, 0));
//! assert!(is_boundary(&numbers, 1, 0));
//! assert!(!is_boundary(&numbers, 3, 3));
//! ```

pub mod boundary;
pub mod error;
pub mod floodfill;
pub mod label;

// Re-export error types
pub use error::{RegionError, RegionResult};

// Re-export boundary functions
pub use boundary::{boundary_mask, is_boundary};

// Re-export label types and functions
pub use label::{LabelPoint, find_label_points};

// Re-export floodfill functions
pub use floodfill::flood_region;
