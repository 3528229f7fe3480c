//! Composite avatar sheet tools
//!
//! This module contains:
//! - Cell layouts (uniform, banded and rounded division)
//! - The slicer writing one named PNG per cell
//! - Diagnostics that measure content margins and recommend crop coordinates

/// Content boundary detection on pixel arrays
pub mod bounds;
/// Sheet cell geometry and layout files
pub mod layout;
/// Cropping and export of named tiles
pub mod slicer;
/// Boundary sampling and split recommendation
pub mod survey;

pub use bounds::PixelGrid;
pub use layout::{AVATAR_NAMES, CellRect, SheetLayout};
pub use slicer::SheetSlicer;
